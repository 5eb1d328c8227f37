//! REPL (Read-Eval-Print Loop) for dongbei
//!
//! Entered statements accumulate into one session program. Each entry
//! re-translates the whole program with a fresh symbol table and re-runs it;
//! only output past what was already shown is printed.

use std::io;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::Error;
use crate::frontend::parser::ParseError;
use crate::frontend::Compiler;
use crate::middle::codegen::CodegenOptions;

/// Result of evaluating one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalResult {
    /// New output produced by the entry (possibly empty)
    Output(String),
    /// Input ended in the middle of a statement
    Incomplete,
    /// The entry was rejected; the session is unchanged
    Error(String),
}

/// Accumulated REPL program
#[derive(Debug, Default)]
pub struct Session {
    compiler: Compiler,
    /// Accepted source
    source: String,
    /// Lines of an unfinished statement
    pending: String,
    /// Length of output already shown
    shown: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodegenOptions) -> Self {
        Self {
            compiler: Compiler::with_options(options),
            ..Self::default()
        }
    }

    /// Whether an unfinished statement is waiting for more lines
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Accepted session source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate one line of input
    pub fn eval(
        &mut self,
        line: &str,
    ) -> EvalResult {
        let candidate = format!("{}{}{}\n", self.source, self.pending, line);
        let result = self
            .compiler
            .translate(&candidate)
            .and_then(|code| crate::execute(&code, &self.compiler.options().output_var));

        match result {
            Ok(output) => {
                let new_output = output.get(self.shown..).unwrap_or("").to_string();
                self.source = candidate;
                self.pending.clear();
                self.shown = output.len();
                EvalResult::Output(new_output)
            }
            Err(Error::Parse(ParseError::UnexpectedEnd { .. })) => {
                self.pending.push_str(line);
                self.pending.push('\n');
                EvalResult::Incomplete
            }
            Err(e) => {
                self.pending.clear();
                EvalResult::Error(e.to_string())
            }
        }
    }

    /// Host script of the accepted source
    pub fn code(&self) -> Result<String, Error> {
        self.compiler.translate(&self.source)
    }

    /// Forget all accepted source
    pub fn reset(&mut self) {
        self.source.clear();
        self.pending.clear();
        self.shown = 0;
    }
}

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt to display
    pub prompt: String,
    /// Prompt while a statement is unfinished
    pub continuation_prompt: String,
    /// History file path
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".into(),
            continuation_prompt: ".. ".into(),
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Default prompts with line history kept in `history_file`
    pub fn with_history(history_file: Option<PathBuf>) -> Self {
        Self {
            history_file,
            ..Self::default()
        }
    }
}

/// Command result
#[derive(Debug, PartialEq, Eq)]
enum CommandResult {
    Exit,
    Continue,
    Output(String),
}

/// Line REPL backed by rustyline
pub struct LineRepl {
    config: ReplConfig,
    editor: DefaultEditor,
    session: Session,
}

impl LineRepl {
    /// Create a new line REPL
    pub fn new(session: Session) -> io::Result<Self> {
        Self::with_config(session, ReplConfig::default())
    }

    /// Create with custom config
    pub fn with_config(
        session: Session,
        config: ReplConfig,
    ) -> io::Result<Self> {
        let mut editor = DefaultEditor::new().map_err(readline_to_io)?;

        if let Some(ref history_file) = config.history_file {
            if history_file.exists() {
                let _ = editor.load_history(history_file);
            }
        }

        Ok(Self {
            config,
            editor,
            session,
        })
    }

    /// Run the REPL
    pub fn run(&mut self) -> io::Result<()> {
        println!("{} REPL v{}", crate::NAME, crate::VERSION);
        println!("Type :help for available commands, :quit to exit.");

        loop {
            let prompt = if self.session.is_pending() {
                &self.config.continuation_prompt
            } else {
                &self.config.prompt
            };

            match self.editor.readline(prompt) {
                Ok(line) => {
                    if line.trim().is_empty() && !self.session.is_pending() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line.as_str());

                    if line.trim_start().starts_with(':') {
                        match self.handle_command(line.trim()) {
                            CommandResult::Exit => break,
                            CommandResult::Continue => {}
                            CommandResult::Output(msg) => println!("{}", msg),
                        }
                        continue;
                    }

                    match self.session.eval(&line) {
                        EvalResult::Output(output) => print!("{}", output),
                        EvalResult::Incomplete => {}
                        EvalResult::Error(e) => println!("Error: {}", e),
                    }
                }
                Err(ReadlineError::Eof) => break,
                Err(ReadlineError::Interrupted) => {
                    println!("(Interrupted)");
                    continue;
                }
                Err(e) => return Err(readline_to_io(e)),
            }
        }

        if let Some(ref history_file) = self.config.history_file {
            let _ = self.editor.save_history(history_file);
        }

        Ok(())
    }

    fn handle_command(
        &mut self,
        command: &str,
    ) -> CommandResult {
        match command {
            ":quit" | ":q" => CommandResult::Exit,
            ":help" | ":h" => CommandResult::Output(
                [
                    "Available commands:",
                    "  :quit, :q   - Exit the REPL",
                    "  :help, :h   - Show this help message",
                    "  :code       - Show the generated host script",
                    "  :reset      - Forget the session program",
                ]
                .join("\n"),
            ),
            ":code" => match self.session.code() {
                Ok(code) => CommandResult::Output(code),
                Err(e) => CommandResult::Output(format!("Error: {}", e)),
            },
            ":reset" => {
                self.session.reset();
                CommandResult::Continue
            }
            _ => CommandResult::Output(format!("Unknown command: {}", command)),
        }
    }
}

fn readline_to_io(e: ReadlineError) -> io::Error {
    match e {
        ReadlineError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other.to_string()),
    }
}
