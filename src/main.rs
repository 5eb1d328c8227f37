//! dongbei (东北话) - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dongbei::backends::dev::{LineRepl, ReplConfig, Session};
use dongbei::frontend::{lexer, parser};
use dongbei::util::config::{load_config, Config};
use dongbei::util::logger::{self, LogLevel};
use dongbei::{read_source, run_with_config, Compiler, NAME, VERSION};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// Translate and run programs written in dongbei
#[derive(Parser, Debug)]
#[command(name = "dongbei")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Configuration file (defaults to ./dongbei.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a dongbei source file
    Run {
        /// Source file to run
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the generated host script first
        #[arg(long)]
        show_code: bool,
    },

    /// Evaluate dongbei code from command line
    Eval {
        /// Code to evaluate
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print the generated host script
    Translate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Dump the token sequence
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump the parsed program
    Ast {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session
    Repl {
        /// Load and save line history in this file
        #[arg(long, value_name = "FILE")]
        history: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    logger::init_with_level(logger::effective_level(
        args.verbose,
        args.log_level,
        config.log.level,
    ));

    match args.command {
        Commands::Run { file, show_code } => {
            let source = read(&file)?;
            if show_code || config.run.show_code {
                let code = compiler(&config)
                    .translate(&source)
                    .with_context(|| format!("Failed to translate: {}", file.display()))?;
                println!("{}", code);
                println!("{}", "-".repeat(20).dimmed());
            }
            let output = run_with_config(&source, &config)
                .with_context(|| format!("Failed to run: {}", file.display()))?;
            print!("{}", output);
        }
        Commands::Eval { code } => {
            let output = run_with_config(&code, &config).context("Failed to evaluate code")?;
            print!("{}", output);
        }
        Commands::Translate { file } => {
            let source = read(&file)?;
            let code = compiler(&config)
                .translate(&source)
                .with_context(|| format!("Failed to translate: {}", file.display()))?;
            println!("{}", code);
        }
        Commands::Tokens { file, json } => {
            let source = read(&file)?;
            let tokens = lexer::tokenize(&source)
                .with_context(|| format!("Failed to tokenize: {}", file.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for token in &tokens {
                    println!("{}", token);
                }
            }
        }
        Commands::Ast { file, json } => {
            let source = read(&file)?;
            let tokens = lexer::tokenize(&source)
                .with_context(|| format!("Failed to tokenize: {}", file.display()))?;
            let program = parser::parse(&tokens)
                .with_context(|| format!("Failed to parse: {}", file.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&program)?);
            } else {
                println!("{:#?}", program);
            }
        }
        Commands::Repl { history } => {
            let session = Session::with_options(config.codegen.clone());
            LineRepl::with_config(session, ReplConfig::with_history(history))?.run()?;
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

fn compiler(config: &Config) -> Compiler {
    Compiler::with_options(config.codegen.clone())
}

fn read(path: &Path) -> Result<String> {
    Ok(read_source(path)?)
}
