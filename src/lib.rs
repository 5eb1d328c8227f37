//! dongbei (东北话) programming language
//!
//! Programs written with Northeastern-Mandarin keywords are translated into a
//! small host script and then executed; the result is the text the program
//! said.
//!
//! # Example
//!
//! ```rust
//! let output = dongbei::run("唠唠：“你好”。").unwrap();
//! assert_eq!(output, "你好\n");
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod backends;
pub mod error;
pub mod frontend;
pub mod middle;

// Utility modules
pub mod util;

// Re-exports
pub use error::{Error, ErrorKind};
pub use frontend::{Compiler, Translation};

use crate::backends::interpreter::Interpreter;
use crate::backends::{Executor, ExecutorConfig};
use crate::util::config::Config;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "dongbei (东北话)";

/// Translate source code to host script
pub fn translate(source: &str) -> Result<String, Error> {
    Compiler::new().translate(source)
}

/// Translate and execute source code, returning everything it said
pub fn run(source: &str) -> Result<String, Error> {
    run_with_config(source, &Config::default())
}

/// Translate and execute with explicit configuration
pub fn run_with_config(
    source: &str,
    config: &Config,
) -> Result<String, Error> {
    let code = Compiler::with_options(config.codegen.clone()).translate(source)?;
    execute(&code, &config.codegen.output_var)
}

/// Execute already generated host script
pub fn execute(
    code: &str,
    output_var: &str,
) -> Result<String, Error> {
    debug!("executing host script ({} bytes)", code.len());
    let mut interpreter = Interpreter::with_config(ExecutorConfig {
        output_var: output_var.to_string(),
    });
    let output = interpreter.execute(code)?;
    debug!(
        "execution complete, {} statements",
        interpreter.state().statements_executed
    );
    Ok(output)
}

/// Read a source file
pub fn read_source(path: &Path) -> Result<String, Error> {
    debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Run a source file
pub fn run_file(path: &Path) -> Result<String, Error> {
    run(&read_source(path)?)
}
