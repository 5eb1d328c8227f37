//! Configuration loading tests

use std::fs;

use dongbei::run_with_config;
use dongbei::util::config::{load_config, Config, ConfigError};
use dongbei::util::logger::LogLevel;

#[test]
fn test_load_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "[codegen]\nindent = \"\\t\"\nvar_prefix = \"v\"\n\n[run]\nshow_code = true\n\n[log]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.codegen.indent, "\t");
    assert_eq!(config.codegen.var_prefix, "v");
    assert_eq!(config.codegen.output_var, "_db_output");
    assert!(config.run.show_code);
    assert_eq!(config.log.level, LogLevel::Debug);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(matches!(
        load_config(Some(&path)),
        Err(ConfigError::IoError(_))
    ));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[codegen\n").unwrap();
    assert!(matches!(
        load_config(Some(&path)),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_empty_indent_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dongbei.toml");
    fs::write(&path, "[codegen]\nindent = \"\"\n").unwrap();
    assert!(matches!(
        load_config(Some(&path)),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_bad_generated_names_are_rejected() {
    for codegen in [
        "var_prefix = \"\"",
        "var_prefix = \"9x\"",
        "output_var = \"None\"",
        "output_var = \"a-b\"",
        "var_prefix = \"v\"\noutput_var = \"v0\"",
    ] {
        let text = format!("[codegen]\n{}\n", codegen);
        match Config::from_toml(&text) {
            Err(err @ ConfigError::Invalid(_)) => {
                assert!(err.to_string().starts_with("Invalid config: codegen."));
            }
            other => panic!("expected invalid config for {:?}, got {:?}", codegen, other),
        }
    }
}

#[test]
fn test_valid_custom_names_load_and_run() {
    let config = Config::from_toml(
        "[codegen]\nindent = \" \\t\"\noutput_var = \"out\"\nvar_prefix = \"v\"\n",
    )
    .unwrap();
    let source = "我从1到2磨叽：唠唠：我。磨叽完了。";
    assert_eq!(run_with_config(source, &config).unwrap(), "1\n2\n");
}

#[test]
fn test_custom_codegen_runs_the_same() {
    let mut config = Config::default();
    config.codegen.indent = "    ".into();
    config.codegen.output_var = "out".into();
    config.codegen.var_prefix = "x".into();

    let source = "我从1到2磨叽：唠唠：我。磨叽完了。";
    assert_eq!(run_with_config(source, &config).unwrap(), "1\n2\n");
}
