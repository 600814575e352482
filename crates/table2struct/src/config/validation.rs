//! Configuration validation.

use super::Config;
use crate::error::{GenError, Result};

/// Go keywords, which are not usable as package names.
const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    validate_package(&config.package)?;

    match (&config.dsn, &config.schema_file) {
        (None, None) => {
            return Err(GenError::Config(
                "one of dsn or schema_file is required".into(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(GenError::Config(
                "dsn and schema_file are mutually exclusive".into(),
            ))
        }
        _ => {}
    }

    if config.output_dir.as_os_str().is_empty() {
        return Err(GenError::Config("output_dir cannot be empty".into()));
    }

    Ok(())
}

/// Check that a package name is a usable Go identifier.
pub fn validate_package(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GenError::Config("package is required".into()));
    }

    let mut chars = name.chars();
    let first_ok = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(GenError::Config(format!(
            "package '{}' is not a valid Go identifier",
            name
        )));
    }

    if GO_KEYWORDS.contains(&name) {
        return Err(GenError::Config(format!(
            "package '{}' is a Go keyword",
            name
        )));
    }

    Ok(())
}
