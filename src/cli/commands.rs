//! CLI command implementations
//!
//! `serve` boots in a fixed order:
//! 1. Configuration load and validation
//! 2. Logging
//! 3. Catalog (snapshot load when `data_dir` is set)
//! 4. HTTP server

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::catalog::{ArticleLoader, Catalog};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_logging, LoggingConfig};
use crate::schema::{FieldDefinition, FieldValidator};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_json_file, write_json};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot directory; articles live in memory only when unset
    #[serde(default)]
    pub data_dir: Option<String>,

    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if let Some(dir) = &self.data_dir {
            if dir.trim().is_empty() {
                return Err(CliError::config_error("data_dir must not be empty when set"));
            }
        }

        self.http.parse_addr().map_err(CliError::config_error)?;

        self.logging
            .env_filter()
            .map_err(|e| CliError::config_error(e.to_string()))?;

        Ok(())
    }

    /// Get data directory as Path
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(PathBuf::from)
    }

    /// Build the catalog this configuration describes
    pub fn build_catalog(&self) -> CliResult<Catalog> {
        match self.data_path() {
            Some(dir) => Ok(Catalog::with_loader(ArticleLoader::new(&dir))?),
            None => Ok(Catalog::new()),
        }
    }
}

/// Outcome of a one-shot validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Validate { schema, data } => validate(&schema, &data),
    }
}

/// Start the HTTP API server
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    init_logging(&config.logging).map_err(|e| CliError::boot_failed(e.to_string()))?;
    info!(config = %config_path.display(), "configuration loaded");

    let catalog = Arc::new(config.build_catalog()?);
    let server = HttpServer::new(config.http.clone(), catalog);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a submission file against a field list file, report to stdout
pub fn validate(schema_path: &Path, data_path: &Path) -> CliResult<()> {
    let report = validate_files(schema_path, data_path)?;
    write_report(&mut io::stdout(), &report)
}

/// Runs the validator over the two files without printing
pub fn validate_files(schema_path: &Path, data_path: &Path) -> CliResult<ValidationReport> {
    let schema: Vec<FieldDefinition> = read_json_file(schema_path)?;
    let data: Map<String, Value> = read_json_file(data_path)?;

    let errors = FieldValidator::new(&schema).validate(&data);
    Ok(ValidationReport {
        valid: errors.is_empty(),
        errors,
    })
}

/// Prints the report; an invalid submission becomes an error after printing
fn write_report<W: Write>(writer: &mut W, report: &ValidationReport) -> CliResult<()> {
    write_json(writer, report)?;
    if report.valid {
        Ok(())
    } else {
        Err(CliError::validation_failed(report.errors.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, value: Value) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    fn weight_schema() -> Value {
        json!([
            {"key": "weight", "label": "Weight", "type": "number",
             "validation": {"required": true, "min": 10, "max": 100}}
        ])
    }

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "shopfloor.json", json!({}));

        let config = Config::load(&path).unwrap();
        assert!(config.data_dir.is_none());
        assert_eq!(config.http.port, 3001);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_rejects_blank_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "shopfloor.json", json!({"data_dir": " "}));

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::ConfigError);
    }

    #[test]
    fn test_config_rejects_bad_host() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "shopfloor.json",
            json!({"http": {"host": "::not-an-address::"}}),
        );
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(&temp_dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::ConfigError);
    }

    #[test]
    fn test_build_catalog_with_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: Some(temp_dir.path().join("data").to_string_lossy().into_owned()),
            ..Default::default()
        };

        let catalog = config.build_catalog().unwrap();
        assert!(catalog.list_articles().unwrap().is_empty());
        assert!(temp_dir.path().join("data").join("articles").exists());
    }

    #[test]
    fn test_validate_files_reports_errors() {
        let temp_dir = TempDir::new().unwrap();
        let schema = write_file(&temp_dir, "schema.json", weight_schema());
        let data = write_file(&temp_dir, "data.json", json!({"weight": 150}));

        let report = validate_files(&schema, &data).unwrap();
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Field 'Weight' must be at most 100."]);
    }

    #[test]
    fn test_write_report_fails_for_invalid_submission() {
        let report = ValidationReport {
            valid: false,
            errors: vec!["Field 'Weight' is required.".into()],
        };
        let mut buffer = Vec::new();
        let err = write_report(&mut buffer, &report).unwrap_err();

        assert_eq!(err.code(), CliErrorCode::ValidationFailed);
        let printed: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(printed["errors"][0], "Field 'Weight' is required.");
    }

    #[test]
    fn test_validate_accepts_valid_submission() {
        let temp_dir = TempDir::new().unwrap();
        let schema = write_file(&temp_dir, "schema.json", weight_schema());
        let data = write_file(&temp_dir, "data.json", json!({"weight": 50, "note": "x"}));

        validate(&schema, &data).unwrap();
    }

    #[test]
    fn test_validate_rejects_non_object_data() {
        let temp_dir = TempDir::new().unwrap();
        let schema = write_file(&temp_dir, "schema.json", weight_schema());
        let data = write_file(&temp_dir, "data.json", json!([1, 2, 3]));

        let err = validate_files(&schema, &data).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::IoError);
    }
}
