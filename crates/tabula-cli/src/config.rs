use crate::CONFIG_FILE;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tabula_core::Dialect;

/// Configuration for tabula CLI operations, usually read from `tabula.toml`.
///
/// ```toml
/// [generate]
/// input = "schema"
/// output = "gen"
/// recursive = true
///
/// [ddl]
/// dialect = "postgresql"
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Code generation settings
    pub generate: GenerateConfig,

    /// DDL settings
    pub ddl: DdlConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Schema file or directory
    pub input: Option<PathBuf>,

    /// Directory the generated modules are written to
    pub output: PathBuf,

    /// Descend into subdirectories of `input`
    pub recursive: bool,

    /// Run generated code through `rustfmt`
    pub format: bool,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DdlConfig {
    /// Dialect used when `--dialect` is not given
    pub dialect: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        Config::parse(&contents).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Config> {
        let config: Config = toml::from_str(contents)?;

        // Surface a bad dialect at load time rather than on first use
        config.ddl.dialect()?;

        Ok(config)
    }

    /// Loads `explicit` if given, else `tabula.toml` in the working directory
    /// if it exists, else the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Config> {
        match explicit {
            Some(path) => Config::load(path),
            None if Path::new(CONFIG_FILE).is_file() => Config::load(CONFIG_FILE),
            None => {
                tracing::debug!("no {CONFIG_FILE} found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn generate(mut self, generate: GenerateConfig) -> Self {
        self.generate = generate;
        self
    }

    pub fn ddl(mut self, ddl: DdlConfig) -> Self {
        self.ddl = ddl;
        self
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: PathBuf::from("gen"),
            recursive: false,
            format: true,
        }
    }
}

impl GenerateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }
}

impl DdlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = Some(dialect.into());
        self
    }

    /// The configured dialect, parsed.
    pub fn dialect(&self) -> Result<Option<Dialect>> {
        self.dialect
            .as_deref()
            .map(|name| name.parse::<Dialect>())
            .transpose()
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();

        assert_eq!(config.generate.input, None);
        assert_eq!(config.generate.output, PathBuf::from("gen"));
        assert!(!config.generate.recursive);
        assert!(config.generate.format);
        assert_eq!(config.ddl.dialect().unwrap(), None);
    }

    #[test]
    fn full_file() {
        let config = Config::parse(
            r#"
            [generate]
            input = "schema"
            output = "src/tables"
            recursive = true
            format = false

            [ddl]
            dialect = "postgres"
            "#,
        )
        .unwrap();

        assert_eq!(config.generate.input, Some(PathBuf::from("schema")));
        assert_eq!(config.generate.output, PathBuf::from("src/tables"));
        assert!(config.generate.recursive);
        assert!(!config.generate.format);
        assert_eq!(config.ddl.dialect().unwrap(), Some(Dialect::Postgresql));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("[generate]\ninputs = \"schema\"\n").is_err());
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        let err = Config::parse("[ddl]\ndialect = \"db2\"\n").unwrap_err();
        assert!(err.to_string().contains("db2"));
    }

    #[test]
    fn builder() {
        let config = Config::new()
            .generate(GenerateConfig::new().input("schema").recursive(true))
            .ddl(DdlConfig::new().with_dialect("sqlite"));

        assert_eq!(config.generate.input, Some(PathBuf::from("schema")));
        assert!(config.generate.recursive);
        assert_eq!(config.ddl.dialect().unwrap(), Some(Dialect::Sqlite));
    }
}
