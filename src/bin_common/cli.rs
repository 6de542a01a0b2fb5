//! CLI utilities for binaries
//!
//! Resolves where the parameters file lives and parses the few flags the
//! startup binaries accept.

use std::path::PathBuf;

/// Which configuration file to load
#[derive(Debug, Clone)]
pub enum ConfigType {
    /// Strategy parameters (arb_config.yaml)
    Strategy,
    /// Custom path
    Custom(String),
}

impl ConfigType {
    /// Get the default path for this config type
    pub fn default_path(&self) -> &str {
        match self {
            ConfigType::Strategy => "config/arb_config.yaml",
            ConfigType::Custom(path) => path,
        }
    }

    /// Get the environment variable name for this config type
    pub fn env_var_name(&self) -> &str {
        match self {
            ConfigType::Strategy => "ARB_CONFIG_PATH",
            ConfigType::Custom(_) => "ARB_CONFIG_PATH",
        }
    }
}

/// Load configuration path from environment or use default
///
/// A [`ConfigType::Custom`] path always wins over the environment.
pub fn load_config_from_env(config_type: ConfigType) -> PathBuf {
    if let ConfigType::Custom(path) = &config_type {
        return PathBuf::from(path);
    }
    std::env::var(config_type.env_var_name())
        .unwrap_or_else(|_| config_type.default_path().to_string())
        .into()
}

/// Output format for `--print`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintFormat {
    Yaml,
    Json,
}

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// First positional argument, if any
    pub config_path: Option<String>,
    /// Dump the effective configuration after loading
    pub print: Option<PrintFormat>,
}

impl CliOptions {
    /// Parse arguments (program name excluded)
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = CliOptions::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--print" => {
                    let format = iter.next().map(String::as_str).unwrap_or("yaml");
                    options.print = Some(match format {
                        "yaml" => PrintFormat::Yaml,
                        "json" => PrintFormat::Json,
                        other => return Err(format!("unknown print format: {}", other)),
                    });
                }
                flag if flag.starts_with("--") => {
                    return Err(format!("unknown flag: {}", flag));
                }
                path if options.config_path.is_none() => {
                    options.config_path = Some(path.to_string());
                }
                extra => return Err(format!("unexpected argument: {}", extra)),
            }
        }

        Ok(options)
    }

    /// Config path: command line, then `ARB_CONFIG_PATH`, then the default
    pub fn config_path(&self) -> PathBuf {
        match &self.config_path {
            Some(path) => load_config_from_env(ConfigType::Custom(path.clone())),
            None => load_config_from_env(ConfigType::Strategy),
        }
    }
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_type_paths() {
        assert_eq!(ConfigType::Strategy.default_path(), "config/arb_config.yaml");

        let custom = ConfigType::Custom("custom/path.yaml".to_string());
        assert_eq!(custom.default_path(), "custom/path.yaml");
    }

    #[test]
    fn test_config_type_env_vars() {
        assert_eq!(ConfigType::Strategy.env_var_name(), "ARB_CONFIG_PATH");
        assert_eq!(ConfigType::Custom("x.yaml".to_string()).env_var_name(), "ARB_CONFIG_PATH");
    }

    #[test]
    fn test_parse_options() {
        assert_eq!(CliOptions::parse(&[]).unwrap(), CliOptions::default());

        let options = CliOptions::parse(&args(&["live.yaml", "--print", "json"])).unwrap();
        assert_eq!(options.config_path.as_deref(), Some("live.yaml"));
        assert_eq!(options.print, Some(PrintFormat::Json));

        let options = CliOptions::parse(&args(&["--print"])).unwrap();
        assert_eq!(options.print, Some(PrintFormat::Yaml));
        assert_eq!(options.config_path, None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CliOptions::parse(&args(&["--verbose"])).is_err());
        assert!(CliOptions::parse(&args(&["--print", "toml"])).is_err());
        assert!(CliOptions::parse(&args(&["a.yaml", "b.yaml"])).is_err());
    }

    #[test]
    fn test_positional_path_wins() {
        let options = CliOptions::parse(&args(&["explicit.yaml"])).unwrap();
        assert_eq!(options.config_path(), PathBuf::from("explicit.yaml"));
    }
}
