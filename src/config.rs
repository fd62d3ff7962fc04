//! TOML settings, merged with command-line flags.
//!
//! ```toml
//! [normalize]
//! case_insensitive_degrees = false
//!
//! [columns]
//! contact = "A"
//! company = "B"
//! header = true
//! ```

use crate::args::{Args, parse_column};
use crate::error::CliError;
use contactgrid_core::SortOptions;
use contactgrid_engine::engine::NormalizeOptions;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeSection,
    #[serde(default)]
    pub columns: ColumnsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizeSection {
    #[serde(default)]
    pub case_insensitive_degrees: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnsSection {
    pub contact: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub header: bool,
}

/// Load settings from `config_file`, or from the user config dir unless
/// `skip_user_config` is set. Problems are returned as warnings and the
/// defaults are used instead.
pub fn load_config(config_file: Option<&PathBuf>, skip_user_config: bool) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let config_path = match config_file {
        Some(path) => Some(path.clone()),
        None if skip_user_config => None,
        None => user_config_path(),
    };

    let Some(path) = config_path else {
        return (Config::default(), warnings);
    };
    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    let config = match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    };

    (config.unwrap_or_default(), warnings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "contactgrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Combine file settings with flags. Flags win.
pub fn sort_options(config: &Config, args: &Args) -> Result<SortOptions, CliError> {
    let contact_column = match (args.contact_column, config.columns.contact.as_deref()) {
        (Some(col), _) => col,
        (None, Some(letters)) => parse_column(letters)?,
        (None, None) => 0,
    };
    let company_column = match args.company_column {
        Some(col) => Some(col),
        None => config
            .columns
            .company
            .as_deref()
            .map(parse_column)
            .transpose()?,
    };

    Ok(SortOptions {
        contact_column,
        company_column,
        has_header: args.header.unwrap_or(config.columns.header),
        normalize: NormalizeOptions {
            case_insensitive_degrees: args.case_insensitive_degrees
                || config.normalize.case_insensitive_degrees,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::parse_args;

    fn args(argv: &[&str]) -> Args {
        let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
        parse_args(&argv).unwrap()
    }

    #[test]
    fn load_config_reads_all_sections() {
        let temp_path = std::env::temp_dir().join("contactgrid_config_full.toml");
        let content = r#"
[normalize]
case_insensitive_degrees = true

[columns]
contact = "B"
company = "C"
header = true
"#;
        std::fs::write(&temp_path, content).expect("write temp config");

        let (config, warnings) = load_config(Some(&temp_path), false);
        assert!(warnings.is_empty(), "{:?}", warnings);
        assert!(config.normalize.case_insensitive_degrees);
        assert_eq!(config.columns.contact.as_deref(), Some("B"));
        assert!(config.columns.header);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn load_config_missing_explicit_file_warns() {
        let temp_path = std::env::temp_dir().join("contactgrid_config_does_not_exist.toml");
        let (config, warnings) = load_config(Some(&temp_path), false);
        assert!(!config.columns.header);
        assert!(warnings.iter().any(|w| w.contains("not found")));
    }

    #[test]
    fn load_config_rejects_unknown_fields() {
        let temp_path = std::env::temp_dir().join("contactgrid_config_unknown_field.toml");
        std::fs::write(&temp_path, "[columns]\nemail = \"D\"\n").expect("write temp config");

        let (config, warnings) = load_config(Some(&temp_path), false);
        assert!(config.columns.contact.is_none());
        assert!(warnings.iter().any(|w| w.contains("Failed to parse")));

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn load_config_rejects_oversized_file() {
        let temp_path = std::env::temp_dir().join("contactgrid_config_large.toml");
        let oversized = "#".repeat(MAX_CONFIG_FILE_BYTES as usize + 1);
        std::fs::write(&temp_path, oversized).expect("write oversized config");

        let (_, warnings) = load_config(Some(&temp_path), false);
        assert!(
            warnings
                .iter()
                .any(|w| w.contains("file too large") && w.contains("Refusing to read"))
        );

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn load_config_skips_user_config() {
        let (config, warnings) = load_config(None, true);
        assert!(warnings.is_empty());
        assert!(config.columns.contact.is_none());
    }

    #[test]
    fn sort_options_defaults() {
        let options = sort_options(&Config::default(), &args(&["in.csv"])).unwrap();
        assert_eq!(options, SortOptions::default());
    }

    #[test]
    fn sort_options_flags_override_file() {
        let config = Config {
            normalize: NormalizeSection {
                case_insensitive_degrees: false,
            },
            columns: ColumnsSection {
                contact: Some("B".to_string()),
                company: Some("C".to_string()),
                header: true,
            },
        };

        let from_file = sort_options(&config, &args(&["in.csv"])).unwrap();
        assert_eq!(from_file.contact_column, 1);
        assert_eq!(from_file.company_column, Some(2));
        assert!(from_file.has_header);

        let overridden = sort_options(
            &config,
            &args(&["in.csv", "--column", "A", "--no-header", "--case-insensitive-degrees"]),
        )
        .unwrap();
        assert_eq!(overridden.contact_column, 0);
        assert_eq!(overridden.company_column, Some(2));
        assert!(!overridden.has_header);
        assert!(overridden.normalize.case_insensitive_degrees);
    }

    #[test]
    fn sort_options_rejects_bad_column_in_file() {
        let mut config = Config::default();
        config.columns.company = Some("2".to_string());
        assert_eq!(
            sort_options(&config, &args(&["in.csv"])).unwrap_err(),
            CliError::InvalidColumn("2".to_string())
        );
    }
}
