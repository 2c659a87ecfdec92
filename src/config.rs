//! Run configuration: an optional JSON file, overridden by CLI flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::svg::Theme;

/// Environment fallback for the birth date.
pub const BIRTH_DATE_ENV: &str = "CHRONOSPAN_BIRTH_DATE";

/// Contents of a config file such as:
///
/// ```json
/// { "birthDate": "1995-04-15", "outDir": "cards", "themes": ["dark"] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub birth_date: Option<String>,

    #[serde(default)]
    pub reference_date: Option<String>,

    #[serde(default)]
    pub out_dir: Option<PathBuf>,

    #[serde(default)]
    pub themes: Option<Vec<Theme>>,
}

impl FileConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        if config.themes.as_ref().is_some_and(|t| t.is_empty()) {
            return Err(AppError::Config(format!(
                "{}: `themes` must list at least one theme",
                path.display()
            )));
        }
        Ok(config)
    }
}

/// Settings after merging flags, file and environment.
///
/// Dates stay as raw strings: rejecting them is the engine's job, and an
/// invalid date is reported as a placeholder rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub birth_date: String,
    pub reference_date: String,
    pub out_dir: PathBuf,
    pub themes: Vec<Theme>,
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub birth_date: Option<String>,
    pub reference_date: Option<String>,
    pub out_dir: Option<PathBuf>,
}

impl Settings {
    /// Precedence: flag, then file, then environment (birth date only), then
    /// default. `today` is the fallback reference date.
    pub fn resolve(
        overrides: Overrides,
        file: FileConfig,
        env_birth_date: Option<String>,
        today: &str,
    ) -> Self {
        Self {
            birth_date: overrides
                .birth_date
                .or(file.birth_date)
                .or(env_birth_date)
                .unwrap_or_default(),
            reference_date: overrides
                .reference_date
                .or(file.reference_date)
                .unwrap_or_else(|| today.to_string()),
            out_dir: overrides
                .out_dir
                .or(file.out_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            themes: file.themes.unwrap_or_else(|| vec![Theme::Dark, Theme::Light]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flags_beat_file_beat_env() {
        let file = FileConfig {
            birth_date: Some("1990-01-01".into()),
            reference_date: Some("2020-01-01".into()),
            out_dir: Some(PathBuf::from("cards")),
            themes: Some(vec![Theme::Light]),
        };
        let overrides = Overrides {
            birth_date: Some("1995-04-15".into()),
            ..Overrides::default()
        };

        let settings = Settings::resolve(overrides, file, Some("1980-01-01".into()), "2024-04-15");

        assert_eq!(settings.birth_date, "1995-04-15");
        assert_eq!(settings.reference_date, "2020-01-01");
        assert_eq!(settings.out_dir, PathBuf::from("cards"));
        assert_eq!(settings.themes, vec![Theme::Light]);
    }

    #[test]
    fn defaults_fill_the_gaps() {
        let settings = Settings::resolve(
            Overrides::default(),
            FileConfig::default(),
            Some("1980-01-01".into()),
            "2024-04-15",
        );

        assert_eq!(settings.birth_date, "1980-01-01");
        assert_eq!(settings.reference_date, "2024-04-15");
        assert_eq!(settings.out_dir, PathBuf::from("."));
        assert_eq!(settings.themes, vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn missing_birth_date_resolves_to_empty() {
        let settings =
            Settings::resolve(Overrides::default(), FileConfig::default(), None, "2024-04-15");
        assert_eq!(settings.birth_date, "");
    }

    #[test]
    fn loads_camel_case_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "birthDate": "1995-04-15", "outDir": "out", "themes": ["dark"] }}"#
        )
        .unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.birth_date.as_deref(), Some("1995-04-15"));
        assert_eq!(config.reference_date, None);
        assert_eq!(config.out_dir, Some(PathBuf::from("out")));
        assert_eq!(config.themes, Some(vec![Theme::Dark]));
    }

    #[test]
    fn rejects_unknown_keys_and_empty_themes() {
        let mut unknown = tempfile::NamedTempFile::new().unwrap();
        write!(unknown, r#"{{ "birthday": "1995-04-15" }}"#).unwrap();
        assert!(matches!(
            FileConfig::from_file(unknown.path()),
            Err(AppError::Json(_))
        ));

        let mut empty = tempfile::NamedTempFile::new().unwrap();
        write!(empty, r#"{{ "themes": [] }}"#).unwrap();
        assert!(matches!(
            FileConfig::from_file(empty.path()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
