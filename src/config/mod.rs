use crate::cli::Args;
use crate::constants::defaults;
use crate::error::AppError;
use crate::output::{LetterSettings, NameConflictPolicy};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::get_log_dir_path;
use validation::{parse_practice_start, validate_config};

/// Configuration structure for the application.
/// Handles loading, saving, and managing season settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Team names in assignment order. Determines team count and labels.
    #[serde(default = "default_team_names")]
    pub team_names: Vec<String>,
    /// First team practice, printed in every welcome letter.
    #[serde(
        default = "default_practice_start",
        deserialize_with = "validation::deserialize_practice_start"
    )]
    pub practice_start: NaiveDateTime,
    /// CSV file with the player registrations.
    #[serde(default = "default_players_file")]
    pub players_file: PathBuf,
    /// Roster report destination.
    #[serde(default = "default_roster_file")]
    pub roster_file: PathBuf,
    /// Directory for the welcome letters. Empty means the working directory.
    #[serde(default = "default_letters_dir")]
    pub letters_dir: PathBuf,
    /// What to do when two players map to the same letter file.
    #[serde(default)]
    pub name_conflict: NameConflictPolicy,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_team_names() -> Vec<String> {
    defaults::TEAM_NAMES.iter().map(|name| name.to_string()).collect()
}

fn default_practice_start() -> NaiveDateTime {
    parse_practice_start(defaults::PRACTICE_START).unwrap_or_default()
}

fn default_players_file() -> PathBuf {
    PathBuf::from(defaults::PLAYERS_FILE)
}

fn default_roster_file() -> PathBuf {
    PathBuf::from(defaults::ROSTER_FILE)
}

fn default_letters_dir() -> PathBuf {
    PathBuf::from(defaults::LETTERS_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            team_names: default_team_names(),
            practice_start: default_practice_start(),
            players_file: default_players_file(),
            roster_file: default_roster_file(),
            letters_dir: default_letters_dir(),
            name_conflict: NameConflictPolicy::default(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// The result is not validated: command line overrides are applied on
    /// top first, then [`Config::validate`] checks the merged settings.
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or defaulted configuration
    /// * `Err(AppError)` - The file exists but could not be read or parsed
    pub async fn load_or_default(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            tracing::debug!("No config file at {path}, using defaults");
            Ok(Config::default())
        }
    }

    /// Loads configuration from a custom file path without validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| AppError::io(path, e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies command line overrides on top of the loaded settings.
    ///
    /// Only options that were given on the command line change anything.
    pub fn apply_args(&mut self, args: &Args) -> Result<(), AppError> {
        if let Some(team_names) = &args.team_names {
            self.team_names = team_names.iter().map(|name| name.trim().to_string()).collect();
        }
        if let Some(practice) = &args.practice_start {
            self.practice_start = parse_practice_start(practice)?;
        }
        if let Some(players_file) = &args.players_file {
            self.players_file = players_file.clone();
        }
        if let Some(roster_file) = &args.roster_file {
            self.roster_file = roster_file.clone();
        }
        if let Some(letters_dir) = &args.letters_dir {
            self.letters_dir = letters_dir.clone();
        } else if args.no_letters_dir {
            self.letters_dir = PathBuf::new();
        }
        if let Some(policy) = args.name_conflict {
            self.name_conflict = policy;
        }
        Ok(())
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.team_names,
            &self.players_file,
            &self.roster_file,
            &self.log_file_path,
        )
    }

    /// Letter directory, or `None` to write into the working directory.
    pub fn letters_directory(&self) -> Option<&Path> {
        if self.letters_dir.as_os_str().is_empty() {
            None
        } else {
            Some(self.letters_dir.as_path())
        }
    }

    /// Settings handed to the letter writer.
    pub fn letter_settings(&self) -> LetterSettings {
        LetterSettings {
            practice_start: self.practice_start,
            name_conflict: self.name_conflict,
        }
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the effective configuration settings to stdout.
    ///
    /// # Arguments
    /// * `config_path` - File the settings were (or would be) loaded from
    pub fn display(&self, config_path: &str) {
        let log_dir = get_log_dir_path();
        let separator = "────────────────────────────────────";

        println!("\nCurrent Configuration");
        println!("{separator}");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(config_path).exists() {
            println!("(Not created yet, showing defaults)");
        }
        println!("{separator}");
        println!("Teams:");
        println!("{}", self.team_names.join(", "));
        println!("{separator}");
        println!("First Practice:");
        println!("{}", crate::output::format_practice_start(&self.practice_start));
        println!("{separator}");
        println!("Players File:");
        println!("{}", self.players_file.display());
        println!("{separator}");
        println!("Roster File:");
        println!("{}", self.roster_file.display());
        println!("{separator}");
        println!("Letters Directory:");
        match self.letters_directory() {
            Some(dir) => println!("{}", dir.display()),
            None => println!("(Working directory)"),
        }
        println!("{separator}");
        println!("Letter Name Conflicts:");
        println!("{}", self.name_conflict);
        println!("{separator}");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .await
                .map_err(|e| AppError::io(config_dir, e))?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path)
            .await
            .map_err(|e| AppError::io(path, e))?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| AppError::io(path, e))?;
        file.flush().await.map_err(|e| AppError::io(path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("league_builder").chain(argv.iter().copied()))
    }

    #[test]
    fn test_default_config_matches_original_season() {
        let config = Config::default();

        assert_eq!(config.team_names, vec!["Sharks", "Dragons", "Raptors"]);
        assert_eq!(
            config.practice_start,
            parse_practice_start("2018-03-07T10:30:00").unwrap()
        );
        assert_eq!(config.players_file, PathBuf::from("soccer_players.csv"));
        assert_eq!(config.roster_file, PathBuf::from("teams.txt"));
        assert_eq!(config.letters_directory(), Some(Path::new("more_letters")));
        assert_eq!(config.name_conflict, NameConflictPolicy::Fail);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
team_names = ["Lions", "Tigers"]
practice_start = "2024-09-01T09:00:00"
roster_file = "out/rosters.txt"
letters_dir = ""
name_conflict = "suffix"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_or_default(&config_path_str).await.unwrap();

        assert_eq!(config.team_names, vec!["Lions", "Tigers"]);
        assert_eq!(
            crate::output::format_practice_start(&config.practice_start),
            "September 1, 2024 at 9:00am"
        );
        assert_eq!(config.players_file, PathBuf::from("soccer_players.csv"));
        assert_eq!(config.roster_file, PathBuf::from("out/rosters.txt"));
        assert_eq!(config.letters_directory(), None);
        assert_eq!(config.name_conflict, NameConflictPolicy::Suffix);
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
    }

    #[tokio::test]
    async fn test_config_missing_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("missing.toml");

        let config = Config::load_or_default(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert!(!config_path.exists());
    }

    #[tokio::test]
    async fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_empty_team_list_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "team_names = []\n").await.unwrap();

        let config = Config::load_or_default(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_cli_teams_repair_stored_empty_team_list() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "team_names = []\n").await.unwrap();

        let mut config = Config::load_or_default(&config_path.to_string_lossy())
            .await
            .unwrap();
        config.apply_args(&args(&["--teams", "A,B"])).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.team_names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_config_practice_start_without_seconds() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "practice_start = \"2024-09-01 09:00\"\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(
            config.practice_start,
            parse_practice_start("2024-09-01T09:00:00").unwrap()
        );
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");
        let malformed_content = r#"
team_names = ["Sharks"
[invalid_section
"#;
        tokio::fs::write(&config_path, malformed_content).await.unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_bad_practice_start_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "practice_start = \"next tuesday\"\n")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result, Err(AppError::Io { .. })));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original = Config {
            team_names: vec!["Lions".to_string(), "Tigers".to_string()],
            practice_start: parse_practice_start("2024-09-01T09:00").unwrap(),
            players_file: PathBuf::from("fall.csv"),
            roster_file: PathBuf::from("fall_teams.txt"),
            letters_dir: PathBuf::new(),
            name_conflict: NameConflictPolicy::Suffix,
            log_file_path: Some("/custom/log/path".to_string()),
        };

        original.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("name_conflict = \"suffix\""), "{content}");

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(toml_string.contains("Sharks"));
    }

    #[test]
    fn test_apply_args_overrides_only_given_options() {
        let mut config = Config::default();
        config
            .apply_args(&args(&[
                "--teams",
                "Lions, Tigers",
                "--practice",
                "2024-09-01 09:00",
                "--roster",
                "out.txt",
                "--name-conflict",
                "suffix",
            ]))
            .unwrap();

        assert_eq!(config.team_names, vec!["Lions", "Tigers"]);
        assert_eq!(
            config.practice_start,
            parse_practice_start("2024-09-01T09:00:00").unwrap()
        );
        assert_eq!(config.roster_file, PathBuf::from("out.txt"));
        assert_eq!(config.name_conflict, NameConflictPolicy::Suffix);
        // untouched
        assert_eq!(config.players_file, PathBuf::from("soccer_players.csv"));
        assert_eq!(config.letters_directory(), Some(Path::new("more_letters")));
    }

    #[test]
    fn test_apply_args_no_letters_dir() {
        let mut config = Config::default();
        config.apply_args(&args(&["--no-letters-dir"])).unwrap();
        assert_eq!(config.letters_directory(), None);
    }

    #[test]
    fn test_apply_args_invalid_practice() {
        let mut config = Config::default();
        let result = config.apply_args(&args(&["--practice", "soon"]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_letter_settings_follow_config() {
        let config = Config {
            name_conflict: NameConflictPolicy::Suffix,
            ..Config::default()
        };
        let settings = config.letter_settings();
        assert_eq!(settings.practice_start, config.practice_start);
        assert_eq!(settings.name_conflict, NameConflictPolicy::Suffix);
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("league_builder"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("league_builder"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
