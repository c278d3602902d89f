use crate::error::AppError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::path::Path;

/// Formats accepted for a practice start given on the command line
const PRACTICE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Validates the team name list.
///
/// # Validation Rules
/// - At least one team is required
/// - Names cannot be blank
/// - Names must be unique (exact match)
pub fn validate_team_names<S: AsRef<str>>(team_names: &[S]) -> Result<(), AppError> {
    if team_names.is_empty() {
        return Err(AppError::config_error("At least one team name is required"));
    }

    let mut seen = HashSet::new();
    for name in team_names.iter().map(AsRef::as_ref) {
        if name.trim().is_empty() {
            return Err(AppError::config_error("Team names cannot be blank"));
        }
        if !seen.insert(name) {
            return Err(AppError::config_error(format!(
                "Team name '{name}' is listed more than once"
            )));
        }
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Arguments
/// * `team_names` - Teams in assignment order
/// * `players_file` - CSV file with the registrations
/// * `roster_file` - Destination of the roster report
/// * `log_file_path` - Optional log file path to validate
///
/// # Validation Rules
/// - Team names follow [`validate_team_names`]
/// - Player and roster paths cannot be empty
/// - If log file path is provided, it cannot be empty
pub fn validate_config(
    team_names: &[String],
    players_file: &Path,
    roster_file: &Path,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_team_names(team_names)?;

    if players_file.as_os_str().is_empty() {
        return Err(AppError::config_error("Players file path cannot be empty"));
    }

    if roster_file.as_os_str().is_empty() {
        return Err(AppError::config_error("Roster file path cannot be empty"));
    }

    if let Some(log_path) = log_file_path
        && log_path.is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}

/// Parses a practice start such as `2018-03-07T10:30` or `2018-03-07 10:30:00`.
pub fn parse_practice_start(value: &str) -> Result<NaiveDateTime, AppError> {
    let value = value.trim();
    PRACTICE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| {
            AppError::config_error(format!(
                "Invalid practice start '{value}', expected YYYY-MM-DDTHH:MM[:SS]"
            ))
        })
}

/// Reads a practice start from the config file, accepting the same formats
/// as `--practice`.
pub fn deserialize_practice_start<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_practice_start(&value).map_err(serde::de::Error::custom)
}
