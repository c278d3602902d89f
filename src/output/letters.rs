use crate::constants::letters::{FILE_EXTENSION, PRACTICE_FORMAT};
use crate::error::AppError;
use crate::league::{League, Player, Team};
use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// What to do when two players map to the same letter file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NameConflictPolicy {
    /// Refuse to write any letter
    #[default]
    Fail,
    /// Number later duplicates: `name_2.txt`, `name_3.txt`, ...
    Suffix,
}

impl fmt::Display for NameConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same spelling as the command line and config file
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

/// Settings shared by every letter of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSettings {
    pub practice_start: NaiveDateTime,
    pub name_conflict: NameConflictPolicy,
}

/// A letter whose file name has been decided but not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLetter<'a> {
    pub file_name: String,
    pub team: &'a Team,
    pub player: &'a Player,
}

/// Letter file name for a player: lowercase, spaces as underscores, `.txt`.
pub fn letter_filename(player_name: &str) -> String {
    format!("{}.{FILE_EXTENSION}", letter_stem(player_name))
}

fn letter_stem(player_name: &str) -> String {
    player_name.to_lowercase().replace(' ', "_")
}

/// Formats the practice start the way the letters print it.
pub fn format_practice_start(practice_start: &NaiveDateTime) -> String {
    practice_start.format(PRACTICE_FORMAT).to_string()
}

/// Renders the welcome letter for one player.
pub fn render_letter(player: &Player, team_name: &str, practice_start: &NaiveDateTime) -> String {
    format!(
        "Dear {guardians},\n\
         \n\
         Thanks for enrolling your child, {name}, in our soccer league!\n\
         \n\
         Your child will be playing for the {team_name}.\n\
         Their first team practice will be on {practice}.\n\
         \n\
         Thanks, and we'll seeya there!\n",
        guardians = player.guardian_names,
        name = player.name,
        practice = format_practice_start(practice_start),
    )
}

/// Decides the file name of every letter before anything is written.
///
/// # Returns
/// * `Ok(Vec<PlannedLetter>)` - One entry per player, in roster order
/// * `Err(AppError::NamingConflict)` - Two players share a file name and the
///   policy is [`NameConflictPolicy::Fail`]
pub fn plan_letters(
    league: &League,
    policy: NameConflictPolicy,
) -> Result<Vec<PlannedLetter<'_>>, AppError> {
    // file name -> player that claimed it
    let mut taken: HashMap<String, &str> = HashMap::new();
    let mut planned = Vec::with_capacity(league.player_count());

    for (team, player) in league.assignments() {
        let mut file_name = letter_filename(&player.name);

        if let Some(first) = taken.get(&file_name) {
            match policy {
                NameConflictPolicy::Fail => {
                    return Err(AppError::naming_conflict(file_name, *first, &player.name));
                }
                NameConflictPolicy::Suffix => {
                    let stem = letter_stem(&player.name);
                    let mut n = 2;
                    while taken.contains_key(&format!("{stem}_{n}.{FILE_EXTENSION}")) {
                        n += 1;
                    }
                    let renamed = format!("{stem}_{n}.{FILE_EXTENSION}");
                    warn!(
                        "Letter for {} renamed to {} ({} already used by {})",
                        player.name, renamed, file_name, first
                    );
                    file_name = renamed;
                }
            }
        }

        taken.insert(file_name.clone(), &player.name);
        planned.push(PlannedLetter {
            file_name,
            team,
            player,
        });
    }

    Ok(planned)
}

/// Writes one welcome letter per player.
///
/// With `directory`, the directory (and any missing parents) is created once
/// before the first letter; without it letters go to the working directory.
/// Existing files with the same name are replaced.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Paths written, in roster order
/// * `Err(AppError::NamingConflict)` - See [`plan_letters`]; nothing is written
/// * `Err(AppError::Io)` - Directory creation or a file write failed
pub async fn write_letters(
    league: &League,
    directory: Option<&Path>,
    settings: &LetterSettings,
) -> Result<Vec<PathBuf>, AppError> {
    let planned = plan_letters(league, settings.name_conflict)?;

    if let Some(dir) = directory {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::io(dir, e))?;
    }

    let mut written = Vec::with_capacity(planned.len());
    for letter in planned {
        let path = match directory {
            Some(dir) => dir.join(&letter.file_name),
            None => PathBuf::from(&letter.file_name),
        };
        let body = render_letter(letter.player, letter.team.name(), &settings.practice_start);
        fs::write(&path, body)
            .await
            .map_err(|e| AppError::io(&path, e))?;
        debug!("Wrote letter for {} to {}", letter.player.name, path.display());
        written.push(path);
    }

    info!(
        "Wrote {} letters to {}",
        written.len(),
        directory
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "the working directory".to_string())
    );
    Ok(written)
}
