use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::league::{Experience, League, assign_teams, load_players};
use crate::output::{plan_letters, write_letters, write_roster};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.letters_dir.is_some() && args.no_letters_dir {
        return Err(AppError::config_error(
            "Cannot use both --letters-dir and --no-letters-dir",
        ));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub fn handle_list_config_command(config: &Config, config_path: &str) {
    config.display(config_path);
}

/// Handles configuration update commands (--save-config, --set-log-file, --clear-log-file).
///
/// Saves the effective settings, including any overrides given on the same
/// command line, to `config_path`.
pub async fn handle_config_update_command(
    args: &Args,
    mut config: Config,
    config_path: &str,
) -> Result<(), AppError> {
    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(config_path).await?;
    info!("Saved configuration to {config_path}");
    println!("Config updated successfully!");

    Ok(())
}

/// Per-team numbers reported after a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub name: String,
    pub players: usize,
    pub experienced: usize,
}

/// Outcome of a full season build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub teams: Vec<TeamSummary>,
    pub roster_file: PathBuf,
    pub letters: Vec<PathBuf>,
}

impl BuildSummary {
    fn new(league: &League, roster_file: PathBuf, letters: Vec<PathBuf>) -> Self {
        let teams = league
            .teams()
            .iter()
            .map(|team| TeamSummary {
                name: team.name().to_string(),
                players: team.len(),
                experienced: team.count_with(Experience::Experienced),
            })
            .collect();
        Self {
            teams,
            roster_file,
            letters,
        }
    }
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for team in &self.teams {
            writeln!(
                f,
                "{:<12} {:>2} players ({} experienced)",
                team.name, team.players, team.experienced
            )?;
        }
        writeln!(f, "Roster written to {}", self.roster_file.display())?;
        write!(f, "{} welcome letters written", self.letters.len())
    }
}

/// Runs the whole season build: load, assign, roster, letters.
///
/// Any failure stops the run and nothing is retried. Letter names are
/// resolved before the roster is written, so a naming conflict leaves no
/// output behind.
pub async fn handle_build_command(config: &Config) -> Result<BuildSummary, AppError> {
    info!(
        "Building league from {} with teams: {}",
        config.players_file.display(),
        config.team_names.join(", ")
    );

    let players = load_players(&config.players_file).await?;
    let league = assign_teams(&config.team_names, &players)?;
    plan_letters(&league, config.name_conflict)?;

    write_roster(&league, &config.roster_file).await?;
    let letters = write_letters(
        &league,
        config.letters_directory(),
        &config.letter_settings(),
    )
    .await?;

    Ok(BuildSummary::new(
        &league,
        config.roster_file.clone(),
        letters,
    ))
}
