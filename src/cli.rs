use crate::output::NameConflictPolicy;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the invocation only changes stored settings and should not
/// build any rosters.
pub fn is_config_update(args: &Args) -> bool {
    args.save_config || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Youth Soccer League Builder
///
/// Splits the season's registered players into teams, dealing out the
/// experienced players first so every team gets its share of them, then
/// writes a roster report and a welcome letter for each player's guardians.
///
/// Settings come from the config file (see --list-config); every option
/// below overrides the stored value for this run only.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// CSV file with Name, Soccer Experience and Guardian Name(s) columns
    #[arg(short = 'i', long = "players", value_name = "CSV", help_heading = "Season")]
    pub players_file: Option<PathBuf>,

    /// Where to write the roster report
    #[arg(short = 'o', long = "roster", value_name = "FILE", help_heading = "Season")]
    pub roster_file: Option<PathBuf>,

    /// Directory for the welcome letters. Created if missing.
    #[arg(short = 'l', long = "letters-dir", value_name = "DIR", help_heading = "Season")]
    pub letters_dir: Option<PathBuf>,

    /// Write the welcome letters into the current directory
    #[arg(long = "no-letters-dir", help_heading = "Season")]
    pub no_letters_dir: bool,

    /// Team names in assignment order, comma separated
    #[arg(
        short = 't',
        long = "teams",
        value_name = "NAMES",
        value_delimiter = ',',
        help_heading = "Season"
    )]
    pub team_names: Option<Vec<String>>,

    /// First team practice, e.g. 2018-03-07T10:30
    #[arg(long = "practice", value_name = "DATETIME", help_heading = "Season")]
    pub practice_start: Option<String>,

    /// What to do when two players would get the same letter file
    #[arg(long = "name-conflict", value_enum, help_heading = "Season")]
    pub name_conflict: Option<NameConflictPolicy>,

    /// Read settings from this file instead of the default location
    #[arg(long = "config", value_name = "FILE", help_heading = "Configuration")]
    pub config_path: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Store the effective settings (including overrides given now) in the config file
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Also print log output to the terminal
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", value_name = "PATH", help_heading = "Debug")]
    pub log_file: Option<String>,
}
