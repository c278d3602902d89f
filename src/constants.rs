//! Application-wide constants and default settings
//!
//! Defaults reproduce the league's long-standing season setup so that a run
//! without any config file behaves exactly like previous seasons.

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "league_builder";

/// Config file name inside [`APP_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file name used when no custom log path is configured
pub const LOG_FILE_NAME: &str = "league_builder.log";

/// Default tracing directive for the crate
pub const DEFAULT_LOG_DIRECTIVE: &str = "league_builder=info";

/// Default settings for a season
pub mod defaults {
    /// Team names in assignment order
    pub const TEAM_NAMES: [&str; 3] = ["Sharks", "Dragons", "Raptors"];

    /// First team practice, `YYYY-MM-DDTHH:MM:SS`
    pub const PRACTICE_START: &str = "2018-03-07T10:30:00";

    /// Player CSV read by default
    pub const PLAYERS_FILE: &str = "soccer_players.csv";

    /// Roster report written by default
    pub const ROSTER_FILE: &str = "teams.txt";

    /// Directory receiving the welcome letters
    pub const LETTERS_DIR: &str = "more_letters";
}

/// Column headers expected in the player CSV
pub mod columns {
    pub const NAME: &str = "Name";
    pub const EXPERIENCE: &str = "Soccer Experience";
    pub const GUARDIANS: &str = "Guardian Name(s)";

    /// All required columns, in the order they are reported when missing
    pub const REQUIRED: [&str; 3] = [NAME, EXPERIENCE, GUARDIANS];
}

/// Letter formatting
pub mod letters {
    /// Extension appended to every letter file
    pub const FILE_EXTENSION: &str = "txt";

    /// chrono format for the practice line, e.g. "March 7, 2018 at 10:30am"
    pub const PRACTICE_FORMAT: &str = "%B %-d, %Y at %-I:%M%P";
}
