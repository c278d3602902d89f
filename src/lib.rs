//! Youth Soccer League Builder Library
//!
//! This library splits a season's registered players into balanced teams and
//! produces the roster report and guardian welcome letters for them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use league_builder::error::AppError;
//! use league_builder::league::{assign_teams, load_players};
//! use league_builder::output::{LetterSettings, NameConflictPolicy, write_letters, write_roster};
//! use league_builder::Config;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!
//!     // Load and distribute the players
//!     let players = load_players("soccer_players.csv").await?;
//!     let league = assign_teams(&config.team_names, &players)?;
//!
//!     // Write the roster and one letter per player
//!     write_roster(&league, "teams.txt").await?;
//!     let settings = LetterSettings {
//!         practice_start: config.practice_start,
//!         name_conflict: NameConflictPolicy::Fail,
//!     };
//!     write_letters(&league, Some(Path::new("more_letters")), &settings).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod league;
pub mod logging;
pub mod output;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use league::{Experience, League, Player, Team, assign_teams, load_players};
pub use output::{render_roster, write_letters, write_roster};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
