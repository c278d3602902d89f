//! Player loading and team assignment.

pub mod assigner;
pub mod loader;
pub mod models;

pub use assigner::assign_teams;
pub use loader::{load_players, load_players_from_reader};
pub use models::{Experience, League, Player, Team};
