//! Reads the season's player registrations from CSV.

use super::models::{Experience, Player};
use crate::constants::columns;
use crate::error::AppError;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Raw CSV row. Extra columns (height, etc.) are ignored.
#[derive(Debug, Deserialize)]
struct PlayerRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Soccer Experience")]
    experience: String,
    #[serde(rename = "Guardian Name(s)")]
    guardian_names: String,
}

/// Loads players from the CSV file at `path`, preserving file order.
///
/// # Returns
/// * `Ok(Vec<Player>)` - All players in the file
/// * `Err(AppError::Io)` - The file could not be read
/// * `Err(AppError::InputFormat)` - A column is missing, a row is malformed or
///   an experience value is not `YES`/`NO`
pub async fn load_players(path: impl AsRef<Path>) -> Result<Vec<Player>, AppError> {
    let path = path.as_ref();
    let content = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::io(path, e))?;

    let players = load_players_from_reader(content.as_slice(), path)?;
    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Parses players from any reader. `source` only labels errors.
pub fn load_players_from_reader<R: Read>(
    reader: R,
    source: impl AsRef<Path>,
) -> Result<Vec<Player>, AppError> {
    let source = source.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input_format(source, format!("unreadable header row: {e}")))?;
    if let Some(missing) = columns::REQUIRED
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(AppError::input_format(
            source,
            format!("missing column '{missing}'"),
        ));
    }

    let mut players = Vec::new();
    for result in reader.deserialize::<PlayerRow>() {
        let row = result.map_err(|e| row_error(source, &e))?;
        let experience = Experience::from_literal(&row.experience).ok_or_else(|| {
            AppError::input_format(
                source,
                format!(
                    "player '{}' has {} '{}', expected YES or NO",
                    row.name,
                    columns::EXPERIENCE,
                    row.experience
                ),
            )
        })?;

        debug!("Read player {} ({})", row.name, experience);
        players.push(Player {
            name: row.name,
            experience,
            guardian_names: row.guardian_names,
        });
    }

    Ok(players)
}

fn row_error(source: &Path, error: &csv::Error) -> AppError {
    let line = error
        .position()
        .map(|pos| format!("line {}: ", pos.line()))
        .unwrap_or_default();
    AppError::input_format(source, format!("{line}{error}"))
}
