use crate::error::AppError;
use crate::league::League;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Renders the roster report.
///
/// One section per team in league order: the team name, an `=` underline of
/// the same width, a blank line, one `Name, YES/NO, Guardians` line per
/// player and a closing blank line.
pub fn render_roster(league: &League) -> String {
    let mut out = String::new();
    for team in league.teams() {
        out.push_str(team.name());
        out.push('\n');
        out.push_str(&"=".repeat(team.name().chars().count()));
        out.push_str("\n\n");

        for player in team.players() {
            out.push_str(&format!(
                "{}, {}, {}\n",
                player.name, player.experience, player.guardian_names
            ));
        }
        out.push('\n');
    }
    out
}

/// Writes the roster report to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub async fn write_roster(league: &League, path: impl AsRef<Path>) -> Result<(), AppError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::io(parent, e))?;
    }

    fs::write(path, render_roster(league))
        .await
        .map_err(|e| AppError::io(path, e))?;

    info!(
        "Wrote roster for {} teams to {}",
        league.teams().len(),
        path.display()
    );
    Ok(())
}
