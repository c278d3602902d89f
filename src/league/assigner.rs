use super::models::{Experience, League, Player, Team};
use crate::config::validation::validate_team_names;
use crate::error::AppError;
use tracing::{debug, info};

/// Distributes players over the given teams.
///
/// Experienced players are dealt out first, round-robin in file order, then
/// the novices. The cursor is shared by both passes, so the novices pick up
/// with the team after the one that received the last experienced player.
///
/// # Arguments
/// * `team_names` - Ordered, unique, non-blank team names (at least one)
/// * `players` - Players in the order they were loaded
///
/// # Returns
/// * `Ok(League)` - Teams in `team_names` order, each with its players
/// * `Err(AppError::Config)` - The team name list is empty or invalid
///
/// # Example
/// ```
/// use league_builder::league::{assign_teams, Experience, Player};
///
/// let players = vec![
///     Player::new("Ann", Experience::Experienced, "G1"),
///     Player::new("Bo", Experience::Novice, "G2"),
///     Player::new("Cy", Experience::Experienced, "G3"),
/// ];
/// let league = assign_teams(&["Sharks", "Dragons"], &players).unwrap();
///
/// assert_eq!(league.team("Sharks").unwrap().len(), 2);
/// assert_eq!(league.team("Dragons").unwrap().players()[0].name, "Cy");
/// ```
pub fn assign_teams<S: AsRef<str>>(
    team_names: &[S],
    players: &[Player],
) -> Result<League, AppError> {
    validate_team_names(team_names)?;

    let mut teams: Vec<Team> = team_names
        .iter()
        .map(|name| Team::new(name.as_ref()))
        .collect();
    let mut cursor = 0;

    for experience in [Experience::Experienced, Experience::Novice] {
        for player in players.iter().filter(|p| p.experience == experience) {
            debug!(
                "Assigning {} ({}) to {}",
                player.name,
                experience,
                teams[cursor].name()
            );
            teams[cursor].push(player.clone());
            cursor = (cursor + 1) % teams.len();
        }
    }

    let league = League::from_teams(teams);
    for team in league.teams() {
        info!(
            "Team {}: {} players ({} experienced)",
            team.name(),
            team.len(),
            team.count_with(Experience::Experienced)
        );
    }

    Ok(league)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn names(team: &Team) -> Vec<&str> {
        team.players().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_two_team_scenario() {
        let players = vec![
            TestDataBuilder::create_player("Ann", true, "G1"),
            TestDataBuilder::create_player("Bo", false, "G2"),
            TestDataBuilder::create_player("Cy", true, "G3"),
        ];

        let league = assign_teams(&["Sharks", "Dragons"], &players).unwrap();

        assert_eq!(league.team_names(), vec!["Sharks", "Dragons"]);
        assert_eq!(names(league.team("Sharks").unwrap()), vec!["Ann", "Bo"]);
        assert_eq!(names(league.team("Dragons").unwrap()), vec!["Cy"]);
    }

    #[test]
    fn test_cursor_carries_over_between_passes() {
        // 4 experienced over 3 teams leaves the cursor on the second team
        let mut players = TestDataBuilder::create_players(4, true);
        players.extend(TestDataBuilder::create_players_named("Novice", 2, false));

        let league = assign_teams(&["Sharks", "Dragons", "Raptors"], &players).unwrap();

        assert_eq!(
            names(league.team("Sharks").unwrap()),
            vec!["Player 1", "Player 4"]
        );
        assert_eq!(
            names(league.team("Dragons").unwrap()),
            vec!["Player 2", "Novice 1"]
        );
        assert_eq!(
            names(league.team("Raptors").unwrap()),
            vec!["Player 3", "Novice 2"]
        );
    }

    #[test]
    fn test_experienced_players_go_first_regardless_of_file_order() {
        let players = vec![
            TestDataBuilder::create_player("Novice A", false, "G"),
            TestDataBuilder::create_player("Novice B", false, "G"),
            TestDataBuilder::create_player("Pro A", true, "G"),
        ];

        let league = assign_teams(&["One", "Two"], &players).unwrap();

        assert_eq!(names(league.team("One").unwrap()), vec!["Pro A", "Novice B"]);
        assert_eq!(names(league.team("Two").unwrap()), vec!["Novice A"]);
    }

    #[test]
    fn test_no_players_gives_empty_teams() {
        let league = assign_teams(&["A", "B"], &[]).unwrap();

        assert_eq!(league.teams().len(), 2);
        assert!(league.teams().iter().all(Team::is_empty));
    }

    #[test]
    fn test_single_team_receives_everyone_in_order() {
        let players = vec![
            TestDataBuilder::create_player("Bo", false, "G2"),
            TestDataBuilder::create_player("Ann", true, "G1"),
        ];

        let league = assign_teams(&["Solo"], &players).unwrap();

        assert_eq!(names(league.team("Solo").unwrap()), vec!["Ann", "Bo"]);
    }

    #[test]
    fn test_empty_team_list_is_config_error() {
        let players = TestDataBuilder::create_players(3, true);
        let empty: [&str; 0] = [];

        let result = assign_teams(&empty, &players);

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_duplicate_team_names_are_rejected() {
        let result = assign_teams(&["Sharks", "Sharks"], &[]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let players = TestDataBuilder::create_mixed_players(17);
        let teams = ["Sharks", "Dragons", "Raptors"];

        let first = assign_teams(&teams, &players).unwrap();
        let second = assign_teams(&teams, &players).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_default_season_of_eighteen_players() {
        let players = TestDataBuilder::create_mixed_players(18);
        let league = assign_teams(&["Sharks", "Dragons", "Raptors"], &players).unwrap();

        for team in league.teams() {
            assert_eq!(team.len(), 6);
            assert_eq!(team.count_with(Experience::Experienced), 3);
            assert_eq!(team.count_with(Experience::Novice), 3);
        }
    }
}
