use std::fmt;

/// Prior soccer experience as recorded in the player file.
///
/// The player file only ever uses the literals `YES` and `NO`; anything else
/// is rejected when the file is loaded so no player can fall through the
/// assignment passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Experience {
    Experienced,
    Novice,
}

impl Experience {
    /// Parses the exact literal used in the player file.
    pub fn from_literal(value: &str) -> Option<Self> {
        match value {
            "YES" => Some(Experience::Experienced),
            "NO" => Some(Experience::Novice),
            _ => None,
        }
    }

    /// The literal written back to the roster report.
    pub fn as_literal(&self) -> &'static str {
        match self {
            Experience::Experienced => "YES",
            Experience::Novice => "NO",
        }
    }

    pub fn is_experienced(&self) -> bool {
        matches!(self, Experience::Experienced)
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_literal())
    }
}

/// A single registered player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: String,
    pub experience: Experience,
    /// One or more guardians, joined the way the registration form had them
    pub guardian_names: String,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        experience: Experience,
        guardian_names: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            experience,
            guardian_names: guardian_names.into(),
        }
    }
}

/// A named team and the players assigned to it, in assignment order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    players: Vec<Player>,
}

impl Team {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Number of players on the team with the given experience
    pub fn count_with(&self, experience: Experience) -> usize {
        self.players
            .iter()
            .filter(|p| p.experience == experience)
            .count()
    }
}

/// The complete team assignment for a season.
///
/// Teams keep the order of the configured team names; every loaded player is
/// on exactly one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    teams: Vec<Team>,
}

impl League {
    pub(crate) fn from_teams(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Looks up a team by its exact name
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.name == name)
    }

    pub fn team_names(&self) -> Vec<&str> {
        self.teams.iter().map(Team::name).collect()
    }

    /// Total number of players across all teams
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// True when no team has any players
    pub fn is_empty(&self) -> bool {
        self.teams.iter().all(Team::is_empty)
    }

    /// Every player paired with its team, in roster order
    pub fn assignments(&self) -> impl Iterator<Item = (&Team, &Player)> {
        self.teams
            .iter()
            .flat_map(|team| team.players.iter().map(move |player| (team, player)))
    }
}
