use crate::config::validation::parse_practice_start;
use crate::constants::defaults;
use crate::league::{Experience, Player};
use chrono::NaiveDateTime;

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a single player
    pub fn create_player(name: &str, experienced: bool, guardians: &str) -> Player {
        let experience = if experienced {
            Experience::Experienced
        } else {
            Experience::Novice
        };
        Player::new(name, experience, guardians)
    }

    /// Creates `count` players named "Player 1".."Player N" with the same experience
    pub fn create_players(count: usize, experienced: bool) -> Vec<Player> {
        Self::create_players_named("Player", count, experienced)
    }

    /// Creates `count` players named "<prefix> 1".."<prefix> N"
    pub fn create_players_named(prefix: &str, count: usize, experienced: bool) -> Vec<Player> {
        (1..=count)
            .map(|i| {
                Self::create_player(&format!("{prefix} {i}"), experienced, &format!("Guardian {i}"))
            })
            .collect()
    }

    /// Creates `count` players alternating experienced / novice, starting experienced
    pub fn create_mixed_players(count: usize) -> Vec<Player> {
        (1..=count)
            .map(|i| {
                Self::create_player(&format!("Player {i}"), i % 2 == 1, &format!("Guardian {i}"))
            })
            .collect()
    }

    /// The season's default first practice
    pub fn default_practice_start() -> NaiveDateTime {
        parse_practice_start(defaults::PRACTICE_START).unwrap_or_default()
    }

    /// Renders players as CSV with the standard header plus a height column
    pub fn players_csv(players: &[Player]) -> String {
        let mut csv = String::from("Name,Height (inches),Soccer Experience,Guardian Name(s)\n");
        for (i, player) in players.iter().enumerate() {
            csv.push_str(&format!(
                "{},{},{},\"{}\"\n",
                player.name,
                36 + i % 12,
                player.experience,
                player.guardian_names
            ));
        }
        csv
    }

    /// The 18-player registration list the league has used since its first season
    pub fn sample_season_csv() -> &'static str {
        "\
Name,Height (inches),Soccer Experience,Guardian Name(s)
Joe Smith,42,YES,Jim and Jan Smith
Jill Tanner,36,YES,Clara Tanner
Bill Bon,43,YES,Sara and Jenny Bon
Eva Gordon,45,NO,Wendy and Mike Gordon
Matt Gill,40,NO,Charles and Sylvia Gill
Kimmy Stein,41,NO,Bill and Hillary Stein
Sammy Adams,45,NO,Jeff Adams
Karl Saygan,42,YES,Heather Bledsoe
Suzane Greenberg,44,YES,Henrietta Dumas
Sal Dali,41,NO,Gala Dali
Joe Kavalier,39,NO,Sam and Elaine Kavalier
Ben Finkelstein,44,NO,Aaron and Jill Finkelstein
Diego Soto,41,YES,Robin and Sarika Soto
Chloe Alaska,47,NO,David and Jamie Alaska
Arnold Willis,43,NO,Claire Willis
Phillip Helm,44,YES,Thomas Helm and Eva Jones
Les Clay,42,YES,Wynonna Brown
Herschel Krustofski,45,YES,Hyman and Rachel Krustofski
"
    }
}
