//! Roster report and welcome letter writers.

pub mod letters;
pub mod roster;

pub use letters::{
    LetterSettings, NameConflictPolicy, PlannedLetter, format_practice_start, letter_filename,
    plan_letters, render_letter, write_letters,
};
pub use roster::{render_roster, write_roster};
