use chrono::NaiveDateTime;

use super::id::ItemId;
use super::timestamp::parse_timestamp;

/// A party game.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyGame {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Free-text list of what is needed to play.
    pub materials: String,
    pub min_players: u32,
    /// `None` means no upper bound.
    pub max_players: Option<u32>,
    pub requires_drinking: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl PartyGame {
    pub fn created_at_datetime(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }

    pub fn updated_at_datetime(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.updated_at)
    }

    pub fn accepts_players(&self, players: u32) -> bool {
        players >= self.min_players && self.max_players.map_or(true, |max| players <= max)
    }

    /// Player range as shown on game cards: `"2-6"`, or `"3+"` when unbounded.
    pub fn players_label(&self) -> String {
        match self.max_players {
            Some(max) if max == self.min_players => max.to_string(),
            Some(max) => format!("{}-{}", self.min_players, max),
            None => format!("{}+", self.min_players),
        }
    }
}
