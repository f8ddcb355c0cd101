//! Game lobby types: catalog listings, category filtering, recent wins and
//! player statistics shown on the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::ids::GameId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameCategory {
    Slots,
    Jackpot,
    Table,
    Live,
}

impl GameCategory {
    pub const ALL: [GameCategory; 4] = [Self::Slots, Self::Jackpot, Self::Table, Self::Live];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Slots => "Slots",
            Self::Jackpot => "Jackpots",
            Self::Table => "Table Games",
            Self::Live => "Live Casino",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slots => "slots",
            Self::Jackpot => "jackpot",
            Self::Table => "table",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for GameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slots" => Ok(Self::Slots),
            "jackpot" | "jackpots" => Ok(Self::Jackpot),
            "table" => Ok(Self::Table),
            "live" => Ok(Self::Live),
            other => Err(DomainError::parse(format!(
                "Unknown game category: {}",
                other
            ))),
        }
    }
}

/// A game tile in the lobby
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListing {
    pub id: GameId,
    pub title: String,
    pub provider: String,
    pub category: GameCategory,
    /// Return-to-player, in percent
    pub rtp: f32,
    pub featured: bool,
}

/// Games matching `category` (all when `None`) whose title or provider
/// contains `query`, case-insensitively. Catalog order is preserved.
pub fn filter_games<'a>(
    games: &'a [GameListing],
    category: Option<GameCategory>,
    query: &str,
) -> Vec<&'a GameListing> {
    let needle = query.trim().to_lowercase();
    games
        .iter()
        .filter(|game| category.is_none_or(|c| game.category == c))
        .filter(|game| {
            needle.is_empty()
                || game.title.to_lowercase().contains(&needle)
                || game.provider.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Featured subset shown on the landing page
pub fn featured_games(games: &[GameListing]) -> Vec<&GameListing> {
    games.iter().filter(|game| game.featured).collect()
}

/// An entry in the recent winners ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentWin {
    pub player: String,
    pub game: String,
    pub amount_cents: u64,
}

/// Headline numbers on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub balance_cents: u64,
    pub wagered_cents: u64,
    pub biggest_win_cents: u64,
    pub games_played: u32,
}

/// Format an amount of cents as dollars with thousands separators, e.g. `$1,234.50`
pub fn format_credits(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${}.{:02}", grouped, cents % 100)
}

/// Mask a player name for public display, e.g. `reel_queen` -> `re***en`
pub fn mask_player_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= 4 {
        return format!("{}***", chars.first().copied().unwrap_or('*'));
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}
