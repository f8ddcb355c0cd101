//! Lobby Service - read side of the dashboard and landing page

use std::sync::Arc;

use reelhouse_domain::{
    featured_games, filter_games, mask_player_name, GameCategory, GameListing, PlayerStats,
    RecentWin,
};

/// Catalog, winners ticker and player stats, shared read-only with the UI
#[derive(Clone)]
pub struct LobbyService {
    games: Arc<Vec<GameListing>>,
    recent_wins: Arc<Vec<RecentWin>>,
    stats: PlayerStats,
}

impl LobbyService {
    pub fn new(games: Vec<GameListing>, recent_wins: Vec<RecentWin>, stats: PlayerStats) -> Self {
        Self {
            games: Arc::new(games),
            recent_wins: Arc::new(recent_wins),
            stats,
        }
    }

    pub fn games(&self, category: Option<GameCategory>, query: &str) -> Vec<GameListing> {
        filter_games(&self.games, category, query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn featured(&self) -> Vec<GameListing> {
        featured_games(&self.games).into_iter().cloned().collect()
    }

    /// Recent wins with player names masked
    pub fn recent_wins(&self) -> Vec<RecentWin> {
        self.recent_wins
            .iter()
            .map(|win| RecentWin {
                player: mask_player_name(&win.player),
                ..win.clone()
            })
            .collect()
    }

    pub fn stats(&self) -> PlayerStats {
        self.stats
    }
}
