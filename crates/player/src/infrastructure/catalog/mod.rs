//! Demo lobby content
//!
//! The client ships with a fixed catalog, winners ticker and balance until a
//! lobby backend exists.

use reelhouse_domain::{GameCategory, GameId, GameListing, PlayerStats, RecentWin};

fn listing(
    title: &str,
    provider: &str,
    category: GameCategory,
    rtp: f32,
    featured: bool,
) -> GameListing {
    GameListing {
        id: GameId::new(),
        title: title.to_string(),
        provider: provider.to_string(),
        category,
        rtp,
        featured,
    }
}

pub fn demo_catalog() -> Vec<GameListing> {
    vec![
        listing("Golden Reels", "Northlight", GameCategory::Slots, 96.5, true),
        listing("Pharaoh's Fortune", "Sandstone", GameCategory::Slots, 95.8, false),
        listing("Neon Nights", "Northlight", GameCategory::Slots, 96.1, false),
        listing("Mega Vault", "Atlas Gaming", GameCategory::Jackpot, 94.2, true),
        listing("Dragon's Hoard", "Sandstone", GameCategory::Jackpot, 93.9, false),
        listing("Classic Blackjack", "Felt & Co", GameCategory::Table, 99.5, true),
        listing("European Roulette", "Felt & Co", GameCategory::Table, 97.3, false),
        listing("Texas Hold'em", "Atlas Gaming", GameCategory::Table, 98.0, false),
        listing("Live Lightning Roulette", "Studio Nine", GameCategory::Live, 97.1, true),
        listing("Live Baccarat", "Studio Nine", GameCategory::Live, 98.9, false),
    ]
}

pub fn demo_recent_wins() -> Vec<RecentWin> {
    [
        ("lucky_lena", "Mega Vault", 1_250_000),
        ("spin_doctor", "Golden Reels", 48_250),
        ("highroller88", "Classic Blackjack", 120_000),
        ("reel_queen", "Live Lightning Roulette", 73_500),
        ("jackjack", "Neon Nights", 9_990),
    ]
    .into_iter()
    .map(|(player, game, amount_cents)| RecentWin {
        player: player.to_string(),
        game: game.to_string(),
        amount_cents,
    })
    .collect()
}

/// Welcome balance every new player sees
pub fn demo_stats() -> PlayerStats {
    PlayerStats {
        balance_cents: 100_000,
        wagered_cents: 0,
        biggest_win_cents: 0,
        games_played: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelhouse_domain::featured_games;

    #[test]
    fn every_category_has_games() {
        let catalog = demo_catalog();
        for category in GameCategory::ALL {
            assert!(catalog.iter().any(|g| g.category == category), "{category}");
        }
    }

    #[test]
    fn catalog_has_featured_games() {
        assert_eq!(featured_games(&demo_catalog()).len(), 4);
    }
}
