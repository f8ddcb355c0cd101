//! Lobby widgets for the landing page and dashboard

mod game_card;
mod stat_card;
mod winners_list;

pub use game_card::GameCard;
pub use stat_card::StatCard;
pub use winners_list::WinnersList;
