//! API endpoint implementations.

mod brawlers;
mod clubs;
mod events;
mod players;
mod rankings;

pub use brawlers::BrawlersApi;
pub use clubs::ClubsApi;
pub use events::EventsApi;
pub use players::PlayersApi;
pub use rankings::RankingsApi;
