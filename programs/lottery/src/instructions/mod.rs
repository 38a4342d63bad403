pub mod admin;
pub mod buy_ticket;
pub mod end_game;

pub use admin::*;
pub use buy_ticket::*;
pub use end_game::*;
