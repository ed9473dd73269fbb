pub mod admin;
pub mod entry;
pub mod leaderboard;
pub mod player;
pub mod pro;
pub mod schedule;
