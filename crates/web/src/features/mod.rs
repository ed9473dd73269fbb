pub mod admin;
pub mod entries;
pub mod leaderboard;
pub mod players;
pub mod pros;
pub mod schedule;
pub mod signup;
