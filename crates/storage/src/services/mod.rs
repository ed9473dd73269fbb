pub mod current_week;
pub mod leaderboard;
