pub mod activities;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;
