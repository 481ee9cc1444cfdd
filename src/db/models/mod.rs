// Sub-modules organized by entity
pub mod activity;
pub mod api;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

// Re-export all models so call sites can use `crate::db::models::*`

// API response structures
pub use api::*;

// Activity models
pub use activity::*;

// Leaderboard models
pub use leaderboard::*;

// Team models
pub use team::*;

// User models
pub use user::*;

// Workout models
pub use workout::*;
