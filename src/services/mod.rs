pub mod activities_service;
pub mod leaderboard_service;
pub mod seed_service;
pub mod teams_service;
pub mod users_service;
pub mod workouts_service;

pub use activities_service::ActivitiesService;
pub use leaderboard_service::LeaderboardService;
pub use seed_service::SeedService;
pub use teams_service::TeamsService;
pub use users_service::UsersService;
pub use workouts_service::WorkoutsService;
