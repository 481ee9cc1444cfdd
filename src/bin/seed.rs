use clap::{Arg, Command};
use diesel::{Connection, PgConnection};
use fittrack_backend::config::Config;
use fittrack_backend::services::SeedService;

fn main() {
    let matches = Command::new("seed")
        .about("Destructively repopulate the database with demo fixture data")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress progress logging, only print the final counts")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let config = Config::from_env().expect("Failed to load configuration");
    if !matches.get_flag("quiet") {
        fittrack_backend::init_tracing(&config);
    }

    let mut conn =
        PgConnection::establish(config.db_url()).expect("Failed to connect to database");

    match SeedService::run(&mut conn, config.bcrypt_cost) {
        Ok(summary) => {
            println!("Database population completed successfully!");
            println!("Created {} users across {} teams", summary.users, summary.teams);
            println!("Created {} activities", summary.activities);
            println!("Created {} leaderboard entries", summary.leaderboard_entries);
            println!("Created {} workout suggestions", summary.workouts);
        }
        Err(err) => {
            eprintln!("Database population failed: {}", err);
            std::process::exit(1);
        }
    }
}
