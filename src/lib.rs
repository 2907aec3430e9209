pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod report;
pub mod scoring;
pub mod services;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::grading::GradingService;
use crate::services::leaderboard::{LeaderboardScope, LeaderboardService};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let conn = database::get_connection(&pool)?;
    database::setup::reset_database(&conn)?;
    info!("Initialised {}", config.server.database_path);
    Ok(())
}

pub fn handle_leaderboard(season_id: Option<i64>) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let conn = database::get_connection(&pool)?;

    let scope = season_id.map_or(LeaderboardScope::Current, LeaderboardScope::Season);
    let leaderboard = LeaderboardService::new(config.leaderboard)
        .build(&conn, scope)?
        .with_context(|| format!("Season {} not found", season_id.unwrap_or_default()))?;

    print!("{}", report::render_leaderboard(&leaderboard));
    Ok(())
}

pub fn handle_grade(match_day_id: i64, actual_total_goals: Option<i64>) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let mut conn = database::get_connection(&pool)?;

    let summary = GradingService::new(config.scoring).grade_match_day(&mut conn, match_day_id, actual_total_goals)?;
    println!(
        "Match day {}: {} predictions graded against {} total goals",
        summary.match_day_id, summary.graded, summary.actual_total_goals
    );
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
