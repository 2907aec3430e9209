use anyhow::Result;

use matchday_leaderboard::cli::Command;
use matchday_leaderboard::{
    handle_completions, handle_grade, handle_init, handle_leaderboard, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Init => handle_init(),
        Command::Leaderboard { season_id } => handle_leaderboard(*season_id),
        Command::Grade {
            match_day_id,
            actual_total_goals,
        } => handle_grade(*match_day_id, *actual_total_goals),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
