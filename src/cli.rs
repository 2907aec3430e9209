use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "matchday-leaderboard backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Drop and recreate the database schema
    Init,
    /// Print the season leaderboard
    Leaderboard {
        /// Season to rank (defaults to the active season)
        #[arg(short, long)]
        season_id: Option<i64>,
    },
    /// Close a match day and award points for its predictions
    Grade {
        #[arg(short, long)]
        match_day_id: i64,
        /// Final total goals (defaults to the sum of the selected games)
        #[arg(short, long)]
        actual_total_goals: Option<i64>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grade() {
        let cli = Cli::try_parse_from(["matchday_leaderboard", "grade", "--match-day-id", "4", "-a", "3"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Grade {
                match_day_id: 4,
                actual_total_goals: Some(3)
            }
        );
    }

    #[test]
    fn test_serve_default_port() {
        let cli = Cli::try_parse_from(["matchday_leaderboard", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
