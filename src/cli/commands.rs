use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `tagmatch` - learn tag preferences from likes and dislikes.
#[derive(Parser, Debug)]
#[command(name = "tagmatch")]
#[command(version = "0.1.0")]
#[command(about = "Rank a tagged catalog by learned preference.", long_about = None)]
pub struct Cli {
    /// Entity catalog file (.json or .toml); overrides catalog.path
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Session state file (default: <workspace>/session.json)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Config file (default: ~/.tagmatch/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Propose the next entities to judge
    Candidates {
        /// How many candidates to propose
        #[arg(short, long)]
        count: Option<usize>,

        /// Exploration window the candidates are drawn from
        #[arg(short, long)]
        window: Option<usize>,

        /// Sampling seed (default: training.seed, else random)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Record liked and disliked entities
    Select {
        /// Liked entity name (repeatable)
        #[arg(short, long = "like")]
        like: Vec<String>,

        /// Disliked entity name (repeatable)
        #[arg(short, long = "dislike")]
        dislike: Vec<String>,
    },

    /// List the catalog ranked by learned preference
    Matches {
        /// Hide entities scoring below this
        #[arg(long, allow_negative_numbers = true)]
        min_score: Option<i64>,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,

        /// Least preferred first
        #[arg(long)]
        reverse: bool,
    },

    /// Report how well the top matches stand out from the rest
    Discrimination {
        /// Size of the top group
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show tag counters and their current points
    Counters,

    /// Interactive training: pick liked candidates round after round
    Train {
        /// Number of rounds
        #[arg(short, long, default_value = "5")]
        rounds: usize,

        /// Candidates per round
        #[arg(short, long)]
        count: Option<usize>,

        /// Exploration window the candidates are drawn from
        #[arg(short, long)]
        window: Option<usize>,
    },

    /// Forget everything learned so far
    Reset,

    /// Show configuration and session status
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn select_collects_repeated_flags() {
        let cli = Cli::parse_from([
            "tagmatch", "select", "--like", "a", "--like", "b", "--dislike", "c",
        ]);
        match cli.command {
            Commands::Select { like, dislike } => {
                assert_eq!(like, vec!["a", "b"]);
                assert_eq!(dislike, vec!["c"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn matches_accepts_negative_threshold() {
        let cli = Cli::parse_from(["tagmatch", "matches", "--min-score", "-3"]);
        match cli.command {
            Commands::Matches { min_score, .. } => assert_eq!(min_score, Some(-3)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_catalog_flag_after_subcommand() {
        let cli = Cli::parse_from(["tagmatch", "counters", "--catalog", "items.json"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("items.json")));
    }
}
