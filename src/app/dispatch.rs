use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result, bail};
use rand::Rng;
use std::path::PathBuf;
use tracing::info;

use tagmatch::catalog::session_from_file;
use tagmatch::config::Config;
use tagmatch::core::training::{
    ACCEPT_ALL, EntityScore, JsonFileStore, RankOrder, SnapshotStore, TrainingSession,
};
use tagmatch::observability::create_observer;
use tagmatch::ui::style as ui;

use crate::app::status::render_status;
use crate::app::train::{TrainParams, run_training};

/// Resolved file locations for one invocation.
pub(crate) struct Paths {
    pub catalog: Option<PathBuf>,
    pub state: PathBuf,
}

impl Paths {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            catalog: cli.catalog.clone().or_else(|| config.catalog.path.clone()),
            state: cli.state.clone().unwrap_or_else(|| config.state_path()),
        }
    }
}

/// Explicit seed first, then the configured one, then a fresh random seed.
pub(crate) fn resolve_seed(explicit: Option<u64>, config: &Config) -> u64 {
    explicit
        .or(config.training.seed)
        .unwrap_or_else(|| rand::rng().random())
}

/// Build the session from the catalog and replay any saved state onto it.
fn open_session(
    config: &Config,
    paths: &Paths,
    seed: u64,
) -> Result<(TrainingSession, JsonFileStore)> {
    let Some(catalog_path) = &paths.catalog else {
        bail!("no catalog configured: pass --catalog or set catalog.path in the config file");
    };
    let mut session = session_from_file(catalog_path, seed)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?
        .with_min_candidates(config.training.min_candidates)
        .with_observer(create_observer(&config.observability));

    let store = JsonFileStore::new(&paths.state);
    if let Some(snapshot) = store.load()? {
        let skipped = session.restore(&snapshot);
        info!(rounds = snapshot.rounds, skipped, "session state restored");
    }
    Ok((session, store))
}

#[allow(clippy::too_many_lines)]
pub fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let paths = Paths::resolve(&cli, &config);

    match cli.command {
        Commands::Candidates {
            count,
            window,
            seed,
        } => {
            let seed = resolve_seed(seed, &config);
            let (session, _) = open_session(&config, &paths, seed)?;
            let count = count.unwrap_or(config.training.candidates);
            let window = window.unwrap_or(config.training.exploration_window);
            let candidates = session.next_candidates(count, window, Some(seed))?;
            println!("{}", ui::header(format!("Next candidates (seed {seed})")));
            for entity in &candidates {
                println!(
                    "  {} {}  {}",
                    ui::accent("•"),
                    ui::value(&entity.name),
                    ui::dim(entity.tags.join(", "))
                );
            }
            if candidates.len() < count {
                println!(
                    "  {}",
                    ui::yellow(format!(
                        "only {} of {count} available in the exploration window",
                        candidates.len()
                    ))
                );
            }
            Ok(())
        }
        Commands::Select { like, dislike } => {
            if like.is_empty() && dislike.is_empty() {
                bail!("nothing to record: pass at least one --like or --dislike");
            }
            let seed = resolve_seed(None, &config);
            let (mut session, store) = open_session(&config, &paths, seed)?;
            session.select(&like, &dislike)?;
            store.save(&session.snapshot())?;
            println!(
                "{} recorded {} liked, {} disliked (round {})",
                ui::success("✓"),
                like.len(),
                dislike.len(),
                session.rounds()
            );
            Ok(())
        }
        Commands::Matches {
            min_score,
            limit,
            reverse,
        } => {
            let seed = resolve_seed(None, &config);
            let (session, _) = open_session(&config, &paths, seed)?;
            let min_score = min_score
                .or(config.training.min_score)
                .unwrap_or(ACCEPT_ALL);
            let order = if reverse {
                RankOrder::Ascending
            } else {
                RankOrder::Descending
            };
            let ranking = session.ranked(min_score, order);
            print_ranking(&ranking, limit.unwrap_or(usize::MAX));
            Ok(())
        }
        Commands::Discrimination { top } => {
            let seed = resolve_seed(None, &config);
            let (session, _) = open_session(&config, &paths, seed)?;
            let top = top.unwrap_or(config.training.discrimination_top);
            let level = session.discrimination_level(top)?;
            println!("discrimination (top {top}): {}", ui::signed(level));
            Ok(())
        }
        Commands::Counters => {
            let seed = resolve_seed(None, &config);
            let (session, _) = open_session(&config, &paths, seed)?;
            let points = session.tag_points();
            println!("{}", ui::header("tag         counter   point"));
            for (tag, counter) in session.counters() {
                let point = points.get(tag).copied().unwrap_or(0);
                println!("{tag:<12}{counter:>7}   {}", ui::signed(point));
            }
            Ok(())
        }
        Commands::Train {
            rounds,
            count,
            window,
        } => {
            let seed = resolve_seed(None, &config);
            let (mut session, store) = open_session(&config, &paths, seed)?;
            let params = TrainParams {
                rounds,
                count: count.unwrap_or(config.training.candidates),
                window: window.unwrap_or(config.training.exploration_window),
                discrimination_top: config.training.discrimination_top,
                seed,
            };
            run_training(&mut session, &store, &params)
        }
        Commands::Reset => {
            JsonFileStore::new(&paths.state).clear()?;
            println!(
                "{} cleared session state at {}",
                ui::success("✓"),
                ui::value(paths.state.display())
            );
            Ok(())
        }
        Commands::Status => {
            let session = match &paths.catalog {
                Some(_) => Some(open_session(&config, &paths, resolve_seed(None, &config))?.0),
                None => None,
            };
            println!("{}", render_status(&config, &paths, session.as_ref()));
            Ok(())
        }
    }
}

fn print_ranking(ranking: &[EntityScore], limit: usize) {
    if ranking.is_empty() {
        println!("{}", ui::dim("no entity meets the score threshold"));
        return;
    }
    for (rank, scored) in ranking.iter().take(limit).enumerate() {
        println!(
            "{:>4}  {:>6}  {}  {}",
            ui::accent(rank + 1),
            ui::signed(scored.score),
            ui::value(&scored.entity.name),
            ui::dim(&scored.entity.url)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn explicit_seed_wins_over_config() {
        let mut config = Config::default();
        config.training.seed = Some(5);
        assert_eq!(resolve_seed(Some(9), &config), 9);
        assert_eq!(resolve_seed(None, &config), 5);
    }

    #[test]
    fn cli_paths_override_config() {
        let mut config = Config::default();
        config.catalog.path = Some(PathBuf::from("from-config.json"));
        let cli = Cli::parse_from([
            "tagmatch",
            "--catalog",
            "cli.json",
            "--state",
            "state.json",
            "counters",
        ]);
        let paths = Paths::resolve(&cli, &config);
        assert_eq!(paths.catalog, Some(PathBuf::from("cli.json")));
        assert_eq!(paths.state, PathBuf::from("state.json"));
    }

    #[test]
    fn missing_catalog_is_reported() {
        let config = Config::default();
        let paths = Paths {
            catalog: None,
            state: PathBuf::from("unused.json"),
        };
        let err = open_session(&config, &paths, 1).unwrap_err();
        assert!(err.to_string().contains("no catalog configured"));
    }
}
