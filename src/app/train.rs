use anyhow::Result;
use dialoguer::MultiSelect;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tagmatch::TrainingError;
use tagmatch::core::training::{Entity, SnapshotStore, TrainingSession};
use tagmatch::ui::style as ui;

pub(crate) struct TrainParams {
    pub rounds: usize,
    pub count: usize,
    pub window: usize,
    pub discrimination_top: usize,
    pub seed: u64,
}

/// Split one round's candidates into liked (checked) and disliked names.
pub(crate) fn split_verdicts(
    candidates: &[Entity],
    checked: &[usize],
) -> (Vec<String>, Vec<String>) {
    let (liked, disliked): (Vec<_>, Vec<_>) = candidates
        .iter()
        .enumerate()
        .partition(|(i, _)| checked.contains(i));
    let names = |side: Vec<(usize, &Entity)>| -> Vec<String> {
        side.into_iter().map(|(_, e)| e.name.clone()).collect()
    };
    (names(liked), names(disliked))
}

fn label(entity: &Entity) -> String {
    if entity.tags.is_empty() {
        entity.name.clone()
    } else {
        format!("{}  [{}]", entity.name, entity.tags.join(", "))
    }
}

/// Run interactive rounds: show candidates, record checked ones as liked and
/// the rest as disliked, persist after every round.
pub(crate) fn run_training(
    session: &mut TrainingSession,
    store: &dyn SnapshotStore,
    params: &TrainParams,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(params.seed);

    for round in 1..=params.rounds {
        let candidates = session.next_candidates_with_rng(params.count, params.window, &mut rng)?;
        if candidates.is_empty() {
            println!("{}", ui::yellow("no candidates left to show"));
            break;
        }

        println!();
        println!(
            "{} {}",
            ui::accent(format!("Round {round}/{}", params.rounds)),
            ui::dim("space to toggle, enter to confirm")
        );
        let labels: Vec<String> = candidates.iter().map(label).collect();
        let checked = MultiSelect::new()
            .with_prompt("  Which of these do you like?")
            .items(&labels)
            .interact()?;

        let (liked, disliked) = split_verdicts(&candidates, &checked);
        session.select(&liked, &disliked)?;
        store.save(&session.snapshot())?;

        let level = match session.discrimination_level(params.discrimination_top) {
            Ok(level) => ui::signed(level),
            Err(TrainingError::InvalidArgument(_)) => ui::dim("n/a"),
            Err(e) => return Err(e.into()),
        };
        println!(
            "  {} {} liked, {} disliked · discrimination {}",
            ui::success("✓"),
            liked.len(),
            disliked.len(),
            level
        );
    }

    Ok(())
}
