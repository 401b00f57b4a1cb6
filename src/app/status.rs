use crate::app::dispatch::Paths;
use tagmatch::config::Config;
use tagmatch::core::training::TrainingSession;

pub(crate) fn render_status(
    config: &Config,
    paths: &Paths,
    session: Option<&TrainingSession>,
) -> String {
    let mut lines = vec![
        "◆ tagmatch status".to_string(),
        String::new(),
        format!("version     {}", env!("CARGO_PKG_VERSION")),
        format!("config      {}", config.config_path.display()),
        format!("workspace   {}", config.workspace_dir.display()),
        format!("state       {}", paths.state.display()),
        format!(
            "catalog     {}",
            paths
                .catalog
                .as_ref()
                .map_or_else(|| "(not configured)".to_string(), |p| p.display().to_string())
        ),
        String::new(),
        format!(
            "candidates  {} per round (min {}), window {}",
            config.training.candidates,
            config.training.min_candidates,
            config.training.exploration_window
        ),
        format!(
            "seed        {}",
            config
                .training
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string())
        ),
    ];

    if let Some(session) = session {
        let trained = session.counters().values().filter(|v| **v != 0).count();
        lines.push(String::new());
        lines.push(format!("entities    {}", session.catalog().len()));
        lines.push(format!(
            "tags        {} ({trained} with signal)",
            session.counters().len()
        ));
        lines.push(format!("rounds      {}", session.rounds()));
    }

    lines.join("\n")
}
