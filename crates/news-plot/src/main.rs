// File: crates/news-plot/src/main.rs
// Summary: Renders files/plots/news.png from files/input/news.csv using the hardcoded news styles.

use anyhow::{Context, Result};
use news_chart::PlotConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PlotConfig::default();
    let out = news_chart::run(&config)
        .with_context(|| format!("failed to render chart from '{}'", config.input_path.display()))?;
    info!(path = %out.display(), "done");
    Ok(())
}
