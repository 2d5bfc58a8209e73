use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use filterpane::config::Config;
use filterpane::ui;
use filterpane::ui::app::{App, PanelPreference};

#[derive(Parser)]
#[command(
    name = "filterpane",
    about = "Product list with a faceted filter panel",
    version
)]
struct Cli {
    /// Path to a config file. Defaults to the platform config directory.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Which filter surface to mount.
    #[arg(long, value_enum, default_value = "auto")]
    panel: PanelArg,

    /// Append logs to this file. Without it nothing is logged, since
    /// stdout belongs to the UI.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PanelArg {
    /// Sidebar on wide terminals, bottom sheet on narrow ones.
    Auto,
    Sidebar,
    Sheet,
}

impl From<PanelArg> for PanelPreference {
    fn from(arg: PanelArg) -> Self {
        match arg {
            PanelArg::Auto => PanelPreference::Auto,
            PanelArg::Sidebar => PanelPreference::Sidebar,
            PanelArg::Sheet => PanelPreference::Sheet,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut app = App::new(config.options, cli.panel.into());
    app.set_on_change(Arc::new(|source, selection| {
        tracing::info!(
            ?source,
            active = selection.active_count(),
            max_price = selection.price.max,
            rating = ?selection.rating_min,
            "selection changed"
        );
    }));
    app.set_on_sheet_close(Arc::new(|reason| {
        tracing::info!(?reason, "sheet closed");
    }));

    ui::run(app)?;
    Ok(())
}
