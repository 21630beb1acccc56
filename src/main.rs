use anyhow::Context;
use clap::Parser;
use pictopick::catalog::{CatalogClient, PictogramCatalog};
use pictopick::config::Config;
use pictopick::host::Document;
use pictopick::logging::init_tracing;
use pictopick::ui::{self, app::App};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(
    name = "pictopick",
    version,
    about = "Search a pictogram catalog and place pictograms on a diagram"
)]
struct Args {
    /// Config file [default: <config dir>/pictopick/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Dialog language code, e.g. `fr`
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Diagram file to open. Created on first save.
    #[arg(long, value_name = "PATH")]
    diagram: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    if let Some(code) = &args.lang {
        if config.language(code).is_none() {
            let available: Vec<&str> = config
                .languages
                .iter()
                .map(|lang| lang.code.as_str())
                .collect();
            eprintln!("Error: Language '{}' not found in config", code);
            eprintln!("Available languages: {}", available.join(", "));
            std::process::exit(1);
        }
    }

    let document = match &args.diagram {
        Some(path) => Document::load(path)?,
        None => Document::new(),
    };

    let catalog: Arc<dyn PictogramCatalog> =
        Arc::new(CatalogClient::new(&config.catalog).context("Failed to build HTTP client")?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let mut app = App::new(config).with_document(document, args.diagram);
    if let Some(code) = &args.lang {
        app.set_language(code);
    }
    tracing::info!(language = app.language(), "Starting pictopick");

    let app = ui::run(app, catalog, &runtime)?;

    if let Some(path) = app.diagram_path() {
        if app.document().revision() > 0 {
            app.document().save(path)?;
        }
    }
    tracing::info!("Exiting");
    Ok(())
}
