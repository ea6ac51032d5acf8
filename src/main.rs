//! assigntui - Main entry point
//!
//! Wires the CLI surface to the editor: opens the settings store, picks a
//! presenter (interactive or batch), and dispatches the chosen command.

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use assigntui::cli::{Cli, Commands};
use assigntui::{
    validate_record, AssignmentEditor, BatchPresenter, Catalog, JsonFileStore, Presenter,
    TuiPresenter,
};

/// Initialize tracing with env-filter overrides (RUST_LOG)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Commands::Edit {
            category,
            enable,
            disable,
            batch,
        } => {
            let store = JsonFileStore::open(&cli.settings)
                .with_context(|| format!("failed to open settings file {:?}", cli.settings))?;

            let headless = batch || !enable.is_empty() || !disable.is_empty();
            if headless {
                info!(category, "editing in batch mode");
                let presenter = BatchPresenter::new(enable, disable);
                let mut editor = AssignmentEditor::new(store, presenter, Catalog::default())?;
                editor.run(&category)?;
            } else {
                info!(category, "editing interactively");
                let presenter = TuiPresenter::new();
                let mut editor = AssignmentEditor::new(store, presenter, Catalog::default())?;
                if !editor.run(&category)? {
                    println!("Cancelled; nothing saved.");
                }
            }
        }
        Commands::Show { category } => {
            let store = JsonFileStore::open(&cli.settings)
                .with_context(|| format!("failed to open settings file {:?}", cli.settings))?;
            let editor =
                AssignmentEditor::new(store, BatchPresenter::default(), Catalog::default())?;
            let selection = editor.load_selection(&category)?;
            let (_store, mut presenter) = editor.into_parts();
            presenter.render_selection(&selection)?;
        }
        Commands::Categories => {
            for name in Catalog::default().category_names() {
                println!("{}", name);
            }
        }
        Commands::Validate { file } => {
            let path = file.unwrap_or(cli.settings);
            let store = JsonFileStore::open(&path)
                .with_context(|| format!("failed to open settings file {:?}", path))?;

            let problems = validate_record(store.record(), &Catalog::default());
            if problems.is_empty() {
                println!("✓ Settings file is valid: {:?}", path);
            } else {
                for problem in &problems {
                    eprintln!("✗ {}", problem);
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
