use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use authorly_core::seed;
use authorly_core::store::ThreadStore;
use authorly_core::tracing_setup::init_tracing;
use authorly_tui::runtime::run_app;
use authorly_tui::ui::{self, App};

/// Authorly messages - request inbox for verified authors
#[derive(Parser, Debug)]
#[command(name = "authorly-tui", version)]
struct Args {
    /// Load the thread collection from a JSON seed file instead of the
    /// built-in session seed
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Write debug logs to this file (AUTHORLY_LOG_FILE works too)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    init_tracing(args.log_file.as_deref())?;

    let (threads, messages) = match args.seed {
        Some(ref path) => seed::load_from_path(path)?,
        None => seed::builtin(),
    };
    let mut app = App::new(ThreadStore::new(threads, messages));

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
