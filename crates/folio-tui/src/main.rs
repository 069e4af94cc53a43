mod input;
mod render;
mod runtime;
mod tracing_setup;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use folio_core::config::Config;
use folio_core::{Session, TokenStorage};

use crate::runtime::run_app;
use crate::ui::App;

#[derive(Parser, Debug)]
#[command(
    name = "folio-tui",
    about = "Terminal admin console for the portfolio backend"
)]
struct Args {
    /// Backend base URL (defaults to http://localhost:5000/api, or FOLIO_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Directory for local state such as the saved login token
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_setup::init();

    // Restore the terminal before a panic message prints
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        original_hook(panic_info);
    }));

    let config = Config::resolve(args.api_url, args.data_dir);
    let storage = TokenStorage::new(&config.data_dir);
    let session = Session::load(storage);

    let (events_tx, events_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(config, session, events_tx);
    app.begin_startup_probe();

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app, events_rx).await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }
    Ok(())
}
