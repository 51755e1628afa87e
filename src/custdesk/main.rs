use clap::Parser;
use custdesk::config::CrmConfig;
use custdesk::error::Result;
use custdesk::store::fs::FileStore;
use custdesk::store::memory::InMemoryStore;
use custdesk::store::StoreUri;
use tracing::{info, Level};

mod args;
mod cli;

use args::Cli;
use cli::terminal::Terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = Cli::parse();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = CrmConfig::load()?;
    init_logging(Level::from(&config.logger.level));

    let uri = StoreUri::parse(&config.database.uri)?;
    info!(?uri, "connecting to record store");

    let mut terminal = Terminal::stdio();
    match uri {
        StoreUri::Memory => cli::run_session(InMemoryStore::new(), &mut terminal).await,
        StoreUri::File(path) => {
            let store = FileStore::connect(path).await?;
            cli::run_session(store, &mut terminal).await
        }
    }
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
