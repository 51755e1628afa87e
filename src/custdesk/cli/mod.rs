//! Terminal front end: the menu loop, its handlers, and how results are printed.

pub mod handlers;
pub mod menu;
pub mod print;
pub mod terminal;

use custdesk::api::{CmdMessage, CustomerApi};
use custdesk::error::Result;
use custdesk::store::RecordStore;
use std::io::Write;
use terminal::Terminal;
use tokio::io::AsyncRead;

/// Runs one operator session against an already connected store.
pub async fn run_session<S, R, W>(store: S, term: &mut Terminal<R, W>) -> Result<()>
where
    S: RecordStore,
    R: AsyncRead + Unpin,
    W: Write,
{
    let mut api = CustomerApi::new(store);
    print::print_messages(term.out(), &[CmdMessage::info("Connected to database...")])?;
    menu::run(&mut api, term).await?;
    print::print_messages(term.out(), &[CmdMessage::info("Disconnected from database...")])?;
    Ok(())
}
