use super::handlers;
use super::print::{print_menu, print_messages};
use super::terminal::Terminal;
use custdesk::api::{CmdMessage, CustomerApi};
use custdesk::error::{CrmError, Result};
use custdesk::store::RecordStore;
use custdesk::validate::{parse_menu_action, MenuAction};
use std::io::Write;
use tokio::io::AsyncRead;
use tracing::debug;

/// Shows the menu and dispatches selections until the operator quits or
/// input runs out, then closes the store.
///
/// Failed operations are reported and the menu is shown again. Only terminal
/// I/O failures end the loop early; the store is closed either way.
pub async fn run<S, R, W>(api: &mut CustomerApi<S>, term: &mut Terminal<R, W>) -> Result<()>
where
    S: RecordStore,
    R: AsyncRead + Unpin,
    W: Write,
{
    let outcome = dispatch_until_quit(api, term).await;
    let closed = api.close().await;
    outcome.and(closed)
}

async fn dispatch_until_quit<S, R, W>(
    api: &mut CustomerApi<S>,
    term: &mut Terminal<R, W>,
) -> Result<()>
where
    S: RecordStore,
    R: AsyncRead + Unpin,
    W: Write,
{
    term.clear_screen()?;
    loop {
        print_menu(term.out())?;
        let action = match term.prompt_until("Select an option: ", parse_menu_action).await {
            Ok(action) => action,
            Err(CrmError::InputClosed) => MenuAction::Quit,
            Err(e) => return Err(e),
        };
        debug!(?action, "menu selection");

        let outcome = match action {
            MenuAction::Create => handlers::create(api, term).await,
            MenuAction::View => handlers::view(api, term).await,
            MenuAction::Update => handlers::update(api, term).await,
            MenuAction::Delete => handlers::delete(api, term).await,
            MenuAction::Quit => return Ok(()),
        };

        match outcome {
            Ok(()) => {}
            Err(CrmError::InputClosed) => return Ok(()),
            Err(CrmError::Io(e)) => return Err(CrmError::Io(e)),
            Err(e) => {
                debug!(?action, error = %e, "operation failed");
                print_messages(term.out(), &[failure_message(action, &e)])?;
            }
        }
    }
}

fn failure_message(action: MenuAction, err: &CrmError) -> CmdMessage {
    match err {
        CrmError::VerificationMismatch { .. } => {
            CmdMessage::error(format!("Update failed: {}", err))
        }
        _ => CmdMessage::error(format!(
            "An error occurred while {} ({}): {}",
            describe(action),
            err.kind(),
            err
        )),
    }
}

fn describe(action: MenuAction) -> &'static str {
    match action {
        MenuAction::Create => "creating the customer",
        MenuAction::View => "listing customers",
        MenuAction::Update => "updating the customer",
        MenuAction::Delete => "deleting the customer",
        MenuAction::Quit => "quitting",
    }
}
