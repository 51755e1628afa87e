use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{customer_at, DisplayCustomer};
use crate::store::RecordStore;
use tracing::info;

pub async fn run<S: RecordStore>(
    store: &mut S,
    listing: &[DisplayCustomer],
    index: usize,
) -> Result<CmdResult> {
    let customer = customer_at(listing, index)?.customer.clone();
    let id = customer.id;

    store.delete_by_id(id).await?;
    info!(%id, "customer deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer deleted ({}): {}",
        index, customer.name
    )));
    Ok(result.with_affected_customers(vec![customer]))
}
