use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CrmError, Result};
use crate::index::{resolve_index, DisplayCustomer};
use crate::model::{Field, FieldUpdate};
use crate::store::RecordStore;
use tracing::{info, warn};

/// Applies `update` to the customer shown at `index` in `listing`.
///
/// The update call's own outcome is not taken as confirmation: the record is
/// re-read and the field compared against the submitted value. A mismatch is
/// reported as [`CrmError::VerificationMismatch`]; nothing is rolled back.
pub async fn run<S: RecordStore>(
    store: &mut S,
    listing: &[DisplayCustomer],
    index: usize,
    update: FieldUpdate,
) -> Result<CmdResult> {
    let id = resolve_index(listing, index)?;
    let field = update.field();

    store.update_by_id(id, update.to_patch()).await?;

    let reread = store.find_by_id(id).await?.ok_or(CrmError::NotFound(id))?;
    if !update.is_applied_to(&reread) {
        let found = match field {
            Field::Name => reread.name.clone(),
            Field::Age => reread.age.to_string(),
        };
        warn!(%id, field = field.label(), "update did not take effect");
        return Err(CrmError::VerificationMismatch {
            field: field.label(),
            expected: update.value_string(),
            found,
        });
    }

    info!(%id, field = field.label(), "customer updated");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer updated ({}): {} is now {}",
        index,
        field.label(),
        update.value_string()
    )));
    Ok(result.with_affected_customers(vec![reread]))
}
