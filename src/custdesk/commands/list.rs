use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

use super::helpers::indexed_customers;

pub async fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let listed = indexed_customers(store).await?;
    Ok(CmdResult::default().with_listed_customers(listed))
}
