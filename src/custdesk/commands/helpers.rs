use crate::error::Result;
use crate::index::{index_customers, DisplayCustomer};
use crate::store::RecordStore;

pub async fn indexed_customers<S: RecordStore>(store: &S) -> Result<Vec<DisplayCustomer>> {
    let customers = store.find_all().await?;
    Ok(index_customers(customers))
}
