use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewCustomer;
use crate::store::RecordStore;
use tracing::info;

pub async fn run<S: RecordStore>(store: &mut S, fields: NewCustomer) -> Result<CmdResult> {
    let customer = store.create(fields).await?;
    info!(id = %customer.id, "customer created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer created: {}",
        customer.name
    )));
    Ok(result.with_affected_customers(vec![customer]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::CrmError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[tokio::test]
    async fn returns_the_persisted_record() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, NewCustomer::new("Ada", 36)).await.unwrap();

        let created = &result.affected_customers[0];
        assert_eq!(created.name, "Ada");
        assert_eq!(created.age, 36);
        assert_eq!(store.find_by_id(created.id).await.unwrap().as_ref(), Some(created));
    }

    #[tokio::test]
    async fn created_record_shows_up_in_listing() {
        let mut store = StoreFixture::new().with_customers(2).store;
        let created = run(&mut store, NewCustomer::new("Ada", 36))
            .await
            .unwrap()
            .affected_customers
            .remove(0);

        let listed = list::run(&store).await.unwrap().listed_customers;
        assert_eq!(listed.len(), 3);
        assert_eq!(
            listed.iter().filter(|dc| dc.customer == created).count(),
            1
        );
    }

    #[tokio::test]
    async fn accepts_empty_name() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, NewCustomer::new("", 0)).await.unwrap();
        assert_eq!(result.affected_customers[0].name, "");
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let mut store = StoreFixture::new().failing_writes().store;
        let err = run(&mut store, NewCustomer::new("Ada", 36)).await.unwrap_err();
        assert!(matches!(err, CrmError::Store(_)));
    }
}
