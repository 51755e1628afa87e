use super::RecordStore;
use crate::error::{CrmError, Result};
use crate::model::{Customer, CustomerId, CustomerPatch, NewCustomer};
use async_trait::async_trait;
use tracing::debug;

/// In-memory storage for testing and `memory://` sessions.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    customers: Vec<Customer>,
    closed: bool,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every mutating call fail, for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(CrmError::Connection("connection is closed".to_string()));
        }
        Ok(())
    }

    fn ensure_writable(&self) -> Result<()> {
        self.ensure_open()?;
        if self.simulate_write_error {
            return Err(CrmError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }

    fn position(&self, id: CustomerId) -> Result<usize> {
        self.customers
            .iter()
            .position(|c| c.id == id)
            .ok_or(CrmError::NotFound(id))
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn create(&mut self, fields: NewCustomer) -> Result<Customer> {
        self.ensure_writable()?;
        let customer = Customer::assign_id(fields);
        self.customers.push(customer.clone());
        Ok(customer)
    }

    async fn find_all(&self) -> Result<Vec<Customer>> {
        self.ensure_open()?;
        Ok(self.customers.clone())
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        self.ensure_open()?;
        Ok(self.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn update_by_id(&mut self, id: CustomerId, patch: CustomerPatch) -> Result<()> {
        self.ensure_writable()?;
        let pos = self.position(id)?;
        self.customers[pos].apply(&patch);
        Ok(())
    }

    async fn delete_by_id(&mut self, id: CustomerId) -> Result<()> {
        self.ensure_writable()?;
        let pos = self.position(id)?;
        self.customers.remove(pos);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.ensure_open()?;
        debug!(records = self.customers.len(), "closing in-memory store");
        self.closed = true;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` customers named "Customer 1".."Customer N", aged 20 + i.
        pub fn with_customers(mut self, count: usize) -> Self {
            for i in 0..count {
                let customer = Customer::assign_id(NewCustomer::new(
                    format!("Customer {}", i + 1),
                    20 + i as i64,
                ));
                self.store.customers.push(customer);
            }
            self
        }

        pub fn with_customer(mut self, name: &str, age: i64) -> Self {
            self.store
                .customers
                .push(Customer::assign_id(NewCustomer::new(name, age)));
            self
        }

        pub fn failing_writes(mut self) -> Self {
            self.store.set_simulate_write_error(true);
            self
        }
    }
}
