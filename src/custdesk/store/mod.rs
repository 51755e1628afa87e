//! # Storage Layer
//!
//! The [`RecordStore`] trait is the document store as the rest of custdesk
//! sees it: one collection of customer records, addressed by store-assigned
//! ids.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a JSON document file, selected with `file://<path>`
//!   - The whole collection lives in one file
//!   - Every call re-reads the file; mutations replace it atomically
//!
//! - [`memory::InMemoryStore`]: selected with `memory://`, and used by tests
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Connection Lifecycle
//!
//! A store is opened once at startup and handed to the API facade, which owns
//! it for the whole session. [`RecordStore::close`] is called exactly once, on
//! quit; any call after that fails with [`CrmError::Connection`].
//!
//! Ordering of [`RecordStore::find_all`] is insertion order for both
//! backends, but callers must not rely on it beyond a single listing.

use crate::error::{CrmError, Result};
use crate::model::{Customer, CustomerId, CustomerPatch, NewCustomer};
use async_trait::async_trait;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

const MEMORY_SCHEME: &str = "memory://";
const FILE_SCHEME: &str = "file://";

/// Abstract interface for the customer collection.
#[async_trait]
pub trait RecordStore {
    /// Persist a new record; the store assigns its id
    async fn create(&mut self, fields: NewCustomer) -> Result<Customer>;

    /// Every record in the collection
    async fn find_all(&self) -> Result<Vec<Customer>>;

    /// A single record, or `None` if no record has this id
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>>;

    /// Overwrite the fields set in `patch`; fails with `NotFound` for unknown ids
    async fn update_by_id(&mut self, id: CustomerId, patch: CustomerPatch) -> Result<()>;

    /// Remove a record; fails with `NotFound` for unknown ids
    async fn delete_by_id(&mut self, id: CustomerId) -> Result<()>;

    /// Release the connection
    async fn close(&mut self) -> Result<()>;
}

/// A parsed database connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUri {
    Memory,
    File(PathBuf),
}

impl StoreUri {
    pub fn parse(uri: &str) -> Result<Self> {
        let uri = uri.trim();
        if uri == MEMORY_SCHEME {
            return Ok(StoreUri::Memory);
        }
        if let Some(path) = uri.strip_prefix(FILE_SCHEME) {
            if path.is_empty() {
                return Err(CrmError::InvalidUri(format!("{uri} (missing path)")));
            }
            return Ok(StoreUri::File(PathBuf::from(path)));
        }
        Err(CrmError::InvalidUri(format!(
            "{uri} (expected {MEMORY_SCHEME} or {FILE_SCHEME}<path>)"
        )))
    }
}
