//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every customer operation, whatever UI drives it.
//!
//! The facade owns the store handle for the whole session. There is no
//! global connection: the CLI opens a store at startup, moves it into a
//! [`CustomerApi`], and every handler reaches the store through it. Closing
//! marks the store closed; later calls fail instead of reconnecting.
//!
//! ## Generic Over RecordStore
//!
//! - Production: `CustomerApi<FileStore>` or `CustomerApi<InMemoryStore>`,
//!   picked by the connection string
//! - Testing: `CustomerApi<InMemoryStore>`, optionally failing writes
//!
//! The API does no I/O of its own and no business logic; it returns
//! structured [`CmdResult`]s for the UI to render.

use crate::commands;
use crate::error::Result;
use crate::index::DisplayCustomer;
use crate::model::{FieldUpdate, NewCustomer};
use crate::store::RecordStore;

pub struct CustomerApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> CustomerApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create_customer(&mut self, fields: NewCustomer) -> Result<CmdResult> {
        commands::create::run(&mut self.store, fields).await
    }

    pub async fn list_customers(&self) -> Result<CmdResult> {
        commands::list::run(&self.store).await
    }

    /// `listing` must be the snapshot the operator chose `index` from.
    pub async fn update_customer(
        &mut self,
        listing: &[DisplayCustomer],
        index: usize,
        update: FieldUpdate,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, listing, index, update).await
    }

    /// `listing` must be the snapshot the operator chose `index` from.
    pub async fn delete_customer(
        &mut self,
        listing: &[DisplayCustomer],
        index: usize,
    ) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, listing, index).await
    }

    pub async fn close(&mut self) -> Result<()> {
        self.store.close().await
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
