use super::RecordStore;
use crate::error::{CrmError, Result};
use crate::model::{Customer, CustomerId, CustomerPatch, NewCustomer};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// On-disk shape of the collection.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Collection {
    #[serde(default)]
    customers: Vec<Customer>,
}

/// A customer collection stored as one JSON document file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    closed: bool,
}

impl FileStore {
    /// Open the collection at `path`, creating an empty one if the file is absent.
    ///
    /// An existing file that cannot be read or decoded is a connection error.
    pub async fn connect(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            path: path.into(),
            closed: false,
        };

        if fs::try_exists(&store.path)
            .await
            .map_err(|e| connection_error(&store.path, e))?
        {
            let collection = store.load().await?;
            info!(
                path = %store.path.display(),
                records = collection.customers.len(),
                "opened customer collection"
            );
        } else {
            if let Some(parent) = store.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .await
                        .map_err(|e| connection_error(parent, e))?;
                }
            }
            store.save(&Collection::default()).await?;
            info!(path = %store.path.display(), "created empty customer collection");
        }

        Ok(store)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(CrmError::Connection("connection is closed".to_string()));
        }
        Ok(())
    }

    async fn load(&self) -> Result<Collection> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| connection_error(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(Collection::default());
        }
        serde_json::from_str(&content).map_err(|e| {
            CrmError::Connection(format!(
                "{} is not a customer collection: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn save(&self, collection: &Collection) -> Result<()> {
        let content = serde_json::to_string_pretty(collection)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let tmp_file = dir.join(format!(".customers-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content)
            .await
            .map_err(|e| write_error(&tmp_file, e))?;
        fs::rename(&tmp_file, &self.path)
            .await
            .map_err(|e| write_error(&self.path, e))?;
        Ok(())
    }
}

fn connection_error(path: &Path, err: std::io::Error) -> CrmError {
    CrmError::Connection(format!("{}: {}", path.display(), err))
}

fn write_error(path: &Path, err: std::io::Error) -> CrmError {
    CrmError::Store(format!("failed to write {}: {}", path.display(), err))
}

#[async_trait]
impl RecordStore for FileStore {
    async fn create(&mut self, fields: NewCustomer) -> Result<Customer> {
        self.ensure_open()?;
        let mut collection = self.load().await?;
        let customer = Customer::assign_id(fields);
        collection.customers.push(customer.clone());
        self.save(&collection).await?;
        debug!(id = %customer.id, "inserted customer document");
        Ok(customer)
    }

    async fn find_all(&self) -> Result<Vec<Customer>> {
        self.ensure_open()?;
        Ok(self.load().await?.customers)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        self.ensure_open()?;
        let collection = self.load().await?;
        Ok(collection.customers.into_iter().find(|c| c.id == id))
    }

    async fn update_by_id(&mut self, id: CustomerId, patch: CustomerPatch) -> Result<()> {
        self.ensure_open()?;
        let mut collection = self.load().await?;
        let customer = collection
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CrmError::NotFound(id))?;
        customer.apply(&patch);
        self.save(&collection).await?;
        debug!(%id, "updated customer document");
        Ok(())
    }

    async fn delete_by_id(&mut self, id: CustomerId) -> Result<()> {
        self.ensure_open()?;
        let mut collection = self.load().await?;
        let before = collection.customers.len();
        collection.customers.retain(|c| c.id != id);
        if collection.customers.len() == before {
            return Err(CrmError::NotFound(id));
        }
        self.save(&collection).await?;
        debug!(%id, "deleted customer document");
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.closed = true;
        info!(path = %self.path.display(), "closed customer collection");
        Ok(())
    }
}
