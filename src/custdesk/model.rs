use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Store-assigned identifier of a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: CustomerId,
    pub name: String,
    pub age: i64,
}

impl Customer {
    /// Builds the persisted form of `fields`. Only stores call this.
    pub fn assign_id(fields: NewCustomer) -> Self {
        Self {
            id: CustomerId::new(),
            name: fields.name,
            age: fields.age,
        }
    }

    pub fn apply(&mut self, patch: &CustomerPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

/// Fields supplied when creating a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub age: i64,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Partial fields for an update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// An editable customer field, as chosen from the update menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
        }
    }
}

/// A parsed new value for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Age(i64),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Name(_) => Field::Name,
            FieldUpdate::Age(_) => Field::Age,
        }
    }

    pub fn to_patch(&self) -> CustomerPatch {
        match self {
            FieldUpdate::Name(name) => CustomerPatch {
                name: Some(name.clone()),
                ..Default::default()
            },
            FieldUpdate::Age(age) => CustomerPatch {
                age: Some(*age),
                ..Default::default()
            },
        }
    }

    /// Whether `customer` holds the submitted value.
    pub fn is_applied_to(&self, customer: &Customer) -> bool {
        match self {
            FieldUpdate::Name(name) => customer.name == *name,
            FieldUpdate::Age(age) => customer.age == *age,
        }
    }

    pub fn value_string(&self) -> String {
        match self {
            FieldUpdate::Name(name) => name.clone(),
            FieldUpdate::Age(age) => age.to_string(),
        }
    }
}
