//! # Display Indexes
//!
//! Customers are addressed by their store id, but operators pick them by
//! position in the table they were just shown. A [`DisplayCustomer`] pairs a
//! record with that position.
//!
//! Positions are 0-based and follow whatever order the store returned. They
//! are only meaningful against the listing they were built from: commands that
//! act on a position take that listing as a snapshot and resolve the id from
//! it, never from a fresh fetch.

use crate::error::{CrmError, Result};
use crate::model::{Customer, CustomerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCustomer {
    pub index: usize,
    pub customer: Customer,
}

pub fn index_customers(customers: Vec<Customer>) -> Vec<DisplayCustomer> {
    customers
        .into_iter()
        .enumerate()
        .map(|(index, customer)| DisplayCustomer { index, customer })
        .collect()
}

/// The entry shown at display position `index` in `listing`.
pub fn customer_at(listing: &[DisplayCustomer], index: usize) -> Result<&DisplayCustomer> {
    listing
        .iter()
        .find(|dc| dc.index == index)
        .ok_or(CrmError::IndexOutOfRange {
            index,
            len: listing.len(),
        })
}

/// Resolves a display position against `listing` to a store id.
pub fn resolve_index(listing: &[DisplayCustomer], index: usize) -> Result<CustomerId> {
    customer_at(listing, index).map(|dc| dc.customer.id)
}
