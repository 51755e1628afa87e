//! Interactive handlers, one per menu entry.
//!
//! Each handler collects its input, makes its API calls and prints the
//! outcome, then returns to the menu loop. Rejected input never leaves the
//! handler: it is asked for again until it validates.

use super::print::{print_customer, print_customers, print_messages};
use super::terminal::Terminal;
use custdesk::api::{CmdMessage, CustomerApi};
use custdesk::error::Result;
use custdesk::model::{Field, FieldUpdate, NewCustomer};
use custdesk::store::RecordStore;
use custdesk::validate::{parse_age, parse_field, parse_record_index};
use std::io::Write;
use tokio::io::AsyncRead;

const NOTHING_TO_SELECT: &str = "No customers found.";

pub async fn create<S, R, W>(api: &mut CustomerApi<S>, term: &mut Terminal<R, W>) -> Result<()>
where
    S: RecordStore,
    R: AsyncRead + Unpin,
    W: Write,
{
    let name = term.read_line("Customer name: ").await?;
    let age = term.prompt_until("Customer age: ", parse_age).await?;

    let result = api.create_customer(NewCustomer { name, age }).await?;
    for customer in &result.affected_customers {
        print_customer(term.out(), customer)?;
    }
    print_messages(term.out(), &result.messages)?;
    Ok(())
}

pub async fn view<S, R, W>(api: &mut CustomerApi<S>, term: &mut Terminal<R, W>) -> Result<()>
where
    S: RecordStore,
    R: AsyncRead + Unpin,
    W: Write,
{
    let result = api.list_customers().await?;
    print_customers(term.out(), &result.listed_customers, false)?;
    print_messages(term.out(), &result.messages)?;
    Ok(())
}

pub async fn update<S, R, W>(api: &mut CustomerApi<S>, term: &mut Terminal<R, W>) -> Result<()>
where
    S: RecordStore,
    R: AsyncRead + Unpin,
    W: Write,
{
    let listing = api.list_customers().await?.listed_customers;
    if listing.is_empty() {
        print_messages(term.out(), &[CmdMessage::warning(NOTHING_TO_SELECT)])?;
        return Ok(());
    }
    print_customers(term.out(), &listing, true)?;

    let len = listing.len();
    let index = term
        .prompt_until("Index of the customer to update: ", |s| {
            parse_record_index(s, len)
        })
        .await?;
    let field = term
        .prompt_until("Field to update (1 = name, 2 = age): ", parse_field)
        .await?;
    let update = match field {
        Field::Name => FieldUpdate::Name(term.read_line("New name: ").await?),
        Field::Age => FieldUpdate::Age(term.prompt_until("New age: ", parse_age).await?),
    };

    let result = api.update_customer(&listing, index, update).await?;
    for customer in &result.affected_customers {
        print_customer(term.out(), customer)?;
    }
    print_messages(term.out(), &result.messages)?;
    Ok(())
}

pub async fn delete<S, R, W>(api: &mut CustomerApi<S>, term: &mut Terminal<R, W>) -> Result<()>
where
    S: RecordStore,
    R: AsyncRead + Unpin,
    W: Write,
{
    let listing = api.list_customers().await?.listed_customers;
    if listing.is_empty() {
        print_messages(term.out(), &[CmdMessage::warning(NOTHING_TO_SELECT)])?;
        return Ok(());
    }
    print_customers(term.out(), &listing, true)?;

    let len = listing.len();
    let index = term
        .prompt_until("Index of the customer to delete: ", |s| {
            parse_record_index(s, len)
        })
        .await?;

    let result = api.delete_customer(&listing, index).await?;
    print_messages(term.out(), &result.messages)?;
    Ok(())
}
