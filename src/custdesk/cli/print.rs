use colored::Colorize;
use custdesk::api::{CmdMessage, MessageLevel};
use custdesk::index::DisplayCustomer;
use custdesk::model::Customer;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

pub(super) const MENU: &str = "\
What would you like to do?

  1. Create a customer
  2. View all customers
  3. Update a customer
  4. Delete a customer
  5. Quit
";

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MENU)
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// The three fields of a single record, one per line.
pub(super) fn print_customer<W: Write>(out: &mut W, customer: &Customer) -> io::Result<()> {
    writeln!(out, "{} {}", "id:  ".dimmed(), customer.id)?;
    writeln!(out, "{} {}", "name:".dimmed(), customer.name)?;
    writeln!(out, "{} {}", "age: ".dimmed(), customer.age)
}

/// Renders `customers` as an aligned table, with a leading index column when
/// the operator is about to pick a row.
pub(super) fn print_customers<W: Write>(
    out: &mut W,
    customers: &[DisplayCustomer],
    with_index: bool,
) -> io::Result<()> {
    if customers.is_empty() {
        return writeln!(out, "No customers found.");
    }

    let mut header = vec!["id", "name", "age"];
    if with_index {
        header.insert(0, "index");
    }

    let rows: Vec<Vec<String>> = customers
        .iter()
        .map(|dc| {
            let mut row = vec![
                dc.customer.id.to_string(),
                dc.customer.name.clone(),
                dc.customer.age.to_string(),
            ];
            if with_index {
                row.insert(0, dc.index.to_string());
            }
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(header[col].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line = header
        .iter()
        .zip(&widths)
        .map(|(cell, width)| pad_to_width(cell, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    writeln!(out, "{}", header_line.trim_end().bold())?;

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    writeln!(out, "{}", rule.dimmed())?;

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, width))| {
                let padded = pad_to_width(cell, *width);
                if with_index && col == 0 {
                    padded.yellow().to_string()
                } else {
                    padded
                }
            })
            .collect();
        writeln!(out, "{}", cells.join(COLUMN_GAP).trim_end())?;
    }

    Ok(())
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
