//! # Input Validation
//!
//! Pure classification of raw terminal input. Nothing here prompts, prints or
//! touches the store: a rejected input is simply `false` (or `None` from the
//! typed parsers) and the caller asks again.
//!
//! Every context starts from the same integer rule: surrounding whitespace is
//! ignored, and the rest must be an optionally signed run of decimal digits
//! that fits in an `i64`. Contexts then add their own bounds.

use crate::model::Field;

/// What an input line is being validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// A main menu entry, 1 through 5.
    MenuSelection,
    /// A position in a listing of `len` records, 0-based.
    RecordIndex { len: usize },
    /// 1 for name, 2 for age.
    FieldChoice,
    /// Any integer.
    AgeValue,
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Create,
    View,
    Update,
    Delete,
    Quit,
}

pub fn validate(input: &str, context: InputContext) -> bool {
    match context {
        InputContext::MenuSelection => parse_menu_action(input).is_some(),
        InputContext::RecordIndex { len } => parse_record_index(input, len).is_some(),
        InputContext::FieldChoice => parse_field(input).is_some(),
        InputContext::AgeValue => parse_age(input).is_some(),
    }
}

pub fn parse_integer(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

pub fn parse_menu_action(input: &str) -> Option<MenuAction> {
    match parse_integer(input)? {
        1 => Some(MenuAction::Create),
        2 => Some(MenuAction::View),
        3 => Some(MenuAction::Update),
        4 => Some(MenuAction::Delete),
        5 => Some(MenuAction::Quit),
        _ => None,
    }
}

pub fn parse_record_index(input: &str, len: usize) -> Option<usize> {
    let index = usize::try_from(parse_integer(input)?).ok()?;
    (index < len).then_some(index)
}

pub fn parse_field(input: &str) -> Option<Field> {
    match parse_integer(input)? {
        1 => Some(Field::Name),
        2 => Some(Field::Age),
        _ => None,
    }
}

pub fn parse_age(input: &str) -> Option<i64> {
    parse_integer(input)
}
