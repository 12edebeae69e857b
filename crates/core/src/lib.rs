//! Core types for the Kayan admin bot
//!
//! This crate holds the structured commands produced by the free-text
//! interpreter and consumed by the dispatch layer:
//! - `Command` and its per-family payloads
//! - Project identifiers
//! - Content-edit action and block tags

pub mod command;

pub use command::{
    AddUnit, BlockId, Command, CommandKind, ContentAction, ContentEdit, PriceUpdate, ProjectId,
    SearchFilters, SearchUnits, MIN_POPULATED_FIELDS,
};
