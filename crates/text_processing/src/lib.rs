//! Free-text command interpretation for the Kayan admin bot
//!
//! This crate turns an Egyptian-Arabic (or mixed Latin) admin message into a
//! structured command:
//! - **Normalization**: whitespace collapsed, Latin lowercased
//! - **Numbers**: ASCII and Arabic-Indic digit runs, spelled-out number words
//! - **Fields**: area, floor, rooms, prices and price bounds, million scaling
//! - **Projects**: alias table resolving names to canonical project ids
//! - **Commands**: price update, add unit, content edit, unit search
//!
//! # Example
//!
//! ```
//! use kayan_core::Command;
//! use kayan_text_processing::process;
//!
//! match process("ابحث عن شقة 2 غرفة في برج حمد") {
//!     Command::SearchUnits(search) => assert_eq!(search.filters.bedrooms, Some(2)),
//!     other => panic!("unexpected command: {:?}", other),
//! }
//! ```

pub mod aliases;
pub mod extractors;
pub mod numerals;
pub mod utterance;
pub mod vocabulary;

mod error;
mod interpreter;
mod parsers;

pub use aliases::{lookup_alias, AliasTable};
pub use error::{Result, TextProcessingError};
pub use extractors::{
    extract_area, extract_bathrooms, extract_bedrooms, extract_comparison_threshold,
    extract_floor, extract_magnitude_adjustment, extract_price, extract_price_per_meter,
    extract_stated_area, PriceBounds,
};
pub use interpreter::{process, Interpreter};
pub use numerals::{extract_numbers, lookup_numerals, word_to_number};
pub use utterance::Utterance;
