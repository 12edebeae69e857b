//! Command interpreter
//!
//! Turns one free-text admin message into exactly one [`Command`]. Families
//! are tried in a fixed priority order (price update, add unit, content
//! edit, search) and the first parser that accepts the message wins. A
//! message no parser accepts becomes [`Command::Unrecognized`].
//!
//! Interpretation is pure: the same text and configuration always produce
//! the same command, and an interpreter can be shared across threads.
//!
//! # Example
//!
//! ```
//! use kayan_core::{Command, CommandKind};
//! use kayan_text_processing::Interpreter;
//!
//! let interpreter = Interpreter::new();
//! let command = interpreter.process("غير سعر الشقة 110م في الدور 10 لـ 2000000");
//!
//! assert_eq!(command.kind(), CommandKind::PriceUpdate);
//! ```

use kayan_config::{InterpreterSettings, MagnitudePolicy};
use kayan_core::{Command, CommandKind};
use once_cell::sync::Lazy;

use crate::aliases::AliasTable;
use crate::error::Result;
use crate::utterance::Utterance;

type Rule = fn(&Interpreter, &Utterance) -> Option<Command>;

/// Command families in priority order
const RULES: &[(CommandKind, Rule)] = &[
    (CommandKind::PriceUpdate, price_update_rule),
    (CommandKind::AddUnit, add_unit_rule),
    (CommandKind::ContentEdit, content_edit_rule),
    (CommandKind::SearchUnits, search_units_rule),
];

fn price_update_rule(i: &Interpreter, text: &Utterance) -> Option<Command> {
    i.parse_price_update(text).map(Command::PriceUpdate)
}

fn add_unit_rule(i: &Interpreter, text: &Utterance) -> Option<Command> {
    i.parse_add_unit(text).map(Command::AddUnit)
}

fn content_edit_rule(i: &Interpreter, text: &Utterance) -> Option<Command> {
    i.parse_content_edit(text).map(Command::ContentEdit)
}

fn search_units_rule(i: &Interpreter, text: &Utterance) -> Option<Command> {
    i.parse_search_units(text).map(Command::SearchUnits)
}

static DEFAULT_INTERPRETER: Lazy<Interpreter> = Lazy::new(Interpreter::new);

/// Deterministic free-text command interpreter
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    aliases: AliasTable,
    magnitude: MagnitudePolicy,
}

impl Interpreter {
    /// Interpreter with the built-in alias table and default magnitude policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_magnitude_policy(mut self, policy: MagnitudePolicy) -> Self {
        self.magnitude = policy;
        self
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Build from the `interpreter` section of the settings
    pub fn from_settings(settings: &InterpreterSettings) -> Result<Self> {
        let aliases = AliasTable::with_entries(&settings.project_aliases)?;
        tracing::info!(
            aliases = aliases.len(),
            magnitude_policy = ?settings.magnitude_policy,
            "Interpreter configured"
        );
        Ok(Self {
            aliases,
            magnitude: settings.magnitude_policy,
        })
    }

    /// Load settings for `env` and build from them
    pub fn load(env: Option<&str>) -> Result<Self> {
        let settings = kayan_config::load_settings(env)?;
        Self::from_settings(&settings.interpreter)
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn magnitude_policy(&self) -> MagnitudePolicy {
        self.magnitude
    }

    /// Interpret one message
    pub fn process(&self, text: &str) -> Command {
        let utterance = Utterance::new(text);
        if utterance.is_empty() {
            tracing::debug!("Empty message");
            return Command::Unrecognized;
        }

        for (kind, rule) in RULES {
            if let Some(command) = rule(self, &utterance) {
                tracing::debug!(command = %kind, "Interpreted message");
                return command;
            }
            tracing::trace!(command = %kind, "Rule declined");
        }

        tracing::trace!("No command matched");
        Command::Unrecognized
    }
}

/// Interpret `text` with the default interpreter
pub fn process(text: &str) -> Command {
    DEFAULT_INTERPRETER.process(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kayan_config::AliasEntry;
    use kayan_core::ProjectId;

    #[test]
    fn test_interpreter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Interpreter>();
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(process(""), Command::Unrecognized);
        assert_eq!(process("   \n\t "), Command::Unrecognized);
    }

    #[test]
    fn test_priority_order() {
        // Price and search triggers both present: price update is tried first
        let command = process("عايز اغير السعر في الدور 3 لـ 900000");
        assert_eq!(command.kind(), CommandKind::PriceUpdate);

        // Price trigger with too few fields falls through to search
        let command = process("عايز شقة 2 غرفة السعر مناسب");
        assert_eq!(command.kind(), CommandKind::SearchUnits);
    }

    #[test]
    fn test_from_settings() {
        let settings = InterpreterSettings {
            magnitude_policy: MagnitudePolicy::SecondToLast,
            project_aliases: vec![AliasEntry::new("نور", "nour-tower")],
        };
        let interpreter = Interpreter::from_settings(&settings).unwrap();

        assert_eq!(interpreter.magnitude_policy(), MagnitudePolicy::SecondToLast);
        assert_eq!(
            interpreter.process("ابحث في برج نور الدور 4").project_id(),
            Some(&ProjectId::new("nour-tower"))
        );
    }

    #[test]
    fn test_with_aliases() {
        let aliases = AliasTable::with_entries(&[AliasEntry::new("zayed", "zayed-park")]).unwrap();
        let interpreter = Interpreter::new().with_aliases(aliases);
        assert_eq!(
            interpreter.process("search Zayed 2 rooms").project_id(),
            Some(&ProjectId::new("zayed-park"))
        );
    }

    #[test]
    fn test_from_settings_rejects_bad_alias() {
        let settings = InterpreterSettings {
            magnitude_policy: MagnitudePolicy::Adjacent,
            project_aliases: vec![AliasEntry::new(" ", "nour-tower")],
        };
        assert!(Interpreter::from_settings(&settings).is_err());
    }
}
