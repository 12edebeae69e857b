//! Structured commands produced by the free-text interpreter
//!
//! Every payload field is optional. Whether a payload carries enough
//! evidence to count as a command is decided by `is_sufficient()`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of populated fields for price-update and add-unit payloads.
/// The project identifier counts as a field.
pub const MIN_POPULATED_FIELDS: usize = 2;

/// Canonical project identifier (e.g. `hamad-tower`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Change the price of an existing unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Unit area in square meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<u32>,
    /// New price in base currency units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_price: Option<u64>,
}

impl PriceUpdate {
    /// Count of populated fields, project identifier included
    pub fn populated_fields(&self) -> usize {
        [
            self.project_id.is_some(),
            self.area.is_some(),
            self.floor.is_some(),
            self.new_price.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    pub fn is_sufficient(&self) -> bool {
        self.populated_fields() >= MIN_POPULATED_FIELDS
    }
}

/// Insert a new unit into a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_sqm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_meter: Option<u64>,
}

impl AddUnit {
    /// Count of populated fields, project identifier included
    pub fn populated_fields(&self) -> usize {
        [
            self.project_id.is_some(),
            self.bedrooms.is_some(),
            self.bathrooms.is_some(),
            self.floor_number.is_some(),
            self.area_sqm.is_some(),
            self.price_per_meter.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    pub fn is_sufficient(&self) -> bool {
        self.populated_fields() >= MIN_POPULATED_FIELDS
    }
}

/// What a content edit does to the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentAction {
    UpdateText,
    UpdateImage,
    DeleteBlock,
}

impl ContentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentAction::UpdateText => "update_text",
            ContentAction::UpdateImage => "update_image",
            ContentAction::DeleteBlock => "delete_block",
        }
    }
}

/// Page block targeted by a content edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockId {
    HeroText,
    HeroImage,
    Title,
}

impl BlockId {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockId::HeroText => "hero_text",
            BlockId::HeroImage => "hero_image",
            BlockId::Title => "title",
        }
    }
}

/// Edit site content. The action tag is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEdit {
    pub action: ContentAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<BlockId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
}

impl ContentEdit {
    pub fn new(action: ContentAction) -> Self {
        Self {
            action,
            block_id: None,
            project_id: None,
        }
    }
}

/// Filters for a unit search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u64>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.floor_number.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
    }
}

/// Search available units
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchUnits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(default)]
    pub filters: SearchFilters,
}

impl SearchUnits {
    /// A search needs at least one filter
    pub fn is_sufficient(&self) -> bool {
        !self.filters.is_empty()
    }
}

/// Outcome of interpreting one message
///
/// Serialized as `{"command": "<type>", "data": {...}}`; `Unrecognized`
/// carries no `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data")]
pub enum Command {
    #[serde(rename = "update_price")]
    PriceUpdate(PriceUpdate),
    #[serde(rename = "add_unit")]
    AddUnit(AddUnit),
    #[serde(rename = "update_content")]
    ContentEdit(ContentEdit),
    #[serde(rename = "search_units")]
    SearchUnits(SearchUnits),
    #[serde(rename = "unknown")]
    Unrecognized,
}

/// Payload-free tag of a `Command`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    #[serde(rename = "update_price")]
    PriceUpdate,
    AddUnit,
    #[serde(rename = "update_content")]
    ContentEdit,
    SearchUnits,
    #[serde(rename = "unknown")]
    Unrecognized,
}

impl CommandKind {
    /// Wire name used by the dispatch layer
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::PriceUpdate => "update_price",
            CommandKind::AddUnit => "add_unit",
            CommandKind::ContentEdit => "update_content",
            CommandKind::SearchUnits => "search_units",
            CommandKind::Unrecognized => "unknown",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::PriceUpdate(_) => CommandKind::PriceUpdate,
            Command::AddUnit(_) => CommandKind::AddUnit,
            Command::ContentEdit(_) => CommandKind::ContentEdit,
            Command::SearchUnits(_) => CommandKind::SearchUnits,
            Command::Unrecognized => CommandKind::Unrecognized,
        }
    }

    /// Wire name of this command (`update_price`, `unknown`, ...)
    pub fn command_type(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Command::Unrecognized)
    }

    /// Project the command refers to, if any
    pub fn project_id(&self) -> Option<&ProjectId> {
        match self {
            Command::PriceUpdate(p) => p.project_id.as_ref(),
            Command::AddUnit(p) => p.project_id.as_ref(),
            Command::ContentEdit(p) => p.project_id.as_ref(),
            Command::SearchUnits(p) => p.project_id.as_ref(),
            Command::Unrecognized => None,
        }
    }
}
