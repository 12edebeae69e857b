//! Trigger vocabulary
//!
//! Marker phrases that gate each command family. Matching is plain
//! substring containment on the normalized (lowercased) utterance, so Latin
//! entries must be lowercase.

/// Price update: "change price", "edit price", "update price", "the price"
pub const PRICE_UPDATE_TRIGGERS: &[&str] = &["غير سعر", "عدل سعر", "حدث سعر", "السعر", "price"];

/// Add unit: "add a unit", "new unit"
pub const ADD_UNIT_TRIGGERS: &[&str] = &["اضف وحدة", "وحدة جديدة", "add unit", "new unit"];

/// Content edit, text branch: "change the text", "edit the text", "the text"
pub const TEXT_EDIT_TRIGGERS: &[&str] = &["غير النص", "عدل النص", "النص"];

/// Content edit, image branch: "put a picture", "change the picture", "new picture"
pub const IMAGE_EDIT_TRIGGERS: &[&str] = &["حط صورة", "غير الصورة", "صورة جديدة"];

/// Content edit, delete branch: "remove", "wipe", "delete"
pub const DELETE_BLOCK_TRIGGERS: &[&str] = &["شيل", "امسح", "احذف"];

/// Hero section of the landing page
pub const HERO_MARKERS: &[&str] = &["هيرو", "hero"];

/// Page title block
pub const TITLE_MARKERS: &[&str] = &["عنوان", "title"];

/// Unit search: "search", "I want", "I need"
pub const SEARCH_TRIGGERS: &[&str] = &["ابحث", "عايز", "محتاج", "search", "find"];

/// Magnitude word scaling an amount by one million
pub const MILLION_MARKERS: &[&str] = &["مليون", "million"];
