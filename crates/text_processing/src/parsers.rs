//! Command parsers, one per command family
//!
//! Each parser gates on its trigger vocabulary, fills what it can through
//! the field extractors and the alias table, then applies the family's
//! sufficiency rule. A parser that returns `None` lets the interpreter move
//! on to the next family.

use kayan_core::{
    AddUnit, BlockId, ContentAction, ContentEdit, PriceUpdate, SearchFilters, SearchUnits,
};

use crate::extractors::{
    extract_area, extract_bathrooms, extract_bedrooms, extract_comparison_threshold,
    extract_floor, extract_magnitude_adjustment, extract_price, extract_price_per_meter,
    extract_stated_area,
};
use crate::interpreter::Interpreter;
use crate::utterance::Utterance;
use crate::vocabulary::{
    ADD_UNIT_TRIGGERS, DELETE_BLOCK_TRIGGERS, HERO_MARKERS, IMAGE_EDIT_TRIGGERS,
    PRICE_UPDATE_TRIGGERS, SEARCH_TRIGGERS, TEXT_EDIT_TRIGGERS, TITLE_MARKERS,
};

/// Content-edit branches in priority order. The first whose triggers match
/// wins; later branches are not consulted.
const CONTENT_BRANCHES: &[(ContentAction, &[&str])] = &[
    (ContentAction::UpdateText, TEXT_EDIT_TRIGGERS),
    (ContentAction::UpdateImage, IMAGE_EDIT_TRIGGERS),
    (ContentAction::DeleteBlock, DELETE_BLOCK_TRIGGERS),
];

impl Interpreter {
    /// "غير سعر الشقة 110م في الدور 10 لـ 2000000"
    pub fn parse_price_update(&self, text: &Utterance) -> Option<PriceUpdate> {
        if !text.contains_any(PRICE_UPDATE_TRIGGERS) {
            return None;
        }

        let mut update = PriceUpdate {
            project_id: self.aliases().lookup(text.as_str()).cloned(),
            area: extract_area(text),
            floor: extract_floor(text),
            new_price: extract_price(text),
        };
        update.new_price =
            extract_magnitude_adjustment(text, self.magnitude_policy(), update.new_price);

        if !update.is_sufficient() {
            tracing::trace!(
                fields = update.populated_fields(),
                "Price update trigger without enough fields"
            );
            return None;
        }
        Some(update)
    }

    /// "اضف وحدة جديدة 2 غرفة 1 حمام دور 5 مساحة 120م سعر المتر 16000"
    pub fn parse_add_unit(&self, text: &Utterance) -> Option<AddUnit> {
        if !text.contains_any(ADD_UNIT_TRIGGERS) {
            return None;
        }

        let unit = AddUnit {
            project_id: self.aliases().lookup(text.as_str()).cloned(),
            bedrooms: extract_bedrooms(text),
            bathrooms: extract_bathrooms(text),
            floor_number: extract_floor(text),
            area_sqm: extract_stated_area(text).or_else(|| extract_area(text)),
            price_per_meter: extract_price_per_meter(text),
        };

        if !unit.is_sufficient() {
            tracing::trace!(
                fields = unit.populated_fields(),
                "Add unit trigger without enough fields"
            );
            return None;
        }
        Some(unit)
    }

    /// "غير النص اللي في الهيرو", "حط صورة جديدة لبرج الحمد", "شيل البلوك اللي فوق"
    pub fn parse_content_edit(&self, text: &Utterance) -> Option<ContentEdit> {
        let action = CONTENT_BRANCHES
            .iter()
            .find(|(_, triggers)| text.contains_any(triggers))
            .map(|(action, _)| *action)?;

        let block_id = match action {
            ContentAction::UpdateText if text.contains_any(HERO_MARKERS) => {
                Some(BlockId::HeroText)
            }
            ContentAction::UpdateText if text.contains_any(TITLE_MARKERS) => Some(BlockId::Title),
            ContentAction::UpdateImage if text.contains_any(HERO_MARKERS) => {
                Some(BlockId::HeroImage)
            }
            _ => None,
        };

        Some(ContentEdit {
            action,
            block_id,
            project_id: self.aliases().lookup(text.as_str()).cloned(),
        })
    }

    /// "ابحث عن شقة 2 غرفة", "عايز وحدة 3 غرف سعرها اقل من 2 مليون"
    pub fn parse_search_units(&self, text: &Utterance) -> Option<SearchUnits> {
        if !text.contains_any(SEARCH_TRIGGERS) {
            return None;
        }

        let bounds = extract_comparison_threshold(text);
        let search = SearchUnits {
            project_id: self.aliases().lookup(text.as_str()).cloned(),
            filters: SearchFilters {
                bedrooms: extract_bedrooms(text),
                bathrooms: extract_bathrooms(text),
                floor_number: extract_floor(text),
                price_min: bounds.min,
                price_max: bounds.max,
            },
        };

        if !search.is_sufficient() {
            tracing::trace!("Search trigger without any filter");
            return None;
        }
        Some(search)
    }
}
