//! End-to-end interpretation of admin messages
//!
//! Each test feeds a whole message through `process` and checks the single
//! command that comes out.

use serde_json::json;

use kayan_config::MagnitudePolicy;
use kayan_core::{
    AddUnit, BlockId, Command, CommandKind, ContentAction, PriceUpdate, ProjectId, SearchFilters,
    SearchUnits,
};
use kayan_text_processing::{process, Interpreter};

#[test]
fn test_price_update_floor_and_price() {
    assert_eq!(
        process("غير سعر الدور 10 لـ 2000000"),
        Command::PriceUpdate(PriceUpdate {
            floor: Some(10),
            new_price: Some(2_000_000),
            ..Default::default()
        })
    );
}

#[test]
fn test_add_unit_rooms() {
    assert_eq!(
        process("اضف وحدة 2 غرفة 1 حمام"),
        Command::AddUnit(AddUnit {
            bedrooms: Some(2),
            bathrooms: Some(1),
            ..Default::default()
        })
    );
}

#[test]
fn test_search_bedrooms_only() {
    assert_eq!(
        process("ابحث عن 3 غرف"),
        Command::SearchUnits(SearchUnits {
            project_id: None,
            filters: SearchFilters {
                bedrooms: Some(3),
                ..Default::default()
            },
        })
    );
}

#[test]
fn test_no_vocabulary_is_unrecognized() {
    assert_eq!(process("صباح الخير يا جماعة"), Command::Unrecognized);
    assert_eq!(process("hello there"), Command::Unrecognized);
}

#[test]
fn test_text_edit_wins_over_delete() {
    match process("امسح النص اللي فوق") {
        Command::ContentEdit(edit) => {
            assert_eq!(edit.action, ContentAction::UpdateText);
            assert_eq!(edit.block_id, None);
        }
        other => panic!("expected content edit, got {:?}", other),
    }
}

#[test]
fn test_price_update_wins_over_search() {
    // Both families have enough fields; price update is tried first
    let command = process("search price 2 million floor 4");
    assert_eq!(
        command,
        Command::PriceUpdate(PriceUpdate {
            floor: Some(4),
            new_price: Some(2_000_000),
            ..Default::default()
        })
    );
}

#[test]
fn test_single_field_price_update_is_unrecognized() {
    assert_eq!(process("غير سعر الدور 10"), Command::Unrecognized);
}

#[test]
fn test_aliases_resolve_to_same_project() {
    let expected = ProjectId::new("hamad-tower");
    for text in [
        "ابحث في برج حمد 2 غرفة",
        "ابحث في برج الحمد 2 غرفة",
        "search Hamad tower 2 rooms",
    ] {
        let command = process(text);
        assert_eq!(command.kind(), CommandKind::SearchUnits, "{}", text);
        assert_eq!(command.project_id(), Some(&expected), "{}", text);
    }
}

#[test]
fn test_million_price() {
    match process("price 2 million floor 3") {
        Command::PriceUpdate(update) => assert_eq!(update.new_price, Some(2_000_000)),
        other => panic!("expected price update, got {:?}", other),
    }

    match process("غير سعر برج ليليان اتنين مليون") {
        Command::PriceUpdate(update) => {
            assert_eq!(update.project_id, Some(ProjectId::new("lilian-tower")));
            assert_eq!(update.new_price, Some(2_000_000));
        }
        other => panic!("expected price update, got {:?}", other),
    }
}

#[test]
fn test_legacy_magnitude_policy() {
    let text = "عدل سعر الوحدة 110 متر دور 10 السعر 2 مليون";

    let adjacent = Interpreter::new().process(text);
    let legacy = Interpreter::new()
        .with_magnitude_policy(MagnitudePolicy::SecondToLast)
        .process(text);

    let price = |command: &Command| match command {
        Command::PriceUpdate(update) => update.new_price,
        _ => None,
    };
    assert_eq!(price(&adjacent), Some(2_000_000));
    assert_eq!(price(&legacy), Some(10_000_000));
}

#[test]
fn test_overflowing_price_is_absent() {
    assert_eq!(
        process("السعر 99999999999999999999 الدور 5 برج حمد"),
        Command::PriceUpdate(PriceUpdate {
            project_id: Some(ProjectId::new("hamad-tower")),
            floor: Some(5),
            ..Default::default()
        })
    );
}

#[test]
fn test_arabic_indic_digits() {
    assert_eq!(
        process("غير سعر الدور ١٠ لـ ٢٠٠٠٠٠٠"),
        Command::PriceUpdate(PriceUpdate {
            floor: Some(10),
            new_price: Some(2_000_000),
            ..Default::default()
        })
    );
}

#[test]
fn test_hero_image() {
    match process("غير الصورة اللي في الهيرو بتاع ليليان") {
        Command::ContentEdit(edit) => {
            assert_eq!(edit.action, ContentAction::UpdateImage);
            assert_eq!(edit.block_id, Some(BlockId::HeroImage));
            assert_eq!(edit.project_id, Some(ProjectId::new("lilian-tower")));
        }
        other => panic!("expected content edit, got {:?}", other),
    }
}

#[test]
fn test_wire_format() {
    let command = process("غير سعر الدور 10 لـ 2000000");
    assert_eq!(
        serde_json::to_value(&command).unwrap(),
        json!({
            "command": "update_price",
            "data": { "floor": 10, "new_price": 2000000 }
        })
    );

    let command = process("شيل البلوك ده");
    assert_eq!(
        serde_json::to_value(&command).unwrap(),
        json!({
            "command": "update_content",
            "data": { "action": "delete_block" }
        })
    );
}
