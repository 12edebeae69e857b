//! Integration tests for settings-driven routing (settings -> Router -> Route)

use std::path::PathBuf;

use kayan_agent::{Persona, Role, Route, Router};
use kayan_config::{load_settings_file, Settings};
use kayan_core::{Command, ProjectId};

const SETTINGS_YAML: &str = r#"
environment: production
interpreter:
  magnitude_policy: adjacent
  project_aliases:
    - alias: "النور"
      project_id: nour-tower
bot:
  admin_id: "777"
observability:
  log_level: debug
"#;

fn write_settings(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("kayan-{}-{}.yaml", name, std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

fn router_from_yaml() -> Router {
    let settings: Settings = serde_yaml::from_str(SETTINGS_YAML).unwrap();
    settings.validate().unwrap();
    Router::from_settings(&settings).unwrap()
}

/// Admin messages reach the write routes with their extracted fields
#[test]
fn test_admin_price_update_flow() {
    let router = router_from_yaml();
    let role = router.role_for("777");
    assert_eq!(role, Role::Admin);

    let (command, route) = router.dispatch(role, "غير سعر برج النور الدور 3 لـ 1,750,000");
    assert_eq!(command.command_type(), "update_price");
    assert!(route.is_mutating());

    match route {
        Route::UpdatePrice(update) => {
            assert_eq!(update.project_id, Some(ProjectId::new("nour-tower")));
            assert_eq!(update.floor, Some(3));
            assert_eq!(update.new_price, Some(1_750_000));
        }
        other => panic!("expected price update route, got {:?}", other),
    }
}

/// Anyone else is a customer and cannot mutate
#[test]
fn test_customer_flow() {
    let router = router_from_yaml();
    let role = router.role_for("12345");
    assert_eq!(role, Role::Customer);

    let route = router.route(role, "غير سعر برج النور الدور 3 لـ 1750000");
    assert_eq!(route, Route::Assistant(Persona::SalesAgent));

    let route = router.route(role, "محتاج شقة في النور 2 غرفة اقل من 3 مليون");
    match route {
        Route::SearchUnits(search) => {
            assert_eq!(search.project_id, Some(ProjectId::new("nour-tower")));
            assert_eq!(search.filters.bedrooms, Some(2));
            assert_eq!(search.filters.price_max, Some(3_000_000));
        }
        other => panic!("expected search route, got {:?}", other),
    }
}

#[test]
fn test_admin_small_talk_goes_to_assistant() {
    let router = router_from_yaml();
    let (command, route) = router.dispatch(Role::Admin, "صباح الخير");
    assert_eq!(command, Command::Unrecognized);
    assert_eq!(route.persona(), Some(Persona::AdminAssistant));
}

#[test]
fn test_router_from_settings_file() {
    let path = write_settings("routing", SETTINGS_YAML);
    let settings = load_settings_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(settings.bot.admin_id, "777");
    let router = Router::from_settings(&settings).unwrap();
    assert_eq!(router.role_for("777"), Role::Admin);
    assert_eq!(router.interpreter().aliases().len(), 6);
}

#[test]
fn test_production_without_admin_is_rejected() {
    let path = write_settings(
        "no-admin",
        "environment: production\nbot:\n  admin_id: \"\"\n",
    );
    let result = load_settings_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
}
