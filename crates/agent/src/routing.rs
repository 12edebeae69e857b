//! Role-aware command routing
//!
//! Decides what the bot does with an interpreted message. Admins may run
//! every command, and anything the interpreter does not recognize goes to
//! the admin assistant persona. Customers may only search; everything else
//! they send goes to the sales persona. The decision is pure: executing a
//! route (writing prices, calling the language model) belongs to the caller.

use std::fmt;
use std::str::FromStr;

use kayan_config::Settings;
use kayan_core::{AddUnit, Command, ContentEdit, PriceUpdate, SearchUnits};
use kayan_text_processing::Interpreter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role '{0}', expected 'admin' or 'customer'")]
pub struct ParseRoleError(String);

/// Who sent the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "customer" => Ok(Role::Customer),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Language-model persona answering messages no command handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    AdminAssistant,
    SalesAgent,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::AdminAssistant => "admin_assistant",
            Persona::SalesAgent => "sales_agent",
        }
    }
}

/// What to do with one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "data", rename_all = "snake_case")]
pub enum Route {
    UpdatePrice(PriceUpdate),
    AddUnit(AddUnit),
    UpdateContent(ContentEdit),
    SearchUnits(SearchUnits),
    Assistant(Persona),
}

impl Route {
    /// Route for `command` sent by `role`
    pub fn for_command(role: Role, command: Command) -> Self {
        match (role, command) {
            (Role::Admin, Command::PriceUpdate(update)) => Route::UpdatePrice(update),
            (Role::Admin, Command::AddUnit(unit)) => Route::AddUnit(unit),
            (Role::Admin, Command::ContentEdit(edit)) => Route::UpdateContent(edit),
            (_, Command::SearchUnits(search)) => Route::SearchUnits(search),
            (Role::Admin, Command::Unrecognized) => Route::Assistant(Persona::AdminAssistant),
            (Role::Customer, _) => Route::Assistant(Persona::SalesAgent),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::UpdatePrice(_) => "update_price",
            Route::AddUnit(_) => "add_unit",
            Route::UpdateContent(_) => "update_content",
            Route::SearchUnits(_) => "search_units",
            Route::Assistant(_) => "assistant",
        }
    }

    /// Routes that write to the project data
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Route::UpdatePrice(_) | Route::AddUnit(_) | Route::UpdateContent(_)
        )
    }

    pub fn persona(&self) -> Option<Persona> {
        match self {
            Route::Assistant(persona) => Some(*persona),
            _ => None,
        }
    }
}

/// Interprets messages and routes them by sender role
#[derive(Debug, Clone)]
pub struct Router {
    interpreter: Interpreter,
    admin_id: String,
}

impl Router {
    pub fn new(interpreter: Interpreter, admin_id: impl Into<String>) -> Self {
        Self {
            interpreter,
            admin_id: admin_id.into().trim().to_string(),
        }
    }

    /// Build the interpreter and admin identity from settings
    pub fn from_settings(settings: &Settings) -> kayan_text_processing::Result<Self> {
        let interpreter = Interpreter::from_settings(&settings.interpreter)?;
        Ok(Self::new(interpreter, settings.bot.admin_id.as_str()))
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// `Admin` only for the configured admin id. With no admin configured,
    /// everyone is a customer.
    pub fn role_for(&self, user_id: &str) -> Role {
        if !self.admin_id.is_empty() && user_id.trim() == self.admin_id {
            Role::Admin
        } else {
            Role::Customer
        }
    }

    /// Interpret `text` and route it
    pub fn route(&self, role: Role, text: &str) -> Route {
        self.dispatch(role, text).1
    }

    /// Interpret `text` and route it, keeping the interpreted command
    pub fn dispatch(&self, role: Role, text: &str) -> (Command, Route) {
        let command = self.interpreter.process(text);
        let route = Route::for_command(role, command.clone());
        tracing::debug!(
            %role,
            command = %command.kind(),
            route = route.name(),
            "Routed message"
        );
        (command, route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kayan_core::{ContentAction, SearchFilters};

    fn router() -> Router {
        Router::new(Interpreter::new(), "1001")
    }

    #[test]
    fn test_role_for() {
        let router = router();
        assert_eq!(router.role_for("1001"), Role::Admin);
        assert_eq!(router.role_for(" 1001 "), Role::Admin);
        assert_eq!(router.role_for("2002"), Role::Customer);
        assert_eq!(router.role_for(""), Role::Customer);
    }

    #[test]
    fn test_no_admin_configured() {
        let router = Router::new(Interpreter::new(), "  ");
        assert_eq!(router.role_for(""), Role::Customer);
        assert_eq!(router.role_for("  "), Role::Customer);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("Customer".parse::<Role>(), Ok(Role::Customer));
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_admin_routes() {
        let router = router();

        let route = router.route(Role::Admin, "غير سعر الدور 10 لـ 2000000");
        assert_eq!(route.name(), "update_price");
        assert!(route.is_mutating());

        let route = router.route(Role::Admin, "اضف وحدة 2 غرفة 1 حمام");
        assert_eq!(route.name(), "add_unit");
        assert!(route.is_mutating());

        let route = router.route(Role::Admin, "شيل البلوك ده");
        assert!(matches!(
            route,
            Route::UpdateContent(ContentEdit { action: ContentAction::DeleteBlock, .. })
        ));

        let route = router.route(Role::Admin, "ابحث عن 3 غرف");
        assert!(!route.is_mutating());

        let route = router.route(Role::Admin, "ازيك");
        assert_eq!(route, Route::Assistant(Persona::AdminAssistant));
    }

    #[test]
    fn test_customer_never_mutates() {
        let router = router();
        for text in [
            "غير سعر الدور 10 لـ 2000000",
            "اضف وحدة 2 غرفة 1 حمام",
            "امسح النص",
            "ازيك",
        ] {
            let route = router.route(Role::Customer, text);
            assert_eq!(route, Route::Assistant(Persona::SalesAgent), "{}", text);
        }
    }

    #[test]
    fn test_customer_search() {
        let route = router().route(Role::Customer, "عايز شقة 3 غرف");
        assert_eq!(
            route,
            Route::SearchUnits(SearchUnits {
                project_id: None,
                filters: SearchFilters {
                    bedrooms: Some(3),
                    ..Default::default()
                },
            })
        );
    }

    #[test]
    fn test_route_wire_format() {
        let route = Route::Assistant(Persona::SalesAgent);
        assert_eq!(
            serde_json::to_value(&route).unwrap(),
            serde_json::json!({ "route": "assistant", "data": "sales_agent" })
        );
    }
}
