//! Message handling for the Kayan admin bot
//!
//! Features:
//! - Sender role resolution from the configured admin id
//! - Role-aware routing of interpreted commands
//! - Persona selection for messages no command handles
//! - Logging setup shared by the command-line front end

pub mod routing;
pub mod telemetry;

pub use routing::{ParseRoleError, Persona, Role, Route, Router};
