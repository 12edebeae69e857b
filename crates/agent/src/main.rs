//! `kayan-interpret`: interpret admin bot messages from the command line
//!
//! Prints one JSON line per message with the interpreted command and the
//! route the bot would take for it.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::{json, Value};

use kayan_agent::telemetry::init_tracing;
use kayan_agent::{Role, Router};
use kayan_config::{load_settings, load_settings_file, Settings};

#[derive(Parser, Debug)]
#[command(name = "kayan-interpret")]
#[command(version, about = "Interpret free-text admin bot messages into structured commands", long_about = None)]
struct Cli {
    /// Sender role, ignored when --user-id is given
    #[arg(long, default_value = "customer")]
    role: Role,

    /// Sender user id; the role is derived from the configured admin id
    #[arg(long)]
    user_id: Option<String>,

    /// Configuration environment, selects config/<ENV> (default: $KAYAN_ENV)
    #[arg(long)]
    env: Option<String>,

    /// Load settings from this file instead of the config/ directory
    #[arg(long, conflicts_with = "env")]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Message to interpret; reads one message per line from stdin if omitted
    text: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load(&cli)?;
    init_tracing(&settings.observability);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?settings.environment,
        magnitude_policy = ?settings.interpreter.magnitude_policy,
        "Configuration loaded"
    );

    let router = Router::from_settings(&settings).context("Failed to build interpreter")?;
    let role = match &cli.user_id {
        Some(user_id) => router.role_for(user_id),
        None => cli.role,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.text {
        Some(text) => emit(&mut out, &router, role, text, cli.pretty)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read stdin")?;
                if line.trim().is_empty() {
                    continue;
                }
                emit(&mut out, &router, role, &line, cli.pretty)?;
            }
        }
    }

    Ok(())
}

fn load(cli: &Cli) -> anyhow::Result<Settings> {
    let settings = match &cli.config {
        Some(path) => load_settings_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => {
            let env = cli.env.clone().or_else(|| std::env::var("KAYAN_ENV").ok());
            load_settings(env.as_deref()).context("Failed to load settings")?
        }
    };
    Ok(settings)
}

fn emit(
    out: &mut impl Write,
    router: &Router,
    role: Role,
    text: &str,
    pretty: bool,
) -> anyhow::Result<()> {
    let (command, route) = router.dispatch(role, text);

    let mut record = serde_json::to_value(&command)?;
    if let Value::Object(fields) = &mut record {
        fields.insert("role".to_string(), json!(role));
        fields.insert("route".to_string(), json!(route.name()));
        if let Some(persona) = route.persona() {
            fields.insert("persona".to_string(), json!(persona));
        }
    }

    if pretty {
        serde_json::to_writer_pretty(&mut *out, &record)?;
    } else {
        serde_json::to_writer(&mut *out, &record)?;
    }
    writeln!(out)?;
    Ok(())
}
