//! crm - customer records client
//!
//! Logs in against the customer API, keeps the session token on disk and
//! manages customer records. Every command prints JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Log in (the token is stored for later commands)
//! crm login --username alice --password secret
//!
//! # List customers matching a local filter
//! crm customer list --filter smith --pretty
//!
//! # Server-side search
//! crm customer search --last-name Smith
//! ```

mod cli;
mod commands;
mod customer_commands;
mod error;
mod logger;
mod stdin_confirm;


use crate::{
    cli::Cli,
    commands::Commands,
    customer_commands::CustomerCommands,
    error::{CliError, Result as CliResult},
    stdin_confirm::StdinConfirm,
};

use crm_client::{
    AppState, Confirm, CredentialStore, CustomerCollection, DeleteOutcome, FileStore, Gateway,
    SessionManager, View,
};
use crm_config::Config;
use crm_core::{CustomerDraft, CustomerRecord};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{LevelFilter, info};
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let result = run(cli).await;

    match result.and_then(|value| render(&value, pretty)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    let log_file = match config.logging.file {
        Some(ref filename) => Some(Config::config_dir()?.join(filename)),
        None => None,
    };
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.logging.level.into()
    };
    logger::initialize(level, log_file, config.logging.colored)?;

    info!("crm v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = FileStore::new(config.storage_path()?);
    let credentials = Arc::new(CredentialStore::new(Arc::new(store)));
    let gateway = Arc::new(Gateway::from_config(&config.api, credentials.clone())?);
    let sessions = SessionManager::new(gateway.clone());
    let mut state = AppState::start(sessions.restore_session());

    match cli.command {
        Commands::Login { username, password } => {
            let result = sessions.login(&username, &password).await?;
            state.logged_in(result.session.clone());
            Ok(serde_json::to_value(&result)?)
        }

        Commands::Register {
            username,
            password,
            role,
        } => {
            state.show_register();
            let payload = sessions.register(&username, &password, role).await?;
            state.registered();
            Ok(json!({ "view": state.view(), "response": payload }))
        }

        Commands::Logout => {
            sessions.logout();
            state.logged_out();
            Ok(json!({ "view": state.view() }))
        }

        Commands::Whoami => Ok(json!({
            "view": state.view(),
            "session": state.session(),
            "permissions": credentials.permissions(),
        })),

        Commands::Customer { action } => {
            if state.view() != View::LoggedIn {
                return Err(CliError::NotLoggedIn);
            }
            // Each invocation starts from an empty list; commands refresh before reporting it.
            let mut customers = CustomerCollection::new(gateway);
            run_customer(&mut customers, action).await
        }
    }
}

async fn run_customer(
    customers: &mut CustomerCollection,
    action: CustomerCommands,
) -> CliResult<Value> {
    match action {
        CustomerCommands::List { filter } => {
            customers.refresh().await?;
            customers.set_filter(filter.unwrap_or_default());
            Ok(serde_json::to_value(customers.visible())?)
        }

        CustomerCommands::Get { id } => Ok(serde_json::to_value(customers.get(id).await?)?),

        CustomerCommands::Create {
            first_name,
            last_name,
            address,
            phone_number,
            email,
        } => {
            let draft = CustomerDraft::new(first_name, last_name, address, phone_number, email);
            customers.create(&draft).await?;
            Ok(serde_json::to_value(customers.records())?)
        }

        CustomerCommands::Update { id, fields } => {
            customers.refresh().await?;
            // The collection rejects the update itself when `id` is unknown.
            customers.begin_edit(id);
            let current = customers
                .editing()
                .map(CustomerDraft::from)
                .unwrap_or_default();
            let patch = fields.apply_to(current);
            customers.update(id, &patch).await?;
            Ok(serde_json::to_value(customers.records())?)
        }

        CustomerCommands::Delete { id, yes } => {
            let accept_all = |_: &str| true;
            let confirm: &dyn Confirm = if yes { &accept_all } else { &StdinConfirm };
            let outcome = customers.delete(id, confirm).await?;
            Ok(delete_summary(id, outcome, customers.records()))
        }

        CustomerCommands::Search { fields } => {
            let results = customers.server_search(&fields.to_query()).await?;
            Ok(serde_json::to_value(results)?)
        }
    }
}

/// The list is only reported after a delete, which refreshed it.
fn delete_summary(id: i64, outcome: DeleteOutcome, records: &[CustomerRecord]) -> Value {
    match outcome {
        DeleteOutcome::Deleted => json!({ "id": id, "deleted": true, "customers": records }),
        DeleteOutcome::Declined => json!({ "id": id, "deleted": false }),
    }
}

fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
