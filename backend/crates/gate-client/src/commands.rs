use crate::cli::Commands;
use crate::{CommandError, CommandResult, SessionContext};

use gate_core::User;

use serde_json::{Value, json};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Run one command against the session and return the JSON to print
pub async fn execute(command: Commands, session: &mut SessionContext) -> CommandResult<Value> {
    match command {
        Commands::Register { email, password } => {
            let user = session.register(&email, &password).await?;
            Ok(serde_json::to_value(user)?)
        }
        Commands::Login { email, password } => {
            let user = session.login(&email, &password).await?;
            Ok(serde_json::to_value(user)?)
        }
        Commands::Logout => {
            session.logout().await;
            Ok(json!({ "loggedOut": true }))
        }
        Commands::Whoami => Ok(serde_json::to_value(session.user())?),
        Commands::Dashboard => {
            let user = session.user().ok_or_else(CommandError::not_logged_in)?;
            Ok(dashboard(user))
        }
    }
}

/// The signed-in view
pub fn dashboard(user: &User) -> Value {
    json!({
        "title": "Dashboard",
        "greeting": format!("Welcome back, {}!", user.email),
        "userId": user.id,
        "email": user.email,
        "memberSince": user.created_at.format(DATE_FORMAT).to_string(),
    })
}

/// Render output JSON, compact or pretty
pub fn render(value: &Value, pretty: bool) -> CommandResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
