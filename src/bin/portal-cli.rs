use std::path::PathBuf;

use clap::{Parser, Subcommand};
use portal_gate::auth::Credentials;
use portal_gate::client::{self, ClientError, PortalClient};
use portal_gate::guard::{GateDecision, GatePolicy};
use portal_gate::locale::{LocaleError, LocaleRegistry, Resolution, resolve};
use portal_gate::routes::pages::Page;
use portal_gate::session::{FileStorage, SessionStore};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("invalid locale configuration: {0}")]
    Locale(#[from] LocaleError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("server is not healthy")]
    Unhealthy,
}

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "Portal session client")]
struct Cli {
    #[arg(long, env = "PORTAL_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// File that persists the session between runs.
    #[arg(long, env = "PORTAL_STATE_FILE", default_value = ".portal-session.json")]
    state_file: PathBuf,

    #[arg(long, env = "PORTAL_LOCALES", default_value = "ru,en,ro,uk")]
    locales: String,

    #[arg(long, env = "PORTAL_DEFAULT_LOCALE", default_value = "ru")]
    default_locale: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Login {
        #[arg(long, env = "PORTAL_USERNAME")]
        username: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Status,
    /// Fetch a page, applying locale routing and the admin gate locally first.
    Open {
        path: String,
    },
    /// Show or set the stored theme preference.
    Theme {
        value: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let registry = LocaleRegistry::parse(&cli.locales, &cli.default_locale)?;
    let api = PortalClient::new(&cli.base_url)?;
    let mut store = SessionStore::open(FileStorage::new(&cli.state_file));

    match cli.command {
        Command::Ping => {
            if !api.ping().await? {
                return Err(CliError::Unhealthy);
            }
            println!("ok");
        }
        Command::Login { username, password } => {
            client::sign_in(&mut store, &api, &Credentials::new(username, password)).await?;
            print_json(&json!({ "is_authenticated": store.is_authenticated() }))?;
        }
        Command::Logout => {
            if let Err(e) = api.logout().await {
                tracing::warn!(error = %e, "server logout failed, clearing local session anyway");
            }
            client::sign_out(&mut store)?;
            print_json(&json!({ "is_authenticated": store.is_authenticated() }))?;
        }
        Command::Status => {
            let state = store.reload();
            print_json(&json!({
                "is_authenticated": state.is_authenticated,
                "state_file": cli.state_file.display().to_string(),
            }))?;
        }
        Command::Open { path } => run_open(&api, &registry, &mut store, path).await?,
        Command::Theme { value: Some(value) } => {
            store.set_theme(&value).map_err(ClientError::from)?;
            print_json(&json!({ "theme": value }))?;
        }
        Command::Theme { value: None } => print_json(&json!({ "theme": store.theme() }))?,
    }
    Ok(())
}

async fn run_open(
    api: &PortalClient,
    registry: &LocaleRegistry,
    store: &mut SessionStore<FileStorage>,
    path: String,
) -> Result<(), CliError> {
    let mut path = path;
    let mut resolution = resolve(registry, &path);
    if let Resolution::Redirect { to, .. } = &resolution {
        eprintln!("redirect {path} -> {to}");
        path.clone_from(to);
        resolution = resolve(registry, &path);
    }

    if let Resolution::Serve { locale, rest } = &resolution {
        let gate = Page::classify(rest).guard().filter(|g| g.policy() == GatePolicy::RedirectToLogin);
        if let Some(guard) = gate {
            if let GateDecision::Redirect(to) = guard.check_session(store, locale) {
                eprintln!("redirect {path} -> {to} (not signed in)");
                return Ok(());
            }
        }
    }

    let page = api.fetch_page(&path, store.token()).await?;
    print_json(&json!({
        "status": page.status,
        "location": page.location,
        "body": serde_json::from_str::<serde_json::Value>(&page.body).unwrap_or(serde_json::Value::String(page.body)),
    }))
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
