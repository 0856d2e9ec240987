use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crewplan::api::ApiClient;
use crewplan::auth::SessionStore;
use crewplan::models::{CreateFeatureInput, CreateTaskInput};
use crewplan::page::{FeaturePage, LoadOutcome};
use crewplan::view;

#[derive(Parser)]
#[command(name = "crewplan")]
#[command(about = "Break projects down into features from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a project's "Add features" page
    Features {
        project_id: Uuid,
    },
    /// Create a feature in a project, then show the refreshed page
    AddFeature {
        project_id: Uuid,
        /// Name of the new feature
        name: String,
        /// Task names to create inside the feature (repeatable)
        #[arg(long = "task")]
        tasks: Vec<String>,
        /// Team member IDs to assign (repeatable)
        #[arg(long = "assignee")]
        assignees: Vec<Uuid>,
    },
    /// Delete a feature from a project, then show the refreshed page
    DeleteFeature {
        project_id: Uuid,
        feature_id: Uuid,
    },
    /// Store a session token obtained from the backend
    Login {
        token: String,
        /// RFC 3339 expiry timestamp, if the backend communicated one
        #[arg(long)]
        expires_at: Option<DateTime<Utc>>,
    },
    /// Forget the stored session token
    Logout,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "crewplan=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = SessionStore::open_default()?;

    match cli.command {
        Commands::Features { project_id } => {
            let mut page = FeaturePage::new(ApiClient::from_env(), store, project_id);
            show(&mut page).await;
        }
        Commands::AddFeature {
            project_id,
            name,
            tasks,
            assignees,
        } => {
            let mut page = FeaturePage::new(ApiClient::from_env(), store, project_id);
            let input = CreateFeatureInput {
                project_id,
                feature_name: name,
                tasks: tasks
                    .into_iter()
                    .map(|task_name| CreateTaskInput {
                        task_name,
                        assigned_to: None,
                    })
                    .collect(),
                assignees,
            };
            match page.create_feature(input).await {
                Ok(LoadOutcome::NoSession) => not_logged_in(),
                Ok(LoadOutcome::Loaded) => show(&mut page).await,
                Err(e) => anyhow::bail!("could not create feature: {e}"),
            }
        }
        Commands::DeleteFeature {
            project_id,
            feature_id,
        } => {
            let mut page = FeaturePage::new(ApiClient::from_env(), store, project_id);
            match page.delete_feature(feature_id).await {
                Ok(LoadOutcome::NoSession) => not_logged_in(),
                Ok(LoadOutcome::Loaded) => show(&mut page).await,
                Err(e) => anyhow::bail!("could not delete feature: {e}"),
            }
        }
        Commands::Login { token, expires_at } => {
            store.login(token, expires_at)?;
            println!("Session stored.");
        }
        Commands::Logout => {
            store.logout()?;
            println!("Session cleared.");
        }
    }

    Ok(())
}

/// Refresh all three page slots and print the rendered page.
async fn show(page: &mut FeaturePage) {
    match page.refresh().await {
        LoadOutcome::NoSession => not_logged_in(),
        LoadOutcome::Loaded => print!("{}", view::render_text(&page.view())),
    }
}

fn not_logged_in() {
    println!("Not logged in. Run `cwp login <token>` first.");
}
