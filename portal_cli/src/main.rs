use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use portal_api_types::{EntityId, FaqQuery, NewsQuery, TrainingQuery, TrainingStatus};
use portal_client::url::{
    backend_url, frontend_url, BuildMode, Environment, BACKEND_URL_OVERRIDES, FRONTEND_URL_VAR,
};
use portal_client::views::{agenda, faqs, news, squads, today, trainings};
use portal_client::{HttpClient, Session};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Terminal rendering of the portal views
mod render;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Build mode used to pick the backend when no URL override is set
    #[arg(long, env = "VITE_MODE", default_value = "development")]
    mode: String,

    /// Bearer token sent with every request
    #[arg(long, env = "PORTAL_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Maximum time to wait for a response, in seconds
    #[arg(long, env = "PORTAL_TIMEOUT", default_value_t = 15)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Events grouped by day
    Agenda {
        /// Include inactive events (requires a token)
        #[arg(long)]
        all: bool,
        /// Include days before today
        #[arg(long)]
        past: bool,
    },
    /// Published news, featured article first
    News {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Active squads and their members
    Squads,
    /// Frequently asked questions
    Faqs {
        #[arg(long)]
        category: Option<String>,
    },
    /// Upcoming and past trainings
    Trainings {
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        status: Option<TrainingStatus>,
    },
    /// Subscribe to a training
    Subscribe { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive("info".parse().context("Parsing log directive")?)
                .from_env()
                .context("Parsing RUST_LOG")?,
        )
        .init();

    let env = BACKEND_URL_OVERRIDES
        .into_iter()
        .chain([FRONTEND_URL_VAR])
        .filter_map(|name| Some((name, dotenv::var(name).ok()?)))
        .fold(Environment::new(BuildMode::parse(&args.mode)), |env, (name, value)| {
            env.with_var(name, value)
        });
    let base_url = backend_url(&env, None);
    info!("Using content API at {base_url}");
    info!("Portal pages at {}", frontend_url(&env, None));

    let session = Session::in_memory();
    if let Some(token) = &args.token {
        session.set_token(token);
    }
    let client = HttpClient::with_timeout(base_url, session, Duration::from_secs(args.timeout))
        .context("Building HTTP client")?;

    let today = today();
    let output = match args.command {
        Command::Agenda { all, past } => {
            let items = if all {
                client.agenda().list_all().await
            } else {
                client.agenda().list().await
            }
            .context("Fetching agenda")?;

            let groups = agenda::group_by_date(items, today);
            let groups = if past {
                groups
            } else {
                agenda::upcoming(&groups).cloned().collect()
            };
            render::agenda(&groups, today)
        }
        Command::News { category, limit } => {
            let query = NewsQuery {
                limit,
                ..NewsQuery::published()
            };
            let articles = client.news().list(&query).await.context("Fetching news")?;
            let filter = news::CategoryFilter::from_value(category.as_deref().unwrap_or_default());
            render::news(&news::news_feed(&articles, &filter))
        }
        Command::Squads => {
            let squads = client.squads().list().await.context("Fetching squads")?;
            render::squads(&squads::roster(squads))
        }
        Command::Faqs { category } => {
            let faqs = client
                .faqs()
                .list(&FaqQuery { category })
                .await
                .context("Fetching FAQs")?;
            render::faqs(&faqs::display_order(faqs))
        }
        Command::Trainings { kind, status } => {
            let query = TrainingQuery {
                kind,
                status,
                active: Some(true),
            };
            let sessions = client
                .trainings()
                .list(&query)
                .await
                .context("Fetching trainings")?;
            render::trainings(&trainings::schedule(sessions, today), today)
        }
        Command::Subscribe { id } => {
            let message = client
                .trainings()
                .subscribe(&EntityId::new(id))
                .await
                .context("Subscribing to training")?;
            message.unwrap_or_else(|| "Inscrição confirmada.".to_owned())
        }
    };

    println!("{output}");

    Ok(())
}
