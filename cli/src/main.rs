use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Deserialize;

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Parser)]
#[command(name = "badge")]
#[command(about = "Render profile badges from a running badge server", long_about = None)]
struct Cli {
    /// Badge API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured badges
    List,
    /// Render badges for a person
    Render {
        /// Person id
        person_id: i64,
        /// Only render this badge
        #[arg(short, long)]
        badge: Option<i64>,
    },
}

#[derive(Deserialize, Debug)]
struct BadgeSummary {
    id: i64,
    name: String,
    component: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let api_url = cli.api_url.trim_end_matches('/');

    match cli.command {
        Commands::List => list_badges(&client, api_url).await?,
        Commands::Render { person_id, badge } => {
            render_badges(&client, api_url, person_id, badge).await?
        }
    }

    Ok(())
}

async fn list_badges(client: &reqwest::Client, api_url: &str) -> Result<()> {
    let response = client
        .get(format!("{api_url}/badges"))
        .send()
        .await
        .context("Failed to send request to badge API")?;

    if !response.status().is_success() {
        bail!("Badge API returned status {}", response.status());
    }

    let badges: Vec<BadgeSummary> = response
        .json()
        .await
        .context("Failed to parse badge listing")?;

    if badges.is_empty() {
        println!("No badges configured");
        return Ok(());
    }

    for badge in badges {
        println!("{:>6}  {}  ({})", badge.id, badge.name, badge.component);
    }

    Ok(())
}

async fn render_badges(
    client: &reqwest::Client,
    api_url: &str,
    person_id: i64,
    badge: Option<i64>,
) -> Result<()> {
    let url = match badge {
        Some(badge_id) => format!("{api_url}/people/{person_id}/badges/{badge_id}"),
        None => format!("{api_url}/people/{person_id}/badges"),
    };

    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to send request to badge API")?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read badge API response")?;

    if !status.is_success() {
        bail!("Badge API returned status {}: {}", status, body);
    }

    if body.is_empty() {
        eprintln!("Nothing to render for person {person_id}");
    } else {
        println!("{body}");
    }

    Ok(())
}
