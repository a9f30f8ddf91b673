use anyhow::Context;
use clap::{Parser, Subcommand};
use reqwest::Client;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "questsearch-cli")]
#[command(about = "QuestSearch catalogue CLI", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        env = "QUESTSEARCH_ENDPOINT",
        default_value = "http://localhost:5000"
    )]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search quiz items by title substring
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        #[arg(short, long, default_value = "1")]
        page: u64,

        #[arg(short, long, default_value = "20")]
        limit: u64,
    },

    /// Add a quiz item from a JSON file
    Add {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Get a quiz item by id
    Get {
        #[arg(value_name = "ITEM_ID")]
        id: u64,
    },

    /// Get the sibling of a quiz item
    Sibling {
        #[arg(value_name = "ITEM_ID")]
        id: u64,
    },

    /// Check server health
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = Client::new();

    match cli.command {
        Commands::Search { query, page, limit } => {
            let response = client
                .get(format!("{}/search", cli.endpoint))
                .query(&[
                    ("q", query),
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                ])
                .send()
                .await?;

            print_json(response).await?;
        }

        Commands::Add { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let draft: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", file.display()))?;

            let response = client
                .post(format!("{}/add-quiz-item", cli.endpoint))
                .json(&draft)
                .send()
                .await?;

            print_json(response).await?;
        }

        Commands::Get { id } => {
            let response = client
                .get(format!("{}/quiz-items/{}", cli.endpoint, id))
                .send()
                .await?;

            print_json(response).await?;
        }

        Commands::Sibling { id } => {
            let response = client
                .get(format!("{}/quiz-items/{}/sibling", cli.endpoint, id))
                .send()
                .await?;

            print_json(response).await?;
        }

        Commands::Health => {
            let response = client
                .get(format!("{}/health", cli.endpoint))
                .send()
                .await?;

            print_json(response).await?;
        }
    }

    Ok(())
}

async fn print_json(response: reqwest::Response) -> anyhow::Result<()> {
    let body: serde_json::Value = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
