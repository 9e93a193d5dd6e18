//! Certmint CLI: command-line client for the Certmint API.
//!
//! Set CERTMINT_API_URL (or API_URL); defaults to http://localhost:8001.

use anyhow::Context;
use certmint_cli::{init_tracing, ApiClient};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "certmint", about = "Certmint API CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file and mint it as a certificate NFT
    Upload {
        /// Path to the file to upload
        file: std::path::PathBuf,
        /// Destination wallet; defaults to the server's wallet
        #[arg(long)]
        wallet: Option<String>,
        /// Credential id to report the mint outcome for
        #[arg(long)]
        credential_id: Option<String>,
    },
    /// List the assets in the server's wallet
    Wallet,
    /// Collection operations
    Collection {
        #[command(subcommand)]
        sub: CollectionCommands,
    },
}

#[derive(Subcommand)]
enum CollectionCommands {
    /// Create a shareable collection from asset ids
    Create {
        /// Asset ids, in display order
        #[arg(required = true)]
        asset_ids: Vec<String>,
    },
    /// Show a collection by share token
    Show {
        /// Share token returned by `collection create`
        share_token: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let client = ApiClient::from_env().context("Failed to create API client")?;
    tracing::debug!(base_url = client.base_url(), "Using Certmint API");

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            file,
            wallet,
            credential_id,
        } => {
            let response = client
                .upload(&file, wallet.as_deref(), credential_id.as_deref())
                .await?;
            print_json(&response)?;
            if response["success"] != serde_json::Value::Bool(true) {
                std::process::exit(1);
            }
        }
        Commands::Wallet => {
            let response = client.wallet().await?;
            print_json(&response)?;
        }
        Commands::Collection { sub } => match sub {
            CollectionCommands::Create { asset_ids } => {
                let response = client.create_collection(asset_ids).await?;
                print_json(&response)?;
            }
            CollectionCommands::Show { share_token } => {
                let response = client.get_collection(&share_token).await?;
                print_json(&response)?;
            }
        },
    }

    Ok(())
}
