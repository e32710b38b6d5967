mod cli;
mod dashboard;
mod error;
mod forms;
mod github;
mod identity;
mod models;
mod server;
mod types;

use clap::Parser;
use cli::Cli;
use colored::*;
use error::Result;
use github::GitHubClient;
use identity::IdentityClient;
use server::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "Repository Dashboard Server".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let github = Arc::new(GitHubClient::with_base_url(
        cli.github_api_url.clone(),
        cli.github_token.clone(),
    )?);

    if cli.github_token.is_some() {
        println!("✅ GitHub client configured (authenticated)");
    } else {
        println!("✅ GitHub client configured (anonymous)");
    }

    let identity = Arc::new(IdentityClient::new(
        cli.identity_url.clone(),
        cli.identity_api_key.clone(),
    )?);

    println!("✅ Identity provider client configured");
    println!("\nPress Ctrl+C to stop the server\n");

    let app_state = AppState {
        github,
        identity,
        start_time: std::time::Instant::now(),
    };

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        println!("\n🛑 Shutting down server...");
    };

    server::start_server(app_state, cli.port, shutdown)
        .await
        .map_err(|e| error::DashboardError::ApiError(format!("Server error: {}", e)))?;

    println!("✅ Server stopped");

    Ok(())
}
