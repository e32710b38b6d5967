use clap::Parser;

#[derive(Parser)]
#[command(name = "repo-dashboard-server")]
#[command(about = "Repository Dashboard Server - Sessions and GitHub repository queries for the dashboard UI")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub github_api_url: String,

    /// Optional GitHub token for a higher rate limit
    #[arg(long, env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Identity provider REST API root
    #[arg(
        long,
        env = "IDENTITY_URL",
        default_value = "https://identitytoolkit.googleapis.com"
    )]
    pub identity_url: String,

    /// Identity provider API key
    #[arg(long, env = "IDENTITY_API_KEY")]
    pub identity_api_key: String,
}
