use crate::error::{DashboardError, Result};
use crate::types::RepoRecord;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;
use url::Url;

const API_BASE_URL: &str = "https://api.github.com";
pub const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(API_BASE_URL.to_string(), token)
    }

    /// Build a client against a non-default API root (used by tests).
    pub fn with_base_url(base_url: String, token: Option<String>) -> Result<Self> {
        let base = Url::parse(&base_url)
            .map_err(|e| DashboardError::EnvError(format!("invalid GitHub API URL: {}", e)))?;

        let client = Client::builder()
            .user_agent("Repo Dashboard Server/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: base.as_str().trim_end_matches('/').to_string(),
            token,
        })
    }

    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        match response.status() {
            reqwest::StatusCode::OK => Ok(response),
            reqwest::StatusCode::NOT_FOUND => Err(DashboardError::NotFound(format!(
                "resource not found: {}",
                url
            ))),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(DashboardError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    /// Fetch one page of a user's repositories.
    pub async fn fetch_repos_page(
        &self,
        username: &str,
        page: u32,
    ) -> Result<(Vec<RepoRecord>, bool)> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&page={}",
            self.base_url, username, PER_PAGE, page
        );

        let response = self.make_request(&url).await?;
        let repos: Vec<RepoRecord> = response.json().await?;
        let has_more = repos.len() == PER_PAGE as usize;

        Ok((repos, has_more))
    }

    /// Accumulate every repository for a user, page by page, until a short
    /// page signals the end. Any failed page aborts the whole fetch; partial
    /// results are discarded.
    pub async fn fetch_all_repositories(&self, username: &str) -> Result<Vec<RepoRecord>> {
        let mut all_repos = Vec::new();
        let mut page = 1;

        loop {
            let (repos, has_more) = self.fetch_repos_page(username, page).await?;
            all_repos.extend(repos);

            if !has_more {
                break;
            }
            page += 1;
        }

        debug!(
            username,
            pages = page,
            total = all_repos.len(),
            "fetched all repositories"
        );

        Ok(all_repos)
    }
}
