use crate::types::{language_logo, RepoRecord};
use serde::{Deserialize, Serialize};

/// Session payload returned to the client after sign-up or sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    #[serde(rename = "idToken")]
    pub id_token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: String,
}

impl From<crate::identity::Session> for SessionResponse {
    fn from(session: crate::identity::Session) -> Self {
        SessionResponse {
            user_id: session.user_id,
            email: session.email,
            id_token: session.id_token,
            expires_in: session.expires_in,
        }
    }
}

/// Acknowledgement for a password-reset request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetResponse {
    pub email: String,
    pub sent: bool,
}

/// Query string accepted by the dashboard route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    /// Language filter; absent means "all".
    pub language: Option<String>,
    /// Requested page number, clamped server-side.
    pub page: Option<usize>,
}

impl DashboardQuery {
    /// The effective language filter. The UI's "all" option serializes as an
    /// empty value (`?language=`), so blank counts as no filter.
    pub fn language_filter(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
    }
}

/// One repository as rendered on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoView {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "stargazersCount")]
    pub stargazers_count: u32,
    #[serde(rename = "forksCount")]
    pub forks_count: u32,
    pub language: Option<String>,
    #[serde(rename = "languageLogoUrl")]
    pub language_logo_url: Option<String>,
    #[serde(rename = "htmlUrl")]
    pub html_url: String,
}

impl From<RepoRecord> for RepoView {
    fn from(record: RepoRecord) -> Self {
        let logo = record
            .language
            .as_deref()
            .and_then(language_logo)
            .map(str::to_string);

        RepoView {
            id: record.id,
            name: record.name,
            description: record.description,
            stargazers_count: record.stargazers_count,
            forks_count: record.forks_count,
            language: record.language,
            language_logo_url: logo,
            html_url: record.html_url,
        }
    }
}

/// One full dashboard document: the page of records plus everything the UI
/// needs to render the filter dropdown and pagination controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub username: String,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    #[serde(rename = "filteredCount")]
    pub filtered_count: usize,
    pub page: usize,
    #[serde(rename = "pageCount")]
    pub page_count: usize,
    pub languages: Vec<String>,
    pub repositories: Vec<RepoView>,
}
