use crate::types::RepoRecord;

/// Repositories shown per dashboard page.
pub const ITEMS_PER_PAGE: usize = 6;

/// The accumulated repository list for one username, with client-side
/// language filtering and fixed-size pagination over it.
pub struct RepositoryDashboard {
    repositories: Vec<RepoRecord>,
}

/// One page of the filtered list, plus the numbers the UI needs to render
/// pagination controls.
#[derive(Debug)]
pub struct DashboardPage {
    pub records: Vec<RepoRecord>,
    /// Effective page number after clamping into `[1, page_count]`.
    pub page: usize,
    pub page_count: usize,
    pub filtered_count: usize,
}

impl RepositoryDashboard {
    pub fn new(repositories: Vec<RepoRecord>) -> Self {
        RepositoryDashboard { repositories }
    }

    pub fn total_count(&self) -> usize {
        self.repositories.len()
    }

    /// Distinct primary languages in first-seen order. Records without a
    /// language do not contribute an entry.
    pub fn languages(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for repo in &self.repositories {
            if let Some(lang) = &repo.language {
                if !seen.contains(lang) {
                    seen.push(lang.clone());
                }
            }
        }
        seen
    }

    /// Records whose language matches the filter. `None` means "all".
    pub fn filtered(&self, language: Option<&str>) -> Vec<&RepoRecord> {
        match language {
            None => self.repositories.iter().collect(),
            Some(lang) => self
                .repositories
                .iter()
                .filter(|repo| repo.language.as_deref() == Some(lang))
                .collect(),
        }
    }

    /// Slice the filtered list into the requested page. An out-of-range page
    /// number is clamped rather than rejected, so a filter change that shrinks
    /// the result set can never leave the caller on a page that does not
    /// exist.
    pub fn page(&self, language: Option<&str>, requested_page: usize) -> DashboardPage {
        let filtered = self.filtered(language);
        let filtered_count = filtered.len();
        let page_count = page_count(filtered_count);
        let page = requested_page.clamp(1, page_count);

        let start = (page - 1) * ITEMS_PER_PAGE;
        let records = filtered
            .into_iter()
            .skip(start)
            .take(ITEMS_PER_PAGE)
            .cloned()
            .collect();

        DashboardPage {
            records,
            page,
            page_count,
            filtered_count,
        }
    }
}

/// Number of dashboard pages for a filtered list of `len` records. An empty
/// list still presents one (empty) page so page numbers stay well-defined.
pub fn page_count(len: usize) -> usize {
    std::cmp::max(1, len.div_ceil(ITEMS_PER_PAGE))
}
