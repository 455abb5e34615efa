use serde::Deserialize;

/// Snapshot of a pull request, as returned by the REST API or embedded in a
/// `pull_request` event payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub state: PullRequestState,
    pub title: Option<String>,
    pub body: Option<String>,
    pub html_url: Option<String>,
    pub base: Option<BaseRef>,
}

impl PullRequest {
    pub fn is_open(&self) -> bool {
        self.state == PullRequestState::Open
    }

    /// A zero number means nothing was actually resolved.
    pub fn has_number(&self) -> bool {
        self.number != 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    Open,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// The branch a pull request targets.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BaseRef {
    #[serde(rename = "ref")]
    pub ref_name: Option<String>,
    pub sha: Option<String>,
}
