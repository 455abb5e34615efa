pub mod github_client;
mod handler;
mod response;

pub use github_client::GithubClient;
pub use response::{BaseRef, PullRequest, PullRequestState};

use crate::config::Repository;
use anyhow::Result;

/// The pull request lookups the resolvers need from the hosting platform.
pub trait PullRequestApi {
    /// Pull requests associated with `sha`, in the order the API returns them.
    async fn pull_requests_for_commit(
        &self,
        token: &str,
        repository: &Repository,
        sha: &str,
    ) -> Result<Vec<PullRequest>>;

    /// `None` when the repository has no pull request with that number.
    async fn pull_request(
        &self,
        token: &str,
        repository: &Repository,
        number: u64,
    ) -> Result<Option<PullRequest>>;
}
