pub mod pull_request_handler;
pub mod repository_handler;

use super::github_client::GithubClient;
use crate::config::Repository;
use repository_handler::RepositoryHandler;

/// Github repo handler access implementation
impl GithubClient {
    pub fn repo<'a>(&'a self, repository: &'a Repository, token: &'a str) -> RepositoryHandler<'a> {
        RepositoryHandler::new(self, repository, token)
    }
}
