use super::pull_request_handler::PullRequestHandler;
use crate::{config::Repository, github::github_client::GithubClient};

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    repository: &'a Repository,
    token: &'a str,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, repository: &'a Repository, token: &'a str) -> Self {
        RepositoryHandler {
            client,
            repository,
            token,
        }
    }

    pub fn pull_requests(&self) -> PullRequestHandler<'a> {
        PullRequestHandler::new(self.client, self.repository, self.token)
    }
}
