use crate::{
    config::Repository,
    github::{github_client::GithubClient, PullRequest},
};
use anyhow::Result;

pub struct PullRequestHandler<'a> {
    client: &'a GithubClient,
    repository: &'a Repository,
    token: &'a str,
}

impl<'a> PullRequestHandler<'a> {
    pub fn new(client: &'a GithubClient, repository: &'a Repository, token: &'a str) -> Self {
        PullRequestHandler {
            client,
            repository,
            token,
        }
    }

    pub async fn for_commit(&self, sha: &str) -> Result<Vec<PullRequest>> {
        self.client
            .list_commit_pull_requests(self.token, self.repository, sha)
            .await
    }

    pub async fn get(&self, number: u64) -> Result<Option<PullRequest>> {
        self.client
            .get_pull_request(self.token, self.repository, number)
            .await
    }
}
