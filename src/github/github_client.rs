use super::{PullRequest, PullRequestApi};
use crate::{
    config::Repository,
    http::{self, parse_json, Headers, HttpClient, ResponseHandler},
};
use anyhow::Result;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub struct GithubClient {
    api_url: String,
    http: HttpClient,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        GithubClient {
            api_url: api_url.into().trim_end_matches('/').to_owned(),
            http: HttpClient::new(),
        }
    }

    async fn get(&self, token: &str, uri: &str) -> Result<String, http::Error> {
        log::debug!("GET {}", uri);

        self.http
            .get(uri)
            .github_headers(token)
            .send()
            .await
            .handle()
            .await
    }

    pub(super) async fn list_commit_pull_requests(
        &self,
        token: &str,
        repository: &Repository,
        sha: &str,
    ) -> Result<Vec<PullRequest>> {
        let uri = format!(
            "{}/repos/{}/{}/commits/{}/pulls",
            self.api_url, repository.owner, repository.repo, sha
        );

        let response = self.get(token, &uri).await?;
        let pull_requests = parse_json::<Vec<PullRequest>>(&response)?;

        Ok(pull_requests)
    }

    pub(super) async fn get_pull_request(
        &self,
        token: &str,
        repository: &Repository,
        number: u64,
    ) -> Result<Option<PullRequest>> {
        let uri = format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_url, repository.owner, repository.repo, number
        );

        let response = match self.get(token, &uri).await {
            Ok(response) => response,
            Err(http::Error::NotFound { message }) => {
                log::debug!("pull request #{} not found: {}", number, message);
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let pull_request = parse_json::<PullRequest>(&response)?;

        Ok(Some(pull_request))
    }
}

impl PullRequestApi for GithubClient {
    async fn pull_requests_for_commit(
        &self,
        token: &str,
        repository: &Repository,
        sha: &str,
    ) -> Result<Vec<PullRequest>> {
        self.repo(repository, token)
            .pull_requests()
            .for_commit(sha)
            .await
    }

    async fn pull_request(
        &self,
        token: &str,
        repository: &Repository,
        number: u64,
    ) -> Result<Option<PullRequest>> {
        self.repo(repository, token).pull_requests().get(number).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::PullRequestState;
    use mockito::Server;

    fn repository() -> Repository {
        Repository::new("kylorhall", "repo")
    }

    #[tokio::test]
    async fn should_list_pull_requests_for_commit() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kylorhall/repo/commits/dc45d51/pulls")
            .match_header("authorization", "Bearer GH_not-a-real-token")
            .match_header("accept", "application/vnd.github+json")
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    { "number": 9000, "state": "open", "title": "First" },
                    { "number": 101, "state": "closed", "title": "Second" }
                ]"#,
            )
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let pull_requests = client
            .pull_requests_for_commit("GH_not-a-real-token", &repository(), "dc45d51")
            .await?;

        mock.assert_async().await;
        assert_eq!(pull_requests.len(), 2);
        assert_eq!(pull_requests[0].number, 9000);
        assert_eq!(pull_requests[1].state, PullRequestState::Closed);

        Ok(())
    }

    #[tokio::test]
    async fn should_get_pull_request_by_number() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kylorhall/repo/pulls/42")
            .match_header("authorization", "Bearer token")
            .with_body(
                r#"{
                    "number": 42,
                    "state": "open",
                    "title": "PR Title",
                    "base": { "ref": "main", "sha": "abc123" }
                }"#,
            )
            .create_async()
            .await;

        let client = GithubClient::new(format!("{}/", server.url()));
        let pull_request = client.pull_request("token", &repository(), 42).await?;

        mock.assert_async().await;
        let pull_request = pull_request.unwrap_or_default();
        assert_eq!(pull_request.number, 42);
        assert_eq!(pull_request.title.as_deref(), Some("PR Title"));

        Ok(())
    }

    #[tokio::test]
    async fn should_return_none_when_pull_request_is_missing() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kylorhall/repo/pulls/404")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let pull_request = client.pull_request("token", &repository(), 404).await?;

        mock.assert_async().await;
        assert_eq!(pull_request, None);

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_server_error() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kylorhall/repo/commits/dc45d51/pulls")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let result = client
            .pull_requests_for_commit("token", &repository(), "dc45d51")
            .await;

        mock.assert_async().await;
        assert_eq!(
            result.map_err(|err| err.to_string()).err().as_deref(),
            Some("500: boom")
        );

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_unparsable_body() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kylorhall/repo/commits/dc45d51/pulls")
            .with_body("{ not json")
            .create_async()
            .await;

        let client = GithubClient::new(server.url());
        let result = client
            .pull_requests_for_commit("token", &repository(), "dc45d51")
            .await;

        mock.assert_async().await;
        assert!(result.is_err());

        Ok(())
    }
}
