use crate::{
    action::ActionRuntime,
    config::{Config, ConfigError, COMMIT_SHA_INPUT},
    github::{PullRequest, PullRequestApi},
};
use anyhow::Result;

/// Finds the pull request a commit belongs to.
///
/// Candidates keep the order the API returns them in and the first one wins.
/// Closed pull requests are dropped unless `allowClosed` is set. Not finding
/// anything is `Ok(None)`, and only reported as a failure with `failIfNotFound`.
pub async fn resolve_by_sha<A, R>(
    config: &Config,
    sha: Option<&str>,
    api: &A,
    runtime: &R,
) -> Result<Option<PullRequest>>
where
    A: PullRequestApi,
    R: ActionRuntime,
{
    let token = config.token()?;
    let sha = sha
        .filter(|sha| !sha.is_empty())
        .ok_or(ConfigError::Missing(COMMIT_SHA_INPUT))?;

    let pull_requests = api
        .pull_requests_for_commit(token, &config.repository, sha)
        .await?;

    runtime.debug(&format!(
        "Found {} pull requests with the sha {}.",
        pull_requests.len(),
        sha
    ));

    let candidates = if config.allow_closed {
        pull_requests
    } else {
        let open: Vec<PullRequest> = pull_requests
            .into_iter()
            .filter(PullRequest::is_open)
            .collect();

        runtime.debug(&format!(
            "Filtered to find {} open pull requests.",
            open.len()
        ));

        open
    };

    match candidates.into_iter().next() {
        Some(pull_request) => Ok(Some(pull_request)),
        None => {
            if config.fail_if_not_found {
                runtime.set_failed(&format!(
                    "No pull requests found for {}@{}, Github Action failed.",
                    config.repository, sha
                ));
            }

            Ok(None)
        }
    }
}
