use crate::{
    action::ActionRuntime,
    config::Config,
    github::{PullRequest, PullRequestApi},
};
use anyhow::Result;

/// Fetches the pull request an event names. No state filtering applies.
pub async fn resolve_by_number<A, R>(
    config: &Config,
    number: u64,
    api: &A,
    runtime: &R,
) -> Result<Option<PullRequest>>
where
    A: PullRequestApi,
    R: ActionRuntime,
{
    let token = config.token()?;

    let pull_request = api
        .pull_request(token, &config.repository, number)
        .await?;

    if pull_request.is_none() {
        runtime.set_failed(&format!(
            "Pull request not found for {}#{}, Github Action failed.",
            config.repository, number
        ));
    }

    Ok(pull_request)
}
