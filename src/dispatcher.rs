use crate::{
    action::ActionRuntime,
    config::Config,
    emitter,
    event::TriggerEvent,
    github::{PullRequest, PullRequestApi},
    resolver::{resolve_by_number, resolve_by_sha},
};
use anyhow::Result;

/// Resolves the pull request for `event` and always hands the result, found
/// or not, to the emitter. Errors from the resolvers skip emission.
pub async fn find_pull_request<A, R>(
    config: &Config,
    event: &TriggerEvent,
    api: &A,
    runtime: &R,
) -> Result<()>
where
    A: PullRequestApi,
    R: ActionRuntime,
{
    let pull_request = resolve(config, event, api, runtime).await?;

    emitter::emit(config, event.kind(), pull_request.as_ref(), runtime)
}

pub async fn resolve<A, R>(
    config: &Config,
    event: &TriggerEvent,
    api: &A,
    runtime: &R,
) -> Result<Option<PullRequest>>
where
    A: PullRequestApi,
    R: ActionRuntime,
{
    match event {
        TriggerEvent::PullRequest(pull_request) if config.refetch => {
            match pull_request.as_ref().filter(|pr| pr.has_number()) {
                Some(pr) => {
                    log::info!("Fetching pull request #{} by number", pr.number);
                    resolve_by_number(config, pr.number, api, runtime).await
                }
                None => Ok(None),
            }
        }
        TriggerEvent::PullRequest(pull_request) => {
            log::info!("Using the pull request from the event payload");
            Ok(pull_request.clone())
        }
        TriggerEvent::Push { after } => {
            let sha = config.commit_sha.as_deref().or(after.as_deref());
            log::info!("Looking up pull requests for commit {}", sha.unwrap_or("<none>"));
            resolve_by_sha(config, sha, api, runtime).await
        }
        TriggerEvent::Other(kind) => {
            runtime.set_failed(&format!("Received an unknown event: {}.", kind));
            Ok(None)
        }
    }
}
