use crate::github::PullRequest;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const PULL_REQUEST_EVENT: &str = "pull_request";
pub const PUSH_EVENT: &str = "push";

/// The event that triggered the workflow run.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerEvent {
    PullRequest(Option<PullRequest>),
    Push { after: Option<String> },
    Other(String),
}

#[derive(Deserialize)]
struct PullRequestPayload {
    pull_request: Option<PullRequest>,
}

#[derive(Deserialize)]
struct PushPayload {
    after: Option<String>,
}

impl TriggerEvent {
    /// Reads the webhook payload the runner stored at `path`. A missing file
    /// is treated as an empty payload; any other I/O error is returned.
    pub async fn load(name: &str, path: Option<&Path>) -> Result<TriggerEvent> {
        let Some(path) = path else {
            return TriggerEvent::parse(name, "{}");
        };

        let exists = tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Cannot access event payload {}", path.display()))?;

        let payload = if exists {
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Cannot read event payload {}", path.display()))?
        } else {
            log::warn!("GITHUB_EVENT_PATH {} does not exist", path.display());
            String::from("{}")
        };

        TriggerEvent::parse(name, &payload)
    }

    pub fn parse(name: &str, payload: &str) -> Result<TriggerEvent> {
        let event = match name {
            PULL_REQUEST_EVENT => {
                let payload = serde_json::from_str::<PullRequestPayload>(payload)
                    .context("Cannot parse pull_request event payload")?;
                TriggerEvent::PullRequest(payload.pull_request)
            }
            PUSH_EVENT => {
                let payload = serde_json::from_str::<PushPayload>(payload)
                    .context("Cannot parse push event payload")?;
                TriggerEvent::Push {
                    after: payload.after.filter(|sha| !sha.is_empty()),
                }
            }
            other => TriggerEvent::Other(other.to_owned()),
        };

        Ok(event)
    }

    pub fn kind(&self) -> &str {
        match self {
            TriggerEvent::PullRequest(_) => PULL_REQUEST_EVENT,
            TriggerEvent::Push { .. } => PUSH_EVENT,
            TriggerEvent::Other(kind) => kind,
        }
    }
}
