use crate::{
    action::ActionRuntime,
    config::Config,
    github::PullRequest,
    sanitize::sanitize,
};
use anyhow::Result;

/// The values handed to later workflow steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedOutput {
    pub number: String,
    pub title: String,
    pub body: String,
    pub url: String,
    pub base_ref: String,
    pub base_sha: String,
}

impl ResolvedOutput {
    /// `None` unless the pull request carries a real number.
    pub fn from_pull_request(pull_request: &PullRequest) -> Option<Self> {
        if !pull_request.has_number() {
            return None;
        }

        let base = pull_request.base.as_ref();

        Some(ResolvedOutput {
            number: pull_request.number.to_string(),
            title: sanitize(pull_request.title.as_deref()).unwrap_or_default(),
            body: sanitize(pull_request.body.as_deref()).unwrap_or_default(),
            url: pull_request.html_url.clone().unwrap_or_default(),
            base_ref: base
                .and_then(|base| base.ref_name.clone())
                .unwrap_or_default(),
            base_sha: base.and_then(|base| base.sha.clone()).unwrap_or_default(),
        })
    }

    /// Output names and values in emission order.
    pub fn outputs(&self) -> [(&'static str, &str); 6] {
        [
            ("number", self.number.as_str()),
            ("title", self.title.as_str()),
            ("body", self.body.as_str()),
            ("url", self.url.as_str()),
            ("base-ref", self.base_ref.as_str()),
            ("base-sha", self.base_sha.as_str()),
        ]
    }
}

pub fn emit<R>(
    config: &Config,
    event_kind: &str,
    pull_request: Option<&PullRequest>,
    runtime: &R,
) -> Result<()>
where
    R: ActionRuntime,
{
    let Some(output) = pull_request.and_then(ResolvedOutput::from_pull_request) else {
        let message = format!(
            "We did not find a pull request for an event={}.",
            event_kind
        );

        if config.fail_if_not_found {
            runtime.set_failed(&message);
        } else {
            runtime.debug(&message);
        }

        return Ok(());
    };

    for (name, value) in output.outputs() {
        runtime.set_output(name, value)?;
    }

    Ok(())
}
