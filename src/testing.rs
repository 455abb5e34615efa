//! Test doubles for the runner and the GitHub API.

use crate::{
    action::{ActionRuntime, OutputError},
    config::{Config, Repository},
    github::{BaseRef, PullRequest, PullRequestApi, PullRequestState},
};
use anyhow::{bail, Result};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Debug(String),
    Output(String, String),
    Failed(String),
}

#[derive(Default)]
pub struct RecordingRuntime {
    calls: RefCell<Vec<Call>>,
}

impl RecordingRuntime {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn outputs(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Output(name, value) => Some((name, value)),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Failed(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn debugs(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Debug(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl ActionRuntime for RecordingRuntime {
    fn debug(&self, message: &str) {
        self.calls.borrow_mut().push(Call::Debug(message.to_owned()));
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), OutputError> {
        self.calls
            .borrow_mut()
            .push(Call::Output(name.to_owned(), value.to_owned()));
        Ok(())
    }

    fn set_failed(&self, message: &str) {
        self.calls.borrow_mut().push(Call::Failed(message.to_owned()));
    }
}

/// In-memory API serving canned pull requests and recording every request.
#[derive(Default)]
pub struct FakeApi {
    pub for_commit: Vec<PullRequest>,
    pub by_number: Vec<PullRequest>,
    pub error: Option<String>,
    requests: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with_commit_pull_requests(pull_requests: Vec<PullRequest>) -> Self {
        FakeApi {
            for_commit: pull_requests,
            ..Default::default()
        }
    }

    pub fn with_pull_requests(pull_requests: Vec<PullRequest>) -> Self {
        FakeApi {
            by_number: pull_requests,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        FakeApi {
            error: Some(message.to_owned()),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PullRequestApi for FakeApi {
    async fn pull_requests_for_commit(
        &self,
        token: &str,
        repository: &Repository,
        sha: &str,
    ) -> Result<Vec<PullRequest>> {
        self.requests
            .borrow_mut()
            .push(format!("{} {}@{}", token, repository, sha));

        if let Some(error) = &self.error {
            bail!(error.to_owned())
        }

        Ok(self.for_commit.clone())
    }

    async fn pull_request(
        &self,
        token: &str,
        repository: &Repository,
        number: u64,
    ) -> Result<Option<PullRequest>> {
        self.requests
            .borrow_mut()
            .push(format!("{} {}#{}", token, repository, number));

        if let Some(error) = &self.error {
            bail!(error.to_owned())
        }

        Ok(self
            .by_number
            .iter()
            .find(|pr| pr.number == number)
            .cloned())
    }
}

pub fn pull_request(number: u64, state: PullRequestState) -> PullRequest {
    PullRequest {
        number,
        state,
        title: Some(format!("PR Title for number={}", number)),
        body: Some(format!("PR Body for number={}", number)),
        html_url: Some(format!(
            "https://github.com/kylorhall/find-github-pull-request/pull/{}",
            number
        )),
        base: Some(BaseRef {
            ref_name: Some("main".to_owned()),
            sha: Some(format!("base-sha-{}", number)),
        }),
    }
}

pub fn open(number: u64) -> PullRequest {
    pull_request(number, PullRequestState::Open)
}

pub fn closed(number: u64) -> PullRequest {
    pull_request(number, PullRequestState::Closed)
}

pub fn config() -> Config {
    Config {
        token: Some("GH_not-a-real-token".to_owned()),
        commit_sha: Some("dc45d51".to_owned()),
        allow_closed: false,
        fail_if_not_found: false,
        refetch: false,
        repository: Repository::new("kylorhall", "repo"),
        event_name: "push".to_owned(),
        event_path: None,
        api_url: "http://localhost".to_owned(),
    }
}
