use crate::github::github_client::DEFAULT_API_URL;
use std::{env, fmt, path::PathBuf};
use thiserror::Error;

pub const TOKEN_INPUT: &str = "token";
pub const COMMIT_SHA_INPUT: &str = "commitSha";
const ALLOW_CLOSED_INPUT: &str = "allowClosed";
const FAIL_IF_NOT_FOUND_INPUT: &str = "failIfNotFound";
const REFETCH_INPUT: &str = "refetch";

const TRUE_VALUES: [&str; 3] = ["true", "True", "TRUE"];
const FALSE_VALUES: [&str; 3] = ["false", "False", "FALSE"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is required and not provided")]
    Missing(&'static str),
    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {0}\nSupport boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBoolean(&'static str),
    #[error("GITHUB_REPOSITORY must be in the form owner/repo, got {0}")]
    InvalidRepository(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub owner: String,
    pub repo: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Repository {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Repository::new(owner, repo))
            }
            _ => Err(ConfigError::InvalidRepository(value.to_owned())),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Action inputs and runner context, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: Option<String>,
    pub commit_sha: Option<String>,
    pub allow_closed: bool,
    pub fail_if_not_found: bool,
    /// Look `pull_request` events up by number instead of trusting the payload.
    pub refetch: bool,
    pub repository: Repository,
    pub event_name: String,
    pub event_path: Option<PathBuf>,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = |name: &str| lookup(&input_key(name)).map(|value| value.trim().to_owned());
        let context = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let repository = Repository::parse(&context("GITHUB_REPOSITORY").unwrap_or_default())?;

        Ok(Config {
            token: input(TOKEN_INPUT).filter(|token| !token.is_empty()),
            commit_sha: input(COMMIT_SHA_INPUT)
                .filter(|sha| !sha.is_empty())
                .or_else(|| context("GITHUB_SHA")),
            allow_closed: parse_bool(ALLOW_CLOSED_INPUT, input(ALLOW_CLOSED_INPUT))?,
            fail_if_not_found: parse_bool(
                FAIL_IF_NOT_FOUND_INPUT,
                input(FAIL_IF_NOT_FOUND_INPUT),
            )?,
            refetch: parse_bool(REFETCH_INPUT, input(REFETCH_INPUT))?,
            repository,
            event_name: context("GITHUB_EVENT_NAME").unwrap_or_default(),
            event_path: context("GITHUB_EVENT_PATH").map(PathBuf::from),
            api_url: context("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
        })
    }

    pub fn token(&self) -> Result<&str, ConfigError> {
        self.token
            .as_deref()
            .ok_or(ConfigError::Missing(TOKEN_INPUT))
    }
}

/// Environment variable the runner uses for an action input.
fn input_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

fn parse_bool(name: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref() {
        None | Some("") => Ok(false),
        Some(value) if TRUE_VALUES.contains(&value) => Ok(true),
        Some(value) if FALSE_VALUES.contains(&value) => Ok(false),
        Some(_) => Err(ConfigError::InvalidBoolean(name)),
    }
}
