mod action;
mod config;
mod dispatcher;
mod emitter;
mod event;
mod github;
mod http;
mod logger;
mod resolver;
mod sanitize;
#[cfg(test)]
mod testing;

use action::{ActionRuntime, GithubActions};
use anyhow::Result;
use config::Config;
use event::TriggerEvent;
use github::GithubClient;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let runtime = GithubActions::from_env();

    if let Err(err) = logger::init() {
        eprintln!("Cannot initialize logger: {:#}", err);
    }

    report(run(&runtime).await, &runtime);

    runtime.exit_code()
}

/// Last-resort boundary: any error that escaped the run fails the action.
fn report<R: ActionRuntime>(result: Result<()>, runtime: &R) {
    if let Err(err) = result {
        runtime.set_failed(&format!("{:#}", err));
    }
}

async fn run<R: ActionRuntime>(runtime: &R) -> Result<()> {
    let config = Config::from_env()?;

    log::info!(
        "Finding the pull request for event={} in {}",
        config.event_name,
        config.repository
    );
    let event = TriggerEvent::load(&config.event_name, config.event_path.as_deref()).await?;
    let client = GithubClient::new(&config.api_url);

    dispatcher::find_pull_request(&config, &event, &client, runtime).await
}
