use anyhow::Result;
use simple_logger::init_with_level;
use std::env;

/// Logs at `Info`, or `Debug` when the runner has step debug logging enabled.
pub fn init() -> Result<()> {
    init_with_level(level(env::var("RUNNER_DEBUG").ok().as_deref()))?;

    Ok(())
}

fn level(runner_debug: Option<&str>) -> log::Level {
    match runner_debug {
        Some("1") => log::Level::Debug,
        _ => log::Level::Info,
    }
}
