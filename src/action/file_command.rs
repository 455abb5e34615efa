use super::OutputError;
use std::{fs::OpenOptions, io::Write, path::Path};
use uuid::Uuid;

/// Builds a `key<<delimiter` heredoc entry so that multi-line values survive.
pub fn prepare_key_value_message(key: &str, value: &str) -> Result<String, OutputError> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());

    if key.contains(&delimiter) {
        return Err(OutputError::DelimiterInName { delimiter });
    }

    if value.contains(&delimiter) {
        return Err(OutputError::DelimiterInValue { delimiter });
    }

    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}"))
}

pub fn append(path: &Path, message: &str) -> Result<(), OutputError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", message)?;

    Ok(())
}
