//! Workflow commands: `::name key=value::message` lines the runner picks up
//! from stdout.

pub fn issue_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{}", command);

    if !properties.is_empty() {
        let properties = properties
            .iter()
            .map(|(key, value)| format!("{}={}", key, escape_property(value)))
            .collect::<Vec<_>>()
            .join(",");
        line.push(' ');
        line.push_str(&properties);
    }

    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
