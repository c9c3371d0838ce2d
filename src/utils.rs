use crate::types::{CommandOutput, LogRecord, Pod};

const NO_RESOURCES: &str = "No resources found";

/// Classify captured kubectl output. Only stderr decides; the exit status is ignored.
pub fn classify(stdout: &str, stderr: &str) -> CommandOutput {
    if !stderr.is_empty() {
        if stderr.contains(NO_RESOURCES) {
            return CommandOutput::Empty;
        }
        return CommandOutput::Error(stderr.to_string());
    }
    CommandOutput::Lines(stdout.split('\n').map(str::to_string).collect())
}

/// First whitespace-delimited token of a line, if any.
pub fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

pub fn parse_namespaces(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| first_token(line))
        .map(str::to_string)
        .collect()
}

pub fn parse_pods(namespace: &str, lines: &[String]) -> Vec<Pod> {
    lines
        .iter()
        .filter_map(|line| first_token(line))
        .map(|name| Pod {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
        .collect()
}

/// Split a `--timestamps` log line into its timestamp and the rest of the message.
pub fn parse_log_line(namespace: &str, pod: &str, line: &str) -> Option<LogRecord> {
    let mut tokens = line.split_whitespace();
    let timestamp = tokens.next()?;
    Some(LogRecord {
        pod: pod.to_string(),
        namespace: namespace.to_string(),
        timestamp: timestamp.to_string(),
        message: tokens.collect::<Vec<_>>().join(" "),
    })
}

pub fn parse_logs(
    namespace: &str,
    pod: &str,
    lines: &[String],
    limit: Option<usize>,
) -> Vec<LogRecord> {
    let records = lines
        .iter()
        .filter_map(|line| parse_log_line(namespace, pod, line));
    match limit {
        Some(limit) => records.take(limit).collect(),
        None => records.collect(),
    }
}

pub fn no_logs_notice(pod: &Pod) -> String {
    format!(
        "No logs found for pod `{}` in namespace `{}`",
        pod.name, pod.namespace
    )
}
