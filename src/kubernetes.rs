use crate::error::KubectlError;
use crate::types::{CommandOutput, LogOptions, LogRecord, Pod};
use crate::utils::{classify, parse_logs, parse_namespaces, parse_pods};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Thin wrapper around an external kubectl binary.
#[derive(Debug, Clone)]
pub struct Kubectl {
    binary: PathBuf,
}

impl Kubectl {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Run `kubectl <subcommand> <args...>` to completion and classify what it printed.
    pub async fn run(
        &self,
        subcommand: &str,
        args: &[String],
    ) -> Result<CommandOutput, KubectlError> {
        debug!(
            "Running {} {} {}",
            self.binary.display(),
            subcommand,
            args.join(" ")
        );
        let output = Command::new(&self.binary)
            .arg(subcommand)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| KubectlError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let result = classify(&stdout, &stderr);
        if let CommandOutput::Error(err) = &result {
            warn!("kubectl {} failed: {}", subcommand, err.trim_end());
        }
        Ok(result)
    }

    pub async fn get_namespaces(&self) -> Result<Vec<String>, KubectlError> {
        let args = vec![
            "namespaces".to_string(),
            "--no-headers".to_string(),
            "--all-namespaces".to_string(),
        ];
        match self.run("get", &args).await? {
            CommandOutput::Empty => Ok(Vec::new()),
            CommandOutput::Lines(lines) => Ok(parse_namespaces(&lines)),
            CommandOutput::Error(stderr) => Err(KubectlError::ExternalCommand { stderr }),
        }
    }

    /// `None` means kubectl reported no pods in the namespace.
    pub async fn get_pods(&self, namespace: &str) -> Result<Option<Vec<Pod>>, KubectlError> {
        let args = vec![
            "pods".to_string(),
            format!("--namespace={}", namespace),
            "--no-headers".to_string(),
        ];
        match self.run("get", &args).await? {
            CommandOutput::Empty => Ok(None),
            CommandOutput::Lines(lines) => Ok(Some(parse_pods(namespace, &lines))),
            CommandOutput::Error(stderr) => Err(KubectlError::ExternalCommand { stderr }),
        }
    }

    pub async fn get_logs(
        &self,
        namespace: &str,
        pod: &str,
        opts: &LogOptions,
    ) -> Result<Option<Vec<LogRecord>>, KubectlError> {
        let mut args = vec![
            pod.to_string(),
            format!("--namespace={}", namespace),
            "--timestamps".to_string(),
        ];
        if let Some(limit) = opts.limit.filter(|l| *l > 0) {
            args.push(format!("--tail={}", limit));
        }
        if let Some(since) = opts.since.as_deref().filter(|s| !s.is_empty()) {
            args.push(format!("--since={}", since));
        }
        match self.run("logs", &args).await? {
            CommandOutput::Empty => Ok(None),
            CommandOutput::Lines(lines) => {
                Ok(Some(parse_logs(namespace, pod, &lines, opts.limit)))
            }
            CommandOutput::Error(stderr) => Err(KubectlError::ExternalCommand { stderr }),
        }
    }
}
