mod cli;
mod error;
mod kubernetes;
mod types;
mod utils;

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tracing::{debug, info};

use cli::Cli;
use kubernetes::Kubectl;
use types::{RunConfig, RunSummary};
use utils::no_logs_notice;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr, stdout is reserved for records
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let kubectl = Kubectl::new(cli.kubectl);
    info!("Using kubectl at {}", kubectl.binary().display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run_scan(&kubectl, &RunConfig::default(), &mut out).await?;
    info!(
        "Scanned {} namespaces ({} skipped), {} pods, {} log records",
        summary.namespaces_scanned, summary.namespaces_skipped, summary.pods, summary.records
    );
    Ok(())
}

/// Walk namespaces, then pods, then logs, writing one line per record (or a
/// notice for pods without logs). The first kubectl error aborts the walk.
async fn run_scan<W: Write>(
    kubectl: &Kubectl,
    config: &RunConfig,
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for namespace in kubectl.get_namespaces().await? {
        if namespace.contains(&config.exclude) {
            debug!("Skipping namespace {}", namespace);
            summary.namespaces_skipped += 1;
            continue;
        }
        summary.namespaces_scanned += 1;

        let pods = kubectl.get_pods(&namespace).await?.unwrap_or_default();
        info!("Namespace {}: {} pods", namespace, pods.len());

        for pod in pods {
            summary.pods += 1;
            let records = kubectl
                .get_logs(&pod.namespace, &pod.name, &config.logs)
                .await?
                .unwrap_or_default();

            if records.is_empty() {
                writeln!(out, "{}", no_logs_notice(&pod)).context("failed to write output")?;
                continue;
            }
            for record in &records {
                writeln!(out, "{}", record.to_json()?).context("failed to write output")?;
            }
            summary.records += records.len();
        }
    }

    Ok(summary)
}
