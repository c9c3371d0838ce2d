use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kube-log-scan")]
#[command(about = "Dump recent pod logs from every non-system namespace as JSON lines")]
pub struct Cli {
    /// Path to the kubectl binary
    #[arg(long, default_value = "/usr/local/bin/kubectl")]
    pub kubectl: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
