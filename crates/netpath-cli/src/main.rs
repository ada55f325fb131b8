use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use netpath_cli::logging::{init_logging, LoggingConfig};
use netpath_lib::OutputFormat;

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Device network validation and shortest paths")]
struct Cli {
    /// JSON snapshot with `devices` and `connections` lists.
    #[arg(long, env = "NETPATH_SNAPSHOT")]
    snapshot: PathBuf,

    /// Output format: json or text.
    #[arg(long, env = "NETPATH_FORMAT", default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute shortest-path costs and parents from a source device.
    Paths {
        /// Source device name.
        #[arg(long)]
        source: String,
    },
    /// List the devices directly reachable from a device.
    Neighbors {
        /// Device name.
        #[arg(long)]
        device: String,
    },
    /// Validate the snapshot and summarise the resulting graph.
    Validate,
    /// List canonical devices, including ones added from connections.
    Devices,
    /// List unique connections in declaration order.
    Connections,
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();

    let result = run(&cli);
    if let Err(err) = &result {
        error!(error = %format!("{err:#}"), "command failed");
    }
    result
}

fn run(cli: &Cli) -> Result<()> {
    info!(command = ?cli.command, snapshot = %cli.snapshot.display(), "command invoked");
    let graph = commands::load_graph(&cli.snapshot)?;

    match &cli.command {
        Command::Paths { source } => commands::paths::handle_paths(&graph, source, cli.format),
        Command::Neighbors { device } => {
            commands::neighbors::handle_neighbors(&graph, device, cli.format)
        }
        Command::Validate => commands::validate::handle_validate(&graph, cli.format),
        Command::Devices => commands::list::handle_devices(&graph, cli.format),
        Command::Connections => commands::list::handle_connections(&graph, cli.format),
    }
}
