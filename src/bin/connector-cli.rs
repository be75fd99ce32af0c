use std::path::PathBuf;

use clap::Parser;
use connector_kit::config::{load_config, ConnectorConfig};
use connector_kit::connector::{
    with_connector_write_context, with_connector_write_no_cache, Connector, ConnectorWriteOption,
    DispatchError, Dispatcher,
};
use connector_kit::message::ResponseWriter;
use connector_kit::observability::init_logging;

#[derive(Parser)]
#[command(name = "connector-cli")]
#[command(about = "Build a response writer, apply write options, and print it", long_about = None)]
struct Cli {
    /// TOML configuration file with default write options.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mark the response as non-cacheable.
    #[arg(long)]
    no_cache: bool,

    /// Extra context entry, KEY=VALUE. May be repeated.
    #[arg(long = "context", value_parser = parse_key_value)]
    context: Vec<(String, String)>,

    /// Response payload.
    #[arg(short, long, default_value = "")]
    payload: String,

    /// Originating node id.
    #[arg(short, long)]
    node: Option<String>,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))?;
    if key.is_empty() {
        return Err("context key must not be empty".to_string());
    }
    Ok((key.to_string(), value.to_string()))
}

/// Prints each dispatched writer as JSON.
struct StdoutDispatcher;

impl Dispatcher for StdoutDispatcher {
    fn dispatch(&self, writer: ResponseWriter) -> Result<(), DispatchError> {
        let json = serde_json::to_string_pretty(&writer)
            .map_err(|e| DispatchError::Transport(e.to_string()))?;
        println!("{json}");
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ConnectorConfig::default(),
    };

    init_logging(&config.observability.log_level);
    tracing::info!(
        no_cache = config.writer.no_cache,
        default_context = config.writer.context.len(),
        "connector-cli starting"
    );

    let connector = Connector::from_config(&config.writer, StdoutDispatcher);

    let mut options: Vec<ConnectorWriteOption> = cli
        .context
        .into_iter()
        .map(|(k, v)| with_connector_write_context(k, v))
        .collect();
    if cli.no_cache {
        options.push(with_connector_write_no_cache());
    }

    let mut writer = ResponseWriter::with_payload(cli.payload);
    writer.node = cli.node;

    connector.write(writer, &options)?;
    Ok(())
}
