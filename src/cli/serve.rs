//! CLI command for the HTTP server

use clap::Args;

use crate::api::{run_server, AppState};
use crate::config::{HisaabPaths, Settings};
use crate::export::HtmlOptions;
use crate::storage::open_source;

/// Arguments of `hisaab serve`
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (default from settings)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default from settings)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Serve the built-in sample data instead of the data files
    #[arg(long)]
    pub sample: bool,
}

/// Handle `hisaab serve`
pub async fn handle_serve_command(
    paths: &HisaabPaths,
    settings: &Settings,
    args: ServeArgs,
) -> anyhow::Result<()> {
    let host = args.host.unwrap_or_else(|| settings.server.host.clone());
    let port = args.port.unwrap_or(settings.server.port);

    let source = open_source(settings, paths, args.sample, None);
    tracing::info!(source = source.name(), data_dir = %paths.data_dir().display(), "using statement source");

    let state = AppState::new(source, HtmlOptions::from(settings));
    run_server(state, &host, port).await
}
