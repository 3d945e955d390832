//! Sort trace server - serves instrumented sorting traces to the visualizer.

mod config;
mod element;
mod error;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::load_config;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "sorttrace-server")]
#[command(about = "HTTP endpoint returning step-by-step sorting traces")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Optional TOML file with request limits
    #[arg(long, default_value = "sorttrace.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sorttrace::logging::init(&["sorttrace=info", "sorttrace_server=info"])?;

    let args = Args::parse();

    let config = load_config(&args.config)?;
    info!(
        config = %args.config.display(),
        max_array_len = config.max_array_len,
        sort_timeout_ms = config.sort_timeout_ms,
        "starting sorttrace-server"
    );

    let app = routes::app(AppState::new(config));

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
