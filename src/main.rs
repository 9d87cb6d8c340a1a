//! edu-copilot - educator backend server

use std::net::IpAddr;

use anyhow::Result;
use clap::Parser;
use edu_copilot::config::{Config, ConfigOptions};
use edu_copilot::server::ApiServer;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "edu-copilot")]
#[command(about = "Educator backend: lesson plans, quizzes, assignments and Q&A via the Gemini API")]
struct Args {
    /// Host address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Generation model (overrides EDU_COPILOT_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Allowed CORS origin (overrides EDU_COPILOT_ALLOWED_ORIGIN)
    #[arg(long)]
    allowed_origin: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // API key and model are read once here; handlers only see the Arc
    let config = Config::from_env_with(ConfigOptions {
        model: args.model,
        allowed_origin: args.allowed_origin,
        ..Default::default()
    })?;

    let server = ApiServer::new(config)?;

    if let Err(e) = server.start(args.host, args.port).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    // The accept loop runs on a background task; park until interrupted
    tokio::signal::ctrl_c().await?;

    Ok(())
}
