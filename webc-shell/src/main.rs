//! Webc Shell - Main entry point

use tracing_subscriber::EnvFilter;
use webc_core::ShellConfig;
use webc_shell::Shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration from environment
    let config = ShellConfig::from_env();

    // Resolve routes and print the result
    let shell = Shell::new(config);
    let report = shell.run().await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
