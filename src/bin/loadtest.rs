//! Drive concurrent create, confirm and retrieve flows against a server.

use std::time::Duration;

use clap::Parser;
use hyperswitch_rs::models::Currency;
use hyperswitch_rs::tools::{run_load_test, LoadTestConfig};
use hyperswitch_rs::{ClientConfig, Credentials, Environment, HyperswitchClient, MinorUnit};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Secret API key
    #[arg(long, env = "HYPERSWITCH_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Server to target instead of the hosted environment
    #[arg(long, env = "HYPERSWITCH_BASE_URL")]
    base_url: Option<Url>,

    /// Hosted environment: sandbox or production
    #[arg(long, default_value = "sandbox")]
    environment: Environment,

    /// Concurrent users
    #[arg(short, long, default_value_t = 10)]
    users: usize,

    /// Flows per user
    #[arg(short, long, default_value_t = 1)]
    iterations: usize,

    /// Payment amount in minor units
    #[arg(long, default_value_t = 6540)]
    amount: i64,

    /// Payment currency
    #[arg(long, default_value = "USD")]
    currency: Currency,

    /// Pause between a user's flows, in milliseconds
    #[arg(long, default_value_t = 1000)]
    think_time_ms: u64,
}

#[tokio::main]
async fn main() -> hyperswitch_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }
    let client = HyperswitchClient::with_config(Credentials::api_key(cli.api_key), cli.environment, config)?;

    let load = LoadTestConfig {
        users: cli.users,
        iterations_per_user: cli.iterations,
        amount: MinorUnit::new(cli.amount),
        currency: cli.currency,
        think_time: Duration::from_millis(cli.think_time_ms),
    };

    let report = run_load_test(&client, &load).await?;
    println!("{report}");
    Ok(())
}
