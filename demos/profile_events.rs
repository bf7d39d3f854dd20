//! Dashboard example.
//!
//! Lists undelivered webhook events of a profile, shows their delivery
//! attempts and prints the profile's default connector order. Needs a
//! dashboard JWT.
//!
//! Run with: HYPERSWITCH_JWT=... HYPERSWITCH_PROFILE_ID=pro_... cargo run --example profile_events

use futures_util::StreamExt;
use hyperswitch_rs::models::EventListConstraints;
use hyperswitch_rs::{ClientConfig, Credentials, Environment, HyperswitchClient, ProfileId};

#[tokio::main]
async fn main() -> hyperswitch_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let token = std::env::var("HYPERSWITCH_JWT")
        .expect("HYPERSWITCH_JWT environment variable required");
    let profile_id = std::env::var("HYPERSWITCH_PROFILE_ID")
        .expect("HYPERSWITCH_PROFILE_ID environment variable required");

    let client = HyperswitchClient::with_config(
        Credentials::bearer(token),
        Environment::Sandbox,
        ClientConfig::from_env()?.with_profile_id(profile_id.as_str()),
    )?;

    let routing = client.routing().default_for_profile(&ProfileId::new(&profile_id)).await?;
    println!("Default connectors:");
    for choice in &routing.connectors {
        println!("  {}", choice.connector());
    }

    let mut events = client
        .events()
        .list_stream(EventListConstraints {
            is_delivered: Some(false),
            limit: Some(25),
            ..Default::default()
        })
        .take(10);

    while let Some(event) = events.next().await {
        let event = event?;
        println!("{} {:?} for {}", event.event_id, event.event_type, event.object_id);

        let attempts = client
            .events()
            .delivery_attempts(&event.merchant_id, &event.event_id)
            .await?;
        for attempt in attempts {
            println!(
                "  {:?} -> {:?}",
                attempt.delivery_attempt, attempt.response.status_code
            );
        }
    }
    Ok(())
}
