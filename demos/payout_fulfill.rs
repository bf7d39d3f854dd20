//! Payout example.
//!
//! Creates a confirmed SEPA payout and fulfills it.
//!
//! Run with: HYPERSWITCH_API_KEY=snd_... cargo run --example payout_fulfill

use hyperswitch_rs::models::{
    Currency, PayoutBank, PayoutCreateRequest, PayoutEntityType, PayoutMethodData, PayoutStatus,
};
use hyperswitch_rs::{HyperswitchClient, MinorUnit};

#[tokio::main]
async fn main() -> hyperswitch_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = HyperswitchClient::from_env()?;

    let destination = PayoutMethodData::Bank(PayoutBank::Sepa {
        iban: "NL46TEST0136169112".into(),
        bic: Some("ABNANL2A".into()),
        bank_name: Some("Deutsche Bank".into()),
    });
    let mut request = PayoutCreateRequest::new(MinorUnit::new(1000), Currency::EUR, destination);
    request.confirm = Some(true);
    request.entity_type = Some(PayoutEntityType::Individual);
    request.description = Some("Its my first payout request".into());

    let payout = client.payouts().create(request).await?;
    println!("Payout {} is {:?}", payout.payout_id, payout.status);

    if payout.status == PayoutStatus::RequiresFulfillment {
        let payout = client.payouts().fulfill(&payout.payout_id).await?;
        println!("Fulfilled: {:?}", payout.status);
    }
    Ok(())
}
