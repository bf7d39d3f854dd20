//! Payment creation example.
//!
//! Creates a manual-capture card payment, confirms it, captures half and
//! prints the amounts in major units.
//!
//! Run with: HYPERSWITCH_API_KEY=snd_... cargo run --example create_payment

use hyperswitch_rs::models::{
    Card, CaptureMethod, Currency, PaymentCaptureRequest, PaymentConfirmRequest,
    PaymentCreateRequestBuilder, PaymentMethodData,
};
use hyperswitch_rs::{HyperswitchClient, MinorUnit};

#[tokio::main]
async fn main() -> hyperswitch_rs::Result<()> {
    tracing_subscriber::fmt::init();

    // Sandbox unless HYPERSWITCH_ENVIRONMENT or HYPERSWITCH_BASE_URL say otherwise
    let client = HyperswitchClient::from_env()?;
    println!("Using {}", client.base_url());

    let amount = MinorUnit::new(6540);
    let request = PaymentCreateRequestBuilder::new()
        .amount(amount)
        .currency(Currency::USD)
        .capture_method(CaptureMethod::Manual)
        .email("guest@example.com")
        .description("Its my first payment request")
        .build()?;

    let payment = client.payments().create(request).await?;
    println!("Created {} ({:?})", payment.payment_id, payment.status);

    let card = Card::new("4242424242424242", "10", "30", "123").with_holder_name("Joseph Doe");
    let confirm = PaymentConfirmRequest::with_payment_method_data(PaymentMethodData::Card(card));
    let payment = client.payments().confirm(&payment.payment_id, confirm).await?;
    println!("Confirmed: {:?}", payment.status);

    if let Some(url) = payment.redirect_url() {
        println!("Customer must complete authentication at {url}");
        return Ok(());
    }

    let half = MinorUnit::new(amount.get() / 2);
    let payment = client
        .payments()
        .capture(
            &payment.payment_id,
            PaymentCaptureRequest {
                amount_to_capture: Some(half),
                ..Default::default()
            },
        )
        .await?;

    println!(
        "Captured {} of {} USD: {:?}",
        half.to_major(Currency::USD),
        amount.to_major(Currency::USD),
        payment.status
    );
    Ok(())
}
