//! Refund example.
//!
//! Creates and confirms an automatic-capture payment, refunds part of it,
//! then streams every refund of that payment.
//!
//! Run with: HYPERSWITCH_API_KEY=snd_... cargo run --example refund_flow

use futures_util::StreamExt;
use hyperswitch_rs::models::{
    Card, Currency, PaymentCreateRequestBuilder, PaymentMethodData, RefundListRequest, RefundRequest,
};
use hyperswitch_rs::{Error, HyperswitchClient, MinorUnit};

#[tokio::main]
async fn main() -> hyperswitch_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = HyperswitchClient::from_env()?;

    let request = PaymentCreateRequestBuilder::new()
        .amount(MinorUnit::new(2000))
        .currency(Currency::EUR)
        .confirm(true)
        .payment_method_data(PaymentMethodData::Card(Card::new(
            "4242424242424242",
            "10",
            "30",
            "123",
        )))
        .build()?;
    let payment = client.payments().create(request).await?;
    println!("Payment {} is {:?}", payment.payment_id, payment.status);

    let refund = RefundRequest::new(payment.payment_id.clone())
        .amount(MinorUnit::new(500))
        .reason("Customer returned one item");
    match client.refunds().create(refund).await {
        Ok(refund) => println!("Refund {} is {:?}", refund.refund_id, refund.status),
        Err(Error::Api { code, message, .. }) => {
            println!("Refund rejected ({code:?}): {message}");
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    let mut refunds = client.refunds().list_stream(RefundListRequest {
        payment_id: Some(payment.payment_id),
        limit: Some(10),
        ..Default::default()
    });
    while let Some(refund) = refunds.next().await {
        let refund = refund?;
        println!("  {} {} {:?}", refund.refund_id, refund.amount, refund.status);
    }
    Ok(())
}
