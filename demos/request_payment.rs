//! Requests a payment and prints where to send the user.
//!
//! ```text
//! ZARINPAL_MERCHANT_ID=... cargo run --example request_payment -- 1000 http://localhost:3000/api/payment
//! ```

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zarinpal::{GatewayConfig, PaymentGateway, PaymentRequestInput, ZarinpalClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zarinpal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let client = ZarinpalClient::from_config(&config)?;

    let mut args = std::env::args().skip(1);
    let amount: i64 = args
        .next()
        .unwrap_or_else(|| "1000".to_string())
        .parse()
        .context("amount must be an integer")?;
    let callback_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:3000/api/payment".to_string());

    tracing::info!("Environment: {}", client.environment());

    let response = client
        .create_payment_request(PaymentRequestInput::new(amount, "a simple test", callback_url))
        .await?;

    if client.was_payment_request_successful(&response) {
        println!("redirect url: {}", client.get_redirect_url(&response));
    } else {
        println!("translated error: {}", client.translate_error(&response));
        println!("raw response: {}", response.as_json());
    }

    Ok(())
}
