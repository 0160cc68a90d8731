use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tracing_subscriber::{EnvFilter, fmt};

use registration_form::modules::registration::adapters::inbound::headless_view::HeadlessFormView;
use registration_form::modules::registration::adapters::outbound::http_gateway::HttpRegistrationGateway;
use registration_form::modules::registration::controller::RegistrationFormController;
use registration_form::modules::registration::core::fields::FormField;
use registration_form::modules::registration::core::input::RegistrationInput;
use registration_form::shell::config::GatewayConfig;

/// Reads one registration as JSON from stdin and submits it the way the form
/// would, printing what the page would show.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = GatewayConfig::from_env()?;
    tracing::info!(
        endpoint = %config.endpoint,
        timeout = ?config.timeout,
        "registration gateway configured"
    );
    let gateway = Arc::new(HttpRegistrationGateway::new(config.endpoint, config.timeout)?);
    let controller = RegistrationFormController::new(gateway);

    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;
    let input: RegistrationInput = serde_json::from_str(&raw)?;

    let mut view = HeadlessFormView::with_input(&input);
    controller.on_name_input().await;
    controller.on_age_input().await;
    controller.on_password_input(&mut view).await;
    controller.on_email_input(&mut view).await;
    controller.on_confirmation_input(&mut view).await;
    println!("password strength: {}", view.strength().feedback());

    let state = controller.on_submit(&mut view).await;
    tracing::info!(?state, "submission finished");

    if let Some(banner) = view.banner() {
        println!("{}", banner.text());
    }
    for field in FormField::ALL {
        if let Some(message) = view.field_error(field) {
            println!("{}: {message}", field.error_id());
        }
    }
    Ok(())
}
