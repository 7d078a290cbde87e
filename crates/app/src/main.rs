//! Recruitbot - recruiter reply assistant
//!
//! `recruitbot` serves the HTTP API; `recruitbot login` runs the one-time
//! interactive Google OAuth flow and stores the tokens in the OS keychain.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use recruitbot_app::{logging, router, AppContext};
use recruitbot_infra::{config, GoogleOAuthClient, KeyringTokenStore, TokenStorage};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => info!(error = %err, "no .env file loaded"),
    }

    if std::env::args().nth(1).as_deref() == Some("login") {
        return login().await;
    }
    serve().await
}

async fn serve() -> anyhow::Result<()> {
    let config = config::load().context("loading configuration")?;
    let bind_addr = config.server.bind_addr.clone();
    let ctx = AppContext::new(config)
        .await
        .context("building application context")?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    info!(addr = %bind_addr, "recruitbot listening");
    axum::serve(listener, router(ctx)).await.context("serving http")?;
    Ok(())
}

/// Interactive copy-paste OAuth flow.
async fn login() -> anyhow::Result<()> {
    let config = config::load().context("loading configuration")?;
    let oauth = GoogleOAuthClient::new(
        config.calendar.client_id.clone(),
        config.calendar.client_secret.clone(),
    );

    println!("Open this URL in a browser and grant calendar access:");
    println!("\n{}\n", oauth.authorization_url()?);
    print!("Paste the authorization code here: ");
    io::stdout().flush()?;

    let mut code = String::new();
    io::stdin().lock().read_line(&mut code)?;
    let code = code.trim();
    anyhow::ensure!(!code.is_empty(), "no authorization code provided");

    let tokens = oauth.exchange_code(code).await?;
    KeyringTokenStore.save(&config.calendar.account_name, &tokens)?;
    println!("Login successful; tokens stored in the OS keychain.");
    Ok(())
}
