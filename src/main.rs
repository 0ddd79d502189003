// ABOUTME: Entry point for the costview binary.
// ABOUTME: Initializes tracing, loads configuration, and composes the client shell.

use std::sync::Arc;

use costview_client::{HeaderCookies, ReqwestTransport, Shell, ShellConfig, TracingNavigator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "costview=debug".parse().unwrap()),
        )
        .init();

    let config = ShellConfig::from_env()?;

    // The session's cookie jar, in document.cookie form. Unset means a
    // fresh session with no anti-forgery token yet.
    let cookies = std::env::var("COSTVIEW_COOKIES")
        .map(|header| HeaderCookies::parse(&header))
        .unwrap_or_else(|_| HeaderCookies::empty());

    let transport = Arc::new(ReqwestTransport::new(config.base_url.clone()));
    let shell = Shell::new(&config, &cookies, Arc::new(TracingNavigator), transport);

    let startup = shell.resolve("/");
    tracing::info!(
        controller = %startup.entry.controller,
        template = %shell.template_url(startup.entry),
        routes = shell.routes().entries().len(),
        "costview shell ready"
    );

    Ok(())
}
