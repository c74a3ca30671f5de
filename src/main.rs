use clap::Parser;

use proto_mock_server::config::ServerConfig;
use proto_mock_server::descriptor::{self, SchemaIndex};
use proto_mock_server::render::MessageRenderer;
use proto_mock_server::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "proto_mock_server=info,tower_http=info".into()),
        )
        .init();

    // clap prints usage and exits when required flags are missing.
    let config = ServerConfig::parse();

    let template = match std::fs::read_to_string(&config.template) {
        Ok(text) => text,
        Err(e) => {
            eprintln!(
                "proto-mock-server: cannot read template {}: {e}",
                config.template.display()
            );
            std::process::exit(1);
        }
    };
    if template.trim().is_empty() {
        eprintln!(
            "proto-mock-server: template {} is empty",
            config.template.display()
        );
        std::process::exit(1);
    }

    let index = match SchemaIndex::load(&config.descriptor_sets) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("proto-mock-server: schema load error: {e}");
            std::process::exit(1);
        }
    };

    // Resolution failures are fatal: the listener never binds.
    let message = match descriptor::resolve(&config.message_type, &index) {
        Ok(message) => message,
        Err(e) => {
            eprintln!("proto-mock-server: {e}");
            std::process::exit(1);
        }
    };

    let renderer = match MessageRenderer::new(message, template, config.render_mode) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("proto-mock-server: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(config.port, renderer).await {
        eprintln!("proto-mock-server: fatal error: {e}");
        std::process::exit(1);
    }
}
