use std::path::PathBuf;

use clap::Parser;

use crate::render::RenderMode;

/// Default HTTP listening port.
const DEFAULT_PORT: u16 = 8080;

/// Server configuration, parsed from command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "proto-mock-server",
    version,
    about = "Serve a templated protobuf message over HTTP, resolved at runtime from compiled descriptor sets"
)]
pub struct ServerConfig {
    /// Full protobuf type name of the message to serve (e.g. `acme.v1.Payment`)
    #[arg(short = 'm', long = "message-type")]
    pub message_type: String,

    /// Path to the text-format template file
    #[arg(short = 'f', long = "template")]
    pub template: PathBuf,

    /// Compiled descriptor set file (`protoc --descriptor_set_out` / `buf build -o`);
    /// repeat the flag to load several containers
    #[arg(short = 'd', long = "descriptor-set", required = true)]
    pub descriptor_sets: Vec<PathBuf>,

    /// HTTP listening port
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// When to render the template: once at startup, or fresh per request
    #[arg(long, value_enum, default_value_t = RenderMode::Static)]
    pub render_mode: RenderMode,
}
