//! Mock responder for protobuf APIs.
//!
//! Given one or more compiled descriptor set files and the full name of a
//! message type, resolves that type's descriptor at runtime (no generated
//! code for the type), renders a text-format template into a concrete
//! message, and serves the binary encoding over a single HTTP route.

pub mod config;
pub mod descriptor;
pub mod render;
pub mod server;
