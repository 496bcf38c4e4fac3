/// Outbound adapters - Infrastructure implementations of outbound ports
mod bom_payload;

pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
