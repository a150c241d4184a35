//! Model Gateway abstractions.
//!
//! - `ModelGateway`: RPITIT trait for concrete chat-completion backends
//! - `BoxModelGateway`: object-safe wrapper for dynamic dispatch

pub mod box_gateway;
pub mod gateway;
