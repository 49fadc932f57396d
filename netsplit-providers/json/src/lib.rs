//! JSON provider loading network adjacency documents for the netsplit core.

mod errors;
mod network;

pub use errors::JsonNetworkError;
pub use network::JsonNetwork;
