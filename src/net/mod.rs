//! Network boundary: REST helpers and the wire types they exchange.

pub mod api;
pub mod types;
