//! Flutter-facing bindings for QuickyNote core.

pub mod api;
