//! Observability for vercomply.
//! `tracing` crate with `EnvFilter`, configured through `VERCOMPLY_LOG`.

pub mod setup;

pub use setup::init_tracing;
