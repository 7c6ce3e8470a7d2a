//! MDD Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the configuration,
//! logging setup and a ready-wired [`MddClient`].

pub mod adapters;
pub mod client;
pub mod persistence;
pub mod serialization;
pub mod settings;
pub mod telemetry;

pub use adapters::ReqwestHttpClient;
pub use client::{ApiHttpClient, ClientError, MddClient};
pub use persistence::{FileStorage, MemoryStorage};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};
pub use settings::{ClientConfig, ConfigError};
pub use telemetry::init_tracing;
