//! Octet-stream adapters for KNX TPDUs.
//!
//! The codec in `knx-core` works over buffers. This crate connects it to
//! blocking [`std::io`] sources and sinks and, with the `tokio` feature, to
//! their async counterparts. No call retries or buffers across TPDUs; every
//! failure is handed back as a [`StreamError`].

pub mod error;
#[cfg(feature = "tokio")]
pub mod nonblocking;
pub mod stream;

pub use error::StreamError;
#[cfg(feature = "tokio")]
pub use nonblocking::{read_tpdu_async, write_tpdu_async};
pub use stream::{read_tpdu, write_tpdu};
