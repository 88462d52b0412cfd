//! KNX transport-layer encoding and decoding in pure Rust.
//!
//! `knx-core` turns the Transport Protocol Data Unit (TPDU) carried inside a
//! KNX `L_Data` frame into a structured [`Tpdu`](tpdu::Tpdu) and back. It is
//! `no_std`-compatible and works over caller-owned buffers, so it can be used
//! standalone on constrained devices or underneath `knx-stream`.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`alloc`** (default) — enables [`Tpdu`](tpdu::Tpdu), which owns its payload.
//! - **`serde`** — derives `Serialize`/`Deserialize` on core types.
//! - **`defmt`** — derives `defmt::Format` for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Application-layer service codes (APCI) and their split-field helpers.
pub mod apci;
/// Zero-copy reader and bounded writer over caller-owned buffers.
pub mod encoding;
/// Error types for encoding and decoding operations.
pub mod error;
/// Transport-layer packet kinds (TPCI) and header-byte helpers.
pub mod tpci;
/// The TPDU record and its wire codec.
#[cfg(feature = "alloc")]
pub mod tpdu;

pub use apci::ServiceCode;
pub use error::{DecodeError, EncodeError};
pub use tpci::PacketKind;
#[cfg(feature = "alloc")]
pub use tpdu::{PayloadFormat, Tpdu};
