//! # Hostmap Common
//!
//! Types shared by every layer of `tailscale-hostmap`.
//!
//! * **[`peer`]**: the [`peer::PeerRecord`] model produced by a peer source.
//! * **[`network`]**: address-family helpers.
//! * **[`config`]**: the immutable run configuration.
//! * **[`error`]**: the error taxonomy returned by the library crates.

pub mod config;
pub mod error;
pub mod network;
pub mod peer;
