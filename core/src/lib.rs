//! # Hostmap Core
//!
//! The sync pipeline, leaves first:
//!
//! * **[`source`]**: asks the overlay client for its peers.
//! * **[`filter`]**: decides which (peer, address) pairs are eligible.
//! * **[`block`]**: renders eligible peers into the delimited hosts block.
//! * **[`hosts`]**: swaps the block into the hosts file.
//! * **[`sync`]**: runs the four steps above in order.

pub mod block;
pub mod filter;
pub mod hosts;
pub mod source;
pub mod sync;
