// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static site generator adapters for the Sparkle SSG gateway.
//!
//! Each of the 28 supported generators is described by a static
//! [`AdapterSpec`] in [`catalog`]. The [`AdapterRegistry`] turns a name into
//! an [`Adapter`] on first lookup and caches it; an [`AdapterHandle`] carries
//! one caller's connection state for an adapter.

pub mod adapter;
pub mod catalog;
pub mod metadata;
pub mod registry;
pub mod spec;

pub use adapter::{Adapter, AdapterHandle};
pub use metadata::{GatewayMetadata, metadata};
pub use registry::AdapterRegistry;
pub use spec::AdapterSpec;
