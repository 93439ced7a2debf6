//! Sia node management API access.
//!
//! This module provides the typed response models for the node endpoints the
//! collector queries, and a small HTTP client exposing them behind the
//! [`NodeClient`](client::NodeClient) capability trait so the snapshot
//! builder can be exercised against test doubles.

pub mod client;
pub mod serde_helpers;
pub mod types;

// Re-export commonly used items
pub use client::{NodeClient, SiaClient};
pub use types::{Contract, FileInfo, RenterContracts, RenterFiles, RenterInfo, WalletInfo};
