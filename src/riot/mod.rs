//! Typed client for the Riot REST API endpoints used by the lookup flow.

pub mod client;
pub mod region;
pub mod traits;
pub mod types;

mod endpoints;

pub use client::{CredentialProvider, RiotClient};
pub use region::{Platform, Region};
