//! Player lookup over the Riot API.
//!
//! The library resolves a public `Name#TAG` identifier to an account, its
//! summoner profile and its most recent matches, composed into a single
//! [`search::PlayerSearchResult`]. The binary in `main.rs` is a thin
//! consumer that renders the result as text.

pub mod config;
pub mod error;
pub mod logging;
pub mod riot;
pub mod search;
