//! Board state management for Corkboard.
//!
//! This module implements the board store: a single authoritative in-memory
//! board (ordered columns referencing owned tasks) mutated through a closed
//! set of commands, plus the snapshot format used for local persistence and
//! user export. Every command applies atomically: it validates its input
//! against the current state before touching it, so a rejected command never
//! leaves a partial mutation behind. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the [`domain::BoardStore`] state machine in [`domain`]
//! - The snapshot wire format and its structural validation in [`snapshot`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod snapshot;

#[cfg(test)]
mod tests;
