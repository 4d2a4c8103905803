//! Corkboard: personal kanban board engine.
//!
//! This crate provides the state-management core of a personal task board:
//! ordered columns of task references, drag-and-drop style reordering, tag
//! and text filtering, and a JSON snapshot format for local persistence and
//! user export. Rendering, gesture handling, and theming UI are external
//! collaborators that drive the core through its command API.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board state and command logic with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (filesystem, memory)
//!
//! # Modules
//!
//! - [`board`]: The board store, its closed command set, and snapshot
//!   persistence

pub mod board;
