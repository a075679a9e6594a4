//! Marshrut Core Library
//!
//! Core routing logic for the marshrut metro route planner.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
pub mod stats;
