//! CLI commands for marshrut

pub mod compare;
pub mod dispatch;
pub mod map;
pub mod route;
pub mod stations;
pub mod stats;
