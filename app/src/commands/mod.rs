//! FILENAME: app/src/commands/mod.rs
// PURPOSE: Exposes all command sub-modules under one flat API surface.

pub mod attendance;
pub mod employees;
pub mod reports;
pub mod table;

pub use attendance::*;
pub use employees::*;
pub use reports::*;
pub use table::*;
