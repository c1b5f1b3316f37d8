//! # portsweep-common
//!
//! Shared vocabulary for the sweep engine and its front ends.
//!
//! * **[`network`]**: host targets and port ranges, parsed and validated.
//! * **[`scan`]**: probe outcomes and per-host results.
//! * **[`scanning`]**: the seams the engine is written against (resolution,
//!   probing, result sinks).
//! * **[`observer`]**: the injected observability collaborator.
//! * **[`signal`]**: cooperative stop handle shared by the driver and the CLI.

pub mod config;
pub mod error;
pub mod network;
pub mod observer;
pub mod scan;
pub mod scanning;
pub mod signal;
