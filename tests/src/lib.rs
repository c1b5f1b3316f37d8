//! End-to-end sweeps against real loopback listeners.

mod sweep;
mod utils;
