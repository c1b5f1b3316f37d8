//! # portsweep-core
//!
//! The concurrent TCP connect-scan engine.
//!
//! Data flows leaf-first:
//!
//! 1. [`scanner::resolver`] maps a host string to one address.
//! 2. [`network::tcp`] attempts a single connect with a timeout.
//! 3. [`scanner::PortScanner`] runs a bounded worker pool over a port range
//!    and aggregates outcomes into an ordered [`ScanResult`].
//! 4. [`sweep::SweepService`] walks the hosts one at a time and hands each
//!    report to a [`ResultSink`].
//!
//! [`ScanResult`]: portsweep_common::scan::ScanResult
//! [`ResultSink`]: portsweep_common::scanning::ResultSink

pub mod network;
pub mod observer;
pub mod report;
pub mod scanner;
pub mod sweep;
