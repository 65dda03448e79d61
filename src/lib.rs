//! Core library for the `mercury-probe` CLI.
//!
//! The probe resolves layered settings (config file, environment, CLI
//! `-name value` pairs), sends one validating request, then times a fixed
//! number of sequential requests and reports their average latency. The
//! binary is the primary interface; the library exposes the same pieces for
//! embedding and testing.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod probe;
pub mod report;
