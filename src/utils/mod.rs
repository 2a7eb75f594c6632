//! # Utility Modules
//!
//! This module contains utility functions and constants used throughout the
//! outage guard.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Probe, alert and page configuration values
//! - **HTML** (`html`) - Outage page and administrator alert templates
//! - **Secrets** (`secret`) - File-or-env secret lookup
//! - **Telemetry** (`telemetry`) - Global `tracing` subscriber setup
//! - **Trace** (`trace`) - Error cause chain rendering for outage reports
//! - **Validators** (`validator`) - Configuration value validation

pub mod constant;
pub mod html;
pub mod secret;
pub mod telemetry;
pub mod trace;
pub mod validator;
