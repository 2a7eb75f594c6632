//! # Business Logic Services
//!
//! Services encapsulate the outage guard's moving parts behind small
//! interfaces so HTTP glue and tests can swap them freely.
//!
//! ## Available Services
//!
//! - **Email** (`email`) - Email delivery service with multiple implementations
//! - **Guard** (`guard`) - Per-request database check and outage substitution
//! - **Notifier** (`notifier`) - Best-effort administrator alerts
//! - **Probe** (`probe`) - Named connection registry and liveness probe

pub mod email;
pub mod guard;
pub mod notifier;
pub mod probe;
