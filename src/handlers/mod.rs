//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the application.
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Index** (`index`) - Landing page and route fallback
//! - **Outage** (`outage`) - Static page served while the database is down

mod health_check;
mod index;
mod outage;

pub use health_check::*;
pub use index::*;
pub use outage::*;
