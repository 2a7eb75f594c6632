pub mod outage;

pub use outage::db_outage_middleware;
