//! # Database Liveness Probe
//!
//! A registry of named connection pools and the [`DatabaseProbe`] seam the
//! request guard pings before every request.
//!
//! Errors are classified through [`DatabaseFault`] rather than by matching
//! on driver types at the call site, so the guard only ever asks one
//! question: is the database unavailable?

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::utils::constant::PROBE_SQL;

/// Errors that can occur while probing a connection
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection `{0}` is not configured")]
    UnknownConnection(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Classifies errors raised while talking to the database.
pub trait DatabaseFault {
    /// `true` if the error means the database cannot serve requests right
    /// now, as opposed to a programming or configuration mistake.
    fn is_unavailable(&self) -> bool;
}

impl DatabaseFault for sqlx::Error {
    fn is_unavailable(&self) -> bool {
        matches!(
            self,
            sqlx::Error::Database(_)
                | sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::Protocol(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
        )
    }
}

impl DatabaseFault for ProbeError {
    fn is_unavailable(&self) -> bool {
        match self {
            ProbeError::UnknownConnection(_) => false,
            ProbeError::Database(e) => e.is_unavailable(),
        }
    }
}

/// Something that can check whether a named database connection is alive.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Runs a trivial statement against `connection`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::UnknownConnection`] if no such connection exists,
    /// or [`ProbeError::Database`] with the driver error if the statement fails.
    async fn ping(&self, connection: &str) -> Result<(), ProbeError>;
}

/// Named connection pools, looked up by logical name such as `"default"`.
#[derive(Clone, Debug, Default)]
pub struct ConnectionRegistry {
    pools: HashMap<String, PgPool>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `pool` under `name`, replacing any previous entry.
    pub fn with_connection(mut self, name: impl Into<String>, pool: PgPool) -> Self {
        self.pools.insert(name.into(), pool);
        self
    }

    /// Returns the pool registered under `name`.
    pub fn get(&self, name: &str) -> Result<&PgPool, ProbeError> {
        self.pools
            .get(name)
            .ok_or_else(|| ProbeError::UnknownConnection(name.to_string()))
    }
}

#[async_trait]
impl DatabaseProbe for ConnectionRegistry {
    #[instrument(skip(self))]
    async fn ping(&self, connection: &str) -> Result<(), ProbeError> {
        let pool = self.get(connection)?;

        // Returned to the pool when `conn` drops, whichever way we leave
        let mut conn = pool.acquire().await?;
        trace!("Acquired connection for probe");

        sqlx::query(PROBE_SQL).execute(&mut *conn).await?;

        debug!("Database probe succeeded");
        Ok(())
    }
}
