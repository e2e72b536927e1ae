//! Persistence layer. Every query the service runs lives in this module
//! tree, grouped per entity; handlers never touch SQL directly.

use sqlx::PgPool;

pub mod domes;
pub mod reservations;
pub mod sessions;
pub mod shows;
pub mod themes;
pub mod tickets;

pub use sessions::SessionFilter;
pub use shows::ShowFilter;

#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
