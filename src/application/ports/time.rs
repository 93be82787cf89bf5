// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of every timestamp the services write: creation and update times,
/// soft-delete tombstones and token validity windows.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
