// src/application/ports/mod.rs
//! Outbound adapters the application layer depends on. Implementations live
//! in `infrastructure`; tests substitute their own.
pub mod security;
pub mod time;
