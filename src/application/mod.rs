// src/application/mod.rs
//! Use cases over the domain: identity (register, login) and posts
//! (create, update, delete, public reads).
pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
