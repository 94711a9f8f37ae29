//! Shared configuration, session, and error handling for AcademiX
//!
//! This crate provides common functionality used across the AcademiX client:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - The viewer session, passed explicitly to every operation

pub mod config;
pub mod error;
pub mod session;

pub use config::{ApiProvider, Config};
pub use error::{Error, Result};
pub use session::{Session, UserRole};
