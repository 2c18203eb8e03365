//! # oidgen-id
//!
//! Generation, parsing, and validation of legacy 12-byte MongoDB ObjectIds,
//! without a database driver.
//!
//! ## ID Format
//!
//! An ObjectId is 24 hex characters made of four fixed-width fields:
//!
//! | Field            | Hex digits | Source                          |
//! |------------------|------------|---------------------------------|
//! | timestamp        | 8          | Unix seconds                    |
//! | host fingerprint | 6          | CRC-32 of the host name         |
//! | process id       | 4          | OS process id                   |
//! | counter          | 6          | per-engine monotonic counter    |
//!
//! Example: `507f1f77bcf86cd799439011`
//!
//! Values too wide for their field keep only their leading hex digits, so
//! the string is always exactly 24 characters.
//!
//! ## Usage
//!
//! ```
//! use oidgen_id::ObjectId;
//!
//! let id = ObjectId::new();
//! assert!(ObjectId::is_valid(id.as_str()));
//!
//! let parsed: ObjectId = "507f1f77bcf86cd799439011".parse()?;
//! assert_eq!(parsed.process_id(), 0xd799);
//! # Ok::<(), oidgen_id::ObjectIdError>(())
//! ```
//!
//! Tests that need deterministic IDs build their own [`Engine`] over a
//! [`FixedEnvironment`] instead of going through the process-wide one.

mod encoding;
mod engine;
mod environment;
mod error;
mod object_id;

pub use encoding::host_fingerprint;
pub use engine::{Engine, MAX_COUNTER};
pub use environment::{
    Clock, Environment, FixedEnvironment, HostnameOverride, HostnameSource, ProcessIdSource,
    SystemEnvironment,
};
pub use error::ObjectIdError;
pub use object_id::{ObjectId, ObjectIdFields};
