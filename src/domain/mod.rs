//! Domain layer containing the records both services store.
//!
//! # Architecture
//!
//! - [`entities`] - Typed records for short links and to-do items
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP or storage layers. Repository
//! traits are implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
