//! Component storage for the SBOM registry.
//!
//! The store owns every component record and the id allocator. All backends
//! implement the [`ComponentStore`] trait; the only backend today is
//! [`InMemoryComponentStore`].
//!
//! # Design Rules
//!
//! 1. Every write is atomic: readers observe either the whole record before
//!    the write or the whole record after it.
//! 2. Ids are allocated and inserted under the same exclusive lock, start at
//!    1, and are never reused.
//! 3. Drafts are validated before the write lock is taken. A rejected write
//!    leaves the store untouched.
//! 4. Reads may run concurrently with each other, never with a write.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryComponentStore;
pub use traits::ComponentStore;
