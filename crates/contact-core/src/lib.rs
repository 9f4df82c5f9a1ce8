//! Contact Core Library
//!
//! Domain types, the storage port, and error taxonomy for the contact-form
//! service.

pub mod error;
pub mod ports;
pub mod record;
pub mod types;

pub use error::{ContactError, Result};
pub use ports::ContactStore;
pub use record::{zip_rows, Record};
pub use types::Submission;
