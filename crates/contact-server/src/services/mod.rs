//! Request-scoped services

pub mod submissions;

pub use submissions::SubmissionService;
