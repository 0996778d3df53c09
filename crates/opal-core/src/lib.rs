//! opal-core
//!
//! Pure domain types for OTP reimbursement: rate entries, billing context,
//! and the recommendation produced by classification. No I/O — this is the
//! shared vocabulary of the Opal system.

pub mod error;
pub mod models;
