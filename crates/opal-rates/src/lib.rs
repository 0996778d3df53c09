//! opal-rates
//!
//! OTP reimbursement rate tables and the billing classifier. Pure data and
//! pure functions — the tables are compiled-in configuration, and
//! classification performs no I/O.

pub mod classify;
pub mod tables;
pub mod vocab;

pub use classify::classify;
