//! # CLI Module
//!
//! User-facing command implementations. The command functions own all
//! terminal output: progress spinners, the success report and fatal error
//! lines. They delegate the actual work to [`crate::workflow`].

mod voucher;

pub use voucher::voucher;
