//! Frequency bookkeeping
//!
//! - [`Counts`]: raw bit-pattern frequencies returned by a backend
//! - [`OutcomeTally`]: histogram of final coin or dice outcomes

pub mod counts;
pub mod tally;

pub use counts::Counts;
pub use tally::OutcomeTally;
