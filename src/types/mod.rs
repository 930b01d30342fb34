//! Type definitions for opspulse

mod error;
mod record;
mod report;

pub use error::*;
pub use record::*;
pub use report::*;
