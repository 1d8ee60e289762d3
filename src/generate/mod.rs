//! Output generation: deprecated stub classes and Rector rename-rule
//! configuration files.

pub mod rules;
pub mod stubs;

pub use rules::write_rules;
pub use stubs::{StubReport, generate_stubs};
