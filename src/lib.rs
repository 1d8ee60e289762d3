//! The main library module for stubgen
pub mod config;
pub mod error;
pub mod generate;
pub mod io;
pub mod parsing;
pub mod snapshot;
pub mod version;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{StubGenError, StubGenResult};
pub use generate::{StubReport, generate_stubs, write_rules};
pub use parsing::{AliasExtractor, AliasRecord, ClassMaps};
pub use snapshot::{SnapshotEntry, VersionedSnapshot};
pub use version::{DEFAULT_REMOVAL_VERSION, Version};
