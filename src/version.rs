//! Dotted-numeric version values.
//!
//! The classmap and the deprecation snapshot both speak in dotted version
//! strings ("3.9.0", "4.0"). Comparison is component-wise numeric with
//! missing trailing components treated as zero, so "3.9" and "3.9.0" are
//! equal and "3.10" sorts after "3.9.0".

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Removal version applied when a registration call omits its third
/// argument, and when the version map has no entry during stub generation.
pub const DEFAULT_REMOVAL_VERSION: &str = "4.0";

/// A parsed dotted-numeric version.
///
/// Non-numeric components parse as zero rather than failing; the inputs
/// here come from a classmap we do not control.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Parse a version string. Never fails: empty or junk components
    /// become zero.
    pub fn parse(s: &str) -> Self {
        let components = s
            .split('.')
            .map(|part| part.trim().parse::<u64>().unwrap_or(0))
            .collect();
        Self { components }
    }

    /// Component at `index`, with missing trailing components reading
    /// as zero.
    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

impl FromStr for Version {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            match self.component(i).cmp(&other.component(i)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
