//! Version-bucketed Rector rename-rule configuration files.
//!
//! The writer walks the version matrix (3.0 through 4.99), filters the
//! snapshot for each version, and emits a `joomla_{major}_{minor}.php`
//! Rector config whenever the applicable rename set changes. Consecutive
//! versions with an identical set collapse into the file written for the
//! earliest of them.

use crate::error::{StubGenError, StubGenResult};
use crate::snapshot::VersionedSnapshot;
use crate::version::Version;
use std::collections::BTreeMap;
use std::io::Write;
use std::ops::RangeInclusive;
use std::path::Path;

/// Major versions covered by the rule matrix.
const MAJOR_VERSIONS: RangeInclusive<u32> = 3..=4;

/// Minor versions covered per major.
const MINOR_VERSIONS: RangeInclusive<u32> = 0..=99;

/// Write one Rector rule file per distinct filtered rename set.
///
/// One progress line per written file goes to `progress`. Returns the
/// number of files written. The very first version in the matrix always
/// writes, even when its rename set is empty, so consumers have a
/// baseline file to chain from.
pub fn write_rules(
    snapshot: &VersionedSnapshot,
    output_dir: &Path,
    progress: &mut dyn Write,
) -> StubGenResult<usize> {
    std::fs::create_dir_all(output_dir).map_err(|source| StubGenError::FileWrite {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut previous: Option<BTreeMap<String, String>> = None;
    let mut written = 0;

    for major in MAJOR_VERSIONS {
        for minor in MINOR_VERSIONS {
            let version = format!("{major}.{minor}.0");
            let renames = snapshot.filter_for_version(&Version::parse(&version));

            if previous.as_ref() == Some(&renames) {
                continue;
            }

            let file_name = format!("joomla_{major}_{minor}.php");
            let path = output_dir.join(&file_name);
            std::fs::write(&path, render_rule_file(major, minor, &renames)).map_err(
                |source| StubGenError::FileWrite {
                    path: path.clone(),
                    source,
                },
            )?;

            // Progress is display-only; a closed pipe must not abort
            // the run.
            let _ = writeln!(progress, "Version {version}: wrote {file_name}");
            written += 1;
            previous = Some(renames);
        }
    }

    Ok(written)
}

/// Render one Rector configuration registering the batch rename rule.
fn render_rule_file(major: u32, minor: u32, renames: &BTreeMap<String, String>) -> String {
    let mut out = String::from(
        "<?php\n\
         declare(strict_types=1);\n\
         \n\
         use Rector\\Config\\RectorConfig;\n\
         use Rector\\Renaming\\Rector\\Name\\RenameClassRector;\n\
         \n",
    );
    out.push_str(&format!(
        "// Class renames that apply from Joomla {major}.{minor} on.\n"
    ));
    out.push_str("return static function (RectorConfig $rectorConfig): void {\n");
    out.push_str("    $rectorConfig->ruleWithConfiguration(RenameClassRector::class, [\n");
    for (from, to) in renames {
        out.push_str(&format!(
            "        '{}' => '{}',\n",
            quote_php(from.trim_start_matches('\\')),
            quote_php(to.trim_start_matches('\\')),
        ));
    }
    out.push_str("    ]);\n};\n");
    out
}

/// Escape a class name for a single-quoted PHP string.
fn quote_php(name: &str) -> String {
    name.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_escapes_namespace_separators() {
        let mut renames = BTreeMap::new();
        renames.insert("JFoo".to_string(), "Joomla\\CMS\\Foo".to_string());
        let rendered = render_rule_file(3, 9, &renames);
        assert!(rendered.contains("'JFoo' => 'Joomla\\\\CMS\\\\Foo',"));
        assert!(rendered.contains("RenameClassRector::class"));
        assert!(rendered.contains("from Joomla 3.9 on"));
    }

    #[test]
    fn test_render_strips_leading_separator() {
        let mut renames = BTreeMap::new();
        renames.insert("\\JBar".to_string(), "\\Joomla\\CMS\\Bar".to_string());
        let rendered = render_rule_file(4, 0, &renames);
        assert!(rendered.contains("'JBar' => 'Joomla\\\\CMS\\\\Bar',"));
    }
}
