//! Deprecated stub class generation.
//!
//! For every alias in the classmap we emit one small PHP file declaring
//! the alias as an empty subclass of its canonical replacement. Editors
//! resolve the legacy name through the stub; nothing ever loads these at
//! runtime.

use crate::error::{StubGenError, StubGenResult};
use crate::parsing::ClassMaps;
use crate::version::DEFAULT_REMOVAL_VERSION;
use std::path::Path;

/// Outcome counts for one stub generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StubReport {
    /// Stub files written.
    pub written: usize,
    /// Files left alone because they already existed and overwrite was
    /// not requested.
    pub skipped: usize,
    /// Write attempts that failed. Failures are logged and the run
    /// continues; callers decide whether a non-zero count is fatal.
    pub failed: usize,
}

/// Generate one stub file per alias in `maps` into `output_dir`.
///
/// `generated_for` labels the release the stubs were produced for and
/// only appears in the generated header. With `overwrite` unset, an
/// existing stub file wins and is counted as skipped.
pub fn generate_stubs(
    maps: &ClassMaps,
    output_dir: &Path,
    generated_for: &str,
    overwrite: bool,
) -> StubGenResult<StubReport> {
    std::fs::create_dir_all(output_dir).map_err(|source| StubGenError::FileWrite {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut report = StubReport::default();
    for (alias_key, canonical) in &maps.classes {
        let alias = alias_key.trim_start_matches('\\');
        let canonical = canonical.trim_start_matches('\\');
        let path = output_dir.join(format!("{}.php", alias.replace('\\', "_")));

        if !overwrite && path.exists() {
            report.skipped += 1;
            continue;
        }

        // Version lookup uses the original map key; the trim above is
        // only for rendered output.
        let version = maps
            .versions
            .get(alias_key)
            .map(String::as_str)
            .unwrap_or(DEFAULT_REMOVAL_VERSION);
        let stub = render_stub(alias, canonical, version, generated_for);

        match std::fs::write(&path, stub) {
            Ok(()) => report.written += 1,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to write stub");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

/// Render the stub source for one alias.
fn render_stub(alias: &str, canonical: &str, version: &str, generated_for: &str) -> String {
    // Namespaced aliases need a namespace statement so the declared name
    // matches the alias exactly.
    let (namespace, class_name) = match alias.rsplit_once('\\') {
        Some((ns, name)) => (Some(ns), name),
        None => (None, alias),
    };

    let mut stub = String::from("<?php\n");
    stub.push_str(&format!(
        "/**\n\
         \x20* Stub for the deprecated class alias {alias}, generated for editor\n\
         \x20* and static-analysis type resolution. Never loaded at runtime.\n\
         \x20*\n\
         \x20* Generated for {generated_for} by {} {}.\n\
         \x20*\n\
         \x20* @deprecated {version} Use {canonical} instead.\n\
         \x20*/\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ));
    if let Some(ns) = namespace {
        stub.push_str(&format!("namespace {ns};\n\n"));
    }
    stub.push_str(&format!("class {class_name} extends \\{canonical}\n{{\n}}\n"));
    stub
}
