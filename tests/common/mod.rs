//! Common test utilities and helpers
//!
//! Integration tests never need a real objdump. [`fake_objdump`] installs a
//! small shell script that behaves like `objdump -h --wide FILE` by printing
//! FILE verbatim, so each "object file" in a test is simply the section
//! header report the tool should produce for it.

pub mod fixtures;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static FAKE_OBJDUMP: OnceLock<PathBuf> = OnceLock::new();

/// Path to the fake dump tool, created on first use.
///
/// Every test must call this before spawning any process: the script is
/// written while other test threads are blocked here, so no child process can
/// inherit a write handle to it.
#[allow(dead_code)]
pub fn fake_objdump() -> &'static Path {
    FAKE_OBJDUMP.get_or_init(|| {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory for fake tool");
        let path = temp_dir.path().join("fake-objdump");
        fixtures::write_executable(&path, fixtures::FAKE_OBJDUMP_SCRIPT)
            .expect("Failed to write fake objdump");

        // Leak temp_dir to keep the tool alive for the whole test run
        std::mem::forget(temp_dir);
        path
    })
}

/// Path string for passing to the command line
#[allow(dead_code)]
pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("Failed to convert path to string")
}
