//! Test fixture helpers for section header reports

#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Stand-in for `objdump -h --wide FILE`: prints FILE, fails like objdump on
/// a missing file or unexpected arguments
pub const FAKE_OBJDUMP_SCRIPT: &str = r#"#!/bin/sh
if [ "$1" != "-h" ] || [ "$2" != "--wide" ] || [ $# -ne 3 ]; then
    echo "fake-objdump: unexpected arguments: $*" >&2
    exit 3
fi
if [ ! -f "$3" ]; then
    echo "fake-objdump: '$3': No such file" >&2
    exit 1
fi
cat "$3"
"#;

/// Write `contents` to `path` and mark it executable
pub fn write_executable(path: &Path, contents: &str) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, contents)?;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

/// Render a GNU-style `-h --wide` report for the given sections
pub fn section_report(file_name: &str, sections: &[(&str, u64)]) -> String {
    let mut out = format!(
        "\n{}:     file format elf64-x86-64\n\nSections:\n\
         Idx Name          Size      VMA               LMA               File off  Algn  Flags\n",
        file_name
    );
    for (idx, (name, size)) in sections.iter().enumerate() {
        out.push_str(&format!(
            "  {:<2} {:<13} {:08x}  0000000000000000  0000000000000000  00000040  2**4  CONTENTS, ALLOC, LOAD\n",
            idx, name, size
        ));
    }
    out
}

/// Write a fake object file whose "dump" lists the given sections
pub fn create_object(dir: &Path, file_name: &str, sections: &[(&str, u64)]) -> io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, section_report(file_name, sections))?;
    Ok(path)
}

/// Write a fake object file with raw dump output
pub fn create_raw_object(dir: &Path, file_name: &str, report: &str) -> io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, report)?;
    Ok(path)
}
