//! Dump tool execution logic

use super::error::ExtractError;
use super::SectionExtractor;
use crate::infra::CommandExecutor;
use std::io;
use std::path::Path;

impl<CE: CommandExecutor> SectionExtractor<CE> {
    /// Check if the dump tool can be found in PATH (or at the given path)
    pub fn is_installed(&self) -> bool {
        which::which(&self.objdump).is_ok()
    }

    /// Run `<tool> -h --wide <file>` and return its stdout
    pub(super) fn run_section_headers(&self, file: &Path) -> Result<String, ExtractError> {
        log::debug!("running {} -h --wide {}", self.objdump, file.display());

        let output = self
            .cmd_executor
            .execute(|cmd| cmd.args(["-h", "--wide"]).arg(file), &self.objdump)
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => ExtractError::ToolMissing {
                    tool: self.objdump.clone(),
                },
                _ => ExtractError::Spawn {
                    tool: self.objdump.clone(),
                    file: file.to_path_buf(),
                    source,
                },
            })?;

        if !output.status.success() {
            return Err(ExtractError::CommandFailed {
                tool: self.objdump.clone(),
                file: file.to_path_buf(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
