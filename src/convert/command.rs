//! Running external tools to completion.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{PatchError, Result};

/// Runs `command` and waits for it.
///
/// Spawn failures map to TOOL_NOT_FOUND, a non-zero exit to
/// CONVERSION_FAILED with the tool's stderr attached. There is no timeout.
pub(crate) fn run_tool(mut command: Command, program: &Path) -> Result<()> {
    log::debug!("Running {:?}", command);

    let output = command
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| PatchError::tool_not_found(program, e))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        return Err(PatchError::conversion_failed(format!(
            "{} exited with {}: {}",
            program.display(),
            output.status,
            stderr.trim()
        )));
    }

    if !stderr.trim().is_empty() {
        log::debug!("{}: {}", program.display(), stderr.trim());
    }
    Ok(())
}
