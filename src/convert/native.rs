//! In-process replacement for `xxd -i`.
//!
//! Produces the same text layout so the header patcher sees identical input
//! whichever dumper ran.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{ErrorCode, PatchError, Result};

use super::HexDumper;

/// Bytes per output line, as in `xxd -i`.
const BYTES_PER_LINE: usize = 12;

/// Hex dumper that formats the array itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHexDumper;

impl HexDumper for NativeHexDumper {
    fn dump(&self, input: &Path, output: &Path) -> Result<()> {
        log::info!(
            "Dumping {} to {} (native)",
            input.display(),
            output.display()
        );

        let bytes = fs::read(input).map_err(|e| {
            PatchError::with_source(
                ErrorCode::ConversionFailed,
                format!("Failed to read {}: {}", input.display(), e),
                e,
            )
        })?;

        let text = render_c_array(&c_array_name(input), &bytes);
        fs::write(output, text).map_err(|e| {
            PatchError::with_source(
                ErrorCode::ConversionFailed,
                format!("Failed to write {}: {}", output.display(), e),
                e,
            )
        })
    }
}

/// Variable name `xxd -i` uses for a path.
///
/// Every character that is not ASCII alphanumeric becomes `_`, and a leading
/// digit gets a `__` prefix: `patches/kick/kick.wav` gives
/// `patches_kick_kick_wav`.
pub fn c_array_name(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut name = String::with_capacity(raw.len() + 2);
    if raw.starts_with(|c: char| c.is_ascii_digit()) {
        name.push_str("__");
    }
    name.extend(
        raw.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }),
    );
    name
}

/// Renders `bytes` as a C array declaration followed by a length constant.
pub fn render_c_array(name: &str, bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 6 + 2 * name.len() + 64);
    let _ = writeln!(out, "unsigned char {}[] = {{", name);

    let lines = bytes.chunks(BYTES_PER_LINE).count();
    for (index, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        out.push_str("  ");
        let hex: Vec<String> = chunk.iter().map(|b| format!("0x{:02x}", b)).collect();
        out.push_str(&hex.join(", "));
        if index + 1 < lines {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("};\n");
    let _ = writeln!(out, "unsigned int {}_len = {};", name, bytes.len());
    out
}
