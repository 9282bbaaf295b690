//! `sample.h` patching.
//!
//! The hex dumper names the array after the file path and knows nothing of
//! the target, so its declaration line is swapped for one the firmware
//! expects: a sample rate define, a length constant and a `sound_data`
//! array placed in flash with `PROGMEM`.

use std::fs;
use std::path::Path;

use crate::error::{PatchError, Result};

use super::rewrite_first_line;

/// Array name the firmware reads samples from.
pub const SAMPLE_ARRAY_NAME: &str = "sound_data";

/// The three lines that replace the dumper's declaration line.
pub fn header_preamble(sample_rate: u32, sound_length: u64) -> [String; 3] {
    [
        format!("#define SAMPLE_RATE {}", sample_rate),
        format!("const int sound_length={};", sound_length),
        format!("const unsigned char {}[] PROGMEM= {{", SAMPLE_ARRAY_NAME),
    ]
}

/// Patches the header at `header` for the converted sound at `sound`.
///
/// The length constant is the byte size of `sound`. Returns that size.
pub fn patch_header(header: &Path, sound: &Path, sample_rate: u32) -> Result<u64> {
    let sound_length = fs::metadata(sound)
        .map_err(|e| PatchError::patch_failed(sound, e))?
        .len();

    let preamble = header_preamble(sample_rate, sound_length);
    let preamble: Vec<&str> = preamble.iter().map(String::as_str).collect();
    rewrite_first_line(header, &preamble)?;

    log::info!(
        "Patched {} (sound_length={})",
        header.display(),
        sound_length
    );
    Ok(sound_length)
}
