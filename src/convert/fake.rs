//! In-memory stand-ins for the external tools.
//!
//! They write canned output, remember what they were asked to do and can be
//! switched into a failing mode to exercise error paths.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ErrorCode, PatchError, Result};

use super::{AudioResampler, HexDumper};

/// Resampler that writes a fixed payload instead of converting.
#[derive(Debug, Default)]
pub struct FakeResampler {
    payload: Vec<u8>,
    fail: bool,
    calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl FakeResampler {
    /// Writes `payload` as the converted sound.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            ..Self::default()
        }
    }

    /// Fails every call as a tool with a non-zero exit would.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// `(input, output)` pairs seen so far.
    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl AudioResampler for FakeResampler {
    fn resample(&self, input: &Path, output: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((input.to_path_buf(), output.to_path_buf()));
        if self.fail {
            return Err(PatchError::conversion_failed(format!(
                "fake resampler refused {}",
                input.display()
            )));
        }
        write_output(output, &self.payload)
    }
}

/// Hex dumper that writes fixed text instead of dumping.
#[derive(Debug)]
pub struct FakeHexDumper {
    text: String,
    fail: bool,
    calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl FakeHexDumper {
    /// Array text in the shape `xxd -i` produces.
    pub const DEFAULT_TEXT: &'static str = "unsigned char fake_wav[] = {\n  0x80, 0x7f, 0x80\n};\nunsigned int fake_wav_len = 3;\n";

    /// Writes [`Self::DEFAULT_TEXT`].
    pub fn new() -> Self {
        Self::with_text(Self::DEFAULT_TEXT)
    }

    /// Writes `text` as the header.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fail: false,
            calls: RefCell::default(),
        }
    }

    /// Fails every call as a tool with a non-zero exit would.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// `(input, output)` pairs seen so far.
    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl Default for FakeHexDumper {
    fn default() -> Self {
        Self::new()
    }
}

impl HexDumper for FakeHexDumper {
    fn dump(&self, input: &Path, output: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((input.to_path_buf(), output.to_path_buf()));
        if self.fail {
            return Err(PatchError::conversion_failed(format!(
                "fake hex dumper refused {}",
                input.display()
            )));
        }
        write_output(output, self.text.as_bytes())
    }
}

fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| {
        PatchError::with_source(
            ErrorCode::ConversionFailed,
            format!("Failed to write {}: {}", path.display(), e),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resampler_records_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("kick.wav");
        let fake = FakeResampler::new(vec![0x80; 5]);

        fake.resample(Path::new("in/kick.wav"), &output).unwrap();

        assert_eq!(fs::read(&output).unwrap(), vec![0x80; 5]);
        assert_eq!(
            fake.calls(),
            vec![(PathBuf::from("in/kick.wav"), output.clone())]
        );
    }

    #[test]
    fn failing_resampler_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("kick.wav");
        let err = FakeResampler::failing()
            .resample(Path::new("in.wav"), &output)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConversionFailed);
        assert!(!output.exists());
    }

    #[test]
    fn hex_dumper_writes_text() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sample.h");
        let fake = FakeHexDumper::with_text("line\n");

        fake.dump(Path::new("kick.wav"), &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "line\n");
        assert_eq!(fake.calls().len(), 1);
    }

    #[test]
    fn failing_hex_dumper() {
        let dir = tempfile::tempdir().unwrap();
        let fake = FakeHexDumper::failing();
        let err = fake
            .dump(Path::new("kick.wav"), &dir.path().join("sample.h"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConversionFailed);
        assert_eq!(fake.calls().len(), 1);
    }
}
