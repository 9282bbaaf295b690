//! Patch generation pipeline.
//!
//! Runs name derivation, scaffolding, conversion and the three rewrite steps
//! in order. The first failure aborts the run; whatever was already written
//! to the patch directory stays there.

use std::path::Path;

use crate::config::PatchConfig;
use crate::convert::{hex_dumper_for, AudioResampler, HexDumper, SoxResampler};
use crate::error::{PatchError, Result};
use crate::naming::derive_project_name;
use crate::patch::{patch_header, patch_readme};
use crate::rename::rename_sketch;
use crate::scaffold::build_scaffold;
use crate::types::{PatchReport, SourceFile};

/// Builds patches from sound files.
pub struct PatchPipeline<R, H> {
    config: PatchConfig,
    resampler: R,
    hex_dumper: H,
}

impl PatchPipeline<SoxResampler, Box<dyn HexDumper>> {
    /// Creates a pipeline using the external tools named in `config`.
    pub fn from_config(config: PatchConfig) -> Result<Self> {
        let resampler = SoxResampler::new(&config.tools);
        let hex_dumper = hex_dumper_for(&config.tools);
        Self::new(config, resampler, hex_dumper)
    }
}

impl<R: AudioResampler, H: HexDumper> PatchPipeline<R, H> {
    /// Creates a pipeline with explicit tool implementations.
    ///
    /// Fails with INVALID_CONFIG if `config` does not validate.
    pub fn new(config: PatchConfig, resampler: R, hex_dumper: H) -> Result<Self> {
        if let Some(reason) = config.validate() {
            return Err(PatchError::invalid_config(reason));
        }
        Ok(Self {
            config,
            resampler,
            hex_dumper,
        })
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    /// The resampler in use.
    pub fn resampler(&self) -> &R {
        &self.resampler
    }

    /// The hex dumper in use.
    pub fn hex_dumper(&self) -> &H {
        &self.hex_dumper
    }

    /// Builds the patch for the sound file at `input`.
    pub fn run(&self, input: &Path) -> Result<PatchReport> {
        let source = SourceFile::new(input)?;
        let name = derive_project_name(&source)?;

        if !source.exists() {
            return Err(PatchError::source_not_found(source.path()));
        }

        log::info!(
            "Building patch '{}' from {}",
            name,
            source.path().display()
        );

        let layout = build_scaffold(&self.config, &source, &name)?;
        log::info!("Scaffolded {}", layout.dir().display());

        let sound = layout.sound_path();
        self.resampler.resample(source.path(), &sound)?;

        let header = layout.header_path();
        self.hex_dumper.dump(&sound, &header)?;

        let sound_length = patch_header(&header, &sound, self.config.tools.sample_rate)?;
        rename_sketch(&layout)?;
        patch_readme(&layout.readme_path(), &name)?;

        Ok(PatchReport::new(&layout, sound_length))
    }
}
