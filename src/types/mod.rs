//! Core types for patchgen.
//!
//! - [`SourceFile`]: the input audio file
//! - [`ProjectName`]: the identifier derived from it
//! - [`PatchLayout`]: paths of the patch directory and its artifacts
//! - [`PatchReport`]: summary of a finished run

mod layout;
mod project_name;
mod report;
mod source;

pub use layout::PatchLayout;
pub use project_name::ProjectName;
pub use report::PatchReport;
pub use source::SourceFile;
