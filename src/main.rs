//! patchgen: turns a sound file into a ready-to-flash sample player patch.
//!
//! Copies the template directory to `patches/<name>`, resamples the sound
//! with sox, dumps it into `sample.h` and renames the sketch and README
//! title after the sound.

use patchgen::cli::{Cli, NO_INPUT_MESSAGE};
use patchgen::error::Result;
use patchgen::generation::PatchPipeline;
use patchgen::types::PatchReport;

fn main() {
    let cli = Cli::parse_args();
    init_logging(&cli);

    match run(&cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Runs the command and returns the process exit status.
fn run(cli: &Cli) -> Result<i32> {
    let Some(sound_file) = cli.sound_file.as_deref() else {
        println!("{}", NO_INPUT_MESSAGE);
        return Ok(cli.missing_input_exit_code());
    };

    let config = cli.config();
    log::debug!("Configuration: {:?}", config);

    let pipeline = PatchPipeline::from_config(config)?;
    let report = pipeline.run(sound_file)?;

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::warn!("Cannot encode report as JSON: {}", e);
                print_summary(&report);
            }
        }
    } else {
        print_summary(&report);
    }

    Ok(0)
}

/// Sets up env_logger at the `-v` level, letting `RUST_LOG` override it.
fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Prints what was generated.
fn print_summary(report: &PatchReport) {
    println!(
        "Created patch '{}' in {}",
        report.name,
        report.output_dir.display()
    );
    println!(
        "  Sound:  {} ({} bytes)",
        report.sound_path.display(),
        report.sound_length
    );
    println!("  Header: {}", report.header_path.display());
    println!("  Sketch: {}", report.sketch_path.display());
    println!("  README: {}", report.readme_path.display());
}
