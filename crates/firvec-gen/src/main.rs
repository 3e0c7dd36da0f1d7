//! Command-line test-vector generator.
//!
//! Usage:
//!
//! ```text
//! firvec-gen                 # run with the built-in reference parameters
//! firvec-gen config.yaml     # run with a YAML configuration
//! firvec-gen --print-config  # print the example configuration and exit
//! ```

use std::path::Path;
use std::process::ExitCode;

use firvec_core::{pipeline, GenConfig};
use tracing::info;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = match args.get(1).map(String::as_str) {
        None => GenConfig::default(),
        Some("--print-config") => {
            print!("{}", GenConfig::example_yaml());
            return ExitCode::SUCCESS;
        }
        Some("--help") | Some("-h") => {
            eprintln!("usage: firvec-gen [config.yaml | --print-config]");
            return ExitCode::SUCCESS;
        }
        Some(path) => match GenConfig::load(Path::new(path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error: failed to load {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    match pipeline::generate(&config).and_then(|v| {
        pipeline::write(&v, &config)?;
        Ok(v)
    }) {
        Ok(vectors) => {
            info!(
                num_taps = vectors.design.num_taps(),
                beta = vectors.design.beta(),
                group_delay_ns = vectors.design.group_delay_secs() * 1e9,
                "done"
            );
            println!(
                "wrote {} coefficient codes to {} and {} signal codes to {}",
                vectors.tap_codes.len(),
                config.taps_path.display(),
                vectors.signal_codes.len(),
                config.signal_path.display(),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
