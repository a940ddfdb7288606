//! SpecWave - spectrum-compatible synthetic ground motions
//!
//! This binary generates artificial acceleration time histories whose
//! response spectra match a target design spectrum, and computes response
//! spectra of recorded histories.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use specwave_cli::commands;

/// SpecWave - spectrum-compatible ground-motion synthesis
#[derive(Parser)]
#[command(name = "specwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a time history matching a design spectrum
    Generate {
        /// Path to the design spectrum CSV (period, Sa)
        #[arg(short, long)]
        spec: String,

        /// Time-history length in seconds
        #[arg(long, default_value_t = 60.0)]
        duration: f64,

        /// Sampling interval in seconds
        #[arg(long, default_value_t = 0.01)]
        dt: f64,

        /// Envelope function (id, level1, level2)
        #[arg(long, default_value = "id")]
        envelope: String,

        /// Seed for the random phase draw
        #[arg(long, default_value_t = 42)]
        seed: u32,

        /// Iteration budget for the matching loop
        #[arg(long, default_value_t = 3)]
        iterations: usize,

        /// Table format for the time history
        #[arg(long, default_value = "text", value_parser = ["text", "csv"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Print a machine-readable run report instead of status lines
        #[arg(long)]
        json: bool,
    },

    /// Compute the response spectrum of a recorded time history
    Spectrum {
        /// Path to the time-history CSV (time, acceleration)
        #[arg(short, long)]
        input: String,

        /// Fraction of critical damping
        #[arg(long, default_value_t = 0.05)]
        damping: f64,

        /// Table format for the spectrum
        #[arg(long, default_value = "text", value_parser = ["text", "csv"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            spec,
            duration,
            dt,
            envelope,
            seed,
            iterations,
            format,
            output,
            json,
        } => commands::generate::run(
            &spec,
            duration,
            dt,
            &envelope,
            seed,
            iterations,
            &format,
            output.as_deref(),
            json,
        ),
        Commands::Spectrum {
            input,
            damping,
            format,
            output,
        } => commands::spectrum::run(&input, damping, &format, output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["specwave", "generate", "--spec", "dsa.csv"]).unwrap();
        match cli.command {
            Commands::Generate {
                spec,
                duration,
                dt,
                envelope,
                seed,
                iterations,
                format,
                output,
                json,
            } => {
                assert_eq!(spec, "dsa.csv");
                assert!((duration - 60.0).abs() < 1e-12);
                assert!((dt - 0.01).abs() < 1e-12);
                assert_eq!(envelope, "id");
                assert_eq!(seed, 42);
                assert_eq!(iterations, 3);
                assert_eq!(format, "text");
                assert!(output.is_none());
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_with_options() {
        let cli = Cli::try_parse_from([
            "specwave",
            "generate",
            "--spec",
            "dsa.csv",
            "--duration",
            "40",
            "--dt",
            "0.02",
            "--envelope",
            "level1",
            "--seed",
            "7",
            "--iterations",
            "5",
            "--format",
            "csv",
            "--output",
            "wave.csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                spec,
                duration,
                dt,
                envelope,
                seed,
                iterations,
                format,
                output,
                json,
            } => {
                assert_eq!(spec, "dsa.csv");
                assert!((duration - 40.0).abs() < 1e-12);
                assert!((dt - 0.02).abs() < 1e-12);
                assert_eq!(envelope, "level1");
                assert_eq!(seed, 7);
                assert_eq!(iterations, 5);
                assert_eq!(format, "csv");
                assert_eq!(output.as_deref(), Some("wave.csv"));
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_with_json() {
        let cli =
            Cli::try_parse_from(["specwave", "generate", "--spec", "dsa.csv", "--json"]).unwrap();
        match cli.command {
            Commands::Generate { json, .. } => assert!(json),
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_requires_spec_for_generate() {
        let err = Cli::try_parse_from(["specwave", "generate"]).err().unwrap();
        assert!(err.to_string().contains("--spec"));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from([
            "specwave", "generate", "--spec", "dsa.csv", "--format", "yaml"
        ])
        .is_err());
    }

    #[test]
    fn test_cli_parses_spectrum() {
        let cli = Cli::try_parse_from(["specwave", "spectrum", "--input", "wave.csv"]).unwrap();
        match cli.command {
            Commands::Spectrum {
                input,
                damping,
                format,
                output,
            } => {
                assert_eq!(input, "wave.csv");
                assert!((damping - 0.05).abs() < 1e-12);
                assert_eq!(format, "text");
                assert!(output.is_none());
            }
            _ => panic!("expected spectrum command"),
        }
    }

    #[test]
    fn test_cli_parses_spectrum_with_damping() {
        let cli = Cli::try_parse_from([
            "specwave", "spectrum", "--input", "wave.csv", "--damping", "0.02",
        ])
        .unwrap();
        match cli.command {
            Commands::Spectrum { damping, .. } => assert!((damping - 0.02).abs() < 1e-12),
            _ => panic!("expected spectrum command"),
        }
    }

    #[test]
    fn test_cli_requires_input_for_spectrum() {
        let err = Cli::try_parse_from(["specwave", "spectrum"]).err().unwrap();
        assert!(err.to_string().contains("--input"));
    }
}
