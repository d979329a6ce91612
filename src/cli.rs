use std::path::PathBuf;

use clap::Parser;

use rustwheel::SpinConfig;

/// Spin a wheel of names and knock one out per spin until a winner is left.
#[derive(Debug, Parser)]
#[command(name = "rustwheel", version, about)]
pub struct Cli {
    /// Comma separated names to start with
    #[arg(long, value_name = "CSV")]
    pub names: Option<String>,

    /// Shorter spins
    #[arg(long)]
    pub quick: bool,

    /// Seed for reproducible spins
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fewest names a spin is allowed with
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub min_participants: Option<u64>,

    /// Where the name list is exported to (default: next to the executable)
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

impl Cli {
    pub fn spin_config(&self) -> SpinConfig {
        let config = if self.quick {
            SpinConfig::quick()
        } else {
            SpinConfig::normal()
        };
        match self.min_participants {
            Some(min) => config.with_min_participants(usize::try_from(min).unwrap_or(usize::MAX)),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rustwheel"]).unwrap();
        assert_eq!(cli.spin_config(), SpinConfig::normal());
        assert!(cli.names.is_none());
        assert!(cli.log.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "rustwheel",
            "--quick",
            "--min-participants",
            "1",
            "--seed",
            "42",
            "--names",
            "a,b",
        ])
        .unwrap();
        let config = cli.spin_config();
        assert_eq!(config.duration_ms, SpinConfig::quick().duration_ms);
        assert_eq!(config.min_participants, 1);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.names.as_deref(), Some("a,b"));
    }

    #[test]
    fn test_zero_participants_rejected() {
        assert!(Cli::try_parse_from(["rustwheel", "--min-participants", "0"]).is_err());
    }
}
