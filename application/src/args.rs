//! [`Args`] definitions.

use std::ffi::OsString;

use clap::Parser;

/// REST API server of the hotel booking system.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML configuration file. Missing file is not an error.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

impl Args {
    /// Parses [`Args`] of the current process.
    ///
    /// # Errors
    ///
    /// If unknown or malformed arguments are provided.
    pub fn parse() -> Result<Self, clap::Error> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses [`Args`] from the provided command line, the first item of
    /// which is the binary name.
    ///
    /// # Errors
    ///
    /// If unknown or malformed arguments are provided.
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}

#[cfg(test)]
mod spec {
    use super::Args;

    #[test]
    fn defaults_config_path() {
        let args = Args::parse_from(["server"]).unwrap();

        assert_eq!(args.config, "config.toml");
    }

    #[test]
    fn accepts_config_path() {
        let args = Args::parse_from(["server", "-c", "dev.toml"]).unwrap();
        assert_eq!(args.config, "dev.toml");

        let args = Args::parse_from(["server", "--config", "prod"]).unwrap();
        assert_eq!(args.config, "prod");
    }

    #[test]
    fn rejects_unknown_args() {
        assert!(Args::parse_from(["server", "--port", "80"]).is_err());
    }
}
