use std::path::PathBuf;

use clap::{Parser, Subcommand};
use offdict_config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "offdict",
    version,
    about = "Keyboard and selection front end for the offdict lookup server"
)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    /// Lookup server host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Lookup server port
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Verbose logging; honours RUST_LOG
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Route key events read from stdin, one per line
    Overlay,
    /// Look up every new system selection
    Watch {
        /// Read stdin instead of polling: `!release` looks up the current
        /// selection, other lines are looked up as typed
        #[arg(long)]
        stdin: bool,
    },
    /// Look up a single term and print the raw response
    Lookup { text: String },
}

impl Cli {
    /// Config file (or env defaults) with command-line overrides on top
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load_or_new(&self.config)?;
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.lookup.host = host.clone();
        }
        if let Some(port) = self.port {
            config.lookup.port = port;
        }
        if self.debug {
            config.log.debug = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["offdict", "--host", "10.0.0.2", "--port", "4040", "lookup", "word"]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.lookup.host, "10.0.0.2");
        assert_eq!(config.lookup.port, 4040);
        assert!(!config.log.debug);
        assert!(matches!(cli.command, Command::Lookup { ref text } if text == "word"));
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli::parse_from(["offdict", "watch", "--debug"]);
        let mut config = Config::default();
        let port = config.lookup.port;
        cli.apply(&mut config);

        assert_eq!(config.lookup.port, port);
        assert!(config.log.debug);
        assert!(matches!(cli.command, Command::Watch { stdin: false }));
    }

    #[test]
    fn watch_reads_stdin_on_request() {
        let cli = Cli::parse_from(["offdict", "watch", "--stdin"]);
        assert!(matches!(cli.command, Command::Watch { stdin: true }));
    }
}
