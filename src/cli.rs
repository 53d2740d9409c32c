//! Command line interface.
//!
//! Long flags may be written with a single dash (`-dns 9.9.9.9`, `-json`) as well as the usual
//! double dash.

use crate::config::{AnswerPolicy, Config, Protocol};
use crate::error::Error;
use crate::report::{Format, RenderOptions};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

const LONG_FLAGS: &[&str] = &[
    "dns", "tcp", "timeout", "all", "json", "no-color", "config", "verbose", "help", "version",
];

/// Check that ACME DNS-01 challenge records are published.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "acmecheck", version, long_about = None)]
#[command(override_usage = "acmecheck [-h] [-v] [-dns 1.2.3.4] host.name...")]
pub struct Cli {
    /// Domain names to check, with or without the `_acme-challenge.` prefix
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Set the DNS server to query from [default: 1.1.1.1]
    #[arg(long, value_name = "ADDRESS")]
    pub dns: Option<String>,

    /// Output raw request results
    #[arg(short, long)]
    pub verbose: bool,

    /// Query over TCP instead of UDP
    #[arg(long)]
    pub tcp: bool,

    /// Per-query timeout [default: 5]
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Decode every matching answer record instead of only the first
    #[arg(long)]
    pub all: bool,

    /// Print one JSON report per line
    #[arg(long)]
    pub json: bool,

    /// Never color the output
    #[arg(long)]
    pub no_color: bool,

    /// JSON config file providing defaults for the resolver settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Build the resolver [`Config`]: the config file (if any), overridden by flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file can't be read or parsed.
    pub fn config(&self) -> Result<Config, Error> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                Config::try_from_file(path)?
            }
            None => Config::default(),
        };
        if let Some(dns) = &self.dns {
            config.server = dns.clone();
        }
        if self.tcp {
            config.protocol = Protocol::Tcp;
        }
        if let Some(secs) = self.timeout {
            config.timeout = Duration::from_secs(secs);
        }
        if self.all {
            config.answers = AnswerPolicy::All;
        }
        Ok(config)
    }

    /// `terminal` tells whether stdout is a terminal; colors are never used otherwise.
    #[must_use]
    pub fn render_options(&self, terminal: bool) -> RenderOptions {
        RenderOptions {
            format: if self.json { Format::Json } else { Format::Text },
            verbose: self.verbose,
            color: terminal && !self.no_color,
        }
    }
}

/// Rewrite single dash long flags (`-dns`, `-dns=1.1.1.1`) into their double dash form. The first
/// item is the program name and everything after `--` is left alone.
pub fn go_style_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut rewrite = true;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            let arg: OsString = arg.into();
            if i == 0 || !rewrite {
                return arg;
            }
            let long = match arg.to_str() {
                Some("--") => {
                    rewrite = false;
                    None
                }
                Some(s) => s
                    .strip_prefix('-')
                    .filter(|flag| !flag.starts_with('-') && is_long_flag(flag))
                    .map(|_| OsString::from(format!("-{s}"))),
                None => None,
            };
            long.unwrap_or(arg)
        })
        .collect()
}

fn is_long_flag(flag: &str) -> bool {
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(go_style_args(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn go_style_flags() {
        let cli = parse(&["acmecheck", "-v", "-dns", "9.9.9.9", "example.com", "example.org"]);
        assert!(cli.verbose);
        assert_eq!(cli.dns.as_deref(), Some("9.9.9.9"));
        assert_eq!(cli.names, vec!["example.com", "example.org"]);

        let cli = parse(&["acmecheck", "-dns=8.8.8.8:53", "-json", "-no-color", "x"]);
        assert_eq!(cli.dns.as_deref(), Some("8.8.8.8:53"));
        assert!(cli.json);
        assert!(cli.no_color);
    }

    #[test]
    fn double_dash_flags_still_work() {
        let cli = parse(&["acmecheck", "--dns", "9.9.9.9", "--tcp", "--timeout", "2", "x"]);
        assert_eq!(cli.dns.as_deref(), Some("9.9.9.9"));
        assert!(cli.tcp);
        assert_eq!(cli.timeout, Some(2));
    }

    #[test]
    fn names_after_separator_are_not_rewritten() {
        let args = go_style_args(["acmecheck", "-dns", "1.1.1.1", "--", "-json"]);
        assert_eq!(args[1], "--dns");
        assert_eq!(args[4], "-json");
    }

    #[test]
    fn help_and_no_names() {
        let err = Cli::try_parse_from(go_style_args(["acmecheck", "-h"])).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let cli = parse(&["acmecheck"]);
        assert!(cli.names.is_empty());
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&["acmecheck", "-dns", "9.9.9.9", "-tcp", "-timeout", "1", "-all", "x"])
            .config()
            .unwrap();
        assert_eq!(
            config,
            Config {
                server: "9.9.9.9".to_string(),
                protocol: Protocol::Tcp,
                timeout: Duration::from_secs(1),
                answers: AnswerPolicy::All,
            }
        );

        assert_eq!(parse(&["acmecheck", "x"]).config().unwrap(), Config::default());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acmecheck.json");
        std::fs::write(&path, r#"{"server":"8.8.8.8","protocol":"tcp","timeout":9}"#).unwrap();

        let cli = parse(&[
            "acmecheck",
            "-config",
            path.to_str().unwrap(),
            "-dns",
            "9.9.9.9",
            "x",
        ]);
        let config = cli.config().unwrap();
        assert_eq!(config.server, "9.9.9.9");
        assert_eq!(config.protocol, Protocol::Tcp);
        assert_eq!(config.timeout, Duration::from_secs(9));
    }

    #[test]
    fn color_needs_a_terminal() {
        let cli = parse(&["acmecheck", "x"]);
        assert!(cli.render_options(true).color);
        assert!(!cli.render_options(false).color);
        assert!(!parse(&["acmecheck", "-no-color", "x"]).render_options(true).color);
        assert_eq!(
            parse(&["acmecheck", "-json", "x"]).render_options(false).format,
            Format::Json
        );
    }
}
