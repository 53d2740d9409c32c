//! Drives a run: one check per name, strictly in argument order.

use crate::checker::Checker;
use crate::cli::Cli;
use crate::config::Config;
use crate::report::Renderer;
use crate::resolver::Resolver;
use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io::Write;

/// Check every name in `cli`, writing the reports to `out`.
///
/// `connect` builds the resolver from the final [`Config`]; it isn't called when there is
/// nothing to check. `terminal` tells whether `out` is a terminal.
///
/// # Errors
///
/// Returns an error if the config file can't be loaded or writing to `out` fails. Lookup
/// failures, including an unusable resolver address, are part of the reports and never an error.
pub fn run<W, R, F>(cli: &Cli, mut out: W, connect: F, terminal: bool) -> Result<()>
where
    W: Write,
    R: Resolver,
    F: FnOnce(&Config) -> R,
{
    if cli.names.is_empty() {
        writeln!(out, "No name(s) specified!")?;
        write!(out, "{}", Cli::command().render_help())?;
        return Ok(());
    }

    let config = cli.config().context("failed to load config")?;
    let resolver = connect(&config);
    tracing::debug!(?config, "starting checks");

    let checker = Checker::new(resolver);
    let mut renderer = Renderer::new(out, cli.render_options(terminal));
    for name in &cli.names {
        let report = checker.check(name);
        renderer.render(&report)?;
    }
    Ok(())
}
