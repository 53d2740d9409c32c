use acmecheck::cli::{go_style_args, Cli};
use acmecheck::DnsResolver;
use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse_from(go_style_args(std::env::args_os()));
    tracing_init();

    let stdout = std::io::stdout();
    let terminal = stdout.is_terminal();
    acmecheck::app::run(&cli, stdout.lock(), DnsResolver::new, terminal)
}

fn tracing_init() {
    // Logs go to stderr so reports on stdout stay clean for other programs.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acmecheck=warn".into()),
        )
        .init();
}
