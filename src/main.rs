//! BannerTerm - ASCII-art banners for the terminal
//!
//! ```text
//!  _                                 _
//! | |__    __ _  _ __   _ __    ___ | |_  ___  _ __  _ __ ___
//! | '_ \  / _` || '_ \ | '_ \  / _ \| __|/ _ \| '__|| '_ ` _ \
//! | |_) || (_| || | | || | | ||  __/| |_|  __/| |   | | | | | |
//! |_.__/  \__,_||_| |_||_| |_| \___| \__|\___||_|   |_| |_| |_|
//! ```

mod cli;

use anyhow::Context;
use bannerterm_config::{resolve_banner, Config};
use bannerterm_core::GlyphSet;
use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::Parser;
use cli::{RenderRequest, USAGE};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// BannerTerm - render text as ASCII-art banners
#[derive(Parser, Debug)]
#[command(name = "bannerterm")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Color matched text (red, green, yellow, blue, magenta, cyan, white, orange, black or #RRGGBB)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    color: Option<String>,

    /// Write the banner to a file instead of stdout
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    output: Option<String>,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// List available banners and exit
    #[arg(long)]
    list_banners: bool,

    /// List available colors and exit
    #[arg(long)]
    list_colors: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// [SUBSTRING] TEXT [BANNER]
    values: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => usage_exit(),
    };

    // Logs go to stderr so stdout only carries the banner
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("bannerterm={}", log_level)),
        ))
        .init();

    tracing::info!("Starting BannerTerm v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(args.config.as_deref())?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    if args.list_banners {
        for name in config.banner_names() {
            println!("{}", name);
        }
        return Ok(());
    }
    if args.list_colors {
        for name in config.palette().names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let color = effective_color(args.color.as_deref(), &config);
    let request = match RenderRequest::from_positional(&args.values, color.is_some(), &config) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", e);
            usage_exit();
        }
    };

    // Validate the color before touching the filesystem
    let marker = color
        .as_deref()
        .map(|name| config.palette().resolve(name))
        .transpose()?;

    let banner_path = resolve_banner(&request.banner, &config)?;
    let glyphs = GlyphSet::load(&banner_path)
        .with_context(|| format!("could not load banner file '{}'", banner_path.display()))?;

    let output = request.render(&glyphs, marker.as_ref());

    write_output(&output, args.output.as_deref().map(Path::new))
}

/// `--color` if given, else `render.default_color` from the config
fn effective_color(flag: Option<&str>, config: &Config) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| config.render.default_color.clone())
}

fn usage_exit() -> ! {
    eprintln!("{}", USAGE);
    std::process::exit(1);
}

/// Write to `path` (created or truncated) or to stdout
fn write_output(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("error writing to file '{}'", path.display()))?;
            tracing::debug!("Wrote {} bytes to {}", output.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
