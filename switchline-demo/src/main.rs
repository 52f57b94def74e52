use std::{
    io::{self, Write as _},
    process::ExitCode,
};

use anyhow::Context;
use lazy_format::lazy_format;
use switchline::{
    ConfigError, Kind, Switch, SwitchSet,
    arguments::LoadedArguments,
    help::{Usage, print_usage},
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::endpoint::Endpoint;

mod endpoint;
mod error;

const USAGE: Usage<'static> = Usage {
    command: "switchline-demo",
    description: "Plan the upload of one or more files to a notes server using the \
                  upload RPC. Nothing is sent; each request is printed instead.",
    positionals: &["<host>", "[files...]"],
};

fn switches() -> Result<SwitchSet, ConfigError> {
    Ok(SwitchSet::new()
        .with(
            Switch::action("help", usage)
                .describe("Show this help message and exit")
                .build()?,
        )
        .with(
            Switch::builder("auth")
                .kind(Kind::String)
                .placeholder("TOKEN")
                .describe("Authentication token")
                .build()?,
        )
        .with(
            Switch::builder("verbose")
                .kind(Kind::Bool)
                .describe("Log each planned step")
                .build()?,
        ))
}

/// The `--help` action
fn usage() -> Option<i32> {
    let printed = switches()
        .map_err(io::Error::other)
        .and_then(|switches| print_usage(&mut io::stdout().lock(), &USAGE, &switches));

    Some(match printed {
        Ok(()) => 0,
        Err(_) => 1,
    })
}

fn init_tracing(verbose: bool) {
    let level = match verbose {
        true => Level::DEBUG,
        false => Level::INFO,
    };

    // RUST_LOG takes precedence; --verbose only changes the fallback
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<ExitCode> {
    let switches = switches().context("invalid switch declarations")?;
    let arguments = LoadedArguments::from_env();
    let (positionals, options) = arguments.parse_or_exit(&switches, &USAGE);

    init_tracing(options.flag("verbose"));

    let Some((host, files)) = positionals.split_first() else {
        eprintln!("{}: missing host\n", USAGE.command);
        print_usage(&mut io::stderr().lock(), &USAGE, &switches)?;
        return Ok(ExitCode::FAILURE);
    };

    if files.is_empty() {
        eprintln!("{}: no files", USAGE.command);
        return Ok(ExitCode::FAILURE);
    }

    let endpoint: Endpoint = host
        .parse()
        .with_context(|| format!("couldn't use {host:?} as a server address"))?;

    tracing::debug!(%endpoint, files = files.len(), "planning upload");

    let mut stdout = io::stdout().lock();
    let auth = options.string("auth");

    if auth.is_none() {
        tracing::info!("no authentication token provided; a new one will be requested");
        writeln!(stdout, "POST {}", endpoint.login_url()?)?;
    }

    let header = lazy_format!(match (auth) {
        Some(token) => "\n  Authorization: {token}",
        None => "",
    });

    for file in files {
        let url = endpoint
            .upload_url(file)
            .with_context(|| format!("couldn't build the upload request for {file:?}"))?;

        tracing::debug!(%url, file = %file, "planned upload");
        writeln!(stdout, "POST {url}{header}")?;
    }

    Ok(ExitCode::SUCCESS)
}
