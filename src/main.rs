// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hello_ts::Invocation;

/// Print a greeting.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_PKG_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {}

fn main() -> Result<()> {
    let _args = App::parse();

    // logs go to stderr, stdout carries only the greeting
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!("{} v{} greeting", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Invocation::EntryPoint.run()?;

    Ok(())
}
