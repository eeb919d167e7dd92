// Copyright 2026 Element Creations Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Simple command-line tool to try out device lookups
///
/// It reads user-agents from stdin and prints the matching device as JSON to
/// stdout, or `null` if no device matched.
#[derive(Parser, Debug)]
struct Options {
    /// Print all the known devices and exit
    #[arg(long)]
    list: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Options {
    fn write(&self, mut out: impl Write, value: &impl serde::Serialize) -> anyhow::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut out, value)?;
        } else {
            serde_json::to_writer(&mut out, value)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    // This writes logs to stderr
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("could not setup logging filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter_layer)
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();
    let stdout = std::io::stdout();

    if options.list {
        return options.write(stdout.lock(), &device_metrics::devices());
    }

    for line in std::io::stdin().lines() {
        let user_agent = line.context("could not read user-agent from stdin")?;
        let device = device_metrics::find_device(&user_agent);
        if device.is_none() {
            tracing::info!(%user_agent, "Unknown device");
        }
        options.write(stdout.lock(), &device)?;
    }

    Ok(())
}
