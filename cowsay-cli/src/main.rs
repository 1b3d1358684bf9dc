// Copyright 2025 Cowsay Bridge Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cowsay CLI
//!
//! Demo driver for the component bridge: fetches the cowsay artifact from a
//! base location (local directory or HTTP URL), instantiates it with a
//! logging capability wired to tracing, and prints the rendered art.

use anyhow::{Context, Result};
use clap::Parser;
use cowsay_bridge::{loader_for, CowsayBridge, HostCapabilities};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "cowsay")]
#[command(about = "Render text through the cowsay WASM component", long_about = None)]
struct Cli {
    /// Message to render
    #[arg(default_value = "Hello Wasm COWponents!")]
    text: String,

    /// Rendering variant (e.g. "owl")
    #[arg(short = 'V', long)]
    variant: Option<String>,

    /// Artifact base location: a directory or an http(s) URL
    #[arg(short, long, default_value = "./wasm")]
    base: String,

    /// Artifact name, relative to the base location
    #[arg(short, long, default_value = "cowsay.wat")]
    artifact: String,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let loader = loader_for(&cli.base);
    let bridge = CowsayBridge::new().context("Failed to set up the WASM engine")?;
    let capabilities =
        HostCapabilities::new().with_log(|msg| info!(target: "cowsay::component", "{msg}"));

    let mut cow = bridge
        .instantiate(loader.as_ref(), &cli.artifact, capabilities)
        .await
        .with_context(|| format!("Failed to instantiate `{}` from {}", cli.artifact, cli.base))?;

    let rendered = cow
        .say(&cli.text, cli.variant.as_deref())
        .await
        .context("Component call failed")?;
    println!("{rendered}");

    Ok(())
}
