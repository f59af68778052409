// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use jssourcebundler::{Bundler, Config, CONFIG_FILENAME};

#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Cli {
    /// The config file; ./bundle.toml or the built-in BenchGL manifest by default.
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    /// The output file, stdout by default.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::discover(Path::new("."))
            .with_context(|| format!("error loading {}", CONFIG_FILENAME))?,
    };
    let bundler = Bundler::new(&config);
    if let Some(ref output) = cli.output {
        let bundle = bundler.bundle()?;
        fs::write(output, bundle.as_bytes())
            .with_context(|| format!("error creating {}", output.display()))?;
    } else {
        bundler.run(io::stdout().lock())?;
    }
    Ok(())
}
