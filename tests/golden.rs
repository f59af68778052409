// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::path::{Path, PathBuf};

use anyhow::Result;
use goldenfile::Mint;

use jssourcebundler::{Bundler, Config, CONFIG_FILENAME};

const INPUT_DIR: &str = "tests/testdata/input";
const OUTPUT_DIR: &str = "tests/testdata/output";

#[test]
fn basic() -> Result<()> {
    let mut mint = Mint::new(OUTPUT_DIR);
    golden(&mut mint, "basic")
}

#[test]
fn empty() -> Result<()> {
    let mut mint = Mint::new(OUTPUT_DIR);
    golden(&mut mint, "empty")
}

fn golden(mint: &mut Mint, testname: &str) -> Result<()> {
    let output_name = Path::new(testname).with_extension("js");
    let config_path = {
        let mut p = PathBuf::from(INPUT_DIR);
        p.push(testname);
        p.push(CONFIG_FILENAME);
        p
    };
    let config = Config::load(&config_path)?;
    let golden = mint.new_goldenfile(output_name)?;
    Bundler::new(&config).run(golden)?;
    Ok(())
}
