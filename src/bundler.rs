// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, info, warn};
use regex::Regex;

use crate::config::Config;
use crate::error::{Error, Result};

/// Wrapper used when none is configured: an immediately-invoked
/// anonymous function, so that top-level declarations stay private.
pub const DEFAULT_WRAPPER: &str = "(function() {\n\n{body}\n}());";

lazy_static! {
    static ref BODY_RE: Regex = Regex::new(r"\{\s*body\s*\}").unwrap();
}

/// Prefix/suffix pair that encloses the concatenated sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperStyle {
    prefix: String,
    suffix: String,
}

impl WrapperStyle {
    pub fn new<P: Into<String>, S: Into<String>>(prefix: P, suffix: S) -> WrapperStyle {
        WrapperStyle {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Splits a template such as `"(function() {\n{body}\n}());"` at its
    /// single `{body}` placeholder.
    pub fn from_template(template: &str) -> Result<WrapperStyle> {
        let found: Vec<_> = BODY_RE.find_iter(template).collect();
        if found.len() != 1 {
            return Err(Error::Template {
                template: template.to_string(),
                found: found.len(),
            });
        }
        let m = found[0];
        Ok(WrapperStyle::new(
            &template[..m.start()],
            &template[m.end()..],
        ))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Default for WrapperStyle {
    fn default() -> WrapperStyle {
        WrapperStyle::new("(function() {\n\n", "\n}());")
    }
}

/// The complete emitted artifact: banner, blank line, wrapped body.
///
/// Kept as raw bytes so sources in any encoding pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOutput(Vec<u8>);

impl BundleOutput {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl AsRef<[u8]> for BundleOutput {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Bundler<'a> {
    config: &'a Config,
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    let contents = fs::read(path).map_err(|e| Error::missing_file(path, e))?;
    debug!("read {} ({} bytes)", path.display(), contents.len());
    Ok(contents)
}

impl<'a> Bundler<'a> {
    pub fn new(config: &'a Config) -> Bundler<'a> {
        Bundler { config }
    }

    /// Reads the license and every manifest entry, in manifest order, and
    /// assembles the bundle in memory. Fails on the first unreadable file.
    pub fn bundle(&self) -> Result<BundleOutput> {
        let config = self.config;
        let license = read_file(&config.license)?;

        if config.manifest.is_empty() {
            warn!("manifest is empty, the bundle will have an empty body");
        }
        let mut seen = HashSet::new();
        let mut units = Vec::with_capacity(config.manifest.len());
        for entry in &config.manifest {
            if !seen.insert(entry.as_str()) {
                warn!("{} is listed more than once in the manifest", entry);
            }
            units.push(read_file(&config.source_path(entry))?);
        }

        let mut o = Vec::new();
        self.banner(&mut o, &license)?;
        o.write_all(b"\n\n")?;
        self.wrapped(&mut o, &units)?;
        o.write_all(b"\n")?;

        info!("bundled {} files into {} bytes", units.len(), o.len());
        Ok(BundleOutput(o))
    }

    /// Bundles and, only if that succeeds, writes the result to `o`.
    pub fn run<W: Write>(&self, mut o: W) -> Result<()> {
        let output = self.bundle()?;
        o.write_all(output.as_bytes())?;
        o.flush()?;
        Ok(())
    }

    fn banner(&self, o: &mut Vec<u8>, license: &[u8]) -> Result<()> {
        write!(o, "/**\n{}", self.config.banner_marker)?;
        o.write_all(license)?;
        o.write_all(b"*/")?;
        Ok(())
    }

    fn wrapped(&self, o: &mut Vec<u8>, units: &[Vec<u8>]) -> Result<()> {
        o.write_all(self.config.wrapper.prefix().as_bytes())?;
        o.write_all(&units.join(&b'\n'))?;
        o.write_all(self.config.wrapper.suffix().as_bytes())?;
        Ok(())
    }
}
