// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::bundler::WrapperStyle;
use crate::error::{Error, Result};

/// Config file picked up from the working directory when none is given.
pub const CONFIG_FILENAME: &str = "bundle.toml";

const DEFAULT_SOURCE_ROOT: &str = "../src/";
const DEFAULT_LICENSE: &str = "../LICENSE";
const DEFAULT_BANNER_MARKER: &str = "@preserve";
const DEFAULT_MANIFEST: &[&str] = &[
    "benchgl.js",
    "utils.js",
    "math.js",
    "skin.js",
    "io.js",
    "ui.js",
    "worker.js",
    "shader.js",
    "program.js",
    "model.js",
    "renderer.js",
    "webgl.js",
    "core.js",
];

/// Everything a single bundling run needs.
///
/// `manifest` is an ordered list: entries are read and emitted in exactly
/// this order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_root: PathBuf,
    pub manifest: Vec<String>,
    pub license: PathBuf,
    pub banner_marker: String,
    pub wrapper: WrapperStyle,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    source_root: Option<PathBuf>,
    manifest: Option<Vec<String>>,
    license: Option<PathBuf>,
    banner_marker: Option<String>,
    wrapper: Option<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            manifest: DEFAULT_MANIFEST.iter().map(|s| s.to_string()).collect(),
            license: PathBuf::from(DEFAULT_LICENSE),
            banner_marker: DEFAULT_BANNER_MARKER.to_string(),
            wrapper: WrapperStyle::default(),
        }
    }
}

impl Config {
    /// Loads a TOML config file. Relative paths in it are taken relative
    /// to the directory holding the file.
    pub fn load(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::missing_file(path, e))?;
        debug!("loaded config {}", path.display());
        Config::from_toml(&contents, path)
    }

    /// Parses config file contents; `path` is only used for error
    /// messages and to resolve relative paths.
    pub fn from_toml(contents: &str, path: &Path) -> Result<Config> {
        let file: ConfigFile = toml::from_str(contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let default = Config::default();
        let wrapper = match file.wrapper {
            Some(template) => WrapperStyle::from_template(&template)?,
            None => default.wrapper,
        };
        Ok(Config {
            source_root: base.join(file.source_root.unwrap_or(default.source_root)),
            manifest: file.manifest.unwrap_or(default.manifest),
            license: base.join(file.license.unwrap_or(default.license)),
            banner_marker: file.banner_marker.unwrap_or(default.banner_marker),
            wrapper,
        })
    }

    /// Uses `dir/bundle.toml` when present, the built-in config otherwise.
    pub fn discover(dir: &Path) -> Result<Config> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Config::load(&path)
        } else {
            debug!("no {} found, using the built-in manifest", path.display());
            Ok(Config::default())
        }
    }

    pub fn source_path(&self, entry: &str) -> PathBuf {
        self.source_root.join(entry)
    }
}
