// Copyright (C) 2022 Leandro Lisboa Penz <lpenz@lpenz.org>
// This file is subject to the terms and conditions defined in
// file 'LICENSE', which is part of this source code package.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The license file or a manifest entry could not be read.
    #[error("could not read {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The wrapper template must hold exactly one `{body}` placeholder.
    #[error("wrapper template {template:?} has {found} body placeholders, expected exactly 1")]
    Template { template: String, found: usize },

    #[error("error writing bundle: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn missing_file(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::MissingFile {
            path: path.into(),
            source,
        }
    }
}
