/*!
Concatenate an ordered manifest of javascript sources into a single file.

The result starts with a license banner (a `/** @preserve ... */` comment
that minifiers keep) followed by the sources, joined by newlines and
enclosed in an immediately-invoked function so that their top-level
declarations stay out of the global scope.

```no_run
use jssourcebundler::{Bundler, Config};

let config = Config::default();
Bundler::new(&config).run(std::io::stdout()).unwrap();
```
*/

pub mod bundler;
pub mod config;
pub mod error;

pub use crate::bundler::{BundleOutput, Bundler, WrapperStyle, DEFAULT_WRAPPER};
pub use crate::config::{Config, CONFIG_FILENAME};
pub use crate::error::{Error, Result};
