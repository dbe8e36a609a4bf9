//! Fixtures
//!
//! Carts described in YAML files, used by the CLI and by tests.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::carts::CartItem;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file {}: {source}", .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,

        /// Underlying IO error
        source: io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML in {}: {source}", .path.display())]
    Yaml {
        /// File that could not be parsed
        path: PathBuf,

        /// Underlying YAML error
        source: serde_norway::Error,
    },
}

/// Wrapper for cart items in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Cart lines, each a flat object with `productId`, `quantity` and any metadata
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// Named cart fixtures below a base directory (`<base>/carts/<name>.yml`).
#[derive(Debug, Clone)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a fixture set rooted at `./fixtures`
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture set rooted at a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a named cart
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cart(&self, name: &str) -> Result<Vec<CartItem>, FixtureError> {
        load_cart_file(self.base_path.join("carts").join(format!("{name}.yml")))
    }
}

/// Load a cart from a YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_cart_file(path: impl AsRef<Path>) -> Result<Vec<CartItem>, FixtureError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_cart(&contents).map_err(|source| FixtureError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), items = items.len(), "loaded cart fixture");

    Ok(items)
}

/// Parse a cart from YAML text
///
/// # Errors
///
/// Returns an error if the text is not a valid cart document.
pub fn parse_cart(yaml: &str) -> Result<Vec<CartItem>, serde_norway::Error> {
    let fixture: CartFixture = serde_norway::from_str(yaml)?;

    Ok(fixture.items)
}
