//! Load a [`Registry`] from authored YAML files.
//!
//! # Layout
//!
//! ```text
//! content/
//! ├── index.yaml            # `components:` and `getting_started:` lists
//! ├── components/
//! │   └── button.yaml       # one ComponentDocSource per file
//! └── guides/
//!     └── installation.yaml # one PageSection per file
//! ```
//!
//! `index.yaml` is the ordering authority. Files under `components/` and
//! `guides/` are read in file name order. Hidden files and files starting
//! with `_` are skipped, as are files without a `.yaml`/`.yml` extension.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::registry::{Registry, RegistryError};
use crate::types::{ComponentDocSource, ComponentIndexItem, GettingStartedItem, PageSection};

/// Index file name.
pub const INDEX_FILENAME: &str = "index.yaml";
/// Directory holding component docs.
pub const COMPONENTS_DIR: &str = "components";
/// Directory holding getting-started pages.
pub const GUIDES_DIR: &str = "guides";

/// Error loading authored content.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// File is not valid YAML for its record type.
    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_yaml::Error,
    },
    /// Records violate registry invariants.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Contents of `index.yaml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IndexFile {
    components: Vec<ComponentIndexItem>,
    getting_started: Vec<GettingStartedItem>,
}

/// Load every record under `source_dir` into a registry.
///
/// # Errors
///
/// Returns `LoadError::Io` if `index.yaml` or a record file cannot be read,
/// `LoadError::Yaml` if a file does not parse, and `LoadError::Registry` on
/// duplicate slugs.
pub fn load_registry(source_dir: &Path) -> Result<Registry, LoadError> {
    let index: IndexFile = read_yaml(&source_dir.join(INDEX_FILENAME))?;

    let mut builder = Registry::builder();
    for item in index.components {
        builder.add_index_item(item)?;
    }
    for item in index.getting_started {
        builder.add_getting_started(item)?;
    }

    for path in record_files(&source_dir.join(COMPONENTS_DIR))? {
        let source: ComponentDocSource = read_yaml(&path)?;
        builder.add_component(source)?;
    }
    for path in record_files(&source_dir.join(GUIDES_DIR))? {
        let page: PageSection = read_yaml(&path)?;
        builder.add_guide(page)?;
    }

    let registry = builder.build();
    tracing::info!(
        source_dir = %source_dir.display(),
        components = registry.components().len(),
        guides = registry.guides().len(),
        "Content loaded"
    );
    Ok(registry)
}

/// Read and parse one YAML file.
fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// List record files of a directory in name order.
///
/// A missing directory yields no files.
fn record_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "Content directory missing, skipping");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| LoadError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        if path.is_file() && is_record_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Whether a path names a loadable YAML record.
fn is_record_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with('.') || name.starts_with('_') {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "yaml" || e == "yml")
}
