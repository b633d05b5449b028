//! Autowrap data directory resolution.
//!
//! The data directory is the first include directory of the extension. It
//! is normally looked up through the installed `autowrap` package; callers
//! may pass an explicit directory instead.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use super::error::PathError;
use super::platform::normalize_user_path;
use crate::ports::ResourceLocator;

/// Package that ships the data files.
pub const DATA_FILES_PACKAGE: &str = "autowrap";

/// Resource name of the data files inside [`DATA_FILES_PACKAGE`].
pub const DATA_FILES_RESOURCE: &str = "data_files";

/// How the data directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataDirSource {
    /// The caller passed an explicit path (e.g. `--data-dir`).
    Explicit,
    /// Looked up through the package resource locator.
    PackageResource,
}

/// Resolution result for the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataDirResolution {
    /// The resolved data directory.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: DataDirSource,
}

/// Resolve the data directory from an explicit override or the package resource.
pub fn resolve_data_dir(
    explicit: Option<&str>,
    locator: &dyn ResourceLocator,
) -> Result<DataDirResolution, PathError> {
    if let Some(raw) = explicit {
        let path = normalize_user_path(raw)?;
        debug!(path = %path.display(), "using explicit data directory");
        return Ok(DataDirResolution {
            path,
            source: DataDirSource::Explicit,
        });
    }

    let path = locator.resource_path(DATA_FILES_PACKAGE, DATA_FILES_RESOURCE)?;
    debug!(path = %path.display(), "resolved {DATA_FILES_PACKAGE} data files");
    Ok(DataDirResolution {
        path,
        source: DataDirSource::PackageResource,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ResourceError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingLocator {
        calls: AtomicUsize,
        result: Option<PathBuf>,
    }

    impl ResourceLocator for CountingLocator {
        fn resource_path(&self, package: &str, resource: &str) -> Result<PathBuf, ResourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(package, DATA_FILES_PACKAGE);
            assert_eq!(resource, DATA_FILES_RESOURCE);
            self.result
                .clone()
                .ok_or_else(|| ResourceError::PackageNotFound {
                    package: package.to_string(),
                    reason: "not installed".to_string(),
                })
        }
    }

    #[test]
    fn explicit_path_skips_lookup() {
        let locator = CountingLocator {
            calls: AtomicUsize::new(0),
            result: None,
        };
        let resolved = resolve_data_dir(Some("/opt/autowrap/data_files"), &locator).unwrap();

        assert_eq!(resolved.source, DataDirSource::Explicit);
        assert_eq!(resolved.path, PathBuf::from("/opt/autowrap/data_files"));
        assert_eq!(locator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn lookup_result_is_used() {
        let locator = CountingLocator {
            calls: AtomicUsize::new(0),
            result: Some(PathBuf::from("/site/autowrap/data_files")),
        };
        let resolved = resolve_data_dir(None, &locator).unwrap();

        assert_eq!(resolved.source, DataDirSource::PackageResource);
        assert_eq!(resolved.path, PathBuf::from("/site/autowrap/data_files"));
        assert_eq!(locator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn lookup_failure_is_propagated() {
        let locator = CountingLocator {
            calls: AtomicUsize::new(0),
            result: None,
        };
        let err = resolve_data_dir(None, &locator).unwrap_err();
        assert!(matches!(err, PathError::Resource(_)));
        assert!(err.is_configuration());
    }
}
