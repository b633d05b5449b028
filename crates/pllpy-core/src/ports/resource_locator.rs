//! Resource locator port for installed package data.
//!
//! The autowrap data files live inside an installed Python package. Finding
//! them requires asking an interpreter, which is an adapter concern.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating a package resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The package is not importable by the interpreter.
    #[error("Package '{package}' could not be located: {reason}")]
    PackageNotFound { package: String, reason: String },

    /// The interpreter used for the lookup could not be run.
    #[error("Interpreter '{interpreter}' is unavailable: {reason}")]
    InterpreterUnavailable { interpreter: String, reason: String },

    /// The lookup ran but produced unusable output.
    #[error("Resource lookup failed: {0}")]
    LookupFailed(String),
}

/// Port for resolving the filesystem path of a resource shipped in a package.
///
/// Implementations do not check that the resource exists, only that the
/// owning package can be found.
pub trait ResourceLocator: Send + Sync {
    /// Return the path of `resource` inside `package`.
    fn resource_path(&self, package: &str, resource: &str) -> Result<PathBuf, ResourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SitePackages(PathBuf);

    impl ResourceLocator for SitePackages {
        fn resource_path(&self, package: &str, resource: &str) -> Result<PathBuf, ResourceError> {
            if package == "missing" {
                return Err(ResourceError::PackageNotFound {
                    package: package.to_string(),
                    reason: "No module named 'missing'".to_string(),
                });
            }
            Ok(self.0.join(package).join(resource))
        }
    }

    #[test]
    fn locator_is_object_safe() {
        let locator: Box<dyn ResourceLocator> = Box::new(SitePackages(PathBuf::from("/site")));
        let path = locator.resource_path("autowrap", "data_files").unwrap();
        assert_eq!(path, PathBuf::from("/site/autowrap/data_files"));
    }

    #[test]
    fn package_not_found_mentions_package() {
        let locator = SitePackages(PathBuf::from("/site"));
        let err = locator.resource_path("missing", "data_files").unwrap_err();
        assert!(err.to_string().contains("'missing'"));
    }
}
