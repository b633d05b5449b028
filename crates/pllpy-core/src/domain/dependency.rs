//! Toolchain dependency status types.

/// Represents the status of a build dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Dependency is installed and available.
    Present { version: String },
    /// Dependency is missing.
    Missing,
}

/// Information about a build dependency.
#[derive(Debug, Clone)]
pub struct Dependency {
    /// Name of the dependency (e.g., "cython", "g++").
    pub name: String,
    /// Current status of the dependency.
    pub status: DependencyStatus,
    /// What the build uses it for.
    pub description: String,
    /// Whether the build fails without it.
    pub required: bool,
    /// Installation instructions or hints.
    pub install_hint: Option<String>,
}

impl Dependency {
    /// Create a new required dependency, initially missing.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
            description: description.into(),
            required: true,
            install_hint: None,
        }
    }

    /// Create a new optional dependency, initially missing.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = status;
        self
    }

    /// Required and not present.
    pub fn is_blocking(&self) -> bool {
        self.required && self.status == DependencyStatus::Missing
    }
}
