//! Distribution metadata for the pllpy package.

use serde::{Deserialize, Serialize};

/// Metadata declared for the installed package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub author: String,
    pub author_email: String,
    pub description: String,
    pub url: String,
    /// Python packages required at build time
    pub install_requires: Vec<String>,
    /// Project-relative scripts installed alongside the extension
    pub scripts: Vec<String>,
}

impl PackageMetadata {
    pub fn pllpy() -> Self {
        Self {
            name: "pllpy".to_string(),
            version: "0.1.9".to_string(),
            author: "Kevin Gori".to_string(),
            author_email: "kgori@ebi.ac.uk".to_string(),
            description: "Wrapper for Phylogenetic Likelihood Library".to_string(),
            url: "https://github.com/kgori/pllpy.git".to_string(),
            install_requires: vec!["autowrap".to_string(), "cython".to_string()],
            scripts: vec!["bin/pll".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pllpy_declares_build_requirements_and_script() {
        let meta = PackageMetadata::pllpy();
        assert_eq!(meta.version, "0.1.9");
        assert_eq!(meta.install_requires, ["autowrap", "cython"]);
        assert_eq!(meta.scripts, ["bin/pll"]);
    }
}
