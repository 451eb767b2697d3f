use serde::Serialize;
use std::fmt;

use crate::constants::{distro, python};
use crate::tags::CanonicalLatest;


/// Supported OS distributions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistroName {
    Alpine,
    Ubuntu,
}

impl DistroName {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistroName::Alpine => "alpine",
            DistroName::Ubuntu => "ubuntu",
        }
    }
}

impl fmt::Display for DistroName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distro {
    pub name: DistroName,
    pub version: String,
}

impl Distro {
    pub fn new(name: DistroName, version: &str) -> Self {
        Self {
            name,
            version: version.to_string(),
        }
    }
}

/// Distros and Python versions a release is built for
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Distros in build order
    pub distros: Vec<Distro>,

    /// Python versions in build order, oldest first
    pub python_versions: Vec<String>,

    /// Highest entry of `python_versions`
    pub latest_python_version: String,

    /// Distro whose latest-Python image carries the bare release tag
    pub canonical_distro: Distro,
}

impl Catalog {
    pub fn supported() -> Self {
        Self {
            distros: vec![
                Distro::new(DistroName::Ubuntu, distro::UBUNTU),
                Distro::new(DistroName::Alpine, distro::ALPINE),
            ],
            python_versions: python::SUPPORTED.iter().map(|v| v.to_string()).collect(),
            latest_python_version: python::LATEST_SUPPORTED.to_string(),
            canonical_distro: Distro::new(DistroName::Alpine, distro::ALPINE),
        }
    }

    pub fn canonical_latest(&self) -> CanonicalLatest {
        CanonicalLatest::new(
            self.canonical_distro.clone(),
            self.latest_python_version.clone(),
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::supported()
    }
}
