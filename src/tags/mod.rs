//! Tagging and filtering strategies
//!
//! Binary image expansion is parameterised by two strategies: a tag rule
//! returning the tags appended after an image's own versioned tag, and a
//! filter selecting which base images a component is built on. Both are plain
//! functions of a [`BaseImage`] and are always passed explicitly.

use crate::base::BaseImage;
use crate::catalog::Distro;


/// Tag rule that never adds tags
pub fn no_extra_tags(_image: &BaseImage) -> Vec<String> {
    Vec::new()
}

/// Filter that keeps every base image
pub fn accept_all(_image: &BaseImage) -> bool {
    true
}

/// The single (distro, distro version, Python version) combination allowed to
/// carry the floating release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalLatest {
    distro: Distro,
    python_version: String,
}

impl CanonicalLatest {
    pub fn new(distro: Distro, python_version: String) -> Self {
        Self {
            distro,
            python_version,
        }
    }

    pub fn distro(&self) -> &Distro {
        &self.distro
    }

    pub fn python_version(&self) -> &str {
        &self.python_version
    }

    pub fn matches(&self, image: &BaseImage) -> bool {
        image.distro == self.distro && self.is_latest_python(image)
    }

    /// True for any distro's image of the latest supported Python version
    pub fn is_latest_python(&self, image: &BaseImage) -> bool {
        image.python_version == self.python_version
    }

    /// Tag rule appending the bare release version to the canonical image
    pub fn extra_tags(&self, image: &BaseImage) -> Vec<String> {
        if self.matches(image) {
            vec![image.flwr_version.to_string()]
        } else {
            Vec::new()
        }
    }
}
