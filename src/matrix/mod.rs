//! Matrix assembly
//!
//! Combines the base images and every component's binary images into the
//! `{"base": {"images": [...]}, "binary": {"images": [...]}}` document consumed
//! by the CI workflow.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::base::{generate_base_images, BaseImage};
use crate::binary::{generate_binary_images, BinaryImage};
use crate::catalog::Catalog;
use crate::constants::component;
use crate::release::ReleaseVersion;
use crate::tags::{accept_all, CanonicalLatest};

#[cfg(test)]
mod tests;

/// Which base images a component is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFilter {
    /// Every base image
    All,
    /// Only the latest supported Python version, one image per distro
    LatestPython,
}

impl ImageFilter {
    fn accepts(&self, canonical: &CanonicalLatest, image: &BaseImage) -> bool {
        match self {
            ImageFilter::All => accept_all(image),
            ImageFilter::LatestPython => canonical.is_latest_python(image),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    pub name: &'static str,
    pub filter: ImageFilter,
}

/// Components in the order their images appear in the matrix
pub const COMPONENTS: [Component; 3] = [
    Component {
        name: component::SUPERLINK,
        filter: ImageFilter::LatestPython,
    },
    Component {
        name: component::SUPERNODE,
        filter: ImageFilter::All,
    },
    Component {
        name: component::SERVERAPP,
        filter: ImageFilter::All,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageGroup<T> {
    pub images: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    pub base: ImageGroup<BaseImage>,
    pub binary: ImageGroup<BinaryImage>,
}

impl Matrix {
    /// Build the matrix for `release` from the supported catalog and components
    pub fn for_release(release: &ReleaseVersion) -> Self {
        Self::generate(release, &Catalog::supported(), &COMPONENTS)
    }

    pub fn generate(
        release: &ReleaseVersion,
        catalog: &Catalog,
        components: &[Component],
    ) -> Self {
        info!("Generating image matrix for release {}", release);

        let base_images =
            generate_base_images(release, &catalog.python_versions, &catalog.distros);
        let canonical = catalog.canonical_latest();

        let binary_images: Vec<BinaryImage> = components
            .iter()
            .flat_map(|c| {
                generate_binary_images(
                    c.name,
                    &base_images,
                    |image| canonical.extra_tags(image),
                    |image| c.filter.accepts(&canonical, image),
                )
            })
            .collect();

        info!(
            "Generated {} base and {} binary images",
            base_images.len(),
            binary_images.len()
        );

        Self {
            base: ImageGroup {
                images: base_images,
            },
            binary: ImageGroup {
                images: binary_images,
            },
        }
    }

    /// Compact JSON rendering of the matrix
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize image matrix")
    }
}
