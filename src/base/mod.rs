//! Base image expansion
//!
//! One base image is generated for every (distro, Python version) pair of a
//! catalog. Base images are what every binary image is built `FROM`.

use serde::Serialize;
use tracing::debug;

use crate::catalog::Distro;
use crate::constants::{dockerfile, repository};
use crate::release::ReleaseVersion;


#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseImage {
    pub distro: Distro,
    pub python_version: String,
    pub namespace_repository: String,
    pub file_dir: String,
    /// `{release}-py{python}-{distro}{distro_version}`, unique per image
    pub tag: String,
    pub flwr_version: ReleaseVersion,
}

impl BaseImage {
    pub fn new(release: &ReleaseVersion, python_version: &str, distro: &Distro) -> Self {
        Self {
            distro: distro.clone(),
            python_version: python_version.to_string(),
            namespace_repository: format!("{}/{}", repository::NAMESPACE, repository::BASE),
            file_dir: format!("{}/base/{}", dockerfile::ROOT, distro.name),
            tag: format!(
                "{}-py{}-{}{}",
                release, python_version, distro.name, distro.version
            ),
            flwr_version: release.clone(),
        }
    }
}

/// Generate base images, distro-major and Python-minor
pub fn generate_base_images<S: AsRef<str>>(
    release: &ReleaseVersion,
    python_versions: &[S],
    distros: &[Distro],
) -> Vec<BaseImage> {
    let images: Vec<BaseImage> = distros
        .iter()
        .flat_map(|distro| {
            python_versions
                .iter()
                .map(move |python_version| BaseImage::new(release, python_version.as_ref(), distro))
        })
        .collect();

    debug!(
        "Generated {} base images for {} distro(s) and {} Python version(s)",
        images.len(),
        distros.len(),
        python_versions.len()
    );

    images
}
