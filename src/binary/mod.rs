use serde::{Serialize, Serializer};
use tracing::debug;

use crate::base::BaseImage;
use crate::constants::{dockerfile, repository};


/// Component image built `FROM` one base image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryImage {
    pub namespace_repository: String,
    pub file_dir: String,
    /// Tag of the base image this image is built from
    pub base_image: String,
    /// Own versioned tag first, rule-derived tags after.
    /// Rendered as one newline-joined string for the CI templating.
    #[serde(serialize_with = "serialize_joined")]
    pub tags: Vec<String>,
}

impl BinaryImage {
    pub fn new(component: &str, base: &BaseImage, extra_tags: Vec<String>) -> Self {
        let mut tags = Vec::with_capacity(1 + extra_tags.len());
        tags.push(base.tag.clone());
        tags.extend(extra_tags);

        Self {
            namespace_repository: format!("{}/{}", repository::NAMESPACE, component),
            file_dir: format!("{}/{}", dockerfile::ROOT, component),
            base_image: base.tag.clone(),
            tags,
        }
    }

    /// Tags as rendered in the matrix output
    pub fn joined_tags(&self) -> String {
        self.tags.join("\n")
    }
}

fn serialize_joined<S>(tags: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&tags.join("\n"))
}

/// Generate the images of one component, keeping the order of `base_images`
pub fn generate_binary_images<T, F>(
    component: &str,
    base_images: &[BaseImage],
    tag_rule: T,
    filter: F,
) -> Vec<BinaryImage>
where
    T: Fn(&BaseImage) -> Vec<String>,
    F: Fn(&BaseImage) -> bool,
{
    let images: Vec<BinaryImage> = base_images
        .iter()
        .filter(|image| filter(image))
        .map(|image| BinaryImage::new(component, image, tag_rule(image)))
        .collect();

    debug!(
        "Generated {} {} images from {} base images",
        images.len(),
        component,
        base_images.len()
    );

    images
}
