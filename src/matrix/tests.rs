#[cfg(test)]
mod tests {
    use super::super::*;

    fn release() -> ReleaseVersion {
        ReleaseVersion::new("1.8.0").unwrap()
    }

    fn images_of<'a>(matrix: &'a Matrix, repository: &str) -> Vec<&'a BinaryImage> {
        matrix
            .binary
            .images
            .iter()
            .filter(|i| i.namespace_repository == repository)
            .collect()
    }

    #[test]
    fn test_component_order() {
        let names: Vec<&str> = COMPONENTS.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["superlink", "supernode", "serverapp"]);
        assert_eq!(COMPONENTS[0].filter, ImageFilter::LatestPython);
    }

    #[test]
    fn test_matrix_counts() {
        let matrix = Matrix::for_release(&release());

        assert_eq!(matrix.base.images.len(), 8);
        assert_eq!(matrix.binary.images.len(), 2 + 8 + 8);
        assert_eq!(images_of(&matrix, "flwr/superlink").len(), 2);
        assert_eq!(images_of(&matrix, "flwr/supernode").len(), 8);
        assert_eq!(images_of(&matrix, "flwr/serverapp").len(), 8);
    }

    #[test]
    fn test_binary_images_grouped_by_component() {
        let matrix = Matrix::for_release(&release());
        let repositories: Vec<&str> = matrix
            .binary
            .images
            .iter()
            .map(|i| i.namespace_repository.as_str())
            .collect();

        assert!(repositories[..2].iter().all(|r| *r == "flwr/superlink"));
        assert!(repositories[2..10].iter().all(|r| *r == "flwr/supernode"));
        assert!(repositories[10..].iter().all(|r| *r == "flwr/serverapp"));
    }

    #[test]
    fn test_every_binary_references_a_base() {
        let matrix = Matrix::for_release(&release());
        for binary in &matrix.binary.images {
            assert!(matrix.base.images.iter().any(|b| b.tag == binary.base_image));
            assert_eq!(binary.tags[0], binary.base_image);
        }
    }

    #[test]
    fn test_floating_tag_once_per_component() {
        let matrix = Matrix::for_release(&release());
        for component in COMPONENTS {
            let repository = format!("flwr/{}", component.name);
            let tagged: Vec<&BinaryImage> = images_of(&matrix, &repository)
                .into_iter()
                .filter(|i| i.tags.len() > 1)
                .collect();

            assert_eq!(tagged.len(), 1);
            assert_eq!(tagged[0].base_image, "1.8.0-py3.11-alpine3.19");
            assert_eq!(tagged[0].joined_tags(), "1.8.0-py3.11-alpine3.19\n1.8.0");
        }
    }

    #[test]
    fn test_custom_components() {
        let components = [Component {
            name: "clientapp",
            filter: ImageFilter::All,
        }];
        let matrix = Matrix::generate(&release(), &Catalog::supported(), &components);

        assert_eq!(matrix.binary.images.len(), 8);
        assert_eq!(matrix.binary.images[0].file_dir, "src/docker/clientapp");
    }

    #[test]
    fn test_no_components() {
        let matrix = Matrix::generate(&release(), &Catalog::supported(), &[]);
        assert_eq!(matrix.base.images.len(), 8);
        assert!(matrix.binary.images.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let json = Matrix::for_release(&release()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let base = value["base"]["images"].as_array().unwrap();
        let binary = value["binary"]["images"].as_array().unwrap();
        assert_eq!(base.len(), 8);
        assert_eq!(binary.len(), 18);

        assert_eq!(base[0]["distro"]["name"], "ubuntu");
        assert_eq!(base[0]["distro"]["version"], "22.04");
        assert_eq!(base[0]["tag"], "1.8.0-py3.8-ubuntu22.04");
        assert_eq!(base[0]["flwr_version"], "1.8.0");

        assert_eq!(binary[1]["namespace_repository"], "flwr/superlink");
        assert_eq!(binary[1]["base_image"], "1.8.0-py3.11-alpine3.19");
        assert_eq!(binary[1]["tags"], "1.8.0-py3.11-alpine3.19\n1.8.0");
    }

    #[test]
    fn test_json_is_deterministic() {
        let first = Matrix::for_release(&release()).to_json().unwrap();
        let second = Matrix::for_release(&release()).to_json().unwrap();
        assert_eq!(first, second);
    }
}
