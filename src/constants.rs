/// Repository naming constants
pub mod repository {
    /// Docker Hub namespace all images are pushed under
    pub const NAMESPACE: &str = "flwr";

    /// Repository name of the base images
    pub const BASE: &str = "base";
}

/// Dockerfile location constants
pub mod dockerfile {
    /// Root directory containing the Dockerfiles, relative to the repository root
    pub const ROOT: &str = "src/docker";
}

/// Python version constants
pub mod python {
    /// Highest Python version images are built for
    pub const LATEST_SUPPORTED: &str = "3.11";

    /// All Python versions images are built for, oldest first
    pub const SUPPORTED: [&str; 4] = ["3.8", "3.9", "3.10", LATEST_SUPPORTED];
}

/// Distro version constants
pub mod distro {
    /// Pinned Ubuntu release
    pub const UBUNTU: &str = "22.04";

    /// Pinned Alpine release
    pub const ALPINE: &str = "3.19";
}

/// Binary image component names
pub mod component {
    pub const SUPERLINK: &str = "superlink";

    pub const SUPERNODE: &str = "supernode";

    pub const SERVERAPP: &str = "serverapp";
}
