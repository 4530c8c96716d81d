// src/config.rs
// =============================================================================
// Where we download from and where we write to.
//
// All of these are fixed: the source repository, the API version and the
// output directory are constants. FetchConfig bundles them together with the
// --dry-run flag so that every step receives the same settings explicitly.
//
// Tests build a FetchConfig by hand to point at a local server and a
// temporary directory.
// =============================================================================

use std::path::{Path, PathBuf};

/// Raw content host for the Azure REST API specs repository (main branch)
pub const BASE_URL: &str = "https://raw.githubusercontent.com/Azure/azure-rest-api-specs/main";

/// GitHub contents API root for the same repository
pub const CONTENTS_API_URL: &str =
    "https://api.github.com/repos/Azure/azure-rest-api-specs/contents";

/// Location of the AKS stable API version inside the repository
pub const SPEC_PATH: &str = "specification/containerservice/resource-manager/Microsoft.ContainerService/aks/stable/2025-03-01";

/// Name of the main spec file, both remotely and on disk
pub const SPEC_FILE_NAME: &str = "managedClusters.json";

/// Name of the output directory, relative to the project root
pub const TARGET_DIR_NAME: &str = "azure_spec";

/// Name of the subdirectory holding example files
pub const EXAMPLES_DIR_NAME: &str = "examples";

/// Settings for a single fetch run
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// URL of the main spec file
    pub spec_url: String,
    /// GitHub contents API URL listing the examples directory
    pub examples_api_url: String,
    /// Directory that receives the spec file and examples/
    pub target_dir: PathBuf,
    /// When true, nothing is created, downloaded or written
    pub dry_run: bool,
    /// Sent as the User-Agent header on every request
    pub user_agent: String,
}

impl FetchConfig {
    /// Builds the configuration from the baked-in constants
    pub fn new(dry_run: bool) -> Self {
        Self {
            spec_url: format!("{}/{}/{}", BASE_URL, SPEC_PATH, SPEC_FILE_NAME),
            examples_api_url: format!("{}/{}/{}", CONTENTS_API_URL, SPEC_PATH, EXAMPLES_DIR_NAME),
            target_dir: project_root().join(TARGET_DIR_NAME),
            dry_run,
            user_agent: default_user_agent(),
        }
    }

    /// Where the main spec file is written
    pub fn spec_file_path(&self) -> PathBuf {
        self.target_dir.join(SPEC_FILE_NAME)
    }

    /// Where example files are written
    pub fn examples_dir(&self) -> PathBuf {
        self.target_dir.join(EXAMPLES_DIR_NAME)
    }
}

// The project root is the directory holding this crate's Cargo.toml.
// azure_spec/ is created next to src/, wherever the repository is checked out.
pub fn project_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
