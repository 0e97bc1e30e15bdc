use std::path::{Path, PathBuf};

pub mod env_file;
pub mod guidance;
pub mod network;

pub const ENV_FILE: &str = ".env";
pub const ENV_TEMPLATE_FILE: &str = ".env.dev.example";

pub const DOMAIN_CLIENT_PORT: u16 = 3090;
pub const DOMAIN_SERVER_PORT: u16 = 3080;

/// Where the active env file lives and the template it is seeded from.
#[derive(Debug, Clone)]
pub struct EnvPaths {
    pub target: PathBuf,
    pub template: PathBuf,
}

impl EnvPaths {
    /// Paths relative to this package's own directory.
    ///
    /// The directory is baked in at compile time, so `setup-dev` is meant to be
    /// run through `cargo run` from this checkout rather than installed.
    pub fn project() -> Self {
        Self::in_dir(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        EnvPaths {
            target: dir.join(ENV_FILE),
            template: dir.join(ENV_TEMPLATE_FILE),
        }
    }
}

#[test]
fn test_project_paths_are_siblings() -> crate::error::Result<()> {
    let paths = EnvPaths::project();

    assert_eq!(paths.target.parent(), paths.template.parent());
    assert!(paths.target.ends_with(".env"));
    assert!(paths.template.ends_with(".env.dev.example"));
    assert!(paths.template.exists());
    Ok(())
}
