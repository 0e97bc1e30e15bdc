use std::io::Write;

use log::info;

use super::{EnvPaths, ENV_FILE, ENV_TEMPLATE_FILE};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileOutcome {
    Created,
    AlreadyExists,
}

/// Seeds the env file from the template unless one is already in place.
///
/// An existing file is never touched. A missing template is only an error
/// when a copy is actually needed.
pub fn ensure_env_file<W: Write>(paths: &EnvPaths, out: &mut W) -> Result<EnvFileOutcome> {
    if paths.target.exists() {
        writeln!(out, "📄 {} file already exists, skipping copy.\n", ENV_FILE)?;
        info!("{} already present", paths.target.display());
        return Ok(EnvFileOutcome::AlreadyExists);
    }

    writeln!(out, "📄 Copying {} to {}...", ENV_TEMPLATE_FILE, ENV_FILE)?;
    std::fs::copy(&paths.template, &paths.target).map_err(|source| Error::CopyTemplate {
        template: paths.template.clone(),
        target: paths.target.clone(),
        source,
    })?;
    info!(
        "Copied {} to {}",
        paths.template.display(),
        paths.target.display()
    );
    writeln!(out, "✅ Environment file created!\n")?;

    Ok(EnvFileOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TEMPLATE: &[u8] = b"DOMAIN_CLIENT=http://YOUR_SERVER_IP:3090\nOPENAI_API_KEY=\n";

    fn workspace() -> Result<(TempDir, EnvPaths)> {
        let dir = TempDir::new()?;
        let paths = EnvPaths::in_dir(dir.path());
        fs::write(&paths.template, TEMPLATE)?;
        Ok((dir, paths))
    }

    #[test]
    fn test_first_run_copies_template() -> Result<()> {
        let (_dir, paths) = workspace()?;
        let mut out = Vec::new();

        let outcome = ensure_env_file(&paths, &mut out)?;

        assert_eq!(outcome, EnvFileOutcome::Created);
        assert_eq!(fs::read(&paths.target)?, TEMPLATE);
        assert_eq!(
            String::from_utf8_lossy(&out),
            "📄 Copying .env.dev.example to .env...\n✅ Environment file created!\n\n"
        );
        Ok(())
    }

    #[test]
    fn test_second_run_leaves_file_alone() -> Result<()> {
        let (_dir, paths) = workspace()?;
        ensure_env_file(&paths, &mut Vec::new())?;
        fs::write(&paths.target, b"DOMAIN_CLIENT=http://10.0.0.2:3090\n")?;
        let mut out = Vec::new();

        let outcome = ensure_env_file(&paths, &mut out)?;

        assert_eq!(outcome, EnvFileOutcome::AlreadyExists);
        assert_eq!(
            fs::read(&paths.target)?,
            b"DOMAIN_CLIENT=http://10.0.0.2:3090\n"
        );
        assert_eq!(
            String::from_utf8_lossy(&out),
            "📄 .env file already exists, skipping copy.\n\n"
        );
        Ok(())
    }

    #[test]
    fn test_missing_template_is_fatal() -> Result<()> {
        let dir = TempDir::new()?;
        let paths = EnvPaths::in_dir(dir.path());

        let result = ensure_env_file(&paths, &mut Vec::new());

        assert!(matches!(result, Err(Error::CopyTemplate { .. })));
        assert!(!paths.target.exists());
        Ok(())
    }

    #[test]
    fn test_existing_target_without_template_is_fine() -> Result<()> {
        let dir = TempDir::new()?;
        let paths = EnvPaths::in_dir(dir.path());
        fs::write(&paths.target, b"X=1\n")?;

        let outcome = ensure_env_file(&paths, &mut Vec::new())?;

        assert_eq!(outcome, EnvFileOutcome::AlreadyExists);
        Ok(())
    }
}
