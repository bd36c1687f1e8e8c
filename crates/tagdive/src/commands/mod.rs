pub mod deepdive;
pub mod report;
pub mod run;
pub mod status;
pub mod summary;
pub mod version;

use std::path::PathBuf;
use tagdive_core::PipelineConfig;

/// Working directory for a command: the --dir flag or the current directory
pub(crate) fn resolve_root(dir: Option<&str>) -> anyhow::Result<PathBuf> {
    match dir {
        Some(d) => Ok(PathBuf::from(d)),
        None => Ok(std::env::current_dir()?),
    }
}

/// Built-in defaults, optionally overridden by a JSON file
pub(crate) fn load_config(config: Option<&str>) -> anyhow::Result<PipelineConfig> {
    match config {
        Some(path) => Ok(PipelineConfig::load(std::path::Path::new(path))?),
        None => Ok(PipelineConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_explicit() {
        let root = resolve_root(Some("/data/export")).unwrap();
        assert_eq!(root, PathBuf::from("/data/export"));
    }

    #[test]
    fn test_load_config_default() {
        let config = load_config(None).unwrap();
        assert_eq!(config.tag_sources.len(), 4);
    }

    #[test]
    fn test_load_config_missing_file_fails() {
        assert!(load_config(Some("/nonexistent/config.json")).is_err());
    }
}
