//! Repository adapters for the catalog layer

use std::path::{Path, PathBuf};

use pettransit_infra::persistence::CatalogRepository;
use pettransit_types::Result;
use tracing::info;

use crate::config::Config;

/// Open the catalog named by `override_path`, the config, or the built-in sample
pub fn open_catalog(config: &Config, override_path: Option<&Path>) -> Result<CatalogRepository> {
    let path: Option<PathBuf> = override_path
        .map(Path::to_path_buf)
        .or_else(|| config.catalog_path.clone());

    match path {
        Some(path) => {
            info!(path = %path.display(), "opening catalog file");
            CatalogRepository::open(path)
        }
        None => Ok(CatalogRepository::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pettransit_infra::persistence::CatalogSource;

    #[test]
    fn test_defaults_to_builtin() {
        let repo = open_catalog(&Config::default(), None).unwrap();
        assert_eq!(repo.source(), &CatalogSource::BuiltIn);
    }

    #[test]
    fn test_override_wins_over_config() {
        let config = Config {
            catalog_path: Some(PathBuf::from("/nonexistent/config-catalog.toml")),
            ..Default::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "").unwrap();
        let repo = open_catalog(&config, Some(&path)).unwrap();
        assert_eq!(repo.source(), &CatalogSource::File(path));
    }
}
