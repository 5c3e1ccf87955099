//! Platform-specific path resolution for configuration files

use std::path::PathBuf;

#[derive(Debug)]
/// Utility for resolving cloudtmpl paths
pub struct PathResolver;

impl PathResolver {
    /// Get user config directory
    pub fn user_config_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".cloudtmpl"))
            .unwrap_or_else(|| PathBuf::from("~/.cloudtmpl"))
    }

    /// Get default config file path
    pub fn default_config_file() -> PathBuf {
        Self::user_config_dir().join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_resolution() {
        let dir = PathResolver::user_config_dir();
        let file = PathResolver::default_config_file();

        assert!(dir.to_str().unwrap().contains(".cloudtmpl"));
        assert_eq!(file.file_name().unwrap(), "config.yaml");
        assert!(file.starts_with(&dir));
    }
}
