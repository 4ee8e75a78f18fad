use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Supplies the ordered list of root directories to index
pub trait PathSource: Send + Sync {
    fn roots(&self) -> Result<Vec<PathBuf>>;
}

impl PathSource for Config {
    fn roots(&self) -> Result<Vec<PathBuf>> {
        Ok(self.root_paths())
    }
}

impl PathSource for Vec<PathBuf> {
    fn roots(&self) -> Result<Vec<PathBuf>> {
        Ok(self.clone())
    }
}

impl PathSource for [PathBuf] {
    fn roots(&self) -> Result<Vec<PathBuf>> {
        Ok(self.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexConfig;

    #[test]
    fn test_config_source_keeps_order() {
        let config = Config {
            index: IndexConfig {
                paths: vec!["/usr/share".to_string(), "/opt".to_string(), "/srv".to_string()],
                ..Default::default()
            },
        };

        let roots = config.roots().unwrap();
        assert_eq!(
            roots,
            vec![PathBuf::from("/usr/share"), PathBuf::from("/opt"), PathBuf::from("/srv")]
        );
    }

    #[test]
    fn test_slice_source() {
        let paths = vec![PathBuf::from("/a"), PathBuf::from("/b")];
        let source: &[PathBuf] = &paths;

        assert_eq!(source.roots().unwrap(), paths);
        assert_eq!(paths.roots().unwrap(), paths);
    }
}
