// Adapters layer: concrete SpeakerRepository implementations.

pub mod json_file;
pub mod memory;

use crate::config::toml_config::{RepositoryKind, TomlConfig};
use crate::domain::ports::SpeakerRepository;
use crate::utils::error::{Result, ServiceError};
use std::path::{Path, PathBuf};

/// Which repository a run writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryTarget {
    Memory,
    JsonFile(PathBuf),
}

impl RepositoryTarget {
    /// An explicit store path overrides whatever the config names.
    pub fn resolve(store: Option<&Path>, config: &TomlConfig) -> Result<Self> {
        if let Some(store) = store {
            return Ok(Self::JsonFile(store.to_path_buf()));
        }

        match config.repository_kind() {
            RepositoryKind::Memory => Ok(Self::Memory),
            RepositoryKind::JsonFile => {
                let path = config
                    .repository_path()
                    .ok_or_else(|| ServiceError::MissingConfigError {
                        field: "repository.path".to_string(),
                    })?;
                Ok(Self::JsonFile(PathBuf::from(path)))
            }
        }
    }

    pub fn open(self) -> Box<dyn SpeakerRepository> {
        match self {
            Self::Memory => Box::new(memory::InMemorySpeakerRepository::new()),
            Self::JsonFile(path) => Box::new(json_file::JsonFileSpeakerRepository::new(path)),
        }
    }
}
