//! JSON-file backed profile storage

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::ProfileRecord;

/// Errors raised while reading or writing the profile file
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Profile already exists at {0} (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

/// How the profile came to be in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Read from an existing file
    Loaded,
    /// File was missing, the sample record was written in its place
    Created,
}

/// Reads and writes the profile record at a fixed path
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the record, writing the sample record first if the file is missing
    pub fn load_or_init(&self) -> Result<(ProfileRecord, LoadOutcome), ProfileError> {
        debug!(path = %self.path.display(), "load_or_init: called");
        if !self.exists() {
            warn!(path = %self.path.display(), "Profile not found, writing sample data");
            let record = ProfileRecord::sample();
            self.save(&record)?;
            return Ok((record, LoadOutcome::Created));
        }

        let record = self.load()?;
        Ok((record, LoadOutcome::Loaded))
    }

    /// Load the record from disk
    pub fn load(&self) -> Result<ProfileRecord, ProfileError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ProfileError::Io {
            path: self.path.clone(),
            source,
        })?;

        let record: ProfileRecord = serde_json::from_str(&content).map_err(|source| ProfileError::Parse {
            path: self.path.clone(),
            source,
        })?;

        info!("Loaded profile from: {}", self.path.display());
        Ok(record)
    }

    /// Write the record as pretty-printed JSON, creating parent directories
    pub fn save(&self, record: &ProfileRecord) -> Result<(), ProfileError> {
        debug!(path = %self.path.display(), "save: called");
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| ProfileError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut content = serde_json::to_string_pretty(record)?;
        content.push('\n');
        fs::write(&self.path, content).map_err(|source| ProfileError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!("Wrote profile to: {}", self.path.display());
        Ok(())
    }

    /// Write the sample record, refusing to clobber an existing file unless forced
    pub fn init_sample(&self, force: bool) -> Result<ProfileRecord, ProfileError> {
        if self.exists() && !force {
            return Err(ProfileError::AlreadyExists(self.path.clone()));
        }
        let record = ProfileRecord::sample();
        self.save(&record)?;
        Ok(record)
    }
}
