use crate::domain::model::{ApprovedSpeaker, SpeakerId, StoredSpeaker};
use crate::domain::ports::SpeakerRepository;
use crate::utils::error::Result;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores one `StoredSpeaker` per line (JSON Lines).
///
/// The next id is the number of rows already in the file plus one, so the
/// file must not be written by anything else concurrently.
#[derive(Debug, Clone)]
pub struct JsonFileSpeakerRepository {
    path: PathBuf,
}

impl JsonFileSpeakerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every stored row; a missing file is an empty store.
    pub fn load_all(&self) -> Result<Vec<StoredSpeaker>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut speakers = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            speakers.push(serde_json::from_str(&line)?);
        }
        Ok(speakers)
    }
}

impl SpeakerRepository for JsonFileSpeakerRepository {
    fn save_speaker(&self, approved: &ApprovedSpeaker) -> Result<Option<SpeakerId>> {
        let id = self.load_all()?.len() as SpeakerId + 1;
        let row = StoredSpeaker {
            id,
            registered_at: Utc::now(),
            registration_fee: approved.registration_fee,
            speaker: approved.speaker.clone(),
        };
        let line = serde_json::to_string(&row)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;

        debug!(
            "Appended speaker {} to {} with id {}",
            approved.speaker.email,
            self.path.display(),
            id
        );
        Ok(Some(id))
    }
}
