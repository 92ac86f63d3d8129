use crate::domain::model::{ApprovedSpeaker, SpeakerId, StoredSpeaker};
use crate::domain::ports::SpeakerRepository;
use crate::utils::error::{Result, ServiceError};
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// In-memory repository; ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct InMemorySpeakerRepository {
    speakers: Mutex<Vec<StoredSpeaker>>,
}

impl InMemorySpeakerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<StoredSpeaker>>> {
        self.speakers
            .lock()
            .map_err(|_| ServiceError::repository("in-memory store lock poisoned"))
    }

    pub fn speakers(&self) -> Result<Vec<StoredSpeaker>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl SpeakerRepository for InMemorySpeakerRepository {
    fn save_speaker(&self, approved: &ApprovedSpeaker) -> Result<Option<SpeakerId>> {
        let mut speakers = self.lock()?;
        let id = speakers.len() as SpeakerId + 1;

        speakers.push(StoredSpeaker {
            id,
            registered_at: Utc::now(),
            registration_fee: approved.registration_fee,
            speaker: approved.speaker.clone(),
        });

        debug!("Stored speaker {} in memory with id {}", approved.speaker.email, id);
        Ok(Some(id))
    }
}
