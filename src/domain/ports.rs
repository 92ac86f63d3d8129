use crate::domain::model::{ApprovedSpeaker, SpeakerId};
use crate::utils::error::Result;

/// Persistence collaborator for approved speakers.
///
/// `Ok(None)` means the store accepted the call but produced no identifier.
pub trait SpeakerRepository: Send + Sync {
    fn save_speaker(&self, speaker: &ApprovedSpeaker) -> Result<Option<SpeakerId>>;
}

impl<R: SpeakerRepository + ?Sized> SpeakerRepository for &R {
    fn save_speaker(&self, speaker: &ApprovedSpeaker) -> Result<Option<SpeakerId>> {
        (**self).save_speaker(speaker)
    }
}

impl<R: SpeakerRepository + ?Sized> SpeakerRepository for Box<R> {
    fn save_speaker(&self, speaker: &ApprovedSpeaker) -> Result<Option<SpeakerId>> {
        (**self).save_speaker(speaker)
    }
}
