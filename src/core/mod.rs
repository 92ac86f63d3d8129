pub mod fee;
pub mod fields;
pub mod registrar;
pub mod sessions;
pub mod standards;

pub use crate::domain::model::{Assessment, RegisterError, RegisterResult, Speaker};
pub use crate::domain::ports::SpeakerRepository;
pub use crate::utils::error::Result;
