pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{json_file::JsonFileSpeakerRepository, memory::InMemorySpeakerRepository};
pub use config::{rules::RegistrationRules, toml_config::TomlConfig};
pub use core::registrar::Registrar;
pub use domain::model::{
    Browser, BrowserName, RegisterError, RegisterResponse, RegisterResult, Registration, Session,
    Speaker, SpeakerId,
};
pub use domain::ports::SpeakerRepository;
pub use utils::error::{Result, ServiceError};
