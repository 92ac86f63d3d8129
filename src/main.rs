use anyhow::Context;
use clap::Parser;
use speaker_registration::adapters::RepositoryTarget;
use speaker_registration::utils::{exit_code, logger, validation::Validate};
use speaker_registration::{
    CliConfig, RegisterResponse, Registrar, ServiceError, Speaker, TomlConfig,
};
use std::process::ExitCode;

fn load_config(cli: &CliConfig) -> Result<TomlConfig, ServiceError> {
    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn read_speaker(cli: &CliConfig) -> anyhow::Result<Speaker> {
    let content = std::fs::read_to_string(&cli.speaker)
        .with_context(|| format!("Failed to read speaker file {}", cli.speaker.display()))?;
    let speaker = serde_json::from_str(&content)
        .with_context(|| format!("Invalid speaker JSON in {}", cli.speaker.display()))?;
    Ok(speaker)
}

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            return ExitCode::from(exit_code::INPUT_ERROR);
        }
    };

    // 初始化日誌
    if cli.json_logs || config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting speaker-registration");
    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Rules: {:?}", config.rules);

    // --store 優先於配置檔
    let repository = match RepositoryTarget::resolve(cli.store.as_deref(), &config) {
        Ok(target) => {
            tracing::debug!("Repository: {:?}", target);
            target.open()
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            return ExitCode::from(exit_code::INPUT_ERROR);
        }
    };

    let speaker = match read_speaker(&cli) {
        Ok(speaker) => speaker,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            return ExitCode::from(exit_code::INPUT_ERROR);
        }
    };

    let registrar = Registrar::new(config.rules);
    let result = registrar.register(&speaker, &repository);
    let response = RegisterResponse::from(&result);

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Failed to render response: {}", e);
            return ExitCode::from(exit_code::SOMETHING_WENT_WRONG);
        }
    }

    match &result {
        Ok(registration) => tracing::info!(
            "✅ Speaker registered with id {} (fee {})",
            registration.speaker_id,
            registration.registration_fee
        ),
        Err(e) => eprintln!("❌ {}", e),
    }

    ExitCode::from(exit_code::for_result(&result))
}
