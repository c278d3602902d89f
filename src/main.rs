// src/main.rs
use clap::Parser;
use league_builder::cli::{Args, is_config_update};
use league_builder::commands::{
    handle_build_command, handle_config_update_command, handle_list_config_command,
    validate_args,
};
use league_builder::config::Config;
use league_builder::error::AppError;
use league_builder::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    validate_args(&args)?;

    // Stored settings first, then this run's overrides
    let config_path = args
        .config_path
        .clone()
        .unwrap_or_else(Config::get_config_path);
    let mut config = Config::load_or_default(&config_path).await?;
    config.apply_args(&args)?;
    config.validate()?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        handle_list_config_command(&config, &config_path);
        return Ok(());
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args, config, &config_path).await;
    }

    let summary = handle_build_command(&config).await?;
    println!("{summary}");

    Ok(())
}
