use anyhow::Result;
use colored::Colorize;

use crate::ai::client::FALLBACK_MODELS;
use crate::cli::ConfigCommands;
use crate::config::Config;

/// Run the config command.
pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
        ConfigCommands::Init => init(),
    }
}

fn show() -> Result<()> {
    let config = Config::load_or_default();
    println!("{}", format!("# {}", Config::path()?.display()).dimmed());
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("{}", format!("Saved {key} to {}", path.display()).green());
    Ok(())
}

fn init() -> Result<()> {
    println!("Setting up the AI gateway connection.\n");

    let mut config = Config::load_or_default();

    let url = inquire::Text::new("Gateway URL:")
        .with_default(&config.gateway_url())
        .prompt()?;
    config.set("gateway.url", url.trim())?;

    let model = inquire::Select::new("Default model:", FALLBACK_MODELS.to_vec()).prompt()?;
    config.set("gateway.model", model)?;

    let live = inquire::Confirm::new("Fetch the model list live from the gateway?")
        .with_default(false)
        .with_help_message("Off serves a cached list; live fetching can trip upstream rate limits")
        .prompt()?;
    config.set("gateway.live_models", if live { "true" } else { "false" })?;

    let path = config.save()?;
    println!();
    println!(
        "{}",
        format!("Configuration written to {}", path.display())
            .green()
            .bold()
    );
    println!("Start the gateway with `pitchgate`, then launch `pitchdeck`.");
    Ok(())
}
