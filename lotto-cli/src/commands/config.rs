use crate::config::CliConfig;

pub async fn handle_config_command(config: &CliConfig, write: bool) -> anyhow::Result<()> {
    println!("Data directory: {}", config.data_dir.display());
    println!("Config file: {}", config.path().display());
    println!();
    println!("{}", serde_json::to_string_pretty(config)?);

    if write {
        let path = config.save().await?;
        println!();
        println!("Configuration written to {}", path.display());
    }

    Ok(())
}
