use clap::Subcommand;
use hugmind_core::Config;

use super::{CmdResult, Session};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "day_boundary", "display.streak_unit")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> CmdResult {
    let mut session = Session::open()?;

    match action {
        ConfigAction::Get { key } => match session.config.get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown key: {key}").into()),
        },
        ConfigAction::Set { key, value } => {
            session.config.set(&key, &value)?;
            session.config.save_to(&session.config_path())?;
            println!("ok");
        }
        ConfigAction::List => {
            let json = serde_json::to_string_pretty(&session.config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            Config::default().save_to(&session.config_path())?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
