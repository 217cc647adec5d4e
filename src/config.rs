use crate::imports::*;
use clap::Parser;

/*
    SessionConfig - command-line configuration for the shipscope binary.
    Every option has a default, so running with no arguments loads ./ships_data.json.
*/
#[derive(Debug, Clone, Parser)]
#[command(name = "shipscope", version, about = "Explore a vessel dataset from an interactive prompt")]
pub struct SessionConfig {
    /// Dataset to load (json, csv or parquet)
    #[arg(env = "SHIPSCOPE_DATA", default_value = "ships_data.json")]
    pub data: PathBuf,

    /// Dataset format, inferred from the file extension when omitted
    #[arg(long, value_parser = parse_format)]
    pub format: Option<DataFormat>,

    /// Number of bins used by speed_histogram
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    pub histogram_bins: u16,

    /// Prompt shown before each command
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "SHIPSCOPE_LOG", default_value = "warn")]
    pub log_level: String,

    /// Run these commands instead of reading from stdin, then exit
    #[arg(short = 'c', long = "command")]
    pub commands: Vec<String>,
}

impl SessionConfig {
    pub fn command_settings(&self) -> CommandSettings {
        CommandSettings {
            histogram_bins: usize::from(self.histogram_bins),
            ..CommandSettings::default()
        }
    }

    pub fn is_scripted(&self) -> bool {
        !self.commands.is_empty()
    }
}

fn parse_format(s: &str) -> std::result::Result<DataFormat, String> {
    s.parse::<DataFormat>().map_err(|e| e.to_string())
}
