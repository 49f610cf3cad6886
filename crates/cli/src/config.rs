use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use stockroom_observability::{LogFormat, LogSettings};

pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "stockroom",
    version,
    about = "Interactive retail inventory manager"
)]
pub struct CliArgs {
    #[arg(
        long,
        env = "STOCKROOM_FILE",
        value_name = "FILE",
        default_value = DEFAULT_INVENTORY_FILE,
        help = "Inventory file offered by default at the save and load prompts"
    )]
    pub file: PathBuf,

    #[arg(long, help = "Load the inventory file before showing the menu")]
    pub load: bool,

    #[arg(
        long,
        env = "STOCKROOM_LOG_FORMAT",
        value_enum,
        default_value = "text",
        value_name = "FORMAT",
        help = "Log output format (text or json)"
    )]
    pub log_format: LogFormatArg,

    #[arg(
        long,
        env = "STOCKROOM_LOG",
        default_value = "warn",
        value_name = "FILTER",
        help = "Log filter used when RUST_LOG is unset"
    )]
    pub log_filter: String,
}

impl CliArgs {
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            format: match self.log_format {
                LogFormatArg::Text => LogFormat::Text,
                LogFormatArg::Json => LogFormat::Json,
            },
            default_filter: self.log_filter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_are_parsed() {
        let args = CliArgs::try_parse_from([
            "stockroom",
            "--file",
            "shop.json",
            "--load",
            "--log-format",
            "json",
            "--log-filter",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.file, PathBuf::from("shop.json"));
        assert!(args.load);
        let settings = args.log_settings();
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.default_filter, "debug");
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(CliArgs::try_parse_from(["stockroom", "--log-format", "xml"]).is_err());
    }
}
