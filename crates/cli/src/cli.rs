use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use meater_domain::TemperatureUnit;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "meater", author, version, about = "Read cook history from the MEATER cloud", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "MEATER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Session file holding the access token and device id
    #[arg(long, global = true)]
    pub session: Option<PathBuf>,

    /// Account e-mail
    #[arg(long, global = true, env = "MEATER_EMAIL")]
    pub email: Option<String>,

    /// Account password
    #[arg(long, global = true, env = "MEATER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session
    Login {
        /// Log in again even if a token is stored
        #[arg(long)]
        force: bool,
    },
    /// Forget the stored token
    Logout,
    /// List recorded cooks
    Cooks(CooksArgs),
    /// Export the temperature history of one cook
    History(HistoryArgs),
    /// Show live devices from the public API
    Devices {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Decode raw temperature values (°C × 32)
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
pub struct CooksArgs {
    /// Include deleted cooks
    #[arg(long)]
    pub all: bool,

    /// Only favourites
    #[arg(long)]
    pub favourites: bool,

    /// meats.json catalog used to name cuts and presets
    #[arg(long, env = "MEATER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistoryFormat {
    Csv,
    Json,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Cook id as shown by `meater cooks`
    pub cook_id: String,

    #[arg(long, value_enum, default_value_t = HistoryFormat::Csv)]
    pub format: HistoryFormat,

    /// Temperature unit (c or f)
    #[arg(long, default_value = "c")]
    pub unit: TemperatureUnit,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Raw values
    #[arg(required = true, allow_negative_numbers = true)]
    pub raw: Vec<i32>,

    /// Temperature unit (c or f)
    #[arg(long, default_value = "c")]
    pub unit: TemperatureUnit,
}
