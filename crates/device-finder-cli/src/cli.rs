//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};

use device_finder_core::scan::DEFAULT_API_URL;
use device_finder_core::types::ScanMethod;

/// Device Finder CLI - Command-line interface for device discovery
#[derive(Parser, Debug)]
#[command(name = "device-finder-cli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Scan request timeout in milliseconds
    #[arg(long, global = true, default_value = "10000", env = "DEVICE_CLI_TIMEOUT")]
    pub timeout: u64,

    /// Base URL of the discovery API
    #[arg(long, global = true, default_value = DEFAULT_API_URL, env = "DEVICE_API_URL")]
    pub api_url: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan for devices via the discovery API
    Scan(ScanArgs),

    /// List Bluetooth devices (paired and currently visible)
    Bluetooth(BluetoothArgs),

    /// Show scan results as the sidebar section view
    List(ListArgs),
}

// ==================== Scan ====================

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Discovery method
    #[arg(short, long, value_enum, default_value = "wifi")]
    pub method: MethodArg,

    /// Only show devices whose name contains this text
    #[arg(short, long)]
    pub filter: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MethodArg {
    Wifi,
    Bluetooth,
    Camera,
    All,
}

impl MethodArg {
    pub fn to_method(self) -> ScanMethod {
        match self {
            MethodArg::Wifi => ScanMethod::Wifi,
            MethodArg::Bluetooth => ScanMethod::Bluetooth,
            MethodArg::Camera => ScanMethod::Camera,
            MethodArg::All => ScanMethod::All,
        }
    }
}

// ==================== Bluetooth ====================

#[derive(Args, Debug)]
pub struct BluetoothArgs {
    /// Only show paired devices
    #[arg(long, conflicts_with = "available_only")]
    pub paired_only: bool,

    /// Only show currently visible devices
    #[arg(long)]
    pub available_only: bool,
}

// ==================== List ====================

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Discovery method feeding the view
    #[arg(short, long, value_enum, default_value = "all")]
    pub method: MethodArg,

    /// Live-search filter applied to device names
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Print one flat table instead of sections
    #[arg(long)]
    pub flat: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_arg_mapping() {
        assert_eq!(MethodArg::Wifi.to_method(), ScanMethod::Wifi);
        assert_eq!(MethodArg::Bluetooth.to_method(), ScanMethod::Bluetooth);
        assert_eq!(MethodArg::Camera.to_method(), ScanMethod::Camera);
        assert_eq!(MethodArg::All.to_method(), ScanMethod::All);
    }
}
