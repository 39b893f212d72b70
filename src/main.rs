//! Entry point for the **hyprhelper** CLI.
//!
//! Parses one subcommand, resolves the Hyprland socket from the environment
//! and runs the matching action.  Every failure ends the process with a
//! non-zero status.

use clap::{Args, Parser, Subcommand, ValueEnum};
use hyprhelper::command::{Command, Cycle, GapChange, GapLocation, GapsRequest};
use hyprhelper::config::{self, Config};
use hyprhelper::external::{DmenuPicker, ProcessLauncher};
use hyprhelper::ipc::{HyprClient, UnixSocketTransport};
use hyprhelper::ops::{self, Context};
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hyprhelper")]
#[command(about = "Compound window and monitor actions for Hyprland")]
#[command(version)]
struct Cli {
    /// Path to configuration file [default: $XDG_CONFIG_HOME/hyprhelper/config.json]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Toggle between the last two windows
    LastFocused,

    /// Dropdown terminal
    DropdownTerm {
        /// Terminal emulator to spawn
        #[arg(short, long)]
        terminal: Option<String>,
        /// tmux session name
        #[arg(short, long)]
        session: Option<String>,
    },

    /// Focus next or previous monitor and center the mouse cursor
    FocusMonitor(CycleArgs),

    /// Move active window to next or previous monitor
    MoveToMonitor(CycleArgs),

    /// Control gaps temporarily
    Gaps {
        /// Which gaps to change
        #[arg(value_enum)]
        location: LocationArg,
        #[command(flatten)]
        change: ChangeArgs,
        /// Workspace ids to leave untouched
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<i64>,
    },

    /// Minimize active window
    Minimize,

    /// Open a menu of minimized windows to restore
    Unminimize,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct CycleArgs {
    #[arg(short, long)]
    next: bool,
    #[arg(short, long)]
    previous: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ChangeArgs {
    #[arg(short, long, value_name = "N")]
    increase: Option<u32>,
    #[arg(short, long, value_name = "N")]
    decrease: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LocationArg {
    Inner,
    Outer,
}

impl CycleArgs {
    fn cycle(&self) -> Cycle {
        if self.next {
            Cycle::Next
        } else {
            Cycle::Previous
        }
    }
}

impl ChangeArgs {
    fn change(&self) -> GapChange {
        match (self.increase, self.decrease) {
            (Some(n), _) => GapChange::Increase(n),
            (None, Some(n)) => GapChange::Decrease(n),
            (None, None) => GapChange::Increase(0),
        }
    }
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::LastFocused => Command::LastFocused,
            Commands::DropdownTerm { terminal, session } => {
                Command::DropdownTerm { terminal, session }
            }
            Commands::FocusMonitor(args) => Command::FocusMonitor(args.cycle()),
            Commands::MoveToMonitor(args) => Command::MoveToMonitor(args.cycle()),
            Commands::Gaps {
                location,
                change,
                exclude,
            } => Command::Gaps(GapsRequest {
                location: match location {
                    LocationArg::Inner => GapLocation::Inner,
                    LocationArg::Outer => GapLocation::Outer,
                },
                change: change.change(),
                exclude: exclude.into_iter().collect(),
            }),
            Commands::Minimize => Command::Minimize,
            Commands::Unminimize => Command::Unminimize,
        }
    }
}

/// Load the config file, falling back to compiled-in defaults when the
/// default location has no file.  An explicitly given file must load.
fn load_config(explicit: Option<PathBuf>) -> Result<Config, config::ConfigError> {
    match explicit {
        Some(path) => Config::load(&path),
        None => {
            let path = config::default_config_path();
            match Config::load(&path) {
                Ok(cfg) => {
                    info!("loaded config from {}", path.display());
                    Ok(cfg)
                }
                Err(config::ConfigError::Read { .. }) => {
                    info!("no config file at {}, using defaults", path.display());
                    Ok(Config::default())
                }
                Err(e) => Err(e),
            }
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let socket = match config::socket_path() {
        Ok(p) => p,
        Err(e) => {
            error!("{}", e);
            eprintln!("hyprhelper: {}", e);
            std::process::exit(1);
        }
    };
    let config = match load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            eprintln!("hyprhelper: {}", e);
            std::process::exit(1);
        }
    };

    let client = HyprClient::new(UnixSocketTransport::new(&socket));
    let menu = DmenuPicker::new(&config.menu);
    let launcher = ProcessLauncher;
    let ctx = Context {
        config: &config,
        menu: &menu,
        launcher: &launcher,
    };

    let command = Command::from(cli.command);
    if let Err(e) = ops::run(&client, &command, &ctx) {
        error!("{:?} failed: {}", command, e);
        eprintln!("hyprhelper: {}", e);
        std::process::exit(1);
    }
}
