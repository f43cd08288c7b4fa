//! # vpnpick
//!
//! Terminal menu for picking a VPN endpoint (country, city, protocol) from a
//! directory of profile files, then handing the chosen profile to the VPN
//! client.
//!
//! ## Modules
//! - [`app`]: Selection controller and drill-down.
//! - [`cli`]: Command-line argument parsing.
//! - [`config`]: Configuration management.
//! - [`core`]: VPN client launcher.
//! - [`event`]: Terminal event source.
//! - [`ui`]: Menu, search strip and notice rendering.
//! - [`vpn`]: Profile name parsing and the profile index.

mod app;
mod cli;
mod config;
mod constants;
mod core;
mod event;
mod logger;
mod message;
mod state;
mod theme;
mod ui;
mod utils;
mod vpn;

use std::path::Path;
use std::process;

use app::{App, Selection};
use clap::Parser;
use cli::args::Args;
use color_eyre::{eyre::eyre, Result};
use event::TerminalEvents;
use ui::notice::Notice;

/// Exit status after Ctrl-C, as a shell reports SIGINT.
const EXIT_INTERRUPTED: i32 = 130;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Resolve config directory (CLI flag / env > XDG > SUDO_USER-aware home)
    let config_dir = config::resolve_config_dir(args.config_dir.as_ref())
        .map_err(|e| eyre!("Failed to resolve config directory: {e}"))?;

    // Load config.toml (or use defaults)
    let mut app_config = match config::load_config(&config_dir) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("Fix the file or remove it to use defaults:");
            eprintln!("  rm {}/{}", config_dir.display(), constants::CONFIG_FILE_NAME);
            process::exit(1);
        }
    };
    if let Some(dir) = args.profiles_dir {
        app_config.profiles_dir = Some(dir);
    }

    logger::configure(&app_config.log_level, app_config.max_log_entries);
    let log_path = config_dir
        .join(constants::LOGS_DIR_NAME)
        .join(constants::LOG_FILE_NAME);
    if let Err(e) = logger::set_log_file(&log_path) {
        eprintln!("Warning: file logging disabled: {e}");
    }
    log_info!(
        "APP",
        "{} {} starting, config dir {}",
        constants::APP_NAME,
        constants::APP_VERSION,
        config_dir.display()
    );

    let profiles_dir = app_config
        .resolved_profiles_dir()
        .map_err(|e| eyre!("Failed to resolve profiles directory: {e}"))?;
    log_info!(
        "CONFIG",
        "Profiles dir {}, extension .{}, credentials {}",
        profiles_dir.display(),
        app_config.profile_extension,
        if app_config.credentials().is_some() {
            "configured"
        } else {
            "not configured"
        }
    );
    let loaded = vpn::load_index(&profiles_dir, &app_config.profile_extension);

    let mut guard = TerminalGuard::init()?;

    let index = match loaded {
        Ok(index) if !index.is_empty() => index,
        Ok(_) => {
            log_warning!("INDEX", "No profiles in {}", profiles_dir.display());
            return exit_with_notice(guard, &Notice::no_profiles(&profiles_dir));
        }
        Err(e) => {
            log_error!("INDEX", "Listing {} failed: {e}", profiles_dir.display());
            return exit_with_notice(guard, &Notice::list_failed(&profiles_dir, &e));
        }
    };

    for (country, city, protocol, profile) in index.iter() {
        log_debug!(
            "INDEX",
            "{country} / {city} / {}: {}",
            protocol.label(),
            profile.file_name()
        );
    }

    let selection = App::new(&mut guard.terminal, TerminalEvents).select_profile(&index)?;
    drop(guard);

    match selection {
        Selection::Chosen(profile) => {
            launch(&profile, &app_config, &config_dir);
            Ok(())
        }
        Selection::Cancelled => {
            log_info!("APP", "Selection cancelled");
            Ok(())
        }
        Selection::Interrupted => {
            log_info!("APP", "Interrupted");
            println!("{}", constants::MSG_INTERRUPTED);
            process::exit(EXIT_INTERRUPTED);
        }
    }
}

/// Show `notice`, restore the terminal, repeat it on stderr and exit.
fn exit_with_notice(mut guard: TerminalGuard, notice: &Notice) -> Result<()> {
    App::new(&mut guard.terminal, TerminalEvents).acknowledge(notice)?;
    drop(guard);
    eprintln!("{}", notice.message);
    if notice.exit_code() != 0 {
        print_recent_problems();
    }
    process::exit(notice.exit_code());
}

/// Repeat buffered warnings and errors on stderr.
fn print_recent_problems() {
    let problems = logger::recent_problems();
    if problems.is_empty() {
        return;
    }
    eprintln!("Recent log entries:");
    for entry in problems {
        eprintln!("  {}", entry.format());
    }
}

/// Run the client, then report how it ended.
///
/// Exits with the client's status when it fails.
fn launch(profile: &state::ProfileRef, config: &config::AppConfig, config_dir: &Path) {
    let run_dir = config_dir.join(constants::RUN_DIR_NAME);
    match core::connect(profile, config, &run_dir) {
        Ok(status) if status.success() => {}
        Ok(status) => {
            eprintln!("{}{status}", constants::CLI_MSG_CLIENT_FAILED);
            print_recent_problems();
            process::exit(status.code().unwrap_or(1));
        }
        Err(e) => {
            eprintln!("{}{e}", constants::CLI_MSG_LAUNCH_FAILED);
            print_recent_problems();
            process::exit(1);
        }
    }
}

/// Owns the terminal while the menus run; restores it when dropped.
struct TerminalGuard {
    terminal: ratatui::DefaultTerminal,
}

impl TerminalGuard {
    fn init() -> Result<Self> {
        let mut guard = Self {
            terminal: ratatui::init(),
        };
        guard.terminal.hide_cursor()?;
        guard.terminal.clear()?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
