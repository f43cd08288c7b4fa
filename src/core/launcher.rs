//! Hands the chosen profile to the VPN client.
//!
//! The client runs in the foreground with inherited stdio once the terminal
//! has been restored. Credentials, when configured, are written to a
//! short-lived owner-only file that is removed as soon as the client exits.

use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::config::AppConfig;
use crate::constants::{
    CLI_MSG_CONNECTING, CLI_MSG_EXECUTING, OVPN_ARG_AUTH_USER_PASS, OVPN_ARG_CONFIG, SUDO_BINARY,
};
use crate::state::ProfileRef;

/// `username\npassword\n` file passed to `--auth-user-pass`.
///
/// Removed on drop.
#[derive(Debug)]
pub struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    /// Write the pair to a new file under `run_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn create(run_dir: &Path, username: &str, password: &str) -> io::Result<Self> {
        fs::create_dir_all(run_dir)?;
        let path = run_dir.join(format!("auth-{}.txt", std::process::id()));
        // Left behind by a crashed run that had the same pid
        let _ = fs::remove_file(&path);

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&path)?;

        let creds = Self { path };
        file.write_all(format!("{username}\n{password}\n").as_bytes())?;
        file.flush()?;
        Ok(creds)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CredentialsFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => crate::log_debug!("LAUNCH", "Removed {}", self.path.display()),
            Err(e) => crate::log_warning!(
                "LAUNCH",
                "Failed to remove {}: {e}",
                self.path.display()
            ),
        }
    }
}

/// `[sudo] <client> --config <profile> [--auth-user-pass <file>]`
fn build_command(
    profile: &Path,
    config: &AppConfig,
    auth_file: Option<&Path>,
    is_root: bool,
) -> Command {
    let mut cmd = if config.use_sudo && !is_root {
        let mut sudo = Command::new(SUDO_BINARY);
        sudo.arg(&config.openvpn_binary);
        sudo
    } else {
        Command::new(&config.openvpn_binary)
    };
    cmd.arg(OVPN_ARG_CONFIG).arg(profile);
    if let Some(auth) = auth_file {
        cmd.arg(OVPN_ARG_AUTH_USER_PASS).arg(auth);
    }
    cmd
}

/// Program and arguments joined by spaces, for display.
fn command_line(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(OsStr::to_string_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the client on `profile` and wait for it to exit.
///
/// # Errors
///
/// Returns an error if the credentials file cannot be written or the client
/// cannot be started. A client that starts and fails is reported through the
/// returned status.
pub fn connect(profile: &ProfileRef, config: &AppConfig, run_dir: &Path) -> io::Result<ExitStatus> {
    let creds = config
        .credentials()
        .map(|(user, pass)| CredentialsFile::create(run_dir, user, pass))
        .transpose()?;

    let mut cmd = build_command(
        profile.path(),
        config,
        creds.as_ref().map(CredentialsFile::path),
        crate::utils::is_root(),
    );
    let line = command_line(&cmd);

    println!("{CLI_MSG_CONNECTING}{}...", profile.path().display());
    println!("{CLI_MSG_EXECUTING}{line}");
    crate::log_info!("LAUNCH", "Executing: {line}");

    let status = cmd.status();
    match &status {
        Ok(s) => crate::log_info!("LAUNCH", "Client exited with {s}"),
        Err(e) => crate::log_error!("LAUNCH", "Failed to start client: {e}"),
    }
    status
}
