//! VPN profile types.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Transport protocol of a profile, derived from its file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Default when no `-TCP` marker is present.
    Udp,
    /// Profile file carries the `-TCP` marker.
    Tcp,
}

impl Protocol {
    /// Menu label for this protocol.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Udp => "UDP",
            Self::Tcp => "TCP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UDP" => Ok(Self::Udp),
            "TCP" => Ok(Self::Tcp),
            other => Err(format!("Unknown protocol: {other}")),
        }
    }
}

/// Handle to a launchable profile file.
///
/// Built once by the index and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRef {
    path: PathBuf,
}

impl ProfileRef {
    pub(crate) fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
        }
    }

    /// Full path handed to the VPN client.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory entry name the profile was indexed from.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}
