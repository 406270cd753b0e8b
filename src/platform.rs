use std::env::consts::{ARCH, OS};
use std::fmt;

/// Source of the raw host OS and CPU architecture names.
///
/// Names follow the Node.js convention (`Windows_NT`, `Linux`, `Darwin`,
/// `x64`, `ia32`, ...), which is what release archives are named after.
pub trait Host {
    fn os_name(&self) -> String;
    fn arch_name(&self) -> String;
}

/// The machine this process runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn os_name(&self) -> String {
        match OS {
            "windows" => "Windows_NT",
            "linux" => "Linux",
            "macos" => "Darwin",
            "freebsd" => "FreeBSD",
            "openbsd" => "OpenBSD",
            "solaris" | "illumos" => "SunOS",
            other => other,
        }
        .to_string()
    }

    fn arch_name(&self) -> String {
        match ARCH {
            "x86_64" => "x64",
            "x86" => "ia32",
            "aarch64" => "arm64",
            other => other,
        }
        .to_string()
    }
}

/// Release targets published for ramilang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformId {
    Win64,
    Win32,
    Linux,
    Macos,
}

impl PlatformId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win64 => "win64",
            Self::Win32 => "win32",
            Self::Linux => "linux",
            Self::Macos => "macos",
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported platform: {os_name} {arch_name}")]
pub struct UnsupportedPlatformError {
    pub os_name: String,
    pub arch_name: String,
}

const WINDOWS: &str = "Windows_NT";
const LINUX: &str = "Linux";
const DARWIN: &str = "Darwin";
const X64: &str = "x64";

/// Map the host to a release target.
///
/// Rules are tried in order. The 64-bit Windows rule must come before the
/// catch-all Windows rule.
pub fn resolve(host: &impl Host) -> Result<PlatformId, UnsupportedPlatformError> {
    let os_name = host.os_name();
    let arch_name = host.arch_name();

    let platform = match (os_name.as_str(), arch_name.as_str()) {
        (WINDOWS, X64) => PlatformId::Win64,
        (WINDOWS, _) => PlatformId::Win32,
        (LINUX, X64) => PlatformId::Linux,
        (DARWIN, X64) => PlatformId::Macos,
        _ => {
            return Err(UnsupportedPlatformError { os_name, arch_name });
        }
    };

    log::debug!("resolved {os_name}/{arch_name} to {platform}");
    Ok(platform)
}
