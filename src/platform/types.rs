// Platform kind and family definitions

use crate::platform::PlatformError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A mutually exclusive build target platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlatformKind {
    /// Desktop Windows
    Windows,
    /// Desktop Linux, excluding Android and ChromeOS
    Linux,
    /// Desktop macOS
    MacOS,
    /// Android
    Android,
    /// Apple devices, simulators and firmware other than macOS.
    ///
    /// Covers iOS as well as tvOS, watchOS and visionOS; "iPhone" names the
    /// target family, not the phone form factor.
    IPhone,
    /// WebAssembly
    Wasm,
    /// ChromeOS
    ChromeOS,
}

impl PlatformKind {
    /// Every platform kind, in declaration order
    pub const ALL: [PlatformKind; 7] = [
        PlatformKind::Windows,
        PlatformKind::Linux,
        PlatformKind::MacOS,
        PlatformKind::Android,
        PlatformKind::IPhone,
        PlatformKind::Wasm,
        PlatformKind::ChromeOS,
    ];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            PlatformKind::Windows => "windows",
            PlatformKind::Linux => "linux",
            PlatformKind::MacOS => "macos",
            PlatformKind::Android => "android",
            PlatformKind::IPhone => "iphone",
            PlatformKind::Wasm => "wasm",
            PlatformKind::ChromeOS => "chromeos",
        }
    }

    /// The family this kind belongs to, if any.
    ///
    /// Windows and WebAssembly stand alone.
    pub const fn family(self) -> Option<PlatformFamily> {
        match self {
            PlatformKind::Linux | PlatformKind::Android | PlatformKind::ChromeOS => {
                Some(PlatformFamily::Linux)
            }
            PlatformKind::MacOS | PlatformKind::IPhone => Some(PlatformFamily::Darwin),
            PlatformKind::Windows | PlatformKind::Wasm => None,
        }
    }

    /// Equality usable in const contexts
    pub const fn is_kind(self, other: PlatformKind) -> bool {
        matches!(
            (self, other),
            (PlatformKind::Windows, PlatformKind::Windows)
                | (PlatformKind::Linux, PlatformKind::Linux)
                | (PlatformKind::MacOS, PlatformKind::MacOS)
                | (PlatformKind::Android, PlatformKind::Android)
                | (PlatformKind::IPhone, PlatformKind::IPhone)
                | (PlatformKind::Wasm, PlatformKind::Wasm)
                | (PlatformKind::ChromeOS, PlatformKind::ChromeOS)
        )
    }

    pub const fn is_windows(self) -> bool {
        matches!(self, PlatformKind::Windows)
    }

    /// Linux kernel based: desktop Linux, Android or ChromeOS
    pub const fn is_linux_family(self) -> bool {
        matches!(self.family(), Some(PlatformFamily::Linux))
    }

    /// Desktop Linux only
    pub const fn is_desktop_linux(self) -> bool {
        matches!(self, PlatformKind::Linux)
    }

    pub const fn is_android(self) -> bool {
        matches!(self, PlatformKind::Android)
    }

    /// Darwin based: macOS or the iPhone family
    pub const fn is_darwin_family(self) -> bool {
        matches!(self.family(), Some(PlatformFamily::Darwin))
    }

    pub const fn is_macos(self) -> bool {
        matches!(self, PlatformKind::MacOS)
    }

    pub const fn is_iphone_family(self) -> bool {
        matches!(self, PlatformKind::IPhone)
    }

    pub const fn is_wasm(self) -> bool {
        matches!(self, PlatformKind::Wasm)
    }

    pub const fn is_chromeos(self) -> bool {
        matches!(self, PlatformKind::ChromeOS)
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlatformKind {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(PlatformKind::Windows),
            "linux" => Ok(PlatformKind::Linux),
            "macos" | "osx" => Ok(PlatformKind::MacOS),
            "android" => Ok(PlatformKind::Android),
            "iphone" | "ios" => Ok(PlatformKind::IPhone),
            "wasm" | "wasm32" | "wasm64" => Ok(PlatformKind::Wasm),
            "chromeos" | "chrome-os" => Ok(PlatformKind::ChromeOS),
            _ => Err(PlatformError::UnknownPlatformName(s.to_string())),
        }
    }
}

impl TryFrom<String> for PlatformKind {
    type Error = PlatformError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlatformKind> for String {
    fn from(kind: PlatformKind) -> Self {
        kind.name().to_string()
    }
}

/// A group of platform kinds sharing a kernel lineage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlatformFamily {
    /// Desktop Linux, Android and ChromeOS
    Linux,
    /// macOS and the iPhone family
    Darwin,
}

impl PlatformFamily {
    pub const ALL: [PlatformFamily; 2] = [PlatformFamily::Linux, PlatformFamily::Darwin];

    pub const fn name(self) -> &'static str {
        match self {
            PlatformFamily::Linux => "linux-family",
            PlatformFamily::Darwin => "darwin-family",
        }
    }

    /// Kinds that belong to this family
    pub const fn members(self) -> &'static [PlatformKind] {
        match self {
            PlatformFamily::Linux => &[
                PlatformKind::Linux,
                PlatformKind::Android,
                PlatformKind::ChromeOS,
            ],
            PlatformFamily::Darwin => &[PlatformKind::MacOS, PlatformKind::IPhone],
        }
    }

    pub const fn contains(self, kind: PlatformKind) -> bool {
        matches!(
            (self, kind.family()),
            (PlatformFamily::Linux, Some(PlatformFamily::Linux))
                | (PlatformFamily::Darwin, Some(PlatformFamily::Darwin))
        )
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlatformFamily {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linux-family" => Ok(PlatformFamily::Linux),
            "darwin-family" | "darwin" => Ok(PlatformFamily::Darwin),
            _ => Err(PlatformError::UnknownPlatformName(s.to_string())),
        }
    }
}

impl TryFrom<String> for PlatformFamily {
    type Error = PlatformError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlatformFamily> for String {
    fn from(family: PlatformFamily) -> Self {
        family.name().to_string()
    }
}
