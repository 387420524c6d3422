// Platform selectors and configuration gates

use crate::platform::{
    PlatformError, PlatformFamily, PlatformKind, PlatformResult, TARGET_PLATFORM,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Matches a set of platform kinds by name, family, or wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlatformSelector {
    /// Every platform (`"any"` or `"*"`)
    Any,
    /// Every member of a family (`"linux-family"`, `"darwin-family"`)
    Family(PlatformFamily),
    /// A single kind (`"windows"`, `"android"`, ...)
    Kind(PlatformKind),
}

impl PlatformSelector {
    pub const fn matches(self, kind: PlatformKind) -> bool {
        match self {
            PlatformSelector::Any => true,
            PlatformSelector::Family(family) => family.contains(kind),
            PlatformSelector::Kind(selected) => selected.is_kind(kind),
        }
    }

    /// Whether the build target is selected
    pub const fn matches_target(self) -> bool {
        self.matches(TARGET_PLATFORM)
    }
}

impl fmt::Display for PlatformSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformSelector::Any => f.write_str("any"),
            PlatformSelector::Family(family) => fmt::Display::fmt(family, f),
            PlatformSelector::Kind(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

impl FromStr for PlatformSelector {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name == "*" || name.eq_ignore_ascii_case("any") {
            return Ok(PlatformSelector::Any);
        }
        if let Ok(family) = name.parse::<PlatformFamily>() {
            return Ok(PlatformSelector::Family(family));
        }
        name.parse::<PlatformKind>().map(PlatformSelector::Kind)
    }
}

impl TryFrom<String> for PlatformSelector {
    type Error = PlatformError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlatformSelector> for String {
    fn from(selector: PlatformSelector) -> Self {
        selector.to_string()
    }
}

impl From<PlatformKind> for PlatformSelector {
    fn from(kind: PlatformKind) -> Self {
        PlatformSelector::Kind(kind)
    }
}

impl From<PlatformFamily> for PlatformSelector {
    fn from(family: PlatformFamily) -> Self {
        PlatformSelector::Family(family)
    }
}

/// Allow/deny list of platforms, typically loaded from a TOML file.
///
/// ```toml
/// only = ["linux-family", "macos"]
/// except = ["chromeos"]
/// ```
///
/// An empty `only` list admits every platform; `except` always wins.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformGate {
    pub only: Vec<PlatformSelector>,
    pub except: Vec<PlatformSelector>,
}

impl PlatformGate {
    /// Create a gate that admits every platform
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the gate to platforms matching `selector`
    pub fn with_only(mut self, selector: impl Into<PlatformSelector>) -> Self {
        self.only.push(selector.into());
        self
    }

    /// Exclude platforms matching `selector`
    pub fn with_except(mut self, selector: impl Into<PlatformSelector>) -> Self {
        self.except.push(selector.into());
        self
    }

    /// Parse a gate from TOML
    pub fn from_toml_str(content: &str) -> PlatformResult<Self> {
        toml::from_str(content).map_err(|e| {
            PlatformError::ConfigurationError(format!("Invalid platform gate: {}", e))
        })
    }

    /// Load a gate from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> PlatformResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loaded platform gate from {:?}", path);
        Self::from_toml_str(&content)
    }

    /// Serialize the gate to TOML
    pub fn to_toml_string(&self) -> PlatformResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            PlatformError::ConfigurationError(format!("Failed to serialize platform gate: {}", e))
        })
    }

    pub fn allows(&self, kind: PlatformKind) -> bool {
        let included = self.only.is_empty() || self.only.iter().any(|s| s.matches(kind));
        included && !self.except.iter().any(|s| s.matches(kind))
    }

    /// Apply the gate to the build target
    pub fn allows_target(&self) -> bool {
        let allowed = self.allows(TARGET_PLATFORM);
        log::debug!(
            "Platform gate {} target {}",
            if allowed { "admits" } else { "rejects" },
            TARGET_PLATFORM
        );
        allowed
    }
}
