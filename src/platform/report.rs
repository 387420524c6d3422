// Target platform report for startup diagnostics

use crate::platform::{PlatformFamily, PlatformKind, PlatformResult, TARGET_PLATFORM};
use serde::Serialize;

/// Snapshot of every predicate for one platform kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetReport {
    pub kind: PlatformKind,
    pub family: Option<PlatformFamily>,
    pub windows: bool,
    pub linux_family: bool,
    pub desktop_linux: bool,
    pub android: bool,
    pub darwin_family: bool,
    pub macos: bool,
    pub iphone_family: bool,
    pub wasm: bool,
    pub chromeos: bool,
}

impl TargetReport {
    pub const fn for_kind(kind: PlatformKind) -> Self {
        Self {
            kind,
            family: kind.family(),
            windows: kind.is_windows(),
            linux_family: kind.is_linux_family(),
            desktop_linux: kind.is_desktop_linux(),
            android: kind.is_android(),
            darwin_family: kind.is_darwin_family(),
            macos: kind.is_macos(),
            iphone_family: kind.is_iphone_family(),
            wasm: kind.is_wasm(),
            chromeos: kind.is_chromeos(),
        }
    }

    /// Report for the build target
    pub const fn current() -> Self {
        Self::for_kind(TARGET_PLATFORM)
    }

    pub fn to_json(&self) -> PlatformResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Log the build target once, e.g. at application startup
pub fn log_target_platform() {
    let report = TargetReport::current();
    match report.family {
        Some(family) => log::info!("Target platform: {} ({})", report.kind, family),
        None => log::info!("Target platform: {}", report.kind),
    }
    log::debug!("Target platform report: {:?}", report);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_android() {
        let report = TargetReport::for_kind(PlatformKind::Android);
        assert_eq!(report.family, Some(PlatformFamily::Linux));
        assert!(report.android);
        assert!(report.linux_family);
        assert!(!report.desktop_linux);
        assert!(!report.windows);
        assert!(!report.darwin_family);
    }

    #[test]
    fn test_report_for_wasm_has_no_family() {
        let report = TargetReport::for_kind(PlatformKind::Wasm);
        assert_eq!(report.family, None);
        assert!(report.wasm);
        assert!(!report.linux_family);
        assert!(!report.darwin_family);
    }

    #[test]
    fn test_current_report() {
        let report = TargetReport::current();
        assert_eq!(report.kind, TARGET_PLATFORM);
        // Logging without an installed logger is a no-op
        log_target_platform();
    }

    #[test]
    fn test_report_json() {
        let json = TargetReport::for_kind(PlatformKind::MacOS).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "macos");
        assert_eq!(value["family"], "darwin-family");
        assert_eq!(value["macos"], true);
        assert_eq!(value["iphone_family"], false);
    }
}
