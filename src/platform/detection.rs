// Build target resolution

use crate::platform::{PlatformKind, TargetMarkers};
use thiserror::Error;

/// A marker combination that maps to no supported platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum UnsupportedPlatform {
    /// Apple vendor without a recognized desktop or mobile sub-target
    #[error("unsupported Apple platform target")]
    AppleSubTarget,

    /// None of the top-level markers matched
    #[error("unsupported target platform")]
    UnknownTarget,
}

/// Resolve a marker set into exactly one platform kind.
///
/// First match wins. The Linux kernel marker is checked first so that
/// Android and ChromeOS are told apart from desktop Linux, and Android takes
/// precedence over ChromeOS. Within Apple targets macOS is checked before the
/// iPhone family.
pub const fn resolve(markers: TargetMarkers) -> Result<PlatformKind, UnsupportedPlatform> {
    if markers.linux_kernel {
        if markers.android {
            Ok(PlatformKind::Android)
        } else if markers.chromeos {
            Ok(PlatformKind::ChromeOS)
        } else {
            Ok(PlatformKind::Linux)
        }
    } else if markers.windows {
        Ok(PlatformKind::Windows)
    } else if markers.apple {
        if markers.apple_desktop {
            Ok(PlatformKind::MacOS)
        } else if markers.apple_mobile {
            Ok(PlatformKind::IPhone)
        } else {
            Err(UnsupportedPlatform::AppleSubTarget)
        }
    } else if markers.wasm {
        Ok(PlatformKind::Wasm)
    } else {
        Err(UnsupportedPlatform::UnknownTarget)
    }
}

/// Resolve a marker set, panicking on an unsupported configuration.
///
/// In a `const` initializer the panic is a compile error, which is how an
/// unsupported build target stops the build.
///
/// ```
/// use platform_port::{must_resolve, PlatformKind, TargetMarkers};
///
/// const KIND: PlatformKind = must_resolve(TargetMarkers::NONE.with_linux_kernel());
/// assert_eq!(KIND, PlatformKind::Linux);
/// ```
///
/// No markers at all:
///
/// ```compile_fail
/// use platform_port::{must_resolve, PlatformKind, TargetMarkers};
///
/// const KIND: PlatformKind = must_resolve(TargetMarkers::NONE);
/// assert_eq!(KIND, PlatformKind::Linux);
/// ```
///
/// An Apple target without a recognized sub-target:
///
/// ```compile_fail
/// use platform_port::{must_resolve, PlatformKind, TargetMarkers};
///
/// const KIND: PlatformKind = must_resolve(TargetMarkers::NONE.with_apple());
/// assert_eq!(KIND, PlatformKind::MacOS);
/// ```
pub const fn must_resolve(markers: TargetMarkers) -> PlatformKind {
    match resolve(markers) {
        Ok(kind) => kind,
        Err(UnsupportedPlatform::AppleSubTarget) => panic!("unsupported Apple platform target"),
        Err(UnsupportedPlatform::UnknownTarget) => panic!("unsupported target platform"),
    }
}

/// The platform this crate is being compiled for.
///
/// Evaluated once during compilation. An unsupported target fails the build.
pub const TARGET_PLATFORM: PlatformKind = must_resolve(TargetMarkers::CURRENT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_scenario() {
        let kind = resolve(TargetMarkers::NONE.with_linux_kernel().with_android()).unwrap();
        assert_eq!(kind, PlatformKind::Android);
        assert!(kind.is_android());
        assert!(kind.is_linux_family());
        assert!(!kind.is_windows());
    }

    #[test]
    fn test_macos_scenario() {
        let kind = resolve(TargetMarkers::NONE.with_apple().with_apple_desktop()).unwrap();
        assert_eq!(kind, PlatformKind::MacOS);
        assert!(kind.is_macos());
        assert!(kind.is_darwin_family());
        assert!(!kind.is_iphone_family());
    }

    #[test]
    fn test_apple_without_sub_target_fails() {
        let result = resolve(TargetMarkers::NONE.with_apple());
        assert_eq!(result, Err(UnsupportedPlatform::AppleSubTarget));
    }

    #[test]
    fn test_no_markers_fails() {
        assert_eq!(resolve(TargetMarkers::NONE), Err(UnsupportedPlatform::UnknownTarget));
    }

    #[test]
    fn test_sub_markers_alone_do_not_resolve() {
        // Sub-markers are only consulted under their parent marker
        assert_eq!(
            resolve(TargetMarkers::NONE.with_android()),
            Err(UnsupportedPlatform::UnknownTarget)
        );
        assert_eq!(
            resolve(TargetMarkers::NONE.with_chromeos()),
            Err(UnsupportedPlatform::UnknownTarget)
        );
        assert_eq!(
            resolve(TargetMarkers::NONE.with_apple_desktop()),
            Err(UnsupportedPlatform::UnknownTarget)
        );
    }

    #[test]
    fn test_supported_configurations() {
        let cases = [
            (TargetMarkers::NONE.with_linux_kernel(), PlatformKind::Linux),
            (TargetMarkers::NONE.with_linux_kernel().with_android(), PlatformKind::Android),
            (TargetMarkers::NONE.with_linux_kernel().with_chromeos(), PlatformKind::ChromeOS),
            (TargetMarkers::NONE.with_windows(), PlatformKind::Windows),
            (TargetMarkers::NONE.with_apple().with_apple_desktop(), PlatformKind::MacOS),
            (TargetMarkers::NONE.with_apple().with_apple_mobile(), PlatformKind::IPhone),
            (TargetMarkers::NONE.with_wasm(), PlatformKind::Wasm),
        ];
        for (markers, expected) in cases {
            assert_eq!(resolve(markers), Ok(expected), "{markers:?}");
        }
    }

    #[test]
    fn test_android_wins_over_chromeos() {
        let markers = TargetMarkers::NONE
            .with_linux_kernel()
            .with_android()
            .with_chromeos();
        assert_eq!(resolve(markers), Ok(PlatformKind::Android));
    }

    #[test]
    fn test_macos_wins_over_iphone_family() {
        let markers = TargetMarkers::NONE
            .with_apple()
            .with_apple_desktop()
            .with_apple_mobile();
        assert_eq!(resolve(markers), Ok(PlatformKind::MacOS));
    }

    #[test]
    fn test_top_level_precedence() {
        let everything = TargetMarkers::NONE
            .with_linux_kernel()
            .with_windows()
            .with_apple()
            .with_apple_desktop()
            .with_wasm();
        assert_eq!(resolve(everything), Ok(PlatformKind::Linux));

        let no_linux = TargetMarkers {
            linux_kernel: false,
            ..everything
        };
        assert_eq!(resolve(no_linux), Ok(PlatformKind::Windows));

        let apple_and_wasm = TargetMarkers {
            windows: false,
            ..no_linux
        };
        assert_eq!(resolve(apple_and_wasm), Ok(PlatformKind::MacOS));

        // An unresolvable Apple target is not rescued by a later marker
        let bad_apple = TargetMarkers::NONE.with_apple().with_wasm();
        assert_eq!(resolve(bad_apple), Err(UnsupportedPlatform::AppleSubTarget));
    }

    #[test]
    fn test_linux_kernel_wins_over_wasm() {
        let markers = TargetMarkers::NONE.with_linux_kernel().with_wasm();
        assert_eq!(resolve(markers), Ok(PlatformKind::Linux));
    }

    #[test]
    #[should_panic(expected = "unsupported target platform")]
    fn test_must_resolve_panics_without_markers() {
        must_resolve(TargetMarkers::NONE);
    }

    #[test]
    #[should_panic(expected = "unsupported Apple platform target")]
    fn test_must_resolve_panics_on_bare_apple() {
        must_resolve(TargetMarkers::NONE.with_apple());
    }

    #[test]
    fn test_must_resolve_supported() {
        const ANDROID: PlatformKind =
            must_resolve(TargetMarkers::NONE.with_linux_kernel().with_android());
        assert_eq!(ANDROID, PlatformKind::Android);
        assert_eq!(must_resolve(TargetMarkers::CURRENT), TARGET_PLATFORM);
    }

    #[test]
    fn test_target_platform_matches_current_markers() {
        assert_eq!(resolve(TargetMarkers::CURRENT), Ok(TARGET_PLATFORM));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UnsupportedPlatform::AppleSubTarget.to_string(),
            "unsupported Apple platform target"
        );
        assert_eq!(
            UnsupportedPlatform::UnknownTarget.to_string(),
            "unsupported target platform"
        );
    }
}
