// Build target predicates
//
// These are the functions consumers should consult instead of writing their
// own cfg checks. Each one is a const fn over TARGET_PLATFORM, so the result
// can feed `const` items, array lengths and `Conditional` type selection.

use crate::platform::TARGET_PLATFORM;

/// The build target is Windows.
pub const fn is_windows() -> bool {
    TARGET_PLATFORM.is_windows()
}

/// The build target is Linux kernel based: desktop Linux, Android or ChromeOS.
pub const fn is_linux_family() -> bool {
    TARGET_PLATFORM.is_linux_family()
}

/// The build target is desktop Linux, excluding Android and ChromeOS.
pub const fn is_desktop_linux() -> bool {
    TARGET_PLATFORM.is_desktop_linux()
}

/// The build target is Android.
pub const fn is_android() -> bool {
    TARGET_PLATFORM.is_android()
}

/// The build target is Darwin: macOS or the iPhone family.
pub const fn is_darwin_family() -> bool {
    TARGET_PLATFORM.is_darwin_family()
}

/// The build target is macOS.
pub const fn is_macos() -> bool {
    TARGET_PLATFORM.is_macos()
}

/// The build target is an Apple device, simulator or firmware target.
///
/// "iPhone" here is the whole non-desktop Apple family (iOS, tvOS, watchOS,
/// visionOS), not the phone itself.
pub const fn is_iphone_family() -> bool {
    TARGET_PLATFORM.is_iphone_family()
}

/// The build target is WebAssembly.
pub const fn is_wasm() -> bool {
    TARGET_PLATFORM.is_wasm()
}

/// The build target is ChromeOS.
pub const fn is_chromeos() -> bool {
    TARGET_PLATFORM.is_chromeos()
}
