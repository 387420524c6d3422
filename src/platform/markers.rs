// Build environment markers
//
// Collects the cfg values the resolver consults into a plain struct so the
// precedence rules can be evaluated (and tested) as ordinary const code.

/// Boolean build environment markers describing a compilation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TargetMarkers {
    /// Linux kernel lineage (`target_os = "linux"` or `"android"`)
    pub linux_kernel: bool,
    /// `target_os = "android"`
    pub android: bool,
    /// ChromeOS build, supplied through the `platform-chromeos` feature
    pub chromeos: bool,
    /// `cfg(windows)`
    pub windows: bool,
    /// `target_vendor = "apple"`
    pub apple: bool,
    /// Apple desktop target (`target_os = "macos"`)
    pub apple_desktop: bool,
    /// Apple device, simulator or firmware target (iOS, tvOS, watchOS, visionOS)
    pub apple_mobile: bool,
    /// `target_family = "wasm"`
    pub wasm: bool,
}

impl TargetMarkers {
    /// No marker set
    pub const NONE: TargetMarkers = TargetMarkers {
        linux_kernel: false,
        android: false,
        chromeos: false,
        windows: false,
        apple: false,
        apple_desktop: false,
        apple_mobile: false,
        wasm: false,
    };

    /// Markers of the target this crate is being compiled for
    pub const CURRENT: TargetMarkers = TargetMarkers {
        linux_kernel: cfg!(any(target_os = "linux", target_os = "android")),
        android: cfg!(target_os = "android"),
        chromeos: cfg!(feature = "platform-chromeos"),
        windows: cfg!(windows),
        apple: cfg!(target_vendor = "apple"),
        apple_desktop: cfg!(target_os = "macos"),
        apple_mobile: cfg!(any(
            target_os = "ios",
            target_os = "tvos",
            target_os = "watchos",
            target_os = "visionos"
        )),
        wasm: cfg!(target_family = "wasm"),
    };

    pub const fn with_linux_kernel(mut self) -> Self {
        self.linux_kernel = true;
        self
    }

    pub const fn with_android(mut self) -> Self {
        self.android = true;
        self
    }

    pub const fn with_chromeos(mut self) -> Self {
        self.chromeos = true;
        self
    }

    pub const fn with_windows(mut self) -> Self {
        self.windows = true;
        self
    }

    pub const fn with_apple(mut self) -> Self {
        self.apple = true;
        self
    }

    pub const fn with_apple_desktop(mut self) -> Self {
        self.apple_desktop = true;
        self
    }

    pub const fn with_apple_mobile(mut self) -> Self {
        self.apple_mobile = true;
        self
    }

    pub const fn with_wasm(mut self) -> Self {
        self.wasm = true;
        self
    }
}

// Unmatched configurations stop the build here with a readable message. The
// conditions mirror the precedence in `detection::resolve`.
#[cfg(all(
    target_vendor = "apple",
    not(any(target_os = "linux", target_os = "android", windows)),
    not(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "tvos",
        target_os = "watchos",
        target_os = "visionos"
    ))
))]
compile_error!(
    "unsupported Apple platform target: expected macOS, iOS, tvOS, watchOS or visionOS"
);

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    windows,
    target_vendor = "apple",
    target_family = "wasm"
)))]
compile_error!(
    "unsupported target platform: expected Linux, Android, ChromeOS, Windows, an Apple target or WebAssembly"
);
