//! Compile-time classification of the build target.
//!
//! The platform being compiled for is resolved once into [`TARGET_PLATFORM`].
//! Code that needs platform-specific behavior asks the `is_*` predicates
//! instead of writing its own `#[cfg]` checks. The predicates are `const fn`,
//! so they work anywhere a constant expression is accepted, and every branch
//! that consults them is still type-checked on every target.
//!
//! ```
//! use platform_port::{is_iphone_family, is_windows, Conditional};
//!
//! // A constant with a per-platform value.
//! const TIMEOUT_MS: u64 = if is_iphone_family() { 100 } else { 10 };
//!
//! // A type chosen per platform.
//! type NativeHandle = Conditional<{ is_windows() }, usize, i32>;
//!
//! let handle: NativeHandle = Default::default();
//! assert!(TIMEOUT_MS > 0);
//! let _ = handle;
//! ```

pub mod platform;

pub use platform::*;
