// Compile-time type selection

/// Carrier for a constant condition used by [`Conditional`]
pub struct If<const COND: bool>;

/// Picks one of two types depending on the implementing condition
pub trait Select<T, F> {
    type Output;
}

impl<T, F> Select<T, F> for If<true> {
    type Output = T;
}

impl<T, F> Select<T, F> for If<false> {
    type Output = F;
}

/// `T` when `COND` holds, `F` otherwise.
///
/// Pair it with a predicate to pick a per-platform type while keeping both
/// candidates type-checked on every target:
///
/// ```
/// use platform_port::{is_windows, Conditional};
///
/// type RawHandle = Conditional<{ is_windows() }, isize, i32>;
///
/// let handle: RawHandle = 0;
/// assert_eq!(handle, 0);
/// ```
pub type Conditional<const COND: bool, T, F> = <If<COND> as Select<T, F>>::Output;
