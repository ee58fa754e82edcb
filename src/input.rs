//! Coercion of loosely typed input into phone number text.
//!
//! Form fields hand over strings, spreadsheets hand over integers, and
//! optional fields hand over nothing at all. [`PhoneInput`] accepts all of
//! them with one rule: empty values become `None`, everything else is
//! converted to a string.

use std::borrow::Cow;

/// Types that can be fed to [`format_phone_number`](crate::format_phone_number).
///
/// `None`, the empty string and the integer `0` are treated as "no input".
/// Integers are stringified with `to_string()`, which drops any leading
/// zero; such numbers usually fall back unformatted.
///
/// # Example
///
/// ```
/// use jp_phone::PhoneInput;
///
/// assert_eq!("090".to_phone_input().as_deref(), Some("090"));
/// assert_eq!("".to_phone_input(), None);
/// assert_eq!(0u64.to_phone_input(), None);
/// assert_eq!(None::<&str>.to_phone_input(), None);
/// ```
pub trait PhoneInput {
    /// Returns the textual form of the input, or `None` when it is empty.
    fn to_phone_input(&self) -> Option<Cow<'_, str>>;
}

impl PhoneInput for str {
    #[inline]
    fn to_phone_input(&self) -> Option<Cow<'_, str>> {
        if self.is_empty() {
            None
        } else {
            Some(Cow::Borrowed(self))
        }
    }
}

impl PhoneInput for String {
    #[inline]
    fn to_phone_input(&self) -> Option<Cow<'_, str>> {
        self.as_str().to_phone_input()
    }
}

impl PhoneInput for Cow<'_, str> {
    #[inline]
    fn to_phone_input(&self) -> Option<Cow<'_, str>> {
        self.as_ref().to_phone_input()
    }
}

impl<T: PhoneInput + ?Sized> PhoneInput for &T {
    #[inline]
    fn to_phone_input(&self) -> Option<Cow<'_, str>> {
        (**self).to_phone_input()
    }
}

impl<T: PhoneInput> PhoneInput for Option<T> {
    #[inline]
    fn to_phone_input(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|value| value.to_phone_input())
    }
}

macro_rules! impl_phone_input_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PhoneInput for $ty {
                #[inline]
                fn to_phone_input(&self) -> Option<Cow<'_, str>> {
                    if *self == 0 {
                        None
                    } else {
                        Some(Cow::Owned(self.to_string()))
                    }
                }
            }
        )*
    };
}

impl_phone_input_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
