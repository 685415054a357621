//! Input validation for the naming functions.
//!
//! Component names arrive from template and markup processing, where a
//! missing or mistyped value must not break the pipeline. Every naming
//! function accepts any [`AsName`] value and routes it through
//! [`with_name`]: string input is transformed, anything else yields an
//! empty string.

use std::borrow::Cow;

/// A value that may or may not carry a component name.
///
/// String types report their contents; every other implementor reports
/// `None` and is treated as "not a name".
pub trait AsName {
    /// Returns the name when the value is a string.
    fn as_name(&self) -> Option<&str>;
}

impl AsName for str {
    fn as_name(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsName for String {
    fn as_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsName for Cow<'_, str> {
    fn as_name(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl<T: AsName + ?Sized> AsName for &T {
    fn as_name(&self) -> Option<&str> {
        (**self).as_name()
    }
}

impl<T: AsName> AsName for Option<T> {
    fn as_name(&self) -> Option<&str> {
        self.as_ref().and_then(AsName::as_name)
    }
}

macro_rules! not_a_name {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsName for $ty {
                fn as_name(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

not_a_name!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Applies `transform` to `input` when it is a string, otherwise returns an
/// empty string.
pub fn with_name<N, F>(input: &N, transform: F) -> String
where
    N: AsName + ?Sized,
    F: FnOnce(&str) -> String,
{
    match input.as_name() {
        Some(name) => transform(name),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout<N: AsName + ?Sized>(input: &N) -> String {
        with_name(input, str::to_uppercase)
    }

    #[test]
    fn strings_are_transformed() {
        assert_eq!(shout("abc"), "ABC");
        assert_eq!(shout(&String::from("abc")), "ABC");
        assert_eq!(shout(&Cow::Borrowed("abc")), "ABC");
        assert_eq!(shout(&Some("abc")), "ABC");
        assert_eq!(shout(""), "");
    }

    #[test]
    fn non_strings_degrade_to_empty() {
        assert_eq!(shout(&123), "");
        assert_eq!(shout(&1.5_f64), "");
        assert_eq!(shout(&true), "");
        assert_eq!(shout(&()), "");
        assert_eq!(shout(&None::<&str>), "");
        assert_eq!(shout(&'c'), "");
    }
}
