// SPDX-License-Identifier: MPL-2.0
//! Coercion of loosely typed input into a badge count.
//!
//! Badges accept whatever the caller has at hand (integers, optional
//! integers, text). Anything that does not resolve to a non-negative
//! integer hides the badge instead of failing.

/// Conversion into a displayable badge count.
///
/// Returns `None` when the input is absent, negative or not a number.
pub trait BadgeCount {
    fn badge_count(&self) -> Option<u64>;
}

macro_rules! impl_badge_count_int {
    ($($ty:ty),*) => {
        $(
            impl BadgeCount for $ty {
                fn badge_count(&self) -> Option<u64> {
                    u64::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_badge_count_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<T: BadgeCount> BadgeCount for Option<T> {
    fn badge_count(&self) -> Option<u64> {
        self.as_ref().and_then(BadgeCount::badge_count)
    }
}

impl<T: BadgeCount + ?Sized> BadgeCount for &T {
    fn badge_count(&self) -> Option<u64> {
        (**self).badge_count()
    }
}

impl BadgeCount for str {
    fn badge_count(&self) -> Option<u64> {
        parse_leading_integer(self).and_then(|value| u64::try_from(value).ok())
    }
}

impl BadgeCount for String {
    fn badge_count(&self) -> Option<u64> {
        self.as_str().badge_count()
    }
}

/// Parses the integer prefix of `text`, ignoring surrounding whitespace.
///
/// `"42px"` yields 42 and `"3.9"` yields 3; text without leading digits
/// yields `None`. Overflowing prefixes are rejected.
#[must_use]
pub fn parse_leading_integer(text: &str) -> Option<i128> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i128 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_integers_are_counts() {
        assert_eq!(0u32.badge_count(), Some(0));
        assert_eq!(17i32.badge_count(), Some(17));
        assert_eq!(u64::MAX.badge_count(), Some(u64::MAX));
    }

    #[test]
    fn negative_integers_are_rejected() {
        assert_eq!((-1i32).badge_count(), None);
        assert_eq!(i64::MIN.badge_count(), None);
    }

    #[test]
    fn optional_values_unwrap_or_reject() {
        assert_eq!(Some(8u32).badge_count(), Some(8));
        assert_eq!(None::<u32>.badge_count(), None);
        assert_eq!(Some(-3i64).badge_count(), None);
    }

    #[test]
    fn text_uses_leading_integer() {
        assert_eq!("12".badge_count(), Some(12));
        assert_eq!("  7".badge_count(), Some(7));
        assert_eq!("3.9".badge_count(), Some(3));
        assert_eq!("42px".badge_count(), Some(42));
        assert_eq!("+5".badge_count(), Some(5));
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        assert_eq!("abc".badge_count(), None);
        assert_eq!("".badge_count(), None);
        assert_eq!("-1".badge_count(), None);
        assert_eq!("-".badge_count(), None);
        assert_eq!(String::from("x1").badge_count(), None);
    }

    #[test]
    fn overflowing_text_is_rejected() {
        assert_eq!("99999999999999999999999999999999999999999".badge_count(), None);
        assert_eq!("18446744073709551616".badge_count(), None);
    }
}
