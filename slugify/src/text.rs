// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Conversion of caller supplied values into the text the pipeline works on.
//!
//! Every value with a natural textual form implements [`ToDisplayText`].
//! Absent values (`None`) have no such form and are rejected by the public
//! entry points with [`Error::InvalidInput`](crate::Error::InvalidInput).

use std::borrow::Cow;

/// Capability of producing the text that a slug is derived from.
///
/// # Examples
///
/// ```
/// use slugify::ToDisplayText;
///
/// assert_eq!(12345_u32.to_display_text().as_deref(), Some("12345"));
/// assert_eq!(None::<&str>.to_display_text(), None);
/// ```
pub trait ToDisplayText
{
    /// Returns the textual form of the value, or `None` when it has none.
    fn to_display_text(&self,) -> Option<Cow<'_, str,>,>;

    /// Name reported when the value is rejected.
    fn type_name(&self,) -> &'static str
    {
        std::any::type_name::<Self,>()
    }
}

impl ToDisplayText for str
{
    fn to_display_text(&self,) -> Option<Cow<'_, str,>,>
    {
        Some(Cow::Borrowed(self,),)
    }
}

impl ToDisplayText for String
{
    fn to_display_text(&self,) -> Option<Cow<'_, str,>,>
    {
        Some(Cow::Borrowed(self.as_str(),),)
    }
}

impl ToDisplayText for Cow<'_, str,>
{
    fn to_display_text(&self,) -> Option<Cow<'_, str,>,>
    {
        Some(Cow::Borrowed(self.as_ref(),),)
    }
}

impl<T: ToDisplayText + ?Sized,> ToDisplayText for &T
{
    fn to_display_text(&self,) -> Option<Cow<'_, str,>,>
    {
        (**self).to_display_text()
    }

    fn type_name(&self,) -> &'static str
    {
        (**self).type_name()
    }
}

impl<T: ToDisplayText + ?Sized,> ToDisplayText for Box<T,>
{
    fn to_display_text(&self,) -> Option<Cow<'_, str,>,>
    {
        (**self).to_display_text()
    }

    fn type_name(&self,) -> &'static str
    {
        (**self).type_name()
    }
}

impl<T: ToDisplayText,> ToDisplayText for Option<T,>
{
    fn to_display_text(&self,) -> Option<Cow<'_, str,>,>
    {
        self.as_ref().and_then(ToDisplayText::to_display_text,)
    }

    fn type_name(&self,) -> &'static str
    {
        match self {
            Some(value,) => value.type_name(),
            None => "None",
        }
    }
}

macro_rules! display_text_via_to_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToDisplayText for $ty
            {
                fn to_display_text(&self,) -> Option<Cow<'_, str,>,>
                {
                    Some(Cow::Owned(self.to_string(),),)
                }
            }
        )*
    };
}

display_text_via_to_string!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests
{
    use std::borrow::Cow;

    use super::ToDisplayText;

    #[test]
    fn strings_are_borrowed()
    {
        let owned = String::from("Hello",);
        assert!(matches!(owned.to_display_text(), Some(Cow::Borrowed("Hello"))));
        assert!(matches!("World".to_display_text(), Some(Cow::Borrowed("World"))));
    }

    #[test]
    fn numbers_use_their_display_form()
    {
        assert_eq!(12345_i32.to_display_text().as_deref(), Some("12345"));
        assert_eq!((-7_i64).to_display_text().as_deref(), Some("-7"));
        assert_eq!(1.5_f64.to_display_text().as_deref(), Some("1.5"));
        assert_eq!(true.to_display_text().as_deref(), Some("true"));
        assert_eq!('x'.to_display_text().as_deref(), Some("x"));
    }

    #[test]
    fn none_has_no_text()
    {
        let absent: Option<String,> = None;
        assert!(absent.to_display_text().is_none());
        assert_eq!(absent.type_name(), "None");
    }

    #[test]
    fn some_delegates_to_inner_value()
    {
        let present = Some(42_u8,);
        assert_eq!(present.to_display_text().as_deref(), Some("42"));
        assert_eq!(present.type_name(), "u8");
    }

    #[test]
    fn boxed_and_referenced_values_delegate()
    {
        let boxed: Box<str,> = "boxed".into();
        assert_eq!(boxed.to_display_text().as_deref(), Some("boxed"));
        let nested = &&"nested";
        assert_eq!(nested.to_display_text().as_deref(), Some("nested"));
    }
}
