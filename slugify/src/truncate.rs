// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Length-bounded truncation that can snap to word boundaries.
//!
//! Lengths are counted in Unicode scalar values, never in bytes, so a cut
//! can not split a multi-byte character.

use tracing::trace;

use crate::{error::Error, text::ToDisplayText};

/// Options controlling [`smart_truncate`].
///
/// A `max_length` of zero means "no limit": the input is returned unchanged
/// rather than cut down to nothing.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct TruncateOptions
{
    /// Maximum number of characters to keep, `0` disables truncation.
    pub max_length:    usize,
    /// Only cut between separator delimited words.
    pub word_boundary: bool,
    /// Delimiter between words.
    pub separator:     String,
    /// Keep only the leading run of words, in order, when cutting at word
    /// boundaries.
    pub save_order:    bool,
}

impl Default for TruncateOptions
{
    fn default() -> Self
    {
        Self {
            max_length:    0,
            word_boundary: false,
            separator:     " ".to_owned(),
            save_order:    false,
        }
    }
}

impl TruncateOptions
{
    /// Creates options truncating to `max_length` characters with a hard
    /// cut.
    pub fn new(max_length: usize,) -> Self
    {
        Self {
            max_length, ..Self::default()
        }
    }

    /// Enables or disables cutting at word boundaries only.
    #[must_use]
    pub fn word_boundary(mut self, enabled: bool,) -> Self
    {
        self.word_boundary = enabled;
        self
    }

    /// Sets the word delimiter.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String,>,) -> Self
    {
        self.separator = separator.into();
        self
    }

    /// Enables or disables order preservation for word boundary cuts.
    #[must_use]
    pub fn save_order(mut self, enabled: bool,) -> Self
    {
        self.save_order = enabled;
        self
    }
}

/// Truncates `text` to at most `options.max_length` characters.
///
/// * Text that already fits, or a `max_length` of zero, is returned as is.
/// * Without `word_boundary` the first `max_length` characters are returned.
/// * With `word_boundary` whole words are collected until the limit is
///   reached. Words that do not fit are skipped and later, shorter words may
///   still be taken; with `save_order` collection stops at the first word
///   that does not fit together with its trailing separator.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `text` has no textual form.
///
/// # Examples
///
/// ```
/// use slugify::{TruncateOptions, smart_truncate};
///
/// let options = TruncateOptions::new(7,).word_boundary(true,).separator(",",);
/// assert_eq!(smart_truncate("one,two,three", &options,).unwrap(), "one,two");
///
/// let ordered = options.save_order(true,);
/// assert_eq!(smart_truncate("one,two,three", &ordered,).unwrap(), "one");
/// ```
pub fn smart_truncate<T,>(text: &T, options: &TruncateOptions,) -> Result<String, Error,>
where
    T: ToDisplayText + ?Sized,
{
    let source = text.to_display_text().ok_or_else(|| Error::invalid_input(text.type_name(),),)?;
    Ok(truncate_text(&source, options,),)
}

pub(crate) fn truncate_text(text: &str, options: &TruncateOptions,) -> String
{
    let max_length = options.max_length;
    if max_length == 0 || text.chars().count() <= max_length {
        return text.to_owned();
    }

    let separator = options.separator.as_str();
    if !options.word_boundary || separator.is_empty() || !text.contains(separator,) {
        return hard_cut(text, max_length,).to_owned();
    }

    let separator_length = separator.chars().count();
    let mut truncated = String::with_capacity(text.len().min(max_length.saturating_mul(4,),),);
    let mut length = 0;

    for word in text.split(separator,).filter(|word| !word.is_empty(),) {
        let next_length = length + word.chars().count();
        if next_length < max_length {
            truncated.push_str(word,);
            truncated.push_str(separator,);
            length = next_length + separator_length;
        } else if next_length == max_length && !options.save_order {
            truncated.push_str(word,);
            break;
        } else if options.save_order {
            break;
        }
    }

    if truncated.is_empty() {
        trace!(max_length, "no whole word fits, falling back to a hard cut");
        truncated.push_str(hard_cut(text, max_length,),);
    }

    truncated.trim_end_matches(separator,).to_owned()
}

fn hard_cut(text: &str, max_length: usize,) -> &str
{
    text.char_indices().nth(max_length,).map_or(text, |(index, _,)| &text[..index],)
}
