// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Slug assembly from arbitrary text.
//!
//! With the default [`SlugOptions`], slugs contain only lowercase ASCII
//! alphanumeric characters separated by single hyphens, making them suitable
//! for URLs, branch names and filesystem paths across platforms.
//!
//! The pipeline runs in a fixed order: entity decoding, normalization and
//! transliteration, case folding, caller replacements, digit grouping
//! cleanup, stopword removal, disallowed character collapsing and finally
//! truncation. Every stage works with the internal hyphen separator; the
//! configured separator is substituted last.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use tracing::{debug, trace};

use crate::{
    entities::{EntityClasses, decode_entities},
    error::Error,
    text::ToDisplayText,
    transliterate::normalize,
    truncate::{TruncateOptions, truncate_text},
};

/// Separator used while assembling slugs and the default output separator.
pub const DEFAULT_SEPARATOR: &str = "-";
/// Characters removed from ASCII slugs by default.
pub const DISALLOWED_CHARS_PATTERN: &str = r"[^-a-zA-Z0-9]+";
/// Characters removed from slugs when Unicode output is allowed.
pub const DISALLOWED_UNICODE_CHARS_PATTERN: &str = r"[\W_]+";

const INTERNAL_SEPARATOR: char = '-';

static DISALLOWED_CHARS: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(DISALLOWED_CHARS_PATTERN,).expect("disallowed characters pattern",)
},);
static DISALLOWED_UNICODE_CHARS: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(DISALLOWED_UNICODE_CHARS_PATTERN,).expect("disallowed unicode characters pattern",)
},);
static DUPLICATE_SEPARATORS: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"-{2,}",).expect("duplicate separator pattern",),);

/// Substitution applied to the working text before disallowed characters
/// are collapsed.
#[derive(Debug, Clone,)]
pub enum Replacement
{
    /// Replaces every occurrence of `from` with `to`.
    Literal
    {
        /// Text to look for.
        from: String,
        /// Text inserted instead.
        to:   String,
    },
    /// Replaces every match of `regex` with `to`, expanding `$name` and `$n`
    /// capture references.
    Pattern
    {
        /// Compiled pattern.
        regex: Regex,
        /// Replacement template.
        to:    String,
    },
}

impl Replacement
{
    /// Creates a literal substitution.
    pub fn literal(from: impl Into<String,>, to: impl Into<String,>,) -> Self
    {
        Self::Literal {
            from: from.into(), to: to.into(),
        }
    }

    /// Compiles `pattern` into a regex substitution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] when the pattern does not compile.
    pub fn pattern(pattern: &str, to: impl Into<String,>,) -> Result<Self, Error,>
    {
        Ok(Self::Pattern {
            regex: Regex::new(pattern,)?, to: to.into(),
        },)
    }

    fn apply<'a,>(&self, text: &'a str,) -> Cow<'a, str,>
    {
        match self {
            Self::Literal {
                from,
                to,
            } => {
                if from.is_empty() || !text.contains(from.as_str(),) {
                    Cow::Borrowed(text,)
                } else {
                    Cow::Owned(text.replace(from.as_str(), to,),)
                }
            }
            Self::Pattern {
                regex,
                to,
            } => regex.replace_all(text, to.as_str(),),
        }
    }
}

/// Per-call configuration of [`slugify`].
///
/// The defaults decode every entity class, transliterate to lowercase ASCII,
/// join words with `-` and never truncate. Every collection starts empty and
/// is owned by the options value, so nothing leaks between calls.
///
/// # Examples
///
/// ```
/// use slugify::{SlugOptions, slugify};
///
/// let options = SlugOptions::default().separator("_",).stopwords(["a", "the",],);
/// assert_eq!(slugify("The Quick Fox", &options,).unwrap(), "quick_fox");
/// ```
#[derive(Debug, Clone,)]
pub struct SlugOptions
{
    /// Decode named character references such as `&copy;`.
    pub entities:      bool,
    /// Decode decimal character references such as `&#169;`.
    pub decimal:       bool,
    /// Decode hexadecimal character references such as `&#xA9;`.
    pub hexadecimal:   bool,
    /// Maximum slug length in characters, `0` disables truncation.
    pub max_length:    usize,
    /// Only truncate between words.
    pub word_boundary: bool,
    /// Text placed between words of the finished slug.
    pub separator:     String,
    /// Keep only the leading run of words when truncating.
    pub save_order:    bool,
    /// Words dropped from the slug, compared case-insensitively.
    pub stopwords:     Vec<String,>,
    /// Overrides the pattern of characters collapsed into separators.
    pub regex_pattern: Option<Regex,>,
    /// Fold the slug to lowercase.
    pub lowercase:     bool,
    /// Substitutions applied in order before disallowed characters are
    /// collapsed.
    pub replacements:  Vec<Replacement,>,
    /// Keep Unicode letters instead of transliterating them to ASCII.
    pub allow_unicode: bool,
}

impl Default for SlugOptions
{
    fn default() -> Self
    {
        Self {
            entities:      true,
            decimal:       true,
            hexadecimal:   true,
            max_length:    0,
            word_boundary: false,
            separator:     DEFAULT_SEPARATOR.to_owned(),
            save_order:    false,
            stopwords:     Vec::new(),
            regex_pattern: None,
            lowercase:     true,
            replacements:  Vec::new(),
            allow_unicode: false,
        }
    }
}

impl SlugOptions
{
    /// Enables or disables decoding of named character references.
    #[must_use]
    pub fn entities(mut self, enabled: bool,) -> Self
    {
        self.entities = enabled;
        self
    }

    /// Enables or disables decoding of decimal character references.
    #[must_use]
    pub fn decimal(mut self, enabled: bool,) -> Self
    {
        self.decimal = enabled;
        self
    }

    /// Enables or disables decoding of hexadecimal character references.
    #[must_use]
    pub fn hexadecimal(mut self, enabled: bool,) -> Self
    {
        self.hexadecimal = enabled;
        self
    }

    /// Sets the maximum slug length, `0` disables truncation.
    #[must_use]
    pub fn max_length(mut self, max_length: usize,) -> Self
    {
        self.max_length = max_length;
        self
    }

    /// Enables or disables truncation at word boundaries only.
    #[must_use]
    pub fn word_boundary(mut self, enabled: bool,) -> Self
    {
        self.word_boundary = enabled;
        self
    }

    /// Sets the separator placed between words.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String,>,) -> Self
    {
        self.separator = separator.into();
        self
    }

    /// Enables or disables order preservation when truncating.
    #[must_use]
    pub fn save_order(mut self, enabled: bool,) -> Self
    {
        self.save_order = enabled;
        self
    }

    /// Replaces the stopword list.
    #[must_use]
    pub fn stopwords<I, S,>(mut self, stopwords: I,) -> Self
    where
        I: IntoIterator<Item = S,>,
        S: Into<String,>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into,).collect();
        self
    }

    /// Overrides the pattern of disallowed characters.
    #[must_use]
    pub fn regex_pattern(mut self, pattern: Regex,) -> Self
    {
        self.regex_pattern = Some(pattern,);
        self
    }

    /// Enables or disables lowercase folding.
    #[must_use]
    pub fn lowercase(mut self, enabled: bool,) -> Self
    {
        self.lowercase = enabled;
        self
    }

    /// Appends a substitution to the replacement list.
    #[must_use]
    pub fn replacement(mut self, replacement: Replacement,) -> Self
    {
        self.replacements.push(replacement,);
        self
    }

    /// Enables or disables Unicode output.
    #[must_use]
    pub fn allow_unicode(mut self, enabled: bool,) -> Self
    {
        self.allow_unicode = enabled;
        self
    }

    /// Slugifies `text` with these options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `text` has no textual form.
    pub fn slugify<T,>(&self, text: &T,) -> Result<String, Error,>
    where
        T: ToDisplayText + ?Sized,
    {
        slugify(text, self,)
    }

    fn entity_classes(&self,) -> EntityClasses
    {
        EntityClasses {
            named: self.entities, decimal: self.decimal, hexadecimal: self.hexadecimal,
        }
    }

    fn disallowed_pattern(&self,) -> &Regex
    {
        match (&self.regex_pattern, self.allow_unicode,) {
            (Some(custom,), _,) => custom,
            (None, true,) => &*DISALLOWED_UNICODE_CHARS,
            (None, false,) => &*DISALLOWED_CHARS,
        }
    }
}

/// Converts `text` into a slug.
///
/// Deterministic for identical inputs and options; empty input yields an
/// empty slug.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `text` has no textual form, such as
/// `None`.
///
/// # Examples
///
/// ```
/// use slugify::{SlugOptions, slugify};
///
/// let options = SlugOptions::default();
/// assert_eq!(slugify("Café & Restaurant", &options,).unwrap(), "cafe-restaurant");
/// assert_eq!(slugify(&12345, &options,).unwrap(), "12345");
/// assert!(slugify(&None::<&str>, &options,).is_err());
/// ```
pub fn slugify<T,>(text: &T, options: &SlugOptions,) -> Result<String, Error,>
where
    T: ToDisplayText + ?Sized,
{
    let source = text.to_display_text().ok_or_else(|| Error::invalid_input(text.type_name(),),)?;
    Ok(assemble(&source, options,),)
}

fn assemble(source: &str, options: &SlugOptions,) -> String
{
    debug!(
        input_length = source.len(),
        allow_unicode = options.allow_unicode,
        max_length = options.max_length,
        "assembling slug"
    );

    let decoded = decode_entities(source, options.entity_classes(),);
    let mut text = normalize(&decoded, options.allow_unicode,);
    trace!(%text, "normalized");

    if options.lowercase {
        text = text.to_lowercase();
    }

    for replacement in &options.replacements {
        let replaced = match replacement.apply(&text,) {
            Cow::Borrowed(_,) => None,
            Cow::Owned(replaced,) => Some(replaced,),
        };
        if let Some(replaced,) = replaced {
            text = replaced;
        }
    }

    let text = strip_digit_grouping(&text,);
    let text = remove_stopwords(&text, &options.stopwords,);
    let text = options.disallowed_pattern().replace_all(&text, DEFAULT_SEPARATOR,);
    let text = DUPLICATE_SEPARATORS.replace_all(&text, DEFAULT_SEPARATOR,);
    let mut slug = text.trim_matches(INTERNAL_SEPARATOR,).to_owned();
    trace!(%slug, "collapsed");

    if options.max_length > 0 {
        let truncate = TruncateOptions::new(options.max_length,)
            .word_boundary(options.word_boundary,)
            .separator(DEFAULT_SEPARATOR,)
            .save_order(options.save_order,);
        slug = truncate_text(&slug, &truncate,).trim_matches(INTERNAL_SEPARATOR,).to_owned();
    }

    if options.separator != DEFAULT_SEPARATOR {
        slug = slug.replace(INTERNAL_SEPARATOR, &options.separator,);
    }

    slug
}

/// Drops commas used as digit grouping, so `1,000` reads as `1000`.
fn strip_digit_grouping(text: &str,) -> Cow<'_, str,>
{
    if !text.contains(',',) {
        return Cow::Borrowed(text,);
    }

    let mut stripped = String::with_capacity(text.len(),);
    let mut previous = None;
    let mut chars = text.chars().peekable();
    while let Some(current,) = chars.next() {
        let grouping = current == ','
            && previous.is_some_and(|ch: char| ch.is_ascii_digit(),)
            && chars.peek().is_some_and(char::is_ascii_digit,);
        if !grouping {
            stripped.push(current,);
        }
        previous = Some(current,);
    }

    Cow::Owned(stripped,)
}

/// Removes every word matching a stopword, leaving the delimiters in place.
///
/// Words are maximal runs of alphanumeric characters, so any punctuation
/// joining a stopword to its neighbours delimits it. Comparison ignores case.
fn remove_stopwords<'a,>(text: &'a str, stopwords: &[String],) -> Cow<'a, str,>
{
    let wanted: Vec<String,> = stopwords
        .iter()
        .map(|word| word.trim().to_lowercase(),)
        .filter(|word| !word.is_empty(),)
        .collect();
    if wanted.is_empty() {
        return Cow::Borrowed(text,);
    }

    let is_delimiter = |ch: char| !ch.is_alphanumeric();

    let mut kept = String::with_capacity(text.len(),);
    let mut rest = text;
    while !rest.is_empty() {
        let word_end = rest.find(is_delimiter,).unwrap_or(rest.len(),);
        let (word, tail,) = rest.split_at(word_end,);
        if !word.is_empty() && !is_stopword(word, &wanted,) {
            kept.push_str(word,);
        }

        let delimiter_end = tail.find(|ch: char| !is_delimiter(ch,),).unwrap_or(tail.len(),);
        kept.push_str(&tail[..delimiter_end],);
        rest = &tail[delimiter_end..];
    }

    Cow::Owned(kept,)
}

fn is_stopword(word: &str, wanted: &[String],) -> bool
{
    let lowered = word.to_lowercase();
    wanted.iter().any(|stopword| *stopword == lowered,)
}
