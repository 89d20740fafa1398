// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Conversion of arbitrary text into URL-safe, human-readable slugs.
//!
//! The library decodes HTML character references, folds Unicode text into
//! ASCII, removes stopwords, applies caller supplied substitutions and
//! collapses everything else into a separator. [`smart_truncate`] bounds the
//! result, optionally cutting only between words.
//!
//! ```
//! use slugify::{SlugOptions, slugify};
//!
//! let slug = slugify("HTML &copy; &#169; &#xA9;", &SlugOptions::default(),).unwrap();
//! assert_eq!(slug, "html-copyright");
//! ```

mod config;
mod entities;
mod error;
mod slug;
mod text;
mod transliterate;
mod truncate;

pub use config::{ReplacementEntry, SlugConfig, load_config, parse_config};
pub use entities::{EntityClasses, decode_entities};
pub use error::{Error, io_error};
pub use slug::{
    DEFAULT_SEPARATOR, DISALLOWED_CHARS_PATTERN, DISALLOWED_UNICODE_CHARS_PATTERN, Replacement,
    SlugOptions, slugify,
};
pub use text::ToDisplayText;
pub use transliterate::{normalize, transliterate};
pub use truncate::{TruncateOptions, smart_truncate};
