// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration documents describing slug options.
//!
//! The types in this module mirror [`SlugOptions`] with plain data so they
//! can be read from YAML files. Patterns stay uncompiled until
//! [`SlugConfig::into_options`] validates the document.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{self, Error},
    slug::{DEFAULT_SEPARATOR, Replacement, SlugOptions},
};

/// Root configuration document for slug generation.
///
/// Every key is optional and falls back to the [`SlugOptions`] default.
///
/// # Examples
///
/// ```
/// use slugify::parse_config;
///
/// let yaml = r#"
/// separator: _
/// max_length: 20
/// stopwords: [a, the]
/// replacements:
///   - ["|", or]
///   - from: '(\d+)%'
///     to: '$1 percent'
///     regex: true
/// "#;
/// let config = parse_config(yaml,).expect("valid configuration",);
/// assert_eq!(config.separator, "_");
/// assert_eq!(config.replacements.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(default, deny_unknown_fields)]
pub struct SlugConfig
{
    /// Decode named character references.
    pub entities:      bool,
    /// Decode decimal character references.
    pub decimal:       bool,
    /// Decode hexadecimal character references.
    pub hexadecimal:   bool,
    /// Maximum slug length, `0` disables truncation.
    #[serde(alias = "max-length", alias = "maxLength")]
    pub max_length:    usize,
    /// Only truncate between words.
    #[serde(alias = "word-boundary", alias = "wordBoundary")]
    pub word_boundary: bool,
    /// Text placed between words.
    pub separator:     String,
    /// Keep only the leading run of words when truncating.
    #[serde(alias = "save-order", alias = "saveOrder")]
    pub save_order:    bool,
    /// Words dropped from the slug.
    pub stopwords:     Vec<String,>,
    /// Custom pattern of disallowed characters.
    #[serde(alias = "regex-pattern", alias = "regexPattern")]
    pub regex_pattern: Option<String,>,
    /// Fold the slug to lowercase.
    pub lowercase:     bool,
    /// Substitutions applied before disallowed characters are collapsed.
    pub replacements:  Vec<ReplacementEntry,>,
    /// Keep Unicode letters.
    #[serde(alias = "allow-unicode", alias = "allowUnicode")]
    pub allow_unicode: bool,
}

impl Default for SlugConfig
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

/// Raw replacement entry, written either as a `[from, to]` pair or as a map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum ReplacementEntry
{
    /// Literal substitution written as a two element list.
    Pair([String; 2],),
    /// Substitution written as a map, optionally interpreted as a regex.
    Rule
    {
        /// Text or pattern to look for.
        from:  String,
        /// Replacement text or template.
        to:    String,
        /// Interpret `from` as a regular expression.
        #[serde(default)]
        regex: bool,
    },
}

impl ReplacementEntry
{
    /// Compiles the entry into a [`Replacement`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty `from` and
    /// [`Error::Pattern`] when a regex entry does not compile.
    pub fn compile(&self,) -> Result<Replacement, Error,>
    {
        let (from, to, regex,) = match self {
            Self::Pair([from, to,],) => (from, to, false,),
            Self::Rule {
                from,
                to,
                regex,
            } => (from, to, *regex,),
        };

        if from.is_empty() {
            return Err(Error::validation("replacement source must not be empty",),);
        }

        if regex { Replacement::pattern(from, to.as_str(),) } else { Ok(Replacement::literal(from, to,),) }
    }
}

impl SlugConfig
{
    /// Validates the document and compiles it into [`SlugOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] when `regex_pattern` or a regex replacement
    /// does not compile and [`Error::Validation`] for empty replacement
    /// sources.
    pub fn into_options(self,) -> Result<SlugOptions, Error,>
    {
        let replacements =
            self.replacements.iter().map(ReplacementEntry::compile,).collect::<Result<Vec<_,>, _,>>()?;
        let regex_pattern = self.regex_pattern.as_deref().map(regex::Regex::new,).transpose()?;

        Ok(SlugOptions {
            entities: self.entities,
            decimal: self.decimal,
            hexadecimal: self.hexadecimal,
            max_length: self.max_length,
            word_boundary: self.word_boundary,
            separator: self.separator,
            save_order: self.save_order,
            stopwords: self.stopwords,
            regex_pattern,
            lowercase: self.lowercase,
            replacements,
            allow_unicode: self.allow_unicode,
        },)
    }
}

/// Loads a configuration document from the provided YAML file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read or the YAML cannot be
/// deserialized.
pub fn load_config(path: &Path,) -> Result<SlugConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    debug!(path = %path.display(), "loaded slug configuration");
    parse_config(&contents,)
}

/// Parses a configuration document from a YAML string.
///
/// An empty document yields the defaults.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded.
pub fn parse_config(contents: &str,) -> Result<SlugConfig, Error,>
{
    if contents.trim().is_empty() {
        return Ok(SlugConfig::default(),);
    }

    Ok(serde_yaml::from_str(contents,)?,)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use tempfile::tempdir;

    use super::{ReplacementEntry, SlugConfig, load_config, parse_config};
    use crate::{Error, slugify};

    #[test]
    fn empty_document_yields_defaults()
    {
        assert_eq!(parse_config("").expect("empty config",), SlugConfig::default());
        assert_eq!(parse_config("{}").expect("empty map",), SlugConfig::default());
    }

    #[test]
    fn accepts_aliases_and_pair_replacements()
    {
        let yaml = r#"
max-length: 10
wordBoundary: true
save_order: true
replacements:
  - ["|", "or"]
"#;
        let config = parse_config(yaml,).expect("valid config",);
        assert_eq!(config.max_length, 10);
        assert!(config.word_boundary);
        assert!(config.save_order);
        assert_eq!(
            config.replacements,
            vec![ReplacementEntry::Pair(["|".to_owned(), "or".to_owned()])]
        );
    }

    #[test]
    fn unknown_keys_are_rejected()
    {
        let error = parse_config("sepparator: _",).expect_err("expected parse error",);
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn compiled_options_drive_slugify()
    {
        let yaml = r#"
separator: _
stopwords: [stop, words]
replacements:
  - from: '(\d+)\s*%'
    to: '$1 percent'
    regex: true
"#;
        let options = parse_config(yaml,)
            .and_then(SlugConfig::into_options,)
            .expect("valid options",);
        assert_eq!(slugify("Stop: 100% words off", &options,).unwrap(), "100_percent_off");
    }

    #[test]
    fn invalid_regex_pattern_is_reported()
    {
        let config = SlugConfig {
            regex_pattern: Some("[unclosed".to_owned(),), ..SlugConfig::default()
        };
        let error = config.into_options().expect_err("expected pattern error",);
        assert!(matches!(error, Error::Pattern { .. }));
    }

    #[test]
    fn empty_replacement_source_is_rejected()
    {
        let config = SlugConfig {
            replacements: vec![ReplacementEntry::Pair([String::new(), "x".to_owned()])],
            ..SlugConfig::default()
        };
        let error = config.into_options().expect_err("expected validation error",);
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[test]
    fn load_config_reads_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("slugify.yaml",);
        fs::write(&path, "lowercase: false\nallow_unicode: true\n",).expect("write config",);

        let config = load_config(&path,).expect("config loads",);
        assert!(!config.lowercase);
        assert!(config.allow_unicode);
    }

    #[test]
    fn load_config_reports_missing_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("missing.yaml",);
        let error = load_config(&path,).expect_err("expected io error",);
        match error {
            Error::Io {
                path: ref stored,
                ..
            } => assert_eq!(stored, &path),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
