// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Unicode normalization and folding of text into ASCII.

use std::iter;

use deunicode::deunicode_char;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Marks that read better as words than as their ASCII approximations.
const SYMBOL_WORDS: &[(char, &str,)] = &[
    ('\u{a9}', "copyright",),
    ('\u{ae}', "registered",),
    ('\u{2117}', "sound-recording",),
    ('\u{2122}', "trademark",),
];

/// Normalizes `text` for slug assembly.
///
/// With `allow_unicode` the text is only brought into NFKC form. Otherwise
/// it is folded into ASCII through [`transliterate`].
pub fn normalize(text: &str, allow_unicode: bool,) -> String
{
    if allow_unicode { text.nfkc().collect() } else { transliterate(text,) }
}

/// Folds `text` into its closest ASCII spelling.
///
/// Each character is decomposed (NFKD), combining marks are dropped and the
/// remainder is transliterated. Legal marks such as `©` become words, and a
/// run of the same mark separated only by whitespace yields the word once.
/// Characters without any ASCII spelling turn into a space so that they
/// still split the surrounding words.
///
/// # Examples
///
/// ```
/// use slugify::transliterate;
///
/// assert_eq!(transliterate("Café Münchner"), "Cafe Munchner");
/// assert_eq!(transliterate("© © ©").trim(), "copyright");
/// ```
pub fn transliterate(text: &str,) -> String
{
    let mut ascii = String::with_capacity(text.len(),);
    let mut last_mark: Option<char,> = None;

    for candidate in text.chars() {
        if let Some(word,) = symbol_word(candidate,) {
            if last_mark != Some(candidate,) {
                ascii.push(' ',);
                ascii.push_str(word,);
                ascii.push(' ',);
            }
            last_mark = Some(candidate,);
            continue;
        }

        for decomposed in iter::once(candidate,).nfkd() {
            if decomposed.is_ascii() {
                if !decomposed.is_ascii_whitespace() {
                    last_mark = None;
                }
                ascii.push(decomposed,);
                continue;
            }
            if is_combining_mark(decomposed,) {
                continue;
            }
            match deunicode_char(decomposed,) {
                Some(folded,) => {
                    if !folded.trim().is_empty() {
                        last_mark = None;
                    }
                    ascii.push_str(folded,);
                }
                None => ascii.push(' ',),
            }
        }
    }

    ascii
}

fn symbol_word(candidate: char,) -> Option<&'static str,>
{
    SYMBOL_WORDS.iter().find(|(mark, _,)| *mark == candidate,).map(|(_, word,)| *word,)
}

#[cfg(test)]
mod tests
{
    use super::{normalize, transliterate};

    #[test]
    fn strips_accents()
    {
        assert_eq!(transliterate("Café & Restaurant"), "Cafe & Restaurant");
        assert_eq!(transliterate("Tëst Šlug"), "Test Slug");
    }

    #[test]
    fn folds_other_scripts()
    {
        assert_eq!(transliterate("Тест"), "Test");
        assert!(transliterate("Ä Ö Ü ß",).is_ascii());
    }

    #[test]
    fn repeated_marks_collapse_into_one_word()
    {
        let folded = transliterate("HTML © © ©",);
        assert_eq!(folded.split_whitespace().collect::<Vec<_,>>(), ["HTML", "copyright"]);
    }

    #[test]
    fn marks_separated_by_words_are_kept()
    {
        let folded = transliterate("© one © two",);
        assert_eq!(
            folded.split_whitespace().collect::<Vec<_,>>(),
            ["copyright", "one", "copyright", "two"]
        );
    }

    #[test]
    fn trademark_is_spelled_out_before_decomposition()
    {
        assert_eq!(transliterate("Acme™",).trim(), "Acme trademark");
    }

    #[test]
    fn output_is_always_ascii()
    {
        assert!(transliterate("日本語 ✓ 🚀 ﬁ",).is_ascii());
    }

    #[test]
    fn unicode_mode_only_composes()
    {
        assert_eq!(normalize("Cafe\u{301}", true,), "Café");
        assert_eq!(normalize("Café", false,), "Cafe");
    }
}
