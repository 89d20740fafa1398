// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use proptest::prelude::*;
use slugify::{Error, SlugOptions, TruncateOptions, slugify, smart_truncate};

fn truncate(text: &str, options: &TruncateOptions,) -> String
{
    smart_truncate(text, options,).expect("text input never fails",)
}

#[test]
fn html_references_collapse_into_one_word()
{
    let slug = slugify("HTML &copy; &#169; &#xA9;", &SlugOptions::default(),).unwrap();
    assert_eq!(slug, "html-copyright");
}

#[test]
fn accented_text_is_transliterated()
{
    let slug = slugify("Café & Restaurant", &SlugOptions::default(),).unwrap();
    assert_eq!(slug, "cafe-restaurant");
}

#[test]
fn numbers_are_coerced_to_text()
{
    assert_eq!(slugify(&12345, &SlugOptions::default(),).unwrap(), "12345");
    assert_eq!(slugify(&12345_u64, &SlugOptions::default(),).unwrap(), "12345");
}

#[test]
fn absent_values_are_type_errors()
{
    let error = slugify(&None::<&str,>, &SlugOptions::default(),).unwrap_err();
    assert!(matches!(error, Error::InvalidInput { type_name: "None" }));

    let error = smart_truncate(&None::<String,>, &TruncateOptions::new(10,),).unwrap_err();
    assert!(matches!(error, Error::InvalidInput { .. }));
}

#[test]
fn word_boundary_scenario()
{
    let options = TruncateOptions::new(7,).word_boundary(true,).separator(",",);
    assert_eq!(truncate("one,two,three", &options), "one,two");
    assert_eq!(truncate("one,two,three", &options.save_order(true,)), "one");
}

#[test]
fn zero_max_length_keeps_the_input()
{
    let options = TruncateOptions::new(0,).word_boundary(true,);
    assert_eq!(truncate("  keep   everything  ", &options), "  keep   everything  ");
}

proptest! {
    #[test]
    fn default_slugs_are_lowercase_alphanumeric(input in "\\PC{0,64}") {
        let slug = slugify(input.as_str(), &SlugOptions::default()).unwrap();
        prop_assert!(slug.chars().all(|ch| ch == '-' || ch.is_ascii_lowercase() || ch.is_ascii_digit()));
    }

    #[test]
    fn slugify_is_idempotent(input in "\\PC{0,64}") {
        let options = SlugOptions::default();
        let once = slugify(input.as_str(), &options).unwrap();
        let twice = slugify(once.as_str(), &options).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn truncation_is_bounded(input in "\\PC{0,64}", max_length in 0usize..80, boundary in any::<bool>()) {
        let options = TruncateOptions::new(max_length).word_boundary(boundary);
        let cut = truncate(&input, &options);
        let input_length = input.chars().count();
        prop_assert!(cut.chars().count() <= input_length.max(max_length));
        if !boundary && max_length > 0 {
            prop_assert!(cut.chars().count() <= max_length);
        }
    }

    #[test]
    fn zero_max_length_is_identity(input in "\\PC{0,64}") {
        prop_assert_eq!(truncate(&input, &TruncateOptions::new(0)), input);
    }

    #[test]
    fn empty_text_stays_empty(max_length in 0usize..80) {
        prop_assert_eq!(truncate("", &TruncateOptions::new(max_length)), "");
    }
}
