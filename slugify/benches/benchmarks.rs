// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use slugify::{Replacement, SlugOptions, TruncateOptions, slugify, smart_truncate};

fn benchmark_ascii_title(c: &mut Criterion,)
{
    let options = SlugOptions::default();

    c.bench_function("slugify_ascii_title", |b| {
        b.iter(|| {
            slugify(black_box("The Quick Brown Fox Jumps Over The Lazy Dog",), &options,)
                .expect("slugify failed",)
        },)
    },);
}

fn benchmark_entities_and_unicode(c: &mut Criterion,)
{
    let options = SlugOptions::default();
    let text = "Café &amp; Restaurant &copy; 2025 &#8212; Münchner Straße &#xA9;";

    c.bench_function("slugify_entities_unicode", |b| {
        b.iter(|| slugify(black_box(text,), &options,).expect("slugify failed",),)
    },);
}

fn benchmark_full_options(c: &mut Criterion,)
{
    let options = SlugOptions::default()
        .stopwords(["a", "an", "the", "of", "for",],)
        .replacement(Replacement::literal("|", "or",),)
        .replacement(Replacement::literal("&", "and",),)
        .max_length(40,)
        .word_boundary(true,)
        .save_order(true,);
    let text = "The History of the Decline and Fall | Rise of an Empire for Everyone & All";

    c.bench_function("slugify_full_options", |b| {
        b.iter(|| slugify(black_box(text,), &options,).expect("slugify failed",),)
    },);
}

fn benchmark_long_text(c: &mut Criterion,)
{
    let options = SlugOptions::default().max_length(120,).word_boundary(true,);
    let mut text = String::new();
    for i in 0..200 {
        text.push_str(&format!("Zażółć gęślą jaźń {i} "),);
    }

    c.bench_function("slugify_long_text", |b| {
        b.iter(|| slugify(black_box(text.as_str(),), &options,).expect("slugify failed",),)
    },);
}

fn benchmark_smart_truncate(c: &mut Criterion,)
{
    let options = TruncateOptions::new(64,).word_boundary(true,).separator("-",);
    let text = "lorem-ipsum-dolor-sit-amet-consectetur-adipiscing-elit-sed-do-eiusmod-tempor";

    c.bench_function("smart_truncate_word_boundary", |b| {
        b.iter(|| smart_truncate(black_box(text,), &options,).expect("truncate failed",),)
    },);
}

criterion_group!(
    benches,
    benchmark_ascii_title,
    benchmark_entities_and_unicode,
    benchmark_full_options,
    benchmark_long_text,
    benchmark_smart_truncate
);
criterion_main!(benches);
