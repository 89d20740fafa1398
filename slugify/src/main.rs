// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the slugify binary.
//!
//! Text is taken from positional arguments, from standard input as a whole,
//! or line by line in batch mode. Options come from an optional YAML file and
//! are overridden by flags.

use std::{
    io::{self, BufRead, Read, Write},
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Parser};
use rayon::prelude::*;
use serde::Serialize;
use slugify::{Error, ReplacementEntry, SlugConfig, SlugOptions, load_config};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command line interface for turning text into slugs.
#[derive(Debug, Parser,)]
#[command(name = "slugify", version, about = "Turn text into URL-safe slugs")]
struct Cli
{
    /// Text to slugify; several words are joined with spaces.
    #[arg(value_name = "TEXT")]
    text: Vec<String,>,

    /// Read the whole text from standard input.
    #[arg(long = "stdin", action = ArgAction::SetTrue, conflicts_with_all = ["text", "batch"])]
    stdin: bool,

    /// Slugify every line of standard input separately.
    #[arg(long = "batch", action = ArgAction::SetTrue, conflicts_with = "text")]
    batch: bool,

    /// Print `{"input", "slug"}` JSON records instead of plain slugs.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// YAML file with default options; flags take precedence.
    #[arg(long = "config", value_name = "PATH", env = "SLUGIFY_CONFIG")]
    config: Option<PathBuf,>,

    #[command(flatten)]
    overrides: OptionFlags,
}

/// Flags overriding individual slug options.
#[derive(Debug, Default, clap::Args,)]
struct OptionFlags
{
    /// Do not decode named character references.
    #[arg(long = "no-entities", action = ArgAction::SetTrue)]
    no_entities: bool,

    /// Do not decode decimal character references.
    #[arg(long = "no-decimal", action = ArgAction::SetTrue)]
    no_decimal: bool,

    /// Do not decode hexadecimal character references.
    #[arg(long = "no-hexadecimal", action = ArgAction::SetTrue)]
    no_hexadecimal: bool,

    /// Output slug max length, 0 keeps the full slug.
    #[arg(long = "max-length", value_name = "N")]
    max_length: Option<usize,>,

    /// Truncate only between words.
    #[arg(long = "word-boundary", action = ArgAction::SetTrue)]
    word_boundary: bool,

    /// Keep the leading words in order when truncating.
    #[arg(long = "save-order", action = ArgAction::SetTrue)]
    save_order: bool,

    /// Separator between words.
    #[arg(long = "separator", value_name = "SEP")]
    separator: Option<String,>,

    /// Words to drop from the slug.
    #[arg(long = "stopwords", value_name = "WORD", num_args = 1..)]
    stopwords: Vec<String,>,

    /// Pattern of characters collapsed into separators.
    #[arg(long = "regex-pattern", value_name = "PATTERN")]
    regex_pattern: Option<String,>,

    /// Keep the original case.
    #[arg(long = "no-lowercase", action = ArgAction::SetTrue)]
    no_lowercase: bool,

    /// Literal substitutions written as `FROM->TO`.
    #[arg(long = "replacements", value_name = "FROM->TO", num_args = 1..)]
    replacements: Vec<String,>,

    /// Keep Unicode letters instead of transliterating them.
    #[arg(long = "allow-unicode", action = ArgAction::SetTrue)]
    allow_unicode: bool,
}

impl OptionFlags
{
    /// Applies the flags on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when a replacement is not written as
    /// `FROM->TO`.
    fn apply(self, mut config: SlugConfig,) -> Result<SlugConfig, Error,>
    {
        if self.no_entities {
            config.entities = false;
        }
        if self.no_decimal {
            config.decimal = false;
        }
        if self.no_hexadecimal {
            config.hexadecimal = false;
        }
        if let Some(max_length,) = self.max_length {
            config.max_length = max_length;
        }
        if self.word_boundary {
            config.word_boundary = true;
        }
        if self.save_order {
            config.save_order = true;
        }
        if let Some(separator,) = self.separator {
            config.separator = separator;
        }
        if !self.stopwords.is_empty() {
            config.stopwords = self.stopwords;
        }
        if let Some(pattern,) = self.regex_pattern {
            config.regex_pattern = Some(pattern,);
        }
        if self.no_lowercase {
            config.lowercase = false;
        }
        for raw in &self.replacements {
            config.replacements.push(parse_replacement(raw,)?,);
        }
        if self.allow_unicode {
            config.allow_unicode = true;
        }

        Ok(config,)
    }
}

fn parse_replacement(raw: &str,) -> Result<ReplacementEntry, Error,>
{
    let (from, to,) = raw.split_once("->",).ok_or_else(|| {
        Error::validation(format!("replacement '{raw}' must be written as FROM->TO"),)
    },)?;

    Ok(ReplacementEntry::Pair([from.to_owned(), to.to_owned(),],),)
}

/// Single JSON output record.
#[derive(Debug, Serialize,)]
struct SlugRecord<'a,>
{
    input: &'a str,
    slug:  String,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, input and output errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let options = resolve_options(cli.config.as_deref(), cli.overrides,)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if cli.batch {
        let lines = read_lines(io::stdin().lock(),)?;
        return write_batch(&mut handle, &lines, &options, cli.json,);
    }

    let text = if cli.stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer,)
            .map_err(|source| slugify::io_error(Path::new("<stdin>",), source,),)?;
        buffer
    } else if cli.text.is_empty() {
        return Err(Error::validation("missing input text; pass TEXT, --stdin or --batch",),);
    } else {
        cli.text.join(" ",)
    };

    write_single(&mut handle, &text, &options, cli.json,)
}

/// Loads the optional configuration file and applies flag overrides.
fn resolve_options(config: Option<&Path,>, overrides: OptionFlags,) -> Result<SlugOptions, Error,>
{
    let base = match config {
        Some(path,) => load_config(path,)?,
        None => SlugConfig::default(),
    };
    let merged = overrides.apply(base,)?;
    debug!(?merged, "resolved slug options");
    merged.into_options()
}

fn read_lines<R: BufRead,>(reader: R,) -> Result<Vec<String,>, Error,>
{
    reader
        .lines()
        .collect::<Result<Vec<_,>, _,>>()
        .map_err(|source| slugify::io_error(Path::new("<stdin>",), source,),)
}

fn write_single<W: Write,>(
    writer: &mut W,
    text: &str,
    options: &SlugOptions,
    json: bool,
) -> Result<(), Error,>
{
    let slug = options.slugify(text,)?;
    if json {
        serde_json::to_writer(&mut *writer, &SlugRecord {
            input: text, slug,
        },)?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "{slug}")?;
    }

    Ok((),)
}

/// Slugifies every line in parallel and writes the results in input order.
fn write_batch<W: Write,>(
    writer: &mut W,
    lines: &[String],
    options: &SlugOptions,
    json: bool,
) -> Result<(), Error,>
{
    let slugs = lines
        .par_iter()
        .map(|line| options.slugify(line.as_str(),),)
        .collect::<Result<Vec<_,>, _,>>()?;
    info!(count = slugs.len(), "slugified batch");

    for (line, slug,) in lines.iter().zip(slugs,) {
        if json {
            serde_json::to_writer(&mut *writer, &SlugRecord {
                input: line, slug,
            },)?;
            writeln!(writer)?;
        } else {
            writeln!(writer, "{slug}")?;
        }
    }

    Ok((),)
}
