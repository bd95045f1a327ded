//! `chordsheet` - transpose chord sheets from the command line.
//!
//! Usage:
//!   `chordsheet <file.txt> --key higher`
//!   `chordsheet <file.txt> --steps -3 --json`
//!   `chordsheet --song "amazing grace" --key lower`
//!   `cat sheet.txt | chordsheet --steps 2 --bold`
//!
//! Reads a song sheet from a file, the configured sheet library, or stdin,
//! transposes every chord token, and prints a preview (or the JSON hand-off
//! document for an external renderer).

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use chordsheet::config::{Config, KeyChange};
use chordsheet::error::Error;
use chordsheet::library::SheetLibrary;
use chordsheet::render;
use chordsheet::song::{self, Song};

/// Parsed command-line options.
struct Options {
    file: Option<PathBuf>,
    song_query: Option<String>,
    title: Option<String>,
    steps: i32,
    json: bool,
    bold: bool,
    save: bool,
}

fn usage() -> ! {
    eprintln!("Usage: chordsheet [FILE] [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --key lower|same|higher   Shift by -1/0/+1 semitones");
    eprintln!("  --steps N                 Shift by N semitones (any integer)");
    eprintln!("  --song TITLE              Look FILE up in the sheet library by title");
    eprintln!("  --title TITLE             Override the song title");
    eprintln!("  --json                    Emit the styled document as JSON");
    eprintln!("  --bold                    ANSI-bold chords in the preview");
    eprintln!("  --save                    Also write the preview next to the CWD");
    std::process::exit(1);
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        file: None,
        song_query: None,
        title: None,
        steps: 0,
        json: false,
        bold: false,
        save: false,
    };

    let mut args = std::env::args().skip(1);
    let mut steps_given = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--key" => {
                let value = args.next().unwrap_or_else(|| usage());
                let Some(key) = KeyChange::parse(&value) else {
                    bail!("Unknown key change {value:?}; expected lower, same or higher");
                };
                options.steps = key.steps();
                steps_given = true;
            }
            "--steps" => {
                let value = args.next().unwrap_or_else(|| usage());
                options.steps = value
                    .parse()
                    .with_context(|| format!("Invalid semitone count {value:?}"))?;
                steps_given = true;
            }
            "--song" => {
                options.song_query = Some(args.next().unwrap_or_else(|| usage()));
            }
            "--title" => {
                options.title = Some(args.next().unwrap_or_else(|| usage()));
            }
            "--json" => options.json = true,
            "--bold" => options.bold = true,
            "--save" => options.save = true,
            "--help" | "-h" => usage(),
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {other}");
                usage();
            }
            other => {
                if options.file.is_some() {
                    usage();
                }
                options.file = Some(PathBuf::from(other));
            }
        }
    }

    if !steps_given {
        tracing::debug!("No shift given, defaulting to same key");
    }
    Ok(options)
}

/// Resolve the raw song text and a default title from the options.
fn load_input(options: &Options, config: &Config) -> Result<(String, String)> {
    if let Some(query) = &options.song_query {
        let Some(dir) = config.sheet_dir.clone() else {
            bail!(Error::config(
                "No song sheet library configured".to_string(),
                "Set CHORDSHEET_SHEET_DIR or create ~/Documents/Song Sheets",
            ));
        };
        let mut library = SheetLibrary::new(dir);
        let Some((title, text)) = library.lookup(query) else {
            bail!(Error::library(format!("No sheet matching {query:?}")));
        };
        return Ok((text, title));
    }

    if let Some(path) = &options.file {
        let text = fs_err::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled Song")
            .to_string();
        return Ok((text, title));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read song text from stdin")?;
    Ok((text, "Untitled Song".to_string()))
}

fn main() -> Result<()> {
    let options = parse_args()?;
    let config = Config::load()?;

    let (text, default_title) = load_input(&options, &config)?;
    if text.trim().is_empty() {
        bail!(Error::EmptyInput);
    }

    let title = options.title.clone().unwrap_or(default_title);
    let lines = song::format_song_with_tab_width(&text, options.steps, config.tab_width);
    let sheet = Song { title, steps: options.steps, lines };

    if options.json {
        let document = render::to_document(&sheet);
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print!("{}", render::render_preview(&sheet, options.bold));
    }

    if options.save {
        let filename = song::output_filename(&sheet.title);
        fs_err::write(&filename, render::render_preview(&sheet, false))
            .with_context(|| format!("Failed to write {filename}"))?;
        eprintln!("Saved {filename}");
    }

    Ok(())
}
