// SPDX-License-Identifier: MPL-2.0
//! Line-oriented command front end.
//!
//! Each input line is parsed into a [`Command`], forwarded to [`App::update`]
//! and the resulting [`Event`] is printed. Errors are printed too and the
//! session carries on; only `quit` or end of input stop it.

use super::{config, paths, App, Event, Flags, Message};
use crate::error::{Error, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  open <dir>            select a working folder
  ls                    list images in the working folder
  refresh               rescan the working folder
  select <n|name>       load an image by list number or file name
  bw, grayscale         convert to grayscale
  mirror                flip left-right
  blur                  gaussian blur
  bc [b [c]]            brightness then contrast (defaults from settings)
  preset <b> <c>        store default brightness and contrast in settings
  undo                  step back one edit
  save                  write to <folder>/Modified/<name>
  info                  describe the current image
  help                  show this text
  quit                  leave";

const PROMPT: &str = "> ";

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Send(Message),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let message = match verb {
            "open" | "cd" => {
                if rest.is_empty() {
                    return Err(Error::Command("open needs a folder".into()));
                }
                Message::SelectFolder(PathBuf::from(rest))
            }
            "select" | "load" => {
                if rest.is_empty() {
                    return Err(Error::Command("select needs a number or file name".into()));
                }
                Message::SelectFile(rest.to_string())
            }
            "bc" => parse_brightness_contrast(rest)?,
            "preset" => parse_presets(rest)?,
            _ if !rest.is_empty() => {
                return Err(Error::Command(format!("{verb} takes no arguments")));
            }
            "ls" | "list" => Message::ListFiles,
            "refresh" => Message::Refresh,
            "bw" | "grayscale" => Message::Grayscale,
            "mirror" => Message::Mirror,
            "blur" => Message::Blur,
            "undo" => Message::Undo,
            "save" => Message::Save,
            "info" => Message::Info,
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            other => return Err(Error::Command(other.to_string())),
        };
        Ok(Command::Send(message))
    }
}

fn parse_factor(arg: &str) -> Result<f32> {
    arg.parse::<f32>()
        .ok()
        .filter(|factor| factor.is_finite())
        .ok_or_else(|| Error::Command(format!("not a factor: {arg}")))
}

fn parse_brightness_contrast(args: &str) -> Result<Message> {
    let mut factors = args.split_whitespace().map(parse_factor);
    let brightness = factors.next().transpose()?;
    let contrast = factors.next().transpose()?;
    if factors.next().is_some() {
        return Err(Error::Command("bc takes at most two factors".into()));
    }
    Ok(Message::BrightnessContrast {
        brightness,
        contrast,
    })
}

fn parse_presets(args: &str) -> Result<Message> {
    let factors = args
        .split_whitespace()
        .map(parse_factor)
        .collect::<Result<Vec<_>>>()?;
    match factors[..] {
        [brightness, contrast] => Ok(Message::SavePresets {
            brightness,
            contrast,
        }),
        _ => Err(Error::Command("preset needs a brightness and a contrast factor".into())),
    }
}

/// Picks the startup folder: CLI argument, then the configured folder, then
/// the process working directory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the process working directory is needed but
/// cannot be read.
pub fn initial_directory(cli: Option<String>, config: &config::Config) -> Result<PathBuf> {
    if let Some(directory) = cli {
        return Ok(PathBuf::from(directory));
    }
    if let Some(directory) = &config.general.initial_directory {
        return Ok(directory.clone());
    }
    Ok(std::env::current_dir()?)
}

/// Entry point used by `main.rs`: loads settings and runs a session on
/// stdin/stdout.
///
/// # Errors
///
/// Returns an error if the startup folder cannot be determined or the
/// terminal cannot be written to.
pub fn run(flags: Flags) -> Result<()> {
    paths::init_cli_override(flags.config_dir);

    let (config, warning) = config::load();
    if let Some(warning) = warning {
        eprintln!("{warning}");
    }

    let directory = initial_directory(flags.directory, &config)?;
    let mut app = App::new(config, directory);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut app, stdin.lock(), stdout.lock())
}

/// Reads commands from `input` until `quit` or end of input.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading input or writing output fails. Command
/// errors are printed and do not end the session.
pub fn run_session<R: BufRead, W: Write>(app: &mut App, input: R, mut output: W) -> Result<()> {
    let listing = app.update(Message::ListFiles)?;
    print_event(&mut output, &listing)?;

    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(output, "{HELP}")?,
                Ok(Command::Send(message)) => match app.update(message) {
                    Ok(event) => print_event(&mut output, &event)?,
                    Err(err) => writeln!(output, "{err}")?,
                },
                Err(err) => writeln!(output, "{err}")?,
            }
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    Ok(())
}

fn print_event<W: Write>(output: &mut W, event: &Event) -> Result<()> {
    match event {
        Event::FilesListed { directory, files } => {
            writeln!(output, "{} ({} images)", directory.display(), files.len())?;
            for (index, name) in files.iter().enumerate() {
                writeln!(output, "{:>4}  {name}", index + 1)?;
            }
        }
        Event::ImageUpdated(summary) => writeln!(output, "{summary}")?,
        Event::Unchanged => writeln!(output, "nothing to do")?,
        Event::Saved(path) => writeln!(output, "saved {}", path.display())?,
        Event::PresetsSaved {
            brightness,
            contrast,
        } => writeln!(output, "presets saved: brightness {brightness}, contrast {contrast}")?,
    }
    Ok(())
}
