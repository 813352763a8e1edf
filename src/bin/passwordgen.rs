/*  passwordgen - a password generator and strength checker
    Copyright (C) 2026 passwordgen contributors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::{
    io::{self, BufRead},
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use clap::{builder::RangedU64ValueParser, Args, Parser, Subcommand};
use console::{style, Color, Term};
use zeroize::Zeroizing;

use passwordgen::{
    clipboard::{copy_password, Clipboard, CopyFeedback, SystemClipboard},
    password_generator::{self, MAX_LENGTH, MIN_LENGTH},
    reveal::{Reveal, SleepTicker},
    settings::{self, Settings},
    strength::{analyze, Features, Indicator, StrengthCategory, StrengthVerdict},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a password (the default)
    Generate(GenerateArgs),

    /// Tell how strong a password is, reads one password per line from stdin when none is given
    Check {
        /// Password to check. Arguments end up in shell history and process listings, piping
        /// it through stdin is safer
        password: Option<String>,

        /// Also show what the verdict is based on
        #[arg(long)]
        details: bool,
    },

    /// Write the default settings file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Number of characters
    #[arg(
        short,
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_LENGTH as u64..=MAX_LENGTH as u64)
    )]
    length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    no_numbers: bool,

    /// Leave out special characters
    #[arg(long)]
    no_special: bool,

    /// Copy the password to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Print the password at once instead of typing it out
    #[arg(long)]
    no_animate: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = cli.config.or_else(settings::config_file_location);

    let term = Term::stdout();
    match cli
        .command
        .unwrap_or_else(|| Command::Generate(GenerateArgs::default()))
    {
        Command::Generate(args) => {
            let settings = Settings::load_from(config_path.as_deref())?;
            generate(&term, &settings, &args)
        }
        Command::Check { password, details } => check(&term, password, details),
        Command::InitConfig { force } => init_config(config_path, force),
    }
}

fn generate(term: &Term, settings: &Settings, args: &GenerateArgs) -> anyhow::Result<()> {
    let mut settings = settings.clone();
    if let Some(length) = args.length {
        settings.length = length;
    }
    settings.uppercase &= !args.no_upper;
    settings.lowercase &= !args.no_lower;
    settings.numbers &= !args.no_numbers;
    settings.special &= !args.no_special;
    settings.animate &= !args.no_animate;

    let password = Zeroizing::new(password_generator::generate(&settings.policy()?));
    if password.is_empty() {
        eprintln!(
            "{}",
            style("Nothing to generate, enable at least one character class.").dim()
        );
        return Ok(());
    }

    if settings.animate && term.is_term() {
        Reveal::new(&password).play(&mut SleepTicker, settings.reveal_interval(), |prefix| {
            if let Err(err) = term.clear_line().and_then(|()| term.write_str(prefix)) {
                log::debug!("failed to draw reveal frame: {err}");
            }
        });
        term.write_line("")?;
    } else {
        term.write_line(&password)?;
    }

    if let Some(line) = verdict_line(&analyze(&password)) {
        term.write_line(&line)?;
    }

    if args.copy {
        copy(term, &password, settings.copy_feedback_window())?;
    }
    Ok(())
}

fn copy(term: &Term, password: &str, window: Duration) -> anyhow::Result<()> {
    let mut feedback = CopyFeedback::new(window);

    // kept alive until the acknowledgment is gone, some platforms drop the contents with it
    let clipboard = try_copy(SystemClipboard::new(), password, &mut feedback, Instant::now());

    if let Some(until) = feedback.expires_at() {
        term.write_str(&style("✔ Copied!").green().to_string())?;
        thread::sleep(until.saturating_duration_since(Instant::now()));
        term.clear_line()?;
    }

    drop(clipboard);
    Ok(())
}

/// Copies through `clipboard` if there is one. Without a clipboard nothing is acknowledged.
fn try_copy<C: Clipboard>(
    clipboard: passwordgen::Result<C>,
    password: &str,
    feedback: &mut CopyFeedback,
    now: Instant,
) -> Option<C> {
    match clipboard {
        Ok(mut clipboard) => {
            if let Err(err) = copy_password(&mut clipboard, password, feedback, now) {
                log::warn!("could not copy the password to the clipboard: {err}");
            }
            Some(clipboard)
        }
        Err(err) => {
            log::warn!("no clipboard available: {err}");
            None
        }
    }
}

fn check(term: &Term, password: Option<String>, details: bool) -> anyhow::Result<()> {
    match password {
        Some(password) => report(term, &Zeroizing::new(password), details),
        None => {
            for line in io::stdin().lock().lines() {
                let line = Zeroizing::new(line?);
                report(term, &line, details)?;
            }
            Ok(())
        }
    }
}

fn report(term: &Term, password: &str, details: bool) -> anyhow::Result<()> {
    if let Some(line) = verdict_line(&analyze(password)) {
        term.write_line(&line)?;
    }
    if details && !password.is_empty() {
        let features = Features::of(password);
        term.write_line(&format!(
            "  uppercase: {}  lowercase: {}  numbers: {}  special: {}  length: {}",
            yes_no(features.has_upper),
            yes_no(features.has_lower),
            yes_no(features.has_number),
            yes_no(features.has_special),
            features.length
        ))?;
        term.write_line(&format!(
            "  common pattern: {}  sequential digits: {}  repeating characters: {}  base score: {}/6",
            yes_no(features.has_common_pattern),
            yes_no(features.has_sequential),
            yes_no(features.has_repeating_chars),
            features.base_score()
        ))?;
    }
    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = path.ok_or_else(|| {
        anyhow::anyhow!("can't tell where the settings file belongs, pass it with --config")
    })?;
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists, use --force to overwrite it",
            path.display()
        );
    }

    Settings::default().save(&path)?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

/// `<icon> <Category> Password  <message>`, nothing for an empty password.
fn verdict_line(verdict: &StrengthVerdict) -> Option<String> {
    if verdict.category == StrengthCategory::None {
        return None;
    }

    let mut line = format!(
        "{} {}",
        indicator_glyph(verdict.indicator),
        style(format!("{} Password", verdict.category))
            .fg(category_color(verdict.category))
            .bold()
    );
    if let Some(message) = verdict.message {
        line.push_str(&format!("  {}", style(message).dim()));
    }
    Some(line)
}

fn indicator_glyph(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Lock => "🔒",
        Indicator::Warning => "⚠",
        Indicator::CriticalX => "✖",
        Indicator::Shield => "🛡",
    }
}

fn category_color(category: StrengthCategory) -> Color {
    match category {
        StrengthCategory::None => Color::White,
        StrengthCategory::VeryWeak => Color::Red,
        StrengthCategory::Weak => Color::Color256(208),
        StrengthCategory::Good => Color::Yellow,
        StrengthCategory::Strong => Color::Green,
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
#[path = "../tests/cli.rs"]
mod cli;
