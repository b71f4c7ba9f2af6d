//! Command-line front end: train on local corpus files, then correct phrases
//! or complete titles given as arguments or typed line by line on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{debug, info, warn};

use autospell::corpus::{self, CorpusPaths};
use autospell::{Assistant, Config, Language};

#[derive(Parser, Debug)]
#[command(name = "autospell")]
#[command(about = "Spell correction and title autocompletion over a local corpus")]
#[command(version)]
struct Args {
    /// Language tag: en or he (defaults to the configured language)
    #[arg(short, long)]
    lang: Option<String>,

    /// Free-text training file, one phrase per line
    #[arg(long)]
    phrases: Option<PathBuf>,

    /// Word list training file, one word per line
    #[arg(long)]
    words: Option<PathBuf>,

    /// Title list for autocompletion, one title per line
    #[arg(long)]
    titles: Option<PathBuf>,

    /// Ignore the stored config and use built-in defaults
    #[arg(long)]
    defaults: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Correct the words of a phrase (reads stdin lines when no text is given)
    Correct { text: Vec<String> },
    /// Complete titles from partially typed tokens (reads stdin lines when none are given)
    Complete { tokens: Vec<String> },
}

type QueryFn = fn(&Assistant, Language, &str) -> autospell::Result<String>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let loaded = if args.defaults {
        Ok(Config::default())
    } else {
        Config::load()
    };
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Err(err) = &loaded {
        warn!("Failed to load config, using defaults: {err}");
    }

    // Persist defaults so users get a concrete config file on first run.
    if !args.defaults && loaded.is_ok() {
        if let Err(err) = config.save() {
            warn!("Failed to persist config defaults: {err}");
        }
    }

    let lang = match &args.lang {
        Some(tag) => tag.parse::<Language>()?,
        None => config.default_language,
    };

    let paths = CorpusPaths {
        phrases: args.phrases.clone(),
        words: args.words.clone(),
        titles: args.titles.clone(),
    };
    let models = corpus::load_language(lang, &paths, config.limits())?;

    let mut assistant = Assistant::new();
    assistant.insert(lang, models);

    let (inline, run): (&[String], QueryFn) = match &args.command {
        Command::Correct { text } => (text.as_slice(), correct_line as QueryFn),
        Command::Complete { tokens } => (tokens.as_slice(), complete_line as QueryFn),
    };

    if !inline.is_empty() {
        println!("{}", run(&assistant, lang, &inline.join(" "))?);
        return Ok(());
    }

    info!("Reading queries from stdin, :q to quit");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line == ":q" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        debug!("Query: {}", line);
        writeln!(stdout, "{}", run(&assistant, lang, line)?)?;
        stdout.flush()?;
    }

    Ok(())
}

fn correct_line(assistant: &Assistant, lang: Language, line: &str) -> autospell::Result<String> {
    Ok(assistant.correct_phrase(lang, line)?.join(" "))
}

fn complete_line(assistant: &Assistant, lang: Language, line: &str) -> autospell::Result<String> {
    Ok(assistant.complete(lang, line)?.join("\n"))
}
