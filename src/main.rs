use crate::config::Config;
use crate::error::Error;
use crate::gradebook::GradeBook;
use crate::model::{Score, Student, StudentId};
use crate::roster::Roster;
use clap::Parser;
use eyre::Result;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod codec;
mod config;
mod display;
mod error;
mod gradebook;
mod model;
mod roster;

#[derive(Debug, Parser)]
#[command(version, about = "Track students, subject scores and letter grades")]
struct Opts {
    /// Use FILE instead of gradebook.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Do not write the roster back to disk
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(opts: &Opts) -> Result<Config> {
    match &opts.config {
        Some(path) => Config::load(path),
        None => {
            let default = Path::new("gradebook.toml");
            if default.exists() {
                Config::load(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn seed() -> Result<(Roster, GradeBook), Error> {
    let mut roster = Roster::new();
    roster.add(Student::new("2021001", "张三", 20)?);
    roster.add(Student::new("2021002", "李四", 19)?);
    roster.add(Student::new("2021003", "王五", 21)?);

    let mut book = GradeBook::new();
    for (id, subject, points) in [
        ("2021001", "数学", 95.5),
        ("2021001", "英语", 87.0),
        ("2021002", "数学", 78.5),
        ("2021002", "英语", 85.5),
        ("2021003", "数学", 88.0),
        ("2021003", "英语", 92.0),
    ] {
        book.add_score(StudentId::new(id)?, Score::new(subject, points)?);
    }
    Ok((roster, book))
}

/// Save then reload the roster. Failures are reported here and never
/// propagated; a failed reload degrades to an empty roster.
fn persist_and_reload(roster: &Roster, path: &Path) {
    match codec::save_students(&roster.all(), path) {
        Ok(resolved) => println!("Roster saved to {}", resolved.display()),
        Err(err) => {
            warn!(%err, path = %path.display(), "could not save roster");
            println!("Could not save the roster: {err}");
            return;
        }
    }
    let reloaded = match codec::load_students(path) {
        Ok(students) => students,
        Err(err) => {
            warn!(%err, path = %path.display(), "could not reload roster");
            println!("Could not reload the roster: {err}");
            Vec::new()
        }
    };
    println!(
        "Reloaded {} students from {}",
        reloaded.len(),
        path.display()
    );
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let opts = Opts::parse();
    let level = match opts.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("gradebook={level}")))
        .init();

    let config = load_config(&opts)?;
    let (roster, book) = seed()?;

    display::display_age_range(&roster, 19, 20);
    display::display_report(&roster, &book);
    display::display_top(&roster, &book, config.ranking.top);
    display::display_orphans(&roster, &book);

    if !opts.dry_run {
        persist_and_reload(&roster, &config.storage.roster);
    }
    Ok(())
}
