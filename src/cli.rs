// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{AppOptions, AssetPolicy};
use crate::progress::Progress;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(AppOptions),
    Help,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let opts = match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    crate::log::init(&opts.log_path(), opts.verbose);
    logd!("options: {opts:?}");

    let mut progress = CliProgress::default();
    let summary = crate::runner::run(&opts, Some(&mut progress))?;

    println!(
        "{} countries; flags: {} fetched, {} skipped, {} failed",
        summary.records, summary.assets.fetched, summary.assets.skipped, summary.assets.failed
    );
    println!("Wrote {}", summary.json.display());
    for deck in &summary.decks {
        println!("Wrote {} ({} notes, {} media)", deck.path.display(), deck.notes, deck.media);
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Box<dyn Error>> {
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out-dir" => {
                opts.output.dir = PathBuf::from(args.next().ok_or("Missing output directory")?);
            }
            "--resume" => opts.assets.policy = AssetPolicy::SkipExistingFiles,
            "--no-flags" => opts.assets.policy = AssetPolicy::Never,
            "--no-decks" => opts.output.write_decks = false,
            "--from-file" => {
                let path = args.next().ok_or("Missing value for --from-file")?;
                opts.fetch.from_file = Some(PathBuf::from(path));
            }
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    Ok(Command::Run(opts))
}

/// Prints stage lines and a running count to stderr.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name}", self.done, self.total);
    }

    fn item_failed(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {name} (no flag)", self.done, self.total);
    }
}
