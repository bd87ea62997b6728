use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use log::info;
use url::Url;

use crate::{
    document::{fetch_url, load_file, reqwest_client},
    presence::check_html_file,
    report::write_report,
};

pub const CHECKS_FILE_DEFAULT: &str = "checks.json";
pub const USAGE_HINT: &str = "Please input a web URL or a filename to check";

#[derive(Debug, Parser)]
#[command(about = "Checks an HTML document for elements matching a list of CSS selectors")]
pub struct Opts {
    /// Path to checks.json
    #[arg(short, long, value_name = "CHECK_FILE")]
    pub checks: Option<PathBuf>,
    /// URL to check
    #[arg(short, long)]
    pub url: Option<Url>,
    /// HTML file to check
    #[arg(short, long, value_name = "HTML_FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
#[error("{} does not exist. Exiting.", .0.display())]
pub struct MissingFile(pub PathBuf);

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Remote { url: Url, checks: PathBuf },
    Local { file: PathBuf, checks: PathBuf },
    Usage,
}

pub fn assert_file_exists(path: &Path) -> Result<(), MissingFile> {
    if path.exists() {
        Ok(())
    } else {
        Err(MissingFile(path.to_owned()))
    }
}

/// How a run ended; only a missing input file is a failure.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    Usage,
    MissingFile,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Reported | Outcome::Usage => ExitCode::SUCCESS,
            Outcome::MissingFile => ExitCode::FAILURE,
        }
    }
}

impl Opts {
    /// Validates the given paths and picks what to do.
    /// A URL wins over a file; with neither, there is nothing to check.
    pub fn resolve(self) -> Result<Mode, MissingFile> {
        for path in self.checks.iter().chain(&self.file) {
            assert_file_exists(path)?;
        }
        let checks = || -> Result<PathBuf, MissingFile> {
            let path = self
                .checks
                .clone()
                .unwrap_or_else(|| CHECKS_FILE_DEFAULT.into());
            assert_file_exists(&path)?;
            Ok(path)
        };
        Ok(match (&self.url, &self.file) {
            (Some(url), _) => Mode::Remote {
                url: url.clone(),
                checks: checks()?,
            },
            (None, Some(file)) => Mode::Local {
                file: file.clone(),
                checks: checks()?,
            },
            (None, None) => Mode::Usage,
        })
    }
}

/// Resolves `opts`, checks the chosen document, and writes either the report,
/// the usage hint, or the missing-file message to `out`.
pub async fn run<W: Write>(opts: Opts, mut out: W) -> anyhow::Result<Outcome> {
    let mode = match opts.resolve() {
        Ok(mode) => mode,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(Outcome::MissingFile);
        }
    };
    let (document, checks) = match mode {
        Mode::Remote { url, checks } => {
            info!("Checking {url} against {checks:?}");
            let client = reqwest_client()?;
            (fetch_url(&client, url).await?, checks)
        }
        Mode::Local { file, checks } => {
            info!("Checking {file:?} against {checks:?}");
            (load_file(file)?, checks)
        }
        Mode::Usage => {
            writeln!(out, "{USAGE_HINT}")?;
            return Ok(Outcome::Usage);
        }
    };
    let presence = check_html_file(&document, checks)?;
    write_report(out, &presence)?;
    Ok(Outcome::Reported)
}
