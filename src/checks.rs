use std::{fmt::Debug, io::BufReader, path::PathBuf};

use anyhow::Context;
use derive_more::{Deref, From, Into};
use fs_err::File;
use log::debug;
use serde::Deserialize;

/// Selectors to look for, in the order they are checked and reported.
///
/// Duplicates are kept as-is; the later occurrence simply overwrites the
/// earlier one in the resulting [`Presence`](crate::presence::Presence).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Deref, From, Into)]
pub struct Checks(Vec<String>);

impl Checks {
    /// Reads a JSON array of selector strings from `path`, keeping the file order.
    pub fn load(path: impl Into<PathBuf> + Debug) -> anyhow::Result<Self> {
        let path = path.into();
        let checks: Self = (|| {
            serde_json::from_reader(BufReader::new(File::open(&path)?)).map_err(anyhow::Error::new)
        })()
        .with_context(|| format!("While trying to parse {path:?} as a list of selectors"))?;
        debug!("Loaded {} checks from {path:?}", checks.len());
        Ok(checks)
    }

    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        serde_json::from_str(s).context("While trying to parse the checks as a list of selectors")
    }

    pub fn sorted(mut self) -> Self {
        self.0.sort();
        self
    }
}
