use std::{fmt::Debug, path::PathBuf};

use derive_more::{Deref, Into};
use indexmap::IndexMap;
use log::{debug, trace};
use scraper::{Html, Selector};
use serde::Serialize;

use crate::checks::Checks;

#[derive(Debug, thiserror::Error)]
#[error("Selector {selector:?} could not be parsed: {reason}")]
pub struct InvalidSelector {
    pub selector: String,
    pub reason: String,
}

/// A parsed document that can be queried by selector strings.
pub trait SelectorQuery {
    fn count_matches(&self, selector: &str) -> Result<usize, InvalidSelector>;
}

impl SelectorQuery for Html {
    fn count_matches(&self, selector: &str) -> Result<usize, InvalidSelector> {
        let parsed = Selector::parse(selector).map_err(|e| InvalidSelector {
            selector: selector.to_owned(),
            reason: format!("{e:?}"),
        })?;
        Ok(self.select(&parsed).count())
    }
}

/// Whether each selector matched at least one element, keyed in check order.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deref, Into)]
#[serde(transparent)]
pub struct Presence(IndexMap<String, bool>);

pub fn check_presence<D>(document: &D, checks: &Checks) -> Result<Presence, InvalidSelector>
where
    D: SelectorQuery + ?Sized,
{
    let mut ret = IndexMap::with_capacity(checks.len());
    for selector in checks.iter() {
        let count = document.count_matches(selector)?;
        trace!("{selector:?} matched {count} element(s)");
        ret.insert(selector.clone(), count > 0);
    }
    Ok(Presence(ret))
}

/// Loads the checks file, sorts it, and checks every selector against `document`.
pub fn check_html_file<D>(
    document: &D,
    checks_path: impl Into<PathBuf> + Debug,
) -> anyhow::Result<Presence>
where
    D: SelectorQuery + ?Sized,
{
    let checks = Checks::load(checks_path)?.sorted();
    let presence = check_presence(document, &checks)?;
    debug!(
        "{} of {} selectors are present",
        presence.values().filter(|&&x| x).count(),
        presence.len()
    );
    Ok(presence)
}
