//! Named JSON fixtures shared by the tab bar crates' tests.
//!
//! `fixtures/manifest.json` at the workspace root maps fixture names to paths under
//! `fixtures/`, grouped by kind. Lookups return the raw document; parsing is left to the crate
//! under test.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Manifest {
    nav_states: BTreeMap<String, String>,
    configs: BTreeMap<String, String>,
}

#[derive(Copy, Clone, Debug)]
enum Kind {
    NavState,
    Config,
}

impl Kind {
    fn entries(self) -> &'static BTreeMap<String, String> {
        match self {
            Kind::NavState => &MANIFEST.nav_states,
            Kind::Config => &MANIFEST.configs,
        }
    }

    fn keys(self) -> Vec<String> {
        self.entries().keys().cloned().collect()
    }

    fn read(self, name: &str) -> Result<String> {
        let rel = self
            .entries()
            .get(name)
            .ok_or_else(|| anyhow!("unknown {self:?} fixture '{name}'"))?;
        let path = fixtures_root().join(rel);
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read {self:?} fixture at {}", path.display()))
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

/// Host navigation snapshots (routes, index, descriptors, overrides), in sorted name order.
pub mod nav_states {
    use super::{Kind, Result};

    pub fn keys() -> Vec<String> {
        Kind::NavState.keys()
    }

    pub fn json(name: &str) -> Result<String> {
        Kind::NavState.read(name)
    }
}

/// Tab bar tuning documents.
pub mod configs {
    use super::{Kind, Result};

    pub fn keys() -> Vec<String> {
        Kind::Config.keys()
    }

    pub fn json(name: &str) -> Result<String> {
        Kind::Config.read(name)
    }
}
