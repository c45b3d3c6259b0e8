//! Common test utilities for integration tests.
//!
//! This module provides fixtures shared by the shelfpath integration
//! tests: configuration files on disk and a catalog built from them.

use std::path::PathBuf;

use shelfpath::config::ConfigLoader;
use shelfpath::{Catalog, Collection, Config};

/// Path to a file under `tests/fixtures/configs`.
#[allow(dead_code)]
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("configs")
        .join(relative)
}

/// The sample library configuration.
#[allow(dead_code)]
pub fn library_config() -> Config {
    ConfigLoader::load_file(&fixture_path("library.yaml")).unwrap()
}

/// A catalog built from the sample library configuration.
#[allow(dead_code)]
pub fn library_catalog() -> Catalog {
    Catalog::from_config(&library_config())
}

/// A collection that records every narrowing applied to it, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(dead_code)]
pub struct Trail(pub Vec<String>);

impl Trail {
    fn with(&self, step: String) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }
}

impl Collection for Trail {
    fn narrow_by_level(&self, level: &str) -> Self {
        self.with(format!("level={level}"))
    }

    fn narrow_by_topic(&self, topic: &str) -> Self {
        self.with(format!("topic={topic}"))
    }

    fn narrow_by_search(&self, search: &str) -> Self {
        self.with(format!("search={search}"))
    }
}
