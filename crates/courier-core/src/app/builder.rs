//! CourierBuilder - wiring a `Courier` from its topology source.

use std::path::PathBuf;

use super::Courier;
use crate::error::CourierError;
use crate::route::{RouteTopology, TopologyConfig};

#[derive(Debug, Clone)]
enum TopologySource {
    Builtin,
    Topology(RouteTopology),
    Config(TopologyConfig),
    File(PathBuf),
}

/// Builds a `Courier`.
///
/// ```ignore
/// let courier = CourierBuilder::new()
///     .topology_file("routes.toml")
///     .expect_destinations(&["Bursa", "Kocaeli"])
///     .build()?;
/// ```
///
/// `build()` fails fast when the topology cannot be loaded or lacks a
/// destination listed in `expect_destinations`.
#[derive(Debug, Clone)]
pub struct CourierBuilder {
    source: TopologySource,
    expected: Vec<String>,
}

impl CourierBuilder {
    pub fn new() -> Self {
        Self {
            source: TopologySource::Builtin,
            expected: Vec::new(),
        }
    }

    pub fn topology(mut self, topology: RouteTopology) -> Self {
        self.source = TopologySource::Topology(topology);
        self
    }

    pub fn topology_config(mut self, config: TopologyConfig) -> Self {
        self.source = TopologySource::Config(config);
        self
    }

    pub fn topology_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = TopologySource::File(path.into());
        self
    }

    pub fn expect_destinations(mut self, names: &[&str]) -> Self {
        self.expected = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn build(self) -> Result<Courier, CourierError> {
        let topology = match self.source {
            TopologySource::Builtin => RouteTopology::marmara(),
            TopologySource::Topology(topology) => topology,
            TopologySource::Config(config) => config.build(),
            TopologySource::File(path) => TopologyConfig::load(&path)?.build(),
        };

        let missing: Vec<String> = self
            .expected
            .into_iter()
            .filter(|name| !topology.exists(name))
            .collect();
        if !missing.is_empty() {
            return Err(CourierError::MissingDestinations(missing));
        }

        Ok(Courier::new(topology))
    }
}

impl Default for CourierBuilder {
    fn default() -> Self {
        Self::new()
    }
}
