//! TOML description of a route topology.
//!
//! ```toml
//! [root]
//! name = "Istanbul"
//! code = "IST01"
//!
//! [[root.children]]
//! name = "Bursa"
//! code = "BRS01"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::RouteTopology;
use crate::domain::NodeId;
use crate::error::CourierError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyConfig {
    pub root: NodeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeConfig>,
}

impl TopologyConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, CourierError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, CourierError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Build the arena tree. Children keep their file order.
    pub fn build(&self) -> RouteTopology {
        let mut topology = RouteTopology::new(&self.root.name, &self.root.code);
        let mut pending: Vec<(NodeId, &NodeConfig)> = vec![(topology.root(), &self.root)];

        while let Some((parent, config)) = pending.pop() {
            for child in &config.children {
                let id = topology.push_child(parent, &child.name, &child.code);
                pending.push((id, child));
            }
        }
        topology
    }
}

impl From<&TopologyConfig> for RouteTopology {
    fn from(config: &TopologyConfig) -> Self {
        config.build()
    }
}
