//! Agent catalog loaded from a YAML file.
//!
//! Each agent carries the instructions and generation parameters used when
//! producing recommendations. A built-in catalog stands in when the file is
//! missing or malformed so the service always starts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Default catalog file name, relative to the working directory.
pub const DEFAULT_AGENTS_PATH: &str = "agents.yaml";

/// The agent used when a request does not name one.
pub const DEFAULT_AGENT: &str = "hackathon_recommender";

/// One configured agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub parameters: AgentParameters,
}

/// Generation parameters for an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentParameters {
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for AgentParameters {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1500
}

/// On-disk catalog shape; unknown top-level keys are tolerated.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    agents: BTreeMap<String, AgentDefinition>,
}

/// Catalog of available agents, keyed by identifier.
#[derive(Debug, Clone)]
pub struct AgentCatalog {
    agents: BTreeMap<String, AgentDefinition>,
}

impl AgentCatalog {
    /// Loads the catalog from a YAML file, falling back to the built-in
    /// catalog when the file is absent or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_yaml::from_str::<CatalogFile>(&raw) {
                Ok(file) if !file.agents.is_empty() => {
                    info!(
                        path = %path.display(),
                        agents = file.agents.len(),
                        "Loaded agent catalog"
                    );
                    Self {
                        agents: file.agents,
                    }
                }
                Ok(_) => {
                    warn!(path = %path.display(), "Agent catalog is empty, using built-in");
                    Self::built_in()
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse agent catalog, using built-in");
                    Self::built_in()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read agent catalog, using built-in");
                Self::built_in()
            }
        }
    }

    /// The built-in catalog with the default recommender agent.
    pub fn built_in() -> Self {
        let mut agents = BTreeMap::new();
        agents.insert(
            DEFAULT_AGENT.to_string(),
            AgentDefinition {
                name: "Hackathon Project Recommender".to_string(),
                description: "Analyzes GitHub profiles to recommend personalized hackathon projects"
                    .to_string(),
                instructions: String::new(),
                parameters: AgentParameters::default(),
            },
        );
        Self { agents }
    }

    /// Looks up an agent by identifier.
    pub fn get(&self, id: &str) -> Option<&AgentDefinition> {
        self.agents.get(id)
    }

    /// Agent identifiers in stable order.
    pub fn names(&self) -> Vec<String> {
        self.agents.keys().cloned().collect()
    }
}
