//! Prompt template file loading.
//!
//! Templates live in a YAML file with named Handlebars entries. The
//! built-in set is compiled into the crate.

use std::collections::HashMap;

use adcopy_core::AdcopyError;
use serde::Deserialize;

const BUILTIN_PROMPTS: &str = include_str!("../templates/prompts.yaml");

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, PromptTemplate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptTemplate {
    pub description: String,
    pub template: String,
}

impl TemplatesFile {
    pub fn from_yaml(yaml: &str) -> Result<Self, AdcopyError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| AdcopyError::Template(format!("invalid templates file: {}", e)))
    }

    /// The prompt set shipped with the crate
    pub fn builtin() -> Result<Self, AdcopyError> {
        Self::from_yaml(BUILTIN_PROMPTS)
    }

    pub fn get(&self, name: &str) -> Option<&PromptTemplate> {
        self.templates.get(name)
    }

    /// Template names, sorted
    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
