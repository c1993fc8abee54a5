#![allow(dead_code)]

//! Skill catalog — the skills vocabulary, alias table, and role→required-skills
//! table, loaded as versioned configuration data at startup.
//!
//! The tables live in `config/catalog.json` (compiled in as the default,
//! overridable via `CATALOG_PATH`), never as literals scattered through the
//! scoring code.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The default catalog shipped with the binary.
const DEFAULT_CATALOG_JSON: &str = include_str!("../config/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: u32,
    skills: Vec<String>,
    aliases: HashMap<String, String>,
    roles: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleRequirements {
    pub name: String,
    pub required_skills: Vec<String>,
}

/// Immutable skill reference data shared across all requests.
///
/// All lookups are case-insensitive; canonical casing is whatever the
/// catalog file declares.
#[derive(Debug)]
pub struct SkillCatalog {
    version: u32,
    /// Canonical skill names in file order.
    skills: Vec<String>,
    /// lowercase skill/alias → canonical skill name.
    canonical_index: HashMap<String, String>,
    /// (lowercase term, canonical name) pairs in a stable scan order:
    /// skills in file order, then aliases sorted by term.
    terms: Vec<(String, String)>,
    roles: Vec<RoleRequirements>,
    /// lowercase role name → index into `roles`.
    role_index: HashMap<String, usize>,
}

impl SkillCatalog {
    /// Loads the compiled-in default catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_CATALOG_JSON).context("Built-in catalog is malformed")
    }

    /// Loads a catalog override from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Malformed catalog at {}", path.display()))
    }

    /// Parses a catalog from raw JSON. Exposed for callers that manage
    /// their own table data (and for tests with purpose-built tables).
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Self::from_json(raw)
    }

    fn from_json(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;

        let mut canonical_index = HashMap::new();
        let mut terms = Vec::new();
        for skill in &file.skills {
            canonical_index.insert(skill.to_lowercase(), skill.clone());
            terms.push((skill.to_lowercase(), skill.clone()));
        }
        let mut aliases: Vec<(&String, &String)> = file.aliases.iter().collect();
        aliases.sort();
        for (alias, target) in aliases {
            // Alias targets must themselves be catalog skills.
            let canonical = canonical_index
                .get(&target.to_lowercase())
                .cloned()
                .with_context(|| format!("Alias '{alias}' targets unknown skill '{target}'"))?;
            canonical_index.insert(alias.to_lowercase(), canonical.clone());
            terms.push((alias.to_lowercase(), canonical));
        }

        let mut roles = Vec::new();
        let mut role_index = HashMap::new();
        let mut role_names: Vec<&String> = file.roles.keys().collect();
        role_names.sort();
        for name in role_names {
            role_index.insert(name.to_lowercase(), roles.len());
            roles.push(RoleRequirements {
                name: name.clone(),
                required_skills: file.roles[name].clone(),
            });
        }

        info!(
            "Skill catalog v{} loaded: {} skills, {} roles",
            file.version,
            file.skills.len(),
            roles.len()
        );

        Ok(Self {
            version: file.version,
            skills: file.skills,
            canonical_index,
            terms,
            roles,
            role_index,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Canonical skill names in catalog order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// All scannable terms (skills and aliases) as (lowercase term,
    /// canonical name), in a stable order for deterministic extraction.
    pub fn terms(&self) -> &[(String, String)] {
        &self.terms
    }

    /// Resolves a raw skill string (possibly an alias, any casing) to its
    /// canonical catalog name. `None` when the catalog does not know it.
    pub fn canonicalize(&self, raw: &str) -> Option<&str> {
        self.canonical_index
            .get(raw.trim().to_lowercase().as_str())
            .map(String::as_str)
    }

    /// Like `canonicalize`, but falls back to the trimmed input for skills
    /// outside the catalog — unknown skills still participate in matching
    /// under their own name.
    pub fn canonical_or_verbatim(&self, raw: &str) -> String {
        self.canonicalize(raw)
            .map(str::to_string)
            .unwrap_or_else(|| raw.trim().to_string())
    }

    /// Resolves a target role: case-insensitive exact match first, then a
    /// substring fallback in either direction ("data scientist intern" still
    /// finds "Data Scientist"). `None` when nothing plausible matches.
    pub fn resolve_role(&self, target: &str) -> Option<&RoleRequirements> {
        let needle = target.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Some(&idx) = self.role_index.get(&needle) {
            return Some(&self.roles[idx]);
        }
        self.roles.iter().find(|r| {
            let name = r.name.to_lowercase();
            name.contains(&needle) || needle.contains(&name)
        })
    }

    pub fn roles(&self) -> &[RoleRequirements] {
        &self.roles
    }
}
