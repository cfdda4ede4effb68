//! Deployment templates and client-side JSON export

use serde::{Deserialize, Serialize};

use crate::params::ParamList;

/// A reusable deployment template with editable parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployTemplate {
    pub name: String,
    pub description: String,
    pub params: ParamList,
    pub manifest: String,
}

impl DeployTemplate {
    /// Pretty-printed JSON for the "export as file" affordance
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deterministic download filename: lowercase slug of the name + `.json`
    pub fn export_filename(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        let mut last_dash = true;
        for ch in self.name.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        let slug = slug.trim_end_matches('-');
        if slug.is_empty() {
            "template.json".to_string()
        } else {
            format!("{slug}.json")
        }
    }
}

/// Mock template catalog
pub fn sample_templates() -> Vec<DeployTemplate> {
    vec![
        DeployTemplate {
            name: "Stateless Web Service".to_string(),
            description: "Deployment + Service + HPA for a stateless HTTP workload".to_string(),
            params: ParamList::from_pairs(&[
                ("replicas", "3"),
                ("image", "registry.local/web:1.4.2"),
                ("port", "8080"),
            ]),
            manifest: "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web\n".to_string(),
        },
        DeployTemplate {
            name: "PostgreSQL (single node)".to_string(),
            description: "StatefulSet with a persistent volume claim".to_string(),
            params: ParamList::from_pairs(&[
                ("storage", "20Gi"),
                ("version", "16.2"),
            ]),
            manifest: "apiVersion: apps/v1\nkind: StatefulSet\nmetadata:\n  name: postgres\n"
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_json_round_trips() {
        let template = sample_templates().remove(0);
        let json = template.export_json().expect("serializes");
        let parsed: DeployTemplate = serde_json::from_str(&json).expect("parses");
        assert_eq!(parsed, template);
    }

    #[test]
    fn export_filename_slugs() {
        let mut template = sample_templates().remove(1);
        assert_eq!(template.export_filename(), "postgresql-single-node.json");

        template.name = "  ".to_string();
        assert_eq!(template.export_filename(), "template.json");
    }
}
