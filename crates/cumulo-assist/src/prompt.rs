//! Task-specific prompt templates and response post-processing

use crate::types::ChatRequest;

const LOG_ANALYSIS_SYSTEM: &str = "You are an SRE assistant for a Kubernetes-based container \
platform. Given a log excerpt, explain the most likely root cause in two or three short \
sentences, then list concrete remediation steps as bullets. Be specific; do not speculate \
beyond the evidence in the log.";

const MANIFEST_SYSTEM: &str = "You are a Kubernetes manifest generator. Given a deployment \
description, respond with a single valid YAML document (Deployment plus Service where \
appropriate). Respond with YAML only — no prose, no markdown fences.";

const OPTIMIZATION_SYSTEM: &str = "You are a Kafka capacity and tuning advisor. Given a JSON \
metrics snapshot for one instance, list the three most impactful configuration or capacity \
changes as short bullets, each with the expected effect.";

/// Prompt for root-cause analysis of a captured log excerpt
pub fn log_analysis(log_excerpt: &str) -> ChatRequest {
    ChatRequest::with_system(
        LOG_ANALYSIS_SYSTEM,
        format!("Log excerpt:\n```\n{log_excerpt}\n```"),
    )
    .temperature(0.2)
    .max_tokens(512)
}

/// Prompt for YAML manifest generation from a natural-language description
pub fn manifest_generation(description: &str) -> ChatRequest {
    ChatRequest::with_system(MANIFEST_SYSTEM, format!("Deployment description: {description}"))
        .temperature(0.1)
        .max_tokens(1024)
}

/// Prompt for tuning suggestions from a serialized metrics snapshot
pub fn optimization(metrics_json: &str) -> ChatRequest {
    ChatRequest::with_system(OPTIMIZATION_SYSTEM, format!("Metrics:\n{metrics_json}"))
        .temperature(0.3)
        .max_tokens(512)
}

/// Strip a single leading/trailing markdown code fence (with optional
/// language tag) from a model response. Models add fences despite being told
/// not to; the console renders raw YAML.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    // Drop the language tag line (e.g. "yaml").
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => return trimmed.to_string(),
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn prompts_embed_the_input() {
        let req = log_analysis("connection refused");
        assert_eq!(req.messages[0].role, Role::System);
        assert!(req.messages[1].content.contains("connection refused"));

        let req = manifest_generation("redis with 2 replicas");
        assert!(req.messages[1].content.contains("redis with 2 replicas"));

        let req = optimization("{\"disk_used_pct\":78}");
        assert!(req.messages[1].content.contains("disk_used_pct"));
    }

    #[test]
    fn strips_fence_with_language_tag() {
        let raw = "```yaml\napiVersion: v1\nkind: Service\n```";
        assert_eq!(strip_code_fences(raw), "apiVersion: v1\nkind: Service");
    }

    #[test]
    fn strips_bare_fence() {
        let raw = "```\nkind: Pod\n```\n";
        assert_eq!(strip_code_fences(raw), "kind: Pod");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("kind: Pod\n"), "kind: Pod");
    }

    #[test]
    fn tolerates_missing_closing_fence() {
        let raw = "```yaml\nkind: Pod";
        assert_eq!(strip_code_fences(raw), "kind: Pod");
    }
}
