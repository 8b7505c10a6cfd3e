//! Label filter — decides which raw attributes count as workload metadata.

use std::collections::HashMap;

/// Attribute key marking an event as a pod-sandbox linking record rather
/// than a plain label event.
pub const SANDBOX_ID_KEY: &str = "io.kubernetes.sandbox.id";

/// Noisy or high-cardinality keys that never become labels.
pub const LABEL_BLACKLIST: &[&str] = &[
    "controller-revision-hash",
    "image",
    "integration-test",
    "name",
    "pod-template-generation",
    "pod-template-hash",
];

/// Keep a key iff it contains no '.' (dotted keys are reserved runtime
/// annotations) and is not blacklisted. An empty result is valid and means
/// there is nothing new to merge.
pub fn important_labels(attrs: &HashMap<String, String>) -> HashMap<String, String> {
    attrs
        .iter()
        .filter(|(key, _)| !key.contains('.') && !LABEL_BLACKLIST.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Last colon-delimited segment of an image reference — the tag. References
/// without a colon pass through unchanged.
pub fn image_tag(reference: &str) -> &str {
    reference.rsplit_once(':').map_or(reference, |(_, tag)| tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_keeps_plain_keys() {
        let filtered = important_labels(&attrs(&[("app", "web"), ("tier", "frontend")]));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get("app").map(String::as_str), Some("web"));
        assert_eq!(filtered.get("tier").map(String::as_str), Some("frontend"));
    }

    #[test]
    fn test_drops_dotted_keys() {
        let filtered = important_labels(&attrs(&[
            ("io.kubernetes.pod.name", "web-0"),
            ("app", "web"),
        ]));
        assert_eq!(filtered.len(), 1);
        assert!(!filtered.contains_key("io.kubernetes.pod.name"));
    }

    #[test]
    fn test_drops_blacklisted_keys() {
        let filtered = important_labels(&attrs(&[
            ("controller-revision-hash", "abc123"),
            ("image", "nginx:latest"),
            ("integration-test", "true"),
            ("name", "web-0"),
            ("pod-template-generation", "3"),
            ("pod-template-hash", "def456"),
            ("app", "web"),
        ]));
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key("app"));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(important_labels(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_image_tag_strips_registry_and_repository() {
        assert_eq!(image_tag("registry.example.com/app:v2"), "v2");
        assert_eq!(image_tag("img:tag1"), "tag1");
    }

    #[test]
    fn test_image_tag_without_colon_passes_through() {
        assert_eq!(image_tag("nginx"), "nginx");
    }

    #[test]
    fn test_image_tag_uses_last_segment() {
        assert_eq!(image_tag("localhost:5000/app:v3"), "v3");
    }
}
