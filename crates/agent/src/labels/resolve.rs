//! Query path — log filename to container id to label set.

use super::store::{LabelSet, LabelStore};

/// Shipped log files are named `<prefix>-<container-id>.log`.
const LOG_EXTENSION: &str = ".log";

/// Extract the container id embedded in a log filename: the text after the
/// last '-' and before the `.log` extension.
pub fn container_id_from_filename(filename: &str) -> Option<&str> {
    let stem = filename.strip_suffix(LOG_EXTENSION)?;
    let (_, id) = stem.rsplit_once('-')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}

/// Resolve the label set for a log file. A miss is an absent value, not an
/// error — the container may be unknown or its group unlabeled.
pub fn labels_for_file(store: &LabelStore, filename: &str) -> Option<LabelSet> {
    let id = container_id_from_filename(filename)?;
    store.resolve(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::store::GroupId;
    use std::collections::HashMap;

    #[test]
    fn test_extracts_id_after_last_dash() {
        assert_eq!(
            container_id_from_filename("web-frontend-abc123.log"),
            Some("abc123")
        );
    }

    #[test]
    fn test_rejects_filename_without_extension() {
        assert_eq!(container_id_from_filename("web-abc123.txt"), None);
        assert_eq!(container_id_from_filename("web-abc123"), None);
    }

    #[test]
    fn test_rejects_filename_without_dash() {
        assert_eq!(container_id_from_filename("abc123.log"), None);
    }

    #[test]
    fn test_rejects_empty_id() {
        assert_eq!(container_id_from_filename("web-.log"), None);
    }

    #[test]
    fn test_labels_for_file_round_trip() {
        let store = LabelStore::new();
        let mut set = HashMap::new();
        set.insert("app".to_string(), "web".to_string());
        store.merge(GroupId("abc123".to_string()), set.clone());
        assert_eq!(labels_for_file(&store, "node-abc123.log"), Some(set));
    }

    #[test]
    fn test_labels_for_file_miss_is_absent() {
        let store = LabelStore::new();
        assert_eq!(labels_for_file(&store, "node-unknown.log"), None);
        assert_eq!(labels_for_file(&store, "garbage"), None);
    }
}
