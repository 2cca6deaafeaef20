//! Manifest reconciliation against a requested object list.

use std::collections::HashMap;

use vproto_models::ManifestObject;

/// Filter manifest objects by requested names, reporting missing ones.
///
/// An empty request selects every manifest object unchanged. Otherwise
/// the selection preserves request order (not manifest order), and
/// names with no manifest match are returned in request order.
pub fn select_manifest_objects<'a>(
    manifest_objects: &'a [ManifestObject],
    requested_names: &[String],
) -> (Vec<&'a ManifestObject>, Vec<String>) {
    if requested_names.is_empty() {
        return (manifest_objects.iter().collect(), Vec::new());
    }

    let by_name: HashMap<&str, &ManifestObject> = manifest_objects
        .iter()
        .map(|obj| (obj.object_name.as_str(), obj))
        .collect();

    let mut selected = Vec::new();
    let mut missing = Vec::new();
    for name in requested_names {
        match by_name.get(name.as_str()) {
            Some(obj) => selected.push(*obj),
            None => missing.push(name.clone()),
        }
    }
    (selected, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(name: &str) -> ManifestObject {
        ManifestObject {
            object_name: name.to_string(),
            stable_id: String::new(),
            views: Some(vec![]),
        }
    }

    #[test]
    fn test_empty_request_selects_everything() {
        let objects = vec![object("A"), object("B")];
        let (selected, missing) = select_manifest_objects(&objects, &[]);
        assert_eq!(selected.len(), 2);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_selection_preserves_request_order() {
        let objects = vec![object("A"), object("B"), object("C")];
        let requested = vec!["C".to_string(), "A".to_string()];
        let (selected, missing) = select_manifest_objects(&objects, &requested);
        assert_eq!(
            selected.iter().map(|o| o.object_name.as_str()).collect::<Vec<_>>(),
            vec!["C", "A"]
        );
        assert!(missing.is_empty());
    }

    #[test]
    fn test_unmatched_names_reported_in_request_order() {
        let objects = vec![object("A")];
        let requested = vec!["X".to_string(), "A".to_string(), "Y".to_string()];
        let (selected, missing) = select_manifest_objects(&objects, &requested);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].object_name, "A");
        assert_eq!(missing, vec!["X".to_string(), "Y".to_string()]);
    }
}
