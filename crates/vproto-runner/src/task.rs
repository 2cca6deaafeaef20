//! Task text composition for pipeline requests.

/// Standing instruction for image-grounded analysis.
pub const IMAGE_ANALYSIS_TASK: &str =
    "Analyze object/parts using the images; use JSON files as structure; do NOT guess measurements.";

/// Build the prototype-generation prompt for one batch.
pub fn build_prototype_prompt(description: &str, object_names: &[String]) -> String {
    let mut prompt = format!(
        "Generate a complete functional specification for the described virtual prototype.\n\nDescription: {description}"
    );
    if !object_names.is_empty() {
        prompt.push_str("\n\nObjects (types inferred from images and structure):");
        for name in object_names {
            prompt.push_str("\n- ");
            prompt.push_str(name);
        }
    }
    prompt
}

/// Compose the full task text: analysis instruction plus prompt.
pub fn compose_task_text(description: &str, object_names: &[String]) -> String {
    format!(
        "{IMAGE_ANALYSIS_TASK}\n\n{}",
        build_prototype_prompt(description, object_names)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_text_leads_with_analysis_instruction() {
        let text = compose_task_text("a toaster", &["Toaster".to_string()]);
        assert!(text.starts_with(IMAGE_ANALYSIS_TASK));
        assert!(text.contains("Description: a toaster"));
        assert!(text.contains("- Toaster"));
    }

    #[test]
    fn test_prompt_without_objects_omits_list() {
        let prompt = build_prototype_prompt("a lamp", &[]);
        assert!(!prompt.contains("Objects"));
    }
}
