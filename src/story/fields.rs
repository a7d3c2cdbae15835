use regex::Regex;

/// Unchecked task marker as written in story checklists
pub const UNCHECKED_TASK: &str = "- [ ]";

/// Checked task marker
pub const CHECKED_TASK: &str = "- [x]";

/// Placeholder the story template leaves for the implementing agent model
pub const MODEL_PLACEHOLDER: &str = "{{agent_model_name_version}}";

/// Parse the Status field value from story content
pub fn parse_status(content: &str) -> Option<String> {
    let re = Regex::new(r"^Status: (.+)$").unwrap();
    for line in content.lines() {
        if let Some(caps) = re.captures(line) {
            return Some(caps[1].to_string());
        }
    }
    None
}

/// Count unchecked task markers anywhere in the content
pub fn count_unchecked(content: &str) -> usize {
    content.matches(UNCHECKED_TASK).count()
}

/// Count checked task markers anywhere in the content
pub fn count_checked(content: &str) -> usize {
    content.matches(CHECKED_TASK).count()
}

/// Whether the agent-model placeholder is still unresolved
pub fn has_model_placeholder(content: &str) -> bool {
    content.contains(MODEL_PLACEHOLDER)
}
