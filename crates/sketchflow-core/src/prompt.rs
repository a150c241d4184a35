//! Prompt Builder.
//!
//! Assembles the fixed diagram-assistant instruction and the user's free
//! text into a [`ModelPrompt`]. Pure; no I/O.

use sketchflow_types::llm::ModelPrompt;

/// The action-schema contract given to the model on every call.
///
/// Describes the single-`actions`-array reply shape and anchors it with a
/// concrete example in valid JSON.
pub const SYSTEM_INSTRUCTION: &str = "You are a diagram assistant. \
When the user describes a system architecture diagram, output only a JSON object \
with a single 'actions' array. Each action is either \
{type: 'add_node', label: string, componentType: string} or \
{type: 'add_edge', source: string, target: string}. \
Add a node before any edge that references it. Use only valid JSON, with no prose \
and no code fences. Example: \
{\"actions\":[{\"type\":\"add_node\",\"label\":\"A\",\"componentType\":\"Kafka\"},\
{\"type\":\"add_edge\",\"source\":\"A\",\"target\":\"B\"}]}";

/// Build the prompt for one user message.
pub fn build(message: &str) -> ModelPrompt {
    ModelPrompt {
        system_instruction: SYSTEM_INSTRUCTION,
        user_content: escape_json_string(message),
    }
}

/// Escape `raw` so it can sit between the quotes of a JSON string literal.
///
/// Quotes, backslashes and control characters are escaped; everything else
/// passes through.
pub fn escape_json_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchflow_types::diagram::ActionList;

    fn embed(content: &str) -> String {
        format!("{{\"role\":\"user\",\"content\":\"{content}\"}}")
    }

    #[test]
    fn system_instruction_is_constant() {
        let a = build("draw a queue");
        let b = build("something else entirely");
        assert_eq!(a.system_instruction, b.system_instruction);
        assert!(a.system_instruction.starts_with("You are a diagram assistant."));
    }

    #[test]
    fn system_instruction_example_is_a_valid_action_list() {
        let example = SYSTEM_INSTRUCTION
            .split("Example: ")
            .nth(1)
            .expect("instruction carries an example");
        let list: ActionList = serde_json::from_str(example).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.actions[0].kind(), "add_node");
        assert_eq!(list.actions[1].kind(), "add_edge");
    }

    #[test]
    fn plain_message_is_unchanged() {
        let prompt = build("draw a queue between A and B");
        assert_eq!(prompt.user_content, "draw a queue between A and B");
    }

    #[test]
    fn quotes_are_escaped() {
        let prompt = build(r#"add a node called "Orders""#);
        assert_eq!(prompt.user_content, r#"add a node called \"Orders\""#);
    }

    #[test]
    fn escaped_content_stays_valid_inside_a_json_string() {
        let messages = [
            r#"say "hi""#,
            r#"trailing backslash \"#,
            "multi\nline\twith\rcontrols\u{1}",
            r#"{"actions":[]}"#,
            "ünïcødé → ok",
        ];
        for message in messages {
            let prompt = build(message);
            let parsed: serde_json::Value = serde_json::from_str(&embed(&prompt.user_content))
                .unwrap_or_else(|e| panic!("{message:?} broke the envelope: {e}"));
            assert_eq!(parsed["content"], message);
        }
    }
}
