// Chat template for the hosted text-generation model.

pub const USER_MARKER: &str = "<|user|>\n";
pub const ASSISTANT_MARKER: &str = "<|assistant|>\n";

/// Wraps a user question in the chat template, leaving the assistant turn
/// open for the model to continue.
pub fn build_prompt(user_text: &str) -> String {
    format!("{USER_MARKER}{user_text}\n{ASSISTANT_MARKER}")
}

/// Returns the text after the last assistant marker, trimmed. The hosted
/// model echoes the prompt, so everything before the marker is discarded.
pub fn extract_reply(generated: &str) -> &str {
    generated
        .rsplit_once(ASSISTANT_MARKER)
        .map(|(_, reply)| reply)
        .unwrap_or(generated)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt() {
        assert_eq!(
            build_prompt("What does an INTJ do?"),
            "<|user|>\nWhat does an INTJ do?\n<|assistant|>\n"
        );
    }

    #[test]
    fn test_extract_reply_after_marker() {
        assert_eq!(
            extract_reply("<|user|>\nHi\n<|assistant|>\nHello there"),
            "Hello there"
        );
    }

    #[test]
    fn test_extract_reply_uses_last_marker() {
        let text = "<|user|>\nQ\n<|assistant|>\nfirst\n<|assistant|>\n  second  \n";
        assert_eq!(extract_reply(text), "second");
    }

    #[test]
    fn test_extract_reply_without_marker_returns_whole_text() {
        assert_eq!(extract_reply("  just text \n"), "just text");
    }
}
