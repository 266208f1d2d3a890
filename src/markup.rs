//! HTML rendering for the transcript export.
//!
//! Every interpolated field goes through [`escape_html`], chat content and
//! participant labels alike. Nothing in this module accepts pre-built markup.

use crate::transcript::Transcript;

/// Escape the five HTML metacharacters: `& < > " '`.
pub fn escape_html(unsafe_text: &str) -> String {
    let mut out = String::with_capacity(unsafe_text.len());
    for ch in unsafe_text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One transcript line as markup: `<div><strong>user</strong>: message</div>`.
pub fn line_html(username: &str, message: &str) -> String {
    format!(
        "<div><strong>{}</strong>: {}</div>",
        escape_html(username),
        escape_html(message)
    )
}

/// Render the whole transcript as a standalone HTML document.
pub fn transcript_html(transcript: &Transcript) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Chat transcript</title></head>\n<body>\n<div class=\"chat-log\">\n",
    );
    for line in transcript.lines() {
        let speaker = if line.system { "System" } else { line.username.as_str() };
        out.push_str(&line_html(speaker, &line.message));
        out.push('\n');
    }
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_metacharacters() {
        assert_eq!(escape_html("<b>&'\""), "&lt;b&gt;&amp;&#039;&quot;");
    }

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(escape_html("hello world"), "hello world");
    }

    #[test]
    fn line_escapes_both_fields() {
        let html = line_html("<script>", "a & b");
        assert_eq!(html, "<div><strong>&lt;script&gt;</strong>: a &amp; b</div>");
    }

    #[test]
    fn transcript_document_contains_lines() {
        let mut t = Transcript::new();
        t.push_system("alice has joined the chat.".into(), 0.0);
        t.push("bob".into(), "hi <all>".into(), 1.0);
        let html = transcript_html(&t);
        assert!(html.contains("<strong>System</strong>: alice has joined the chat."));
        assert!(html.contains("<strong>bob</strong>: hi &lt;all&gt;"));
    }
}
