use dioxus::prelude::*;
use voira_core::Section;

/// Smooth-scroll the page to `section`. Does nothing when the element is not
/// in the document.
pub fn scroll_to(section: Section) {
    let script = scroll_script(section.anchor());
    tracing::debug!(%section, "scrolling to section");
    let _ = document::eval(&script);
}

fn scroll_script(id: &str) -> String {
    // JSON string literal doubles as a quoted, escaped JS string
    let id = serde_json::Value::from(id).to_string();
    format!("document.getElementById({id})?.scrollIntoView({{ behavior: 'smooth' }});")
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_scroll_script() {
        assert_eq!(
            scroll_script("how-it-works"),
            "document.getElementById(\"how-it-works\")?.scrollIntoView({ behavior: 'smooth' });"
        );
    }

    #[test]
    fn test_scroll_script_escapes_id() {
        let script = scroll_script("a\"b");
        assert!(script.contains(r#"getElementById("a\"b")"#));
    }
}
