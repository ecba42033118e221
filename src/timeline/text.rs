use std::sync::OnceLock;

use regex::Regex;

fn link_pattern() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"http\S+").expect("static regex"))
}

/// Text handed to narration: links and `#` markers removed.
///
/// The board keeps the untouched text; only speech sees this form.
pub fn speech_text(text: &str) -> String {
    link_pattern().replace_all(text, "").replace('#', "")
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/text.rs"]
mod tests;
