/// Greedy word wrap by character count.
///
/// `width` counts `char`s, which approximates the board's pixel width for the fixed caption font;
/// it is not real text layout. Words longer than `width` are never split and take a line of their
/// own. Whitespace runs collapse to single spaces.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if line_chars > 0 && line_chars + 1 + word_chars > width {
            lines.push(std::mem::take(&mut line));
            line_chars = 0;
        }
        if line_chars > 0 {
            line.push(' ');
            line_chars += 1;
        }
        line.push_str(word);
        line_chars += word_chars;
    }
    if line_chars > 0 {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/annotate/wrap.rs"]
mod tests;
