//! Whitespace normalization for extracted text.

/// Normalize raw extracted text.
///
/// Trims each line, drops lines that become empty, rejoins with single
/// newlines, and collapses runs of interior spaces to one space. Tabs and
/// other whitespace are left alone; only the space character is collapsed.
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let mut lines = Vec::new();
    for line in raw.lines() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(collapse_spaces(trimmed));
        }
    }
    lines.join("\n")
}

fn collapse_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev_space = false;
    for ch in line.chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out
}
