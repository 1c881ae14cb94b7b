// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans raw per-page PDF text before analysis.
//
// PDF extraction yields running headers, page numbers and
// broken fragment lines alongside the body text. A line is
// kept only when it looks like prose:
//   - more than 50 characters once trimmed
//   - not made up entirely of decimal digits
//
// Cleaning steps (applied in order):
//   1. Replace tabs, Unicode space variants and BOMs with a
//      plain space
//   2. Turn \r and the other line separators (form feed,
//      vertical tab, U+0085, U+2028, U+2029, ...) into \n
//   3. Drop lines failing the prose test
//   4. Join surviving lines per page, one page after another
//   5. Trim the whole document
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

/// Minimum trimmed length (in characters) a line must exceed
pub const MIN_LINE_CHARS: usize = 50;

pub struct Normalizer {
    min_line_chars: usize,
}

impl Normalizer {
    pub fn new() -> Self {
        Self { min_line_chars: MIN_LINE_CHARS }
    }

    /// Clean every page and join them into one document string.
    pub fn clean_pages<S: AsRef<str>>(&self, pages: &[S]) -> String {
        let mut text = String::new();

        for page in pages {
            let page = normalise_chars(page.as_ref());
            let kept: Vec<&str> = page
                .lines()
                .filter(|line| self.keep_line(line))
                .collect();

            // Each page ends with a newline, so a page with no
            // surviving lines leaves a blank line behind.
            text.push_str(&kept.join("\n"));
            text.push('\n');
        }

        text.trim().to_string()
    }

    fn keep_line(&self, line: &str) -> bool {
        let stripped = line.trim();
        let numeric  = !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit());
        stripped.chars().count() > self.min_line_chars && !numeric
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map problematic Unicode characters to their plain equivalents.
fn normalise_chars(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
            '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}'..='\u{1E}'
            | '\u{85}' | '\u{2028}' | '\u{2029}' => '\n',
            c if c.is_control() && c != '\n' => ' ',
            c => c,
        })
        .collect()
}
