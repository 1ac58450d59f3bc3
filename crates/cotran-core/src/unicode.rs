//! Character-level classification for tokenization and punctuation cutoffs.
//!
//! Covers the punctuation, symbol, and whitespace ranges that occur in
//! translated text. Block-level checks are preferred over exhaustive category
//! tables; the ranges below include a handful of unassigned codepoints that
//! never appear in real tokens.

/// Unicode punctuation (P categories) over the blocks we care about: ASCII,
/// Latin-1, General Punctuation, CJK punctuation, and fullwidth forms.
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return matches!(
            c,
            '!' | '"'
                | '#'
                | '%'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | ','
                | '-'
                | '.'
                | '/'
                | ':'
                | ';'
                | '?'
                | '@'
                | '['
                | '\\'
                | ']'
                | '_'
                | '{'
                | '}'
        );
    }
    matches!(
        c,
        '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}'
    )
        // General Punctuation: dashes, curly quotes, daggers, ellipsis (U+2026)
        || ('\u{2010}'..='\u{2027}').contains(&c)
        // per mille, primes, single guillemets, hyphen bullet (U+2044 is a symbol)
        || ('\u{2030}'..='\u{2043}').contains(&c)
        || matches!(c, '\u{2045}' | '\u{2046}' | '\u{204F}' | '\u{2E2E}')
        // CJK punctuation and fullwidth forms
        || ('\u{3001}'..='\u{3003}').contains(&c)
        || ('\u{3008}'..='\u{3011}').contains(&c)
        || ('\u{3014}'..='\u{301F}').contains(&c)
        || matches!(
            c,
            '\u{30FB}'
                | '\u{FF01}'
                | '\u{FF0C}'
                | '\u{FF0E}'
                | '\u{FF1A}'
                | '\u{FF1B}'
                | '\u{FF1F}'
        )
}

/// Unicode symbols (S categories): math and currency signs, modifier marks.
/// Note `$`, `+`, `<`, `=`, `>` are symbols, not punctuation.
pub fn is_symbol(c: char) -> bool {
    if c.is_ascii() {
        return matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~');
    }
    matches!(
        c,
        '\u{00A2}'..='\u{00A6}' | '\u{00A8}' | '\u{00A9}' | '\u{00AC}' | '\u{00AE}'..='\u{00B1}'
            | '\u{00B4}' | '\u{00B8}' | '\u{00D7}' | '\u{00F7}' | '\u{2044}' | '\u{2122}'
    )
        // currency symbols block
        || ('\u{20A0}'..='\u{20BF}').contains(&c)
        // arrows and mathematical operators
        || ('\u{2190}'..='\u{22FF}').contains(&c)
}

/// Whitespace, extended with ZERO WIDTH SPACE and ZERO WIDTH NO-BREAK SPACE,
/// which word processors leave behind in translated text.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{200B}' || c == '\u{FEFF}'
}

/// Check if a token consists entirely of punctuation characters.
pub fn is_all_punctuation(token: &str) -> bool {
    token.chars().all(is_punctuation)
}
