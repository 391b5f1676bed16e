//! Key-equivalent decoding
//!
//! Command bundles store a shortcut as a short string: zero or more one-character modifier
//! flags followed by the primary key, e.g. `"^~@a"` for Control-Option-Command-A. This module
//! turns that raw string into the glyphs shown in menus (`⌃⌥⌘A`).
//!
//! ## Ordering
//!
//! The primary key is always last. Modifiers keep their left-to-right storage order. An
//! uppercase letter as primary key implies Shift, and the inferred `⇧` is placed first.
//!
//! Decoding never fails: characters that are not known modifiers become `¿`.

use std::fmt;

/// A fixed display symbol with a known meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Option,
    Control,
    Command,
    Shift,
    Return,
    Tab,
    Escape,
    Space,
    /// Placeholder for a modifier flag we do not recognize
    Unknown,
}

impl Glyph {
    /// Glyphs listed in the optional legend, in display order.
    pub const LEGEND: &'static [Glyph] = &[
        Glyph::Control,
        Glyph::Option,
        Glyph::Shift,
        Glyph::Command,
        Glyph::Return,
        Glyph::Tab,
        Glyph::Escape,
        Glyph::Space,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::Option => "⌥",
            Glyph::Control => "⌃",
            Glyph::Command => "⌘",
            Glyph::Shift => "⇧",
            Glyph::Return => "↩",
            Glyph::Tab => "⇥",
            Glyph::Escape => "⎋",
            Glyph::Space => "␣",
            Glyph::Unknown => "¿",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Glyph::Option => "Option",
            Glyph::Control => "Control",
            Glyph::Command => "Command",
            Glyph::Shift => "Shift",
            Glyph::Return => "Return",
            Glyph::Tab => "Tab",
            Glyph::Escape => "Escape",
            Glyph::Space => "Space",
            Glyph::Unknown => "Unknown",
        }
    }

    /// Look up the glyph for a single stored character.
    ///
    /// Shift has no stored code of its own (it is inferred from the primary key), so it is
    /// never returned here.
    pub fn from_code(code: char) -> Option<Glyph> {
        match code {
            '~' => Some(Glyph::Option),
            '^' => Some(Glyph::Control),
            '@' => Some(Glyph::Command),
            '\n' => Some(Glyph::Return),
            '\t' => Some(Glyph::Tab),
            '\u{1b}' => Some(Glyph::Escape),
            ' ' => Some(Glyph::Space),
            _ => None,
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded shortcut, modifiers first and primary key last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphSequence {
    glyphs: Vec<String>,
}

impl GlyphSequence {
    /// Glyphs in display order.
    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// The primary key glyph, `None` only for a sequence decoded from an empty string.
    pub fn primary_key(&self) -> Option<&str> {
        self.glyphs.last().map(String::as_str)
    }

    /// Number of glyphs, counting an inferred Shift.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True only for a sequence decoded from an empty string.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// True when the joined glyphs would render as nothing visible.
    pub fn is_blank(&self) -> bool {
        self.glyphs.iter().all(|g| g.trim().is_empty())
    }

    /// Take the glyphs out, in display order.
    pub fn into_inner(self) -> Vec<String> {
        self.glyphs
    }
}

impl fmt::Display for GlyphSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            f.write_str(glyph)?;
        }
        Ok(())
    }
}

/// Decode a raw key-equivalent into display glyphs.
///
/// Callers are expected to skip empty combos; an empty input yields an empty sequence.
pub fn decode(raw: &str) -> GlyphSequence {
    let mut codes: Vec<char> = raw.chars().collect();
    let Some(key) = codes.pop() else {
        return GlyphSequence::default();
    };

    // Built back to front, reversed at the end
    let mut printable = Vec::with_capacity(codes.len() + 2);
    let shifted = match Glyph::from_code(key) {
        Some(glyph) => {
            printable.push(glyph.as_str().to_string());
            false
        }
        None => {
            printable.push(key.to_uppercase().collect::<String>());
            key.is_ascii_uppercase()
        }
    };

    while let Some(code) = codes.pop() {
        let glyph = Glyph::from_code(code).unwrap_or(Glyph::Unknown);
        printable.push(glyph.as_str().to_string());
    }

    if shifted {
        printable.push(Glyph::Shift.as_str().to_string());
    }

    printable.reverse();
    GlyphSequence { glyphs: printable }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(raw: &str) -> Vec<String> {
        decode(raw).into_inner()
    }

    // ========================================
    // Primary key
    // ========================================

    #[test]
    fn test_lowercase_key_is_uppercased() {
        assert_eq!(decoded("a"), vec!["A"]);
    }

    #[test]
    fn test_uppercase_key_implies_shift() {
        assert_eq!(decoded("A"), vec!["⇧", "A"]);
    }

    #[test]
    fn test_digit_key_has_no_shift() {
        assert_eq!(decoded("@1"), vec!["⌘", "1"]);
    }

    #[test]
    fn test_punctuation_key_passes_through() {
        assert_eq!(decoded("@/"), vec!["⌘", "/"]);
    }

    #[test]
    fn test_non_ascii_uppercase_key_has_no_shift() {
        assert_eq!(decoded("@É"), vec!["⌘", "É"]);
    }

    #[test]
    fn test_non_ascii_key_is_uppercased() {
        assert_eq!(decoded("@é"), vec!["⌘", "É"]);
    }

    #[test]
    fn test_single_modifier_code_as_key() {
        // A lone table character is the primary key itself, never shifted
        for (code, glyph) in [
            ("~", "⌥"),
            ("^", "⌃"),
            ("@", "⌘"),
            ("\n", "↩"),
            ("\t", "⇥"),
            ("\u{1b}", "⎋"),
            (" ", "␣"),
        ] {
            assert_eq!(decoded(code), vec![glyph], "code {:?}", code);
        }
    }

    // ========================================
    // Modifiers
    // ========================================

    #[test]
    fn test_command_modifier() {
        assert_eq!(decoded("@a"), vec!["⌘", "A"]);
    }

    #[test]
    fn test_modifier_order_preserved() {
        assert_eq!(decoded("^~@a"), vec!["⌃", "⌥", "⌘", "A"]);
        assert_eq!(decoded("@~^a"), vec!["⌘", "⌥", "⌃", "A"]);
    }

    #[test]
    fn test_shift_goes_first() {
        assert_eq!(decoded("@A"), vec!["⇧", "⌘", "A"]);
        assert_eq!(decoded("^~@Z"), vec!["⇧", "⌃", "⌥", "⌘", "Z"]);
    }

    #[test]
    fn test_unknown_modifier_placeholder() {
        assert_eq!(decoded("\u{1}a"), vec!["¿", "A"]);
        assert_eq!(decoded("$@a"), vec!["¿", "⌘", "A"]);
    }

    #[test]
    fn test_special_primary_keys_with_modifiers() {
        assert_eq!(decoded("@\n"), vec!["⌘", "↩"]);
        assert_eq!(decoded("^\t"), vec!["⌃", "⇥"]);
        assert_eq!(decoded("~\u{1b}"), vec!["⌥", "⎋"]);
        assert_eq!(decoded("^ "), vec!["⌃", "␣"]);
    }

    // ========================================
    // GlyphSequence
    // ========================================

    #[test]
    fn test_display_joins_glyphs() {
        assert_eq!(decode("^~@A").to_string(), "⇧⌃⌥⌘A");
    }

    #[test]
    fn test_primary_key_is_last() {
        assert_eq!(decode("^~@a").primary_key(), Some("A"));
    }

    #[test]
    fn test_empty_input() {
        let seq = decode("");
        assert!(seq.is_empty());
        assert!(seq.is_blank());
        assert_eq!(seq.primary_key(), None);
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn test_whitespace_key_is_not_blank() {
        // Space decodes to a visible glyph
        assert!(!decode(" ").is_blank());
        assert!(decode("\u{a0}").is_blank());
    }

    #[test]
    fn test_glyphs_match_display_order() {
        let seq = decode("~A");
        assert_eq!(seq.glyphs(), ["⇧", "⌥", "A"]);
        assert_eq!(seq.clone().into_inner(), seq.glyphs().to_vec());
    }

    #[test]
    fn test_len_counts_inferred_shift() {
        assert_eq!(decode("@A").len(), 3);
        assert_eq!(decode("@a").len(), 2);
    }

    // ========================================
    // Glyph
    // ========================================

    #[test]
    fn test_from_code_has_no_shift() {
        for c in ['~', '^', '@', '\n', '\t', '\u{1b}', ' '] {
            assert_ne!(Glyph::from_code(c), Some(Glyph::Shift));
        }
        assert_eq!(Glyph::from_code('$'), None);
    }

    #[test]
    fn test_legend_excludes_unknown() {
        assert!(!Glyph::LEGEND.contains(&Glyph::Unknown));
        assert_eq!(Glyph::LEGEND.len(), 8);
    }

    #[test]
    fn test_glyph_display() {
        assert_eq!(Glyph::Command.to_string(), "⌘");
        assert_eq!(Glyph::Unknown.label(), "Unknown");
    }
}
