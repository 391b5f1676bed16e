//! Docstring extraction from command scripts
//!
//! A command's script body starts with an interpreter line (`#!/usr/bin/env python`). The
//! language named there decides where the human-readable description lives:
//!
//! - python: the first `"""..."""` block
//! - ruby, bash, sh: a comment block separated from the interpreter line by one blank line
//!
//! These are heuristics for conventionally written scripts. Anything else, including
//! malformed input, yields an empty string.

use std::sync::LazyLock;

use regex::Regex;

/// Interpreter line: the last `/`, `|`, `+` or whitespace delimited lowercase token wins.
/// Matched against the first line only.
static INTERPRETER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A#!.+[/|\s+]([a-z]+)").expect("INVARIANT: interpreter pattern is valid"));

static PYTHON_DOCSTRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\A\s*#!.+?python.*?"""(.*?)""""#).expect("INVARIANT: python docstring pattern is valid")
});

static COMMENT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A#!.+\n\n((?:[ \t]*#.*\n)+)").expect("INVARIANT: comment block pattern is valid")
});

/// Script language named on the interpreter line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLanguage {
    Python,
    Ruby,
    Bash,
    Sh,
    /// Recognized interpreter line, unsupported language
    Other(String),
}

impl ScriptLanguage {
    fn from_token(token: &str) -> Self {
        match token {
            "python" => ScriptLanguage::Python,
            "ruby" => ScriptLanguage::Ruby,
            "bash" => ScriptLanguage::Bash,
            "sh" => ScriptLanguage::Sh,
            other => ScriptLanguage::Other(other.to_string()),
        }
    }

    /// Whether descriptions are written as `#` comment blocks in this language.
    pub fn uses_comment_block(&self) -> bool {
        matches!(self, ScriptLanguage::Ruby | ScriptLanguage::Bash | ScriptLanguage::Sh)
    }
}

/// Detect the script language from the interpreter line at the start of `source`.
pub fn language(source: &str) -> Option<ScriptLanguage> {
    let first_line = source.split('\n').next().unwrap_or_default();
    INTERPRETER
        .captures(first_line)
        .and_then(|caps| caps.get(1))
        .map(|m| ScriptLanguage::from_token(m.as_str()))
}

/// Extract the docstring (or equivalent comment block) from a script.
pub fn extract(source: &str) -> String {
    match language(source) {
        Some(ScriptLanguage::Python) => extract_python(source),
        Some(lang) if lang.uses_comment_block() => extract_comment_block(source),
        _ => String::new(),
    }
}

fn extract_python(source: &str) -> String {
    PYTHON_DOCSTRING
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn extract_comment_block(source: &str) -> String {
    let Some(block) = COMMENT_BLOCK.captures(source).and_then(|caps| caps.get(1)) else {
        return String::new();
    };

    block
        .as_str()
        .split('\n')
        .map(|line| line.trim_start_matches(['#', ' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Language detection
    // ========================================

    #[test]
    fn test_language_env_python() {
        assert_eq!(language("#!/usr/bin/env python\n"), Some(ScriptLanguage::Python));
    }

    #[test]
    fn test_language_versioned_interpreter() {
        assert_eq!(language("#!/usr/bin/python3\n"), Some(ScriptLanguage::Python));
    }

    #[test]
    fn test_language_ignores_flags() {
        assert_eq!(language("#!/bin/sh -e\n"), Some(ScriptLanguage::Sh));
        assert_eq!(language("#!/usr/bin/env ruby -wKU\n"), Some(ScriptLanguage::Ruby));
    }

    #[test]
    fn test_language_other() {
        assert_eq!(language("#!/usr/bin/perl\n"), Some(ScriptLanguage::Other("perl".to_string())));
    }

    #[test]
    fn test_language_requires_leading_shebang() {
        assert_eq!(language("\n#!/bin/bash\n"), None);
        assert_eq!(language("echo hi\n"), None);
        assert_eq!(language(""), None);
    }

    #[test]
    fn test_language_only_reads_first_line() {
        // The next line's first word is not mistaken for the interpreter
        assert_eq!(language("#!/usr/bin/env python\nimport os\n"), Some(ScriptLanguage::Python));
    }

    #[test]
    fn test_language_without_path() {
        // No delimiter before the token
        assert_eq!(language("#!bash\n"), None);
    }

    // ========================================
    // Python
    // ========================================

    #[test]
    fn test_python_docstring() {
        let source = "#!/usr/bin/env python\n\n\"\"\"Hello\nWorld\"\"\"\nprint(1)\n";
        assert_eq!(extract(source), "Hello\nWorld");
    }

    #[test]
    fn test_python_first_docstring_wins() {
        let source = "#!/usr/bin/env python\nimport os\n\"\"\"first\"\"\"\n\"\"\"second\"\"\"\n";
        assert_eq!(extract(source), "first");
    }

    #[test]
    fn test_python_without_docstring() {
        let source = "#!/usr/bin/env python\nprint('hi')\n";
        assert_eq!(extract(source), "");
    }

    #[test]
    fn test_python_unterminated_docstring() {
        let source = "#!/usr/bin/env python\n\"\"\"never closed\n";
        assert_eq!(extract(source), "");
    }

    #[test]
    fn test_python_empty_docstring() {
        let source = "#!/usr/bin/env python\n\"\"\"\"\"\"\n";
        assert_eq!(extract(source), "");
    }

    // ========================================
    // Comment blocks
    // ========================================

    #[test]
    fn test_bash_comment_block() {
        let source = "#!/bin/bash\n\n# line one\n# line two\necho done\n";
        assert_eq!(extract(source), "line one\nline two\n");
    }

    #[test]
    fn test_ruby_comment_block() {
        let source = "#!/usr/bin/env ruby\n\n# Toggles the thing\nputs 1\n";
        assert_eq!(extract(source), "Toggles the thing\n");
    }

    #[test]
    fn test_sh_comment_block_strips_indent_and_hashes() {
        let source = "#!/bin/sh\n\n  ## indented\n\t#\ttabbed\nexit 0\n";
        assert_eq!(extract(source), "indented\ntabbed\n");
    }

    #[test]
    fn test_comment_block_requires_blank_line() {
        let source = "#!/bin/bash\n# not separated\necho\n";
        assert_eq!(extract(source), "");
    }

    #[test]
    fn test_comment_block_rejects_two_blank_lines() {
        let source = "#!/bin/bash\n\n\n# too far\necho\n";
        assert_eq!(extract(source), "");
    }

    #[test]
    fn test_comment_block_ends_at_blank_line() {
        let source = "#!/bin/bash\n\n# first\n\n# second\n";
        assert_eq!(extract(source), "first\n");
    }

    #[test]
    fn test_comment_block_needs_trailing_newline() {
        let source = "#!/bin/bash\n\n# no newline at end";
        assert_eq!(extract(source), "");
    }

    #[test]
    fn test_comment_block_without_comments() {
        let source = "#!/bin/bash\n\necho hi\n";
        assert_eq!(extract(source), "");
    }

    // ========================================
    // Unsupported input
    // ========================================

    #[test]
    fn test_unknown_language_is_empty() {
        let source = "#!/usr/bin/perl\n\n# looks like a comment\n\"\"\"and a docstring\"\"\"\n";
        assert_eq!(extract(source), "");
    }

    #[test]
    fn test_no_interpreter_line_is_empty() {
        assert_eq!(extract("# just a comment\n"), "");
        assert_eq!(extract(""), "");
    }
}
