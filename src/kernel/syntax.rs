//! Cosmetic token coloring.
//!
//! Line oriented and best effort: the result only picks colors, it never feeds back into the
//! text being edited.

use regex::Regex;
use std::sync::OnceLock;
use unicode_xid::UnicodeXID;

use crate::models::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Keyword,
    Type,
    String,
    Number,
    Constant,
    Component,
    Variable,
    Punctuation,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

const KEYWORDS: &[&str] = &[
    "import",
    "export",
    "const",
    "let",
    "var",
    "function",
    "return",
    "interface",
    "type",
    "from",
    "default",
    "if",
    "else",
    "for",
    "while",
    "class",
    "extends",
    "new",
    "async",
    "await",
];

const TYPES: &[&str] = &[
    "React",
    "useState",
    "useEffect",
    "FC",
    "string",
    "number",
    "boolean",
];

const CONSTANTS: &[&str] = &["true", "false", "null", "undefined"];

const DECLARATION_KEYWORDS: &[&str] = &["const", "let", "var"];

fn token_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(
                r#""(?:[^"\\]|\\.)*"?|'(?:[^'\\]|\\.)*'?|`(?:[^`\\]|\\.)*`?|\s+|[(){}\[\].,:;<>=+\-*/!?&|%^~]"#,
            )
            .ok()
        })
        .as_ref()
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c == '$' || c.is_xid_start())
        && chars.all(|c| c == '$' || c.is_xid_continue())
}

fn is_number(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit()) && word.parse::<f64>().is_ok()
}

fn classify_word(word: &str, language: Language, after_declaration: bool) -> TokenKind {
    if KEYWORDS.contains(&word) {
        TokenKind::Keyword
    } else if TYPES.contains(&word) {
        TokenKind::Type
    } else if CONSTANTS.contains(&word) {
        TokenKind::Constant
    } else if is_number(word) {
        TokenKind::Number
    } else if language.colors_components()
        && word.starts_with(|c: char| c.is_ascii_uppercase())
        && is_identifier(word)
    {
        TokenKind::Component
    } else if after_declaration && is_identifier(word) {
        TokenKind::Variable
    } else {
        TokenKind::Plain
    }
}

fn word_token<'a>(word: &'a str, language: Language, after_declaration: &mut bool) -> Token<'a> {
    let kind = classify_word(word, language, *after_declaration);
    *after_declaration = DECLARATION_KEYWORDS.contains(&word);
    Token { text: word, kind }
}

fn has_c_comments(language: Language) -> bool {
    matches!(
        language,
        Language::TypeScript | Language::JavaScript | Language::Css
    )
}

fn is_comment_line(line: &str, language: Language) -> bool {
    let trimmed = line.trim_start();
    has_c_comments(language)
        && (trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with("* "))
}

/// Splits one line into colored tokens. Concatenating the token texts yields `line` back.
pub fn highlight_line(line: &str, language: Language) -> Vec<Token<'_>> {
    if line.is_empty() {
        return Vec::new();
    }
    if is_comment_line(line, language) {
        return vec![Token {
            text: line,
            kind: TokenKind::Comment,
        }];
    }
    if language == Language::Markdown && line.starts_with('#') {
        return vec![Token {
            text: line,
            kind: TokenKind::Keyword,
        }];
    }
    let Some(pattern) = token_pattern() else {
        return vec![Token {
            text: line,
            kind: TokenKind::Plain,
        }];
    };

    let mut tokens = Vec::new();
    let mut after_declaration = false;
    let mut last = 0usize;

    for m in pattern.find_iter(line) {
        if m.start() > last {
            tokens.push(word_token(
                &line[last..m.start()],
                language,
                &mut after_declaration,
            ));
        }
        last = m.end();

        let text = m.as_str();
        if text == "/" && has_c_comments(language) && line[m.end()..].starts_with('/') {
            tokens.push(Token {
                text: &line[m.start()..],
                kind: TokenKind::Comment,
            });
            return tokens;
        }

        let kind = match text.chars().next() {
            Some('"' | '\'' | '`') => TokenKind::String,
            Some(c) if c.is_whitespace() => TokenKind::Plain,
            _ => TokenKind::Punctuation,
        };
        if kind == TokenKind::Punctuation || kind == TokenKind::String {
            after_declaration = false;
        }
        tokens.push(Token { text, kind });
    }

    if last < line.len() {
        tokens.push(word_token(&line[last..], language, &mut after_declaration));
    }

    tokens
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/syntax.rs"]
mod tests;
