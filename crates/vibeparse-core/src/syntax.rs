//! Lexical syntax highlighting for code highlights
//!
//! A small line-oriented tokenizer: keywords, strings, comments, numbers,
//! punctuation and plain identifiers. Block comments carry over between
//! lines through [`Highlighter`]. It does not parse; it only colours.

use std::path::Path;

/// Language assumed when the file extension is unknown
pub const DEFAULT_LANGUAGE: Language = Language::Java;

/// Languages with keyword tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Rust,
    Python,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    Go,
    Ruby,
    Plain,
}

impl Language {
    /// Detect the language from a file path's extension
    pub fn from_path(path: &str) -> Self {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("rs") => Language::Rust,
            Some("py") => Language::Python,
            Some("js" | "jsx" | "mjs" | "cjs") => Language::JavaScript,
            Some("ts" | "tsx") => Language::TypeScript,
            Some("java") => Language::Java,
            Some("c" | "h") => Language::C,
            Some("cpp" | "cc" | "cxx" | "hpp" | "hh") => Language::Cpp,
            Some("go") => Language::Go,
            Some("rb") => Language::Ruby,
            Some("txt" | "md") => Language::Plain,
            _ => DEFAULT_LANGUAGE,
        }
    }

    /// Short tag shown next to code blocks
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Plain => "text",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Language::Rust => &[
                "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else",
                "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop",
                "match", "mod", "move", "mut", "pub", "ref", "return", "self", "Self", "static",
                "struct", "super", "trait", "true", "type", "unsafe", "use", "where", "while",
            ],
            Language::Python => &[
                "False", "None", "True", "and", "as", "assert", "async", "await", "break",
                "class", "continue", "def", "del", "elif", "else", "except", "finally", "for",
                "from", "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or",
                "pass", "raise", "return", "try", "while", "with", "yield", "self",
            ],
            Language::JavaScript | Language::TypeScript => &[
                "async", "await", "break", "case", "catch", "class", "const", "continue",
                "default", "delete", "do", "else", "export", "extends", "false", "finally",
                "for", "from", "function", "if", "import", "in", "instanceof", "interface",
                "let", "new", "null", "return", "super", "switch", "this", "throw", "true",
                "try", "type", "typeof", "undefined", "var", "void", "while", "yield",
            ],
            Language::Java => &[
                "abstract", "boolean", "break", "byte", "case", "catch", "char", "class",
                "continue", "default", "do", "double", "else", "enum", "extends", "false",
                "final", "finally", "float", "for", "if", "implements", "import", "instanceof",
                "int", "interface", "long", "new", "null", "package", "private", "protected",
                "public", "return", "short", "static", "super", "switch", "this", "throw",
                "throws", "true", "try", "void", "while",
            ],
            Language::C | Language::Cpp => &[
                "auto", "bool", "break", "case", "char", "class", "const", "continue",
                "default", "delete", "do", "double", "else", "enum", "extern", "false", "float",
                "for", "if", "include", "int", "long", "namespace", "new", "nullptr", "private",
                "public", "return", "short", "sizeof", "static", "struct", "switch", "template",
                "this", "true", "typedef", "union", "unsigned", "using", "void", "while",
            ],
            Language::Go => &[
                "break", "case", "chan", "const", "continue", "default", "defer", "else",
                "fallthrough", "false", "for", "func", "go", "goto", "if", "import", "interface",
                "map", "nil", "package", "range", "return", "select", "struct", "switch", "true",
                "type", "var",
            ],
            Language::Ruby => &[
                "begin", "class", "def", "do", "else", "elsif", "end", "ensure", "false", "for",
                "if", "in", "module", "next", "nil", "require", "rescue", "return", "self",
                "then", "true", "unless", "until", "when", "while", "yield",
            ],
            Language::Plain => &[],
        }
    }

    fn line_comment(&self) -> Option<&'static str> {
        match self {
            Language::Python | Language::Ruby => Some("#"),
            Language::Plain => None,
            _ => Some("//"),
        }
    }

    fn has_block_comments(&self) -> bool {
        !matches!(self, Language::Python | Language::Ruby | Language::Plain)
    }
}

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
    Punctuation,
    Text,
}

/// A classified slice of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Stateful line tokenizer
#[derive(Debug, Clone)]
pub struct Highlighter {
    language: Language,
    in_block_comment: bool,
}

impl Highlighter {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            in_block_comment: false,
        }
    }

    /// Tokenize a whole snippet, one token list per line
    pub fn highlight(language: Language, code: &str) -> Vec<Vec<Token>> {
        let mut hl = Self::new(language);
        code.lines().map(|line| hl.line(line)).collect()
    }

    /// Tokenize one line, carrying block-comment state to the next
    pub fn line(&mut self, line: &str) -> Vec<Token> {
        let chars: Vec<char> = line.chars().collect();
        let mut tokens: Vec<Token> = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if self.in_block_comment {
                let start = i;
                while i < chars.len() && !starts_with(&chars, i, "*/") {
                    i += 1;
                }
                if i < chars.len() {
                    i += 2;
                    self.in_block_comment = false;
                }
                push(&mut tokens, TokenKind::Comment, &chars[start..i]);
                continue;
            }

            let c = chars[i];

            if let Some(marker) = self.language.line_comment() {
                if starts_with(&chars, i, marker) {
                    push(&mut tokens, TokenKind::Comment, &chars[i..]);
                    break;
                }
            }

            if self.language.has_block_comments() && starts_with(&chars, i, "/*") {
                // The opener's `*` must not pair with a following `/`
                push(&mut tokens, TokenKind::Comment, &chars[i..i + 2]);
                i += 2;
                self.in_block_comment = true;
                continue;
            }

            if c == '"' || c == '\'' || c == '`' {
                let start = i;
                i += 1;
                while i < chars.len() && chars[i] != c {
                    if chars[i] == '\\' {
                        i += 1;
                    }
                    i += 1;
                }
                i = (i + 1).min(chars.len());
                push(&mut tokens, TokenKind::String, &chars[start..i]);
                continue;
            }

            if c.is_ascii_digit() {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '.' || chars[i] == '_') {
                    i += 1;
                }
                push(&mut tokens, TokenKind::Number, &chars[start..i]);
                continue;
            }

            if c.is_alphabetic() || c == '_' {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                let kind = if self.language.keywords().contains(&word.as_str()) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Text
                };
                push(&mut tokens, kind, &chars[start..i]);
                continue;
            }

            let kind = if c.is_ascii_punctuation() {
                TokenKind::Punctuation
            } else {
                TokenKind::Text
            };
            push(&mut tokens, kind, &chars[i..i + 1]);
            i += 1;
        }

        tokens
    }
}

fn starts_with(chars: &[char], at: usize, pat: &str) -> bool {
    let mut idx = at;
    for p in pat.chars() {
        if chars.get(idx) != Some(&p) {
            return false;
        }
        idx += 1;
    }
    true
}

/// Append, merging with the previous token when the kind matches
fn push(tokens: &mut Vec<Token>, kind: TokenKind, chars: &[char]) {
    if chars.is_empty() {
        return;
    }
    match tokens.last_mut() {
        Some(last) if last.kind == kind => last.text.extend(chars.iter()),
        _ => tokens.push(Token::new(kind, chars.iter().collect::<String>())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    #[test]
    fn test_language_from_path() {
        assert_eq!(Language::from_path("src/main.rs"), Language::Rust);
        assert_eq!(Language::from_path("app/models.PY"), Language::Python);
        assert_eq!(Language::from_path("web/App.tsx"), Language::TypeScript);
        assert_eq!(Language::from_path("Makefile"), DEFAULT_LANGUAGE);
        assert_eq!(Language::from_path("notes.md").tag(), "text");
    }

    #[test]
    fn test_rust_line() {
        let mut hl = Highlighter::new(Language::Rust);
        let tokens = hl.line("let x = 42; // answer");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "let"),
                (TokenKind::Text, " x "),
                (TokenKind::Punctuation, "="),
                (TokenKind::Text, " "),
                (TokenKind::Number, "42"),
                (TokenKind::Punctuation, ";"),
                (TokenKind::Text, " "),
                (TokenKind::Comment, "// answer"),
            ]
        );
    }

    #[test]
    fn test_strings_with_escapes() {
        let mut hl = Highlighter::new(Language::Python);
        let tokens = hl.line(r#"print("a \"quoted\" word")"#);
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::String && t.text == r#""a \"quoted\" word""#));
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let mut hl = Highlighter::new(Language::JavaScript);
        let tokens = hl.line("const s = 'open");
        assert_eq!(tokens.last().unwrap().kind, TokenKind::String);
        assert_eq!(tokens.last().unwrap().text, "'open");
    }

    #[test]
    fn test_python_hash_comment() {
        let mut hl = Highlighter::new(Language::Python);
        let tokens = hl.line("def f():  # helper");
        assert_eq!(tokens[0], Token::new(TokenKind::Keyword, "def"));
        assert_eq!(tokens.last().unwrap().text, "# helper");
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let lines = Highlighter::highlight(Language::Java, "int a; /* start\nstill comment\nend */ int b;");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], vec![Token::new(TokenKind::Comment, "still comment")]);
        assert_eq!(lines[2][0], Token::new(TokenKind::Comment, "end */"));
        assert!(lines[2].contains(&Token::new(TokenKind::Keyword, "int")));
    }

    #[test]
    fn test_block_comment_opener_does_not_close_itself() {
        let lines = Highlighter::highlight(Language::C, "/*/ still comment\nint x = 1; */ int y;");
        assert_eq!(lines[0], vec![Token::new(TokenKind::Comment, "/*/ still comment")]);
        assert_eq!(lines[1][0], Token::new(TokenKind::Comment, "int x = 1; */"));
        assert!(lines[1].contains(&Token::new(TokenKind::Keyword, "int")));
    }

    #[test]
    fn test_tokens_reassemble_line() {
        let line = "fn main() { println!(\"hi\"); } /* done */";
        let mut hl = Highlighter::new(Language::Rust);
        let joined: String = hl.line(line).into_iter().map(|t| t.text).collect();
        assert_eq!(joined, line);
    }

    #[test]
    fn test_plain_has_no_keywords() {
        let mut hl = Highlighter::new(Language::Plain);
        let tokens = hl.line("if this then that");
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Keyword));
    }
}
