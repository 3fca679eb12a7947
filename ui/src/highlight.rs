//! Display-only syntax highlighting for code samples.
//!
//! Each line is split into [`Token`]s that cover it without gaps, so the
//! concatenated token texts always reproduce the source exactly. Nothing
//! here evaluates the code.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Builtin,
    String,
    Number,
    Comment,
    Identifier,
    Operator,
    Delimiter,
    Punctuation,
    Whitespace,
    /// Unclassified text (plain rendering or non-ASCII runs).
    Text,
}

impl TokenKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Keyword => "code-sample__tok--keyword",
            Self::Builtin => "code-sample__tok--builtin",
            Self::String => "code-sample__tok--string",
            Self::Number => "code-sample__tok--number",
            Self::Comment => "code-sample__tok--comment",
            Self::Identifier => "code-sample__tok--identifier",
            Self::Operator => "code-sample__tok--operator",
            Self::Delimiter => "code-sample__tok--delimiter",
            Self::Punctuation => "code-sample__tok--punctuation",
            Self::Whitespace => "code-sample__tok--whitespace",
            Self::Text => "code-sample__tok--text",
        }
    }
}

/// A classified byte range of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

impl Token {
    fn new(kind: TokenKind, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "token range must be ordered");
        Self { kind, range }
    }

    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range.clone()]
    }
}

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

const PYTHON_BUILTINS: &[&str] = &[
    "abs", "bool", "dict", "enumerate", "float", "int", "len", "list", "max", "min", "print",
    "range", "set", "str", "sum", "tuple", "type", "zip",
];

/// Highlight `source` line by line. Languages other than Python render as
/// plain text.
pub fn highlight(source: &str, language: &str) -> Vec<Vec<Token>> {
    let python = language.eq_ignore_ascii_case("python") || language.eq_ignore_ascii_case("py");
    source
        .lines()
        .map(|line| {
            if python {
                tokenize_python_line(line)
            } else if line.is_empty() {
                Vec::new()
            } else {
                vec![Token::new(TokenKind::Text, 0..line.len())]
            }
        })
        .collect()
}

/// Tokenize a single line of Python.
///
/// Strings left open at the end of the line run to the end of the line;
/// triple-quoted blocks spanning lines are not tracked.
pub fn tokenize_python_line(line: &str) -> Vec<Token> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let ch = bytes[pos];
        let start = pos;

        if ch.is_ascii_whitespace() {
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            tokens.push(Token::new(TokenKind::Whitespace, start..pos));
            continue;
        }

        if ch == b'#' {
            tokens.push(Token::new(TokenKind::Comment, start..bytes.len()));
            break;
        }

        if ch == b'"' || ch == b'\'' {
            pos = scan_string(bytes, pos);
            tokens.push(Token::new(TokenKind::String, start..pos));
            continue;
        }

        if ch.is_ascii_digit() {
            pos = scan_number(bytes, pos);
            tokens.push(Token::new(TokenKind::Number, start..pos));
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == b'_' {
            while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
                pos += 1;
            }
            let word = &line[start..pos];
            let kind = if PYTHON_KEYWORDS.contains(&word) {
                TokenKind::Keyword
            } else if PYTHON_BUILTINS.contains(&word) {
                TokenKind::Builtin
            } else {
                TokenKind::Identifier
            };
            tokens.push(Token::new(kind, start..pos));
            continue;
        }

        if matches!(ch, b'(' | b')' | b'[' | b']' | b'{' | b'}') {
            tokens.push(Token::new(TokenKind::Delimiter, start..start + 1));
            pos += 1;
            continue;
        }

        if is_operator_byte(ch) {
            while pos < bytes.len() && is_operator_byte(bytes[pos]) {
                pos += 1;
            }
            tokens.push(Token::new(TokenKind::Operator, start..pos));
            continue;
        }

        if ch.is_ascii() {
            tokens.push(Token::new(TokenKind::Punctuation, start..start + 1));
            pos += 1;
            continue;
        }

        // Non-ASCII: keep whole characters together.
        while pos < bytes.len() && !bytes[pos].is_ascii() {
            pos += 1;
        }
        tokens.push(Token::new(TokenKind::Text, start..pos));
    }

    tokens
}

fn scan_string(bytes: &[u8], pos: usize) -> usize {
    let quote = bytes[pos];
    let mut end = pos + 1;
    while end < bytes.len() {
        if bytes[end] == b'\\' {
            end += 2;
        } else if bytes[end] == quote {
            return end + 1;
        } else {
            end += 1;
        }
    }
    bytes.len()
}

fn scan_number(bytes: &[u8], pos: usize) -> usize {
    let mut end = pos;
    if end + 1 < bytes.len()
        && bytes[end] == b'0'
        && matches!(bytes[end + 1] | 0x20, b'x' | b'b' | b'o')
    {
        end += 2;
        while end < bytes.len() && (bytes[end].is_ascii_hexdigit() || bytes[end] == b'_') {
            end += 1;
        }
        return end;
    }
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'_') {
        end += 1;
    }
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end < bytes.len() && (bytes[end] | 0x20) == b'e' {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            end = exp;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }
    }
    if end < bytes.len() && (bytes[end] | 0x20) == b'j' {
        end += 1;
    }
    end
}

fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'!' | b'<' | b'>' | b'&' | b'|' | b'^' | b'~' | b'@'
    )
}

/// Strip the indentation shared by every non-blank line, and drop blank
/// lines at either end.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return String::new();
    };
    let body = &lines[first..=last];

    let indent = body
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| {
            if l.trim().is_empty() {
                ""
            } else {
                l[indent..].trim_end()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        tokenize_python_line(line)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| t.kind)
            .collect()
    }

    fn rejoin(line: &str) -> String {
        tokenize_python_line(line)
            .iter()
            .map(|t| t.text(line))
            .collect()
    }

    #[test]
    fn import_line() {
        assert_eq!(
            kinds("from qiskit.providers import NoiseModel"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Punctuation,
                TokenKind::Identifier,
                TokenKind::Keyword,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        let line = "x = 1  # Generate RB circuits (2Q RB)";
        let tokens = tokenize_python_line(line);
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Comment);
        assert_eq!(last.text(line), "# Generate RB circuits (2Q RB)");
    }

    #[test]
    fn strings_numbers_and_builtins() {
        let line = "print('After seed %d, EPC %f'%(rb_seed, 0.002))";
        let ks = kinds(line);
        assert_eq!(ks[0], TokenKind::Builtin);
        assert!(ks.contains(&TokenKind::String));
        assert!(ks.contains(&TokenKind::Number));
        let tokens = tokenize_python_line(line);
        let string = tokens.iter().find(|t| t.kind == TokenKind::String).unwrap();
        assert_eq!(string.text(line), "'After seed %d, EPC %f'");
    }

    #[test]
    fn escaped_quote_stays_inside_string() {
        let line = r#"s = "a \" b" + c"#;
        let tokens = tokenize_python_line(line);
        let string = tokens.iter().find(|t| t.kind == TokenKind::String).unwrap();
        assert_eq!(string.text(line), r#""a \" b""#);
    }

    #[test]
    fn unterminated_string_and_non_ascii_are_covered() {
        for line in ["x = 'open", "名前 = 1", "rb_opts['nseeds'] = 5", "a ** -2e-3"] {
            assert_eq!(rejoin(line), line);
        }
    }

    #[test]
    fn plain_language_is_single_token_per_line() {
        let lines = highlight("a b\n\nc", "text");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], vec![Token::new(TokenKind::Text, 0..3)]);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn dedent_strips_common_indent_and_blank_edges() {
        let text = "\n    import qiskit\n\n    for x in y:\n        pass\n  \n";
        assert_eq!(dedent(text), "import qiskit\n\nfor x in y:\n    pass");
    }

    #[test]
    fn dedent_of_blank_text_is_empty() {
        assert_eq!(dedent("   \n\n"), "");
    }
}
