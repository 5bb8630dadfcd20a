// Path tokenizer: splits a pasted line into candidate file paths.
// Separators are space and ';' outside quotes. Either quote character
// toggles quoting (an opening '"' may be closed by '\''), and a backslash
// takes the next character literally.

/// Split `input` into trimmed, non-empty path tokens.
///
/// Unterminated quotes are consumed best-effort; a trailing lone backslash
/// is dropped.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '\\' {
            escape_next = true;
        } else if c == '"' || c == '\'' {
            in_quotes = !in_quotes;
        } else if (c == ' ' || c == ';') && !in_quotes {
            flush(&mut current, &mut tokens);
        } else {
            current.push(c);
        }
    }

    flush(&mut current, &mut tokens);
    tokens
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    let token = current.trim();
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
    current.clear();
}
