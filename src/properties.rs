//! Java `.properties` reader
//!
//! Covers what connector and coordinator configs use in practice:
//! `#`/`!` comments, `=`/`:`/whitespace separators, and trailing-backslash
//! line continuation. Unicode escapes are not decoded.

use std::collections::BTreeMap;

/// Parsed key/value pairs. Later keys override earlier ones.
pub type Properties = BTreeMap<String, String>;

/// Parse properties text
pub fn parse(content: &str) -> Properties {
    let mut props = Properties::new();
    let mut logical = String::new();

    for raw in content.lines() {
        let line = raw.trim_start();

        if logical.is_empty() && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        if ends_with_continuation(line) {
            logical.push_str(&line[..line.len() - 1]);
            continue;
        }

        logical.push_str(line);
        insert_line(&mut props, &logical);
        logical.clear();
    }

    if !logical.is_empty() {
        insert_line(&mut props, &logical);
    }

    props
}

/// An odd number of trailing backslashes continues the line
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn insert_line(props: &mut Properties, line: &str) {
    let (key, value) = split_key_value(line);
    if key.is_empty() {
        return;
    }
    props.insert(unescape(key), unescape(value));
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (line[..i].trim_end(), line[i + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[i..].trim_start();
                let rest = rest
                    .strip_prefix('=')
                    .or_else(|| rest.strip_prefix(':'))
                    .unwrap_or(rest);
                return (&line[..i], rest.trim_start());
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out.trim_end().to_string()
}
