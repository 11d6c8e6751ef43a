//! Text layout helpers shared by every artifact.

use std::sync::OnceLock;

use regex::Regex;

/// Whether `name` can be used verbatim as a TypeScript identifier.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern"))
        .is_match(name)
}

/// Packs the words of `comment` greedily into lines of at most `width`
/// characters. Lines are trimmed and empty ones dropped.
#[must_use]
pub fn comment_lines(comment: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in comment.split_whitespace() {
        if line.chars().count() + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line.push(' ');
            line.push_str(word);
        }
    }
    lines.push(line);

    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// JSDoc block for `lines`, every line prefixed with `indent`.
#[must_use]
pub fn doc_block(lines: &[String], indent: &str) -> String {
    let mut block = format!("{indent}/**\n");
    for line in lines {
        block.push_str(&format!("{indent} * {line}\n"));
    }
    block.push_str(&format!("{indent} */\n"));
    block
}

/// Optional member declaration `<prefix>?: A | B;`.
///
/// Past `max_width` characters the union is split one member per line, each
/// continuation starting with `| `.
#[must_use]
pub fn optional_member(prefix: &str, tokens: &[String], indent: &str, max_width: usize) -> String {
    let line = format!("{indent}{prefix}?: {};", tokens.join(" | "));
    if line.chars().count() <= max_width {
        return line;
    }
    let continuation = format!("\n{indent}{indent}| ");
    format!(
        "{indent}{prefix}?:{continuation}{};",
        tokens.join(&continuation)
    )
}

/// Array entry `<key>: ['a', 'b'],` indented `depth` times `unit`, followed by
/// a newline. Past `max_width` characters every item gets its own line one
/// level deeper.
#[must_use]
pub fn list_entry(
    key: &str,
    items: &[String],
    unit: &str,
    depth: usize,
    max_width: usize,
) -> String {
    let indent = unit.repeat(depth);
    let head = format!("{indent}{key}: [");
    let quoted: Vec<String> = items.iter().map(|item| quote(item)).collect();
    let inline = quoted.join(", ");
    if head.chars().count() + inline.chars().count() + 2 <= max_width {
        return format!("{head}{inline}],\n");
    }
    let item_indent = unit.repeat(depth + 1);
    format!(
        "{head}\n{item_indent}{}],\n",
        quoted.join(&format!(",\n{item_indent}"))
    )
}

/// Single-quoted string literal.
#[must_use]
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
