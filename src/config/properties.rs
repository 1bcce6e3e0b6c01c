//! `key=value` text codec for override maps.
//!
//! Reads and writes the line format of Java properties files: `=`, `:` or
//! whitespace as separator, `#` and `!` comment lines, backslash escapes
//! (`\\`, `\=`, `\:`, `\ `, `\t`, `\n`, `\r`, `\f`, `\uXXXX`). Line
//! continuations are not supported; a trailing backslash is dropped.

use std::collections::BTreeMap;

/// Parses `key=value` lines into a map.
///
/// Lines without a separator are kept as keys with an empty value; the
/// configuration loader then drops them as unparsable. Later duplicates
/// win.
///
/// # Examples
///
/// ```
/// use u_adaptive_strategy::config::properties;
///
/// let map = properties::parse(
///     "# saved overrides\n\
///      rule.foo.factor = 2\n\
///      ruleset.simplify.disabled: true\n\
///      rule.eq\\:symm.summand=5\n",
/// );
/// assert_eq!(map["rule.foo.factor"], "2");
/// assert_eq!(map["ruleset.simplify.disabled"], "true");
/// assert_eq!(map["rule.eq:symm.summand"], "5");
/// ```
pub fn parse(text: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    for line in text.lines() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let (key, value) = split_entry(line);
        map.insert(unescape(key), unescape(value));
    }

    map
}

/// Renders a map as `key=value` lines, sorted by key.
///
/// Separators, comment markers, backslashes and control characters are
/// escaped, so [`parse`] reads back exactly the same map.
pub fn render<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let sorted: BTreeMap<&String, &String> = entries.into_iter().collect();

    let mut out = String::new();
    for (key, value) in sorted {
        escape_into(&mut out, key, true);
        out.push('=');
        escape_into(&mut out, value, false);
        out.push('\n');
    }
    out
}

/// Splits at the first unescaped separator. Whitespace around the
/// separator belongs to neither side.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], line[i + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[i..].trim_start();
                let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
                return (&line[..i], rest.trim_start());
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
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
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Keys escape every space, values only a leading one.
fn escape_into(out: &mut String, text: &str, is_key: bool) {
    for (i, c) in text.chars().enumerate() {
        match c {
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let map = parse("\n# c1\n! c2\n   \nrule.a.factor=3\n");
        assert_eq!(map.len(), 1);
        assert_eq!(map["rule.a.factor"], "3");
    }

    #[test]
    fn test_parse_first_separator_wins() {
        let map = parse("rule.a.summand=1=2\nrule.b.summand:4:5\n");
        assert_eq!(map["rule.a.summand"], "1=2");
        assert_eq!(map["rule.b.summand"], "4:5");
    }

    #[test]
    fn test_parse_missing_separator() {
        let map = parse("rule.a.disabled\n");
        assert_eq!(map["rule.a.disabled"], "");
    }

    #[test]
    fn test_parse_duplicates_last_wins() {
        let map = parse("rule.a.factor=1\nrule.a.factor=7\n");
        assert_eq!(map["rule.a.factor"], "7");
    }

    #[test]
    fn test_render_sorted() {
        let mut map = HashMap::new();
        map.insert("rule.b.factor".to_string(), "2".to_string());
        map.insert("rule.a.factor".to_string(), "1".to_string());
        assert_eq!(render(&map), "rule.a.factor=1\nrule.b.factor=2\n");
    }

    #[test]
    fn test_render_then_parse() {
        let mut map = BTreeMap::new();
        map.insert("ruleset.simplify.disabled".to_string(), "true".to_string());
        map.insert("rule.foo.summand".to_string(), "-10".to_string());
        assert_eq!(parse(&render(&map)), map);
    }

    #[test]
    fn test_parse_java_escapes() {
        let map = parse(
            "rule.a\\:b.factor=2\n\
             rule.x\\ y.summand = \\u0034\n\
             rule.t\\=u.disabled true\n",
        );
        assert_eq!(map["rule.a:b.factor"], "2");
        assert_eq!(map["rule.x y.summand"], "4");
        assert_eq!(map["rule.t=u.disabled"], "true");
    }

    #[test]
    fn test_parse_whitespace_separator() {
        let map = parse("rule.a.factor   3\nrule.b.factor \t: 4\n");
        assert_eq!(map["rule.a.factor"], "3");
        assert_eq!(map["rule.b.factor"], "4");
    }

    #[test]
    fn test_render_escapes_special_names() {
        let mut map = BTreeMap::new();
        map.insert("rule.a:b.factor".to_string(), "2".to_string());
        assert_eq!(render(&map), "rule.a\\:b.factor=2\n");
    }

    #[test]
    fn test_render_then_parse_special_names() {
        let mut map = BTreeMap::new();
        for key in [
            "rule.a:b.factor",
            "rule.a=b.summand",
            "rule.with space.factor",
            "#ruleset.hash.disabled",
            "!rule.bang.factor",
            "rule.back\\slash.summand",
            "rule.tab\there.factor",
        ] {
            map.insert(key.to_string(), "7".to_string());
        }
        map.insert("rule.v.summand".to_string(), " lead".to_string());
        assert_eq!(parse(&render(&map)), map);
    }
}
