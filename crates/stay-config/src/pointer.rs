//! JSON Pointer (RFC 6901) helpers for walking merged config documents.

use serde_json::Value;

/// Every scalar in `v` with its pointer, in map order. Empty objects and
/// arrays contribute nothing; a scalar document yields a single `"/"` entry.
pub(crate) fn leaves(v: &Value) -> Vec<(String, &Value)> {
    let mut out = Vec::new();
    walk(v, String::new(), &mut out);
    out
}

fn walk<'a>(v: &'a Value, at: String, out: &mut Vec<(String, &'a Value)>) {
    match v {
        Value::Object(map) => {
            for (k, child) in map {
                walk(child, format!("{at}/{}", escape(k)), out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                walk(child, format!("{at}/{i}"), out);
            }
        }
        leaf => {
            let at = if at.is_empty() { "/".to_string() } else { at };
            out.push((at, leaf));
        }
    }
}

fn escape(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Last reference token, unescaped and lowercased.
pub(crate) fn last_token(pointer: &str) -> String {
    pointer
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .replace("~1", "/")
        .replace("~0", "~")
        .to_ascii_lowercase()
}

/// Leading "/", no trailing "/" except for the root itself.
pub(crate) fn normalize(p: &str) -> String {
    format!("/{}", p.trim().trim_matches('/'))
}

/// "/" covers everything; "/a/b" covers "/a/b" and "/a/b/c" but not "/a/bc".
pub(crate) fn covers(prefix: &str, leaf: &str) -> bool {
    prefix == "/"
        || leaf
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
