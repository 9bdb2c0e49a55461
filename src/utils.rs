pub trait ExistsExtension<T> {
    fn exists<P: FnOnce(&T) -> bool>(&self, predicate: P) -> bool;
}

impl <T> ExistsExtension<T> for Option<T> {
    fn exists<P: FnOnce(&T) -> bool>(&self, predicate: P) -> bool {
        match self {
            Some(value) => predicate(value),
            None => false,
        }
    }
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
