//! Utility helpers shared across the WASM frontend.

/// Escape text for interpolation into markup or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Normalise a base URL so paths can be appended with a leading `/`.
pub fn trim_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
