// src/utils/html.rs

/// Clean user-supplied text before it is served to the browser client.
///
/// Whitelist-based sanitization via ammonia: safe inline tags (like <b>) are kept,
/// while <script>, <iframe> and event-handler attributes are stripped.
/// Question texts, options and student names all end up inside `innerHTML`
/// in the browser client, so the read views pass every string through here.
/// Stored data is never cleaned: ammonia entity-escapes `&` and `<`.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}
