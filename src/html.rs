//! Minimal HTML tag construction.
//!
//! Attribute values are interpolated as-is, nothing is escaped.

/// Builds `<name attr="value"...>content</name>`.
pub fn tag(name: &str, attributes: &[(&str, &str)], content: &str) -> String {
    let mut out = String::with_capacity(name.len() * 2 + content.len() + 5);
    out.push('<');
    out.push_str(name);
    for (attribute, value) in attributes {
        out.push(' ');
        out.push_str(attribute);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
}

/// `<abbr title="{title}">{short}</abbr>`
pub fn abbr(title: &str, short: &str) -> String {
    tag("abbr", &[("title", title)], short)
}

/// `<a href="{href}">{content}</a>`
pub fn link(href: &str, content: &str) -> String {
    tag("a", &[("href", href)], content)
}

/// `<span class="{class_name}">{content}</span>`
pub fn span(class_name: &str, content: &str) -> String {
    tag("span", &[("class", class_name)], content)
}
