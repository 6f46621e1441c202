//! Minimal HTML element builder.

use std::fmt::Display;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// An element under construction. Attributes render in insertion order.
#[derive(Debug, Clone)]
pub struct Tag {
    name: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    inner: String,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            inner: String::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Display) -> Self {
        self.attrs.push((name, Some(value.to_string())));
        self
    }

    pub fn attr_opt<V: Display>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean attribute such as `required` or `checked`.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push((name, None));
        }
        self
    }

    /// Escaped text content.
    pub fn text(mut self, text: &str) -> Self {
        self.inner.push_str(&escape_html(text));
        self
    }

    /// Already rendered HTML content.
    pub fn child(mut self, html: impl AsRef<str>) -> Self {
        self.inner.push_str(html.as_ref());
        self
    }

    pub fn children<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.inner.push_str(item.as_ref());
        }
        self
    }

    fn open(&self) -> String {
        let mut out = format!("<{}", self.name);
        for (name, value) in &self.attrs {
            match value {
                Some(value) => out.push_str(&format!(" {}=\"{}\"", name, escape_html(value))),
                None => out.push_str(&format!(" {}", name)),
            }
        }
        out
    }

    /// Self-closing element (`<input ... />`).
    pub fn void(self) -> String {
        format!("{} />", self.open())
    }

    pub fn render(self) -> String {
        format!("{}>{}</{}>", self.open(), self.inner, self.name)
    }
}

/// Space-joined class list, skipping empty entries.
pub fn class_list<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
