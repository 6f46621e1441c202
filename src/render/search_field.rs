use crate::core::{FormContext, FormError, Result};
use crate::render::Render;
use crate::render::html::Tag;

/// Standalone GET search form. Needs no record or catalog.
#[derive(Debug, Clone)]
pub struct SearchField {
    pub url: String,
    pub field_name: String,
    pub placeholder: String,
    pub submit_text: String,
    pub css_class: String,
    /// Current query, echoed back into the input.
    pub value: Option<String>,
}

impl SearchField {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            field_name: "query".to_string(),
            placeholder: "Search...".to_string(),
            submit_text: "Search".to_string(),
            css_class: "search-form".to_string(),
            value: None,
        }
    }

    pub fn field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn submit_text(mut self, text: impl Into<String>) -> Self {
        self.submit_text = text.into();
        self
    }

    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = class.into();
        self
    }

    pub fn value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }
}

impl Render for SearchField {
    fn render(&self, _ctx: &FormContext<'_>) -> Result<String> {
        if self.url.is_empty() {
            return Err(FormError::MissingContext("search url"));
        }

        let input = Tag::new("input")
            .attr("type", "search")
            .attr("name", &self.field_name)
            .attr("id", &self.field_name)
            .attr("placeholder", &self.placeholder)
            .attr_opt("value", self.value.as_deref())
            .void();
        let button = Tag::new("button")
            .attr("type", "submit")
            .text(&self.submit_text)
            .render();
        let form = Tag::new("form")
            .attr("action", &self.url)
            .attr("method", "get")
            .child(input)
            .child(button)
            .render();

        Ok(Tag::new("div")
            .attr("class", &self.css_class)
            .child(form)
            .render())
    }
}
