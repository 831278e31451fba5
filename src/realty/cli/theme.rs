//! # Styled Template Rendering
//!
//! Output is produced by minijinja templates. Templates never contain ANSI codes: they name a
//! style through the `style` filter and the [`Theme`] decides what that looks like.
//!
//! ```jinja
//! {{ section.heading | style("heading") }}
//! ```
//!
//! With colors off the filter returns the text untouched, so piped output and `--color never`
//! stay plain. An unknown style name is prefixed with [`MISSING_STYLE_INDICATOR`] so typos in
//! templates show up immediately.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named styles available to templates.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any previous style with that name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styles `text` with the named style.
    ///
    /// Styling is forced when `use_color` is set, independent of what `console` detects for
    /// the current stream.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Whether stdout is a terminal that understands colors.
pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

/// A template environment with the `style` filter bound to a theme.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn with_color(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        Self { env }
    }

    /// Registers a named template. Syntax errors surface here.
    pub fn add_template(&mut self, name: &'static str, source: &'static str) -> Result<(), Error> {
        self.env.add_template(name, source)
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}
