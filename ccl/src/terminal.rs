use std::collections::HashMap;

pub type StyleId = u8;

/// Applies named styles to standard output. Styling is silently skipped when standard output
/// is not a terminal.
pub struct Stylus {
    styles: HashMap<StyleId, Style>,
}

impl Stylus {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn insert_style(&mut self, id: StyleId, style: Style) {
        self.styles.insert(id, style);
    }

    pub fn set(&self, id: StyleId) {
        if let Some(style) = self.styles.get(&id) {
            self.set_style(style);
        }
    }

    pub fn set_style(&self, style: &Style) {
        self.clear();
        Self::apply(style);
    }

    pub fn clear(&self) {
        if self.styles.is_empty() {
            return;
        }
        if let Some(mut term) = term::stdout() {
            let _ = term.reset();
        }
    }

    fn apply(style: &Style) {
        if let Some(mut term) = term::stdout() {
            if let Some(color) = style.color {
                let _ = term.fg(color);
            }
            if let Some(attr) = style.attr {
                let _ = term.attr(attr);
            }
        }
    }
}

impl Drop for Stylus {
    fn drop(&mut self) {
        self.clear();
    }
}

#[derive(Clone)]
pub struct Style {
    color: Option<term::color::Color>,
    attr: Option<term::Attr>,
}

impl Style {
    pub fn new() -> Self {
        Self {
            color: None,
            attr: None,
        }
    }

    pub fn foreground(self, color: term::color::Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn attribute(self, attr: term::Attr) -> Self {
        Self {
            attr: Some(attr),
            ..self
        }
    }
}
