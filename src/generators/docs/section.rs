/// One labeled block of a component's documentation.
///
/// A section without a heading is empty and renders to nothing, which is how
/// hidden or absent member collections drop out of the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            lines,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a section from an optional collection, honoring the hide flag
    pub fn from_items<T>(
        items: Option<&[T]>,
        hide: bool,
        label: &str,
        line: impl Fn(&T) -> String,
    ) -> Self {
        match items {
            Some(items) if !items.is_empty() && !hide => {
                Self::new(label, items.iter().map(line).collect())
            }
            _ => Self::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heading.is_none()
    }

    pub fn render(&self) -> String {
        match &self.heading {
            Some(heading) => format!("\n\n### **{}:**\n {}", heading, self.lines.join("\n")),
            None => String::new(),
        }
    }
}

/// Description followed by a rule and the non-empty sections, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentBuilder {
    description: String,
    sections: Vec<Section>,
}

impl DocumentBuilder {
    pub const SEPARATOR: &'static str = "\n\n\n---\n\n\n";

    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn build(&self) -> String {
        let mut output = self.description.clone();
        output.push_str(Self::SEPARATOR);
        for section in self.sections.iter().filter(|s| !s.is_empty()) {
            output.push_str(&section.render());
        }
        output
    }
}
