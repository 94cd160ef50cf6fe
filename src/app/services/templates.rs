//! Built-in page fragments and the registry that picks one for a request.

use crate::app::domain::{Declarations, DocumentModel, Element, ScriptSet, StyleSheet};

pub type FragmentBuilder = fn() -> DocumentModel;

/// A generatable fragment: the phrase that requests it, how to build it, and
/// what to tell the user afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub phrase: &'static str,
    pub build: FragmentBuilder,
    pub acknowledgement: &'static str,
}

pub const CONTACT_FORM_ACK: &str = "I've created a beautiful contact form with all the requested fields. The form includes:\n\
- Name input\n\
- Phone input\n\
- Message textarea\n\
- Submit button\n\
\n\
The form has modern styling, animations, and basic form handling. You can modify any part of it by asking!";

const SUBMIT_HANDLER: &str = "function handleSubmit(event) {
  event.preventDefault();
  const formData = new FormData(event.target);
  const data = Object.fromEntries(formData.entries());
  console.log('Form submitted:', data);
  alert('Form submitted successfully!');
  event.target.reset();
}";

/// Ordered phrase -> fragment registry. Lookups are first-match-wins.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    entries: Vec<Template>,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self {
            entries: vec![Template {
                phrase: "contact form",
                build: contact_form,
                acknowledgement: CONTACT_FORM_ACK,
            }],
        }
    }
}

impl TemplateLibrary {
    /// A library with no entries; every request yields an empty model.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a fragment. Earlier entries win when phrases overlap.
    pub fn register(&mut self, template: Template) {
        self.entries.push(template);
    }

    pub fn entries(&self) -> &[Template] {
        &self.entries
    }

    pub fn lookup(&self, request: &str) -> Option<&Template> {
        let request = request.to_lowercase();
        self.entries.iter().find(|t| request.contains(t.phrase))
    }

    /// Build the fragment the request names, or an empty model.
    pub fn instantiate(&self, request: &str) -> DocumentModel {
        match self.lookup(request) {
            Some(template) => {
                log::debug!("template '{}' matched", template.phrase);
                (template.build)()
            }
            None => DocumentModel::empty(),
        }
    }
}

fn declarations(pairs: &[(&str, &str)]) -> Declarations {
    pairs.iter().copied().collect()
}

/// Name, phone and message fields plus a submit button inside one form.
pub fn contact_form() -> DocumentModel {
    let form = Element::new("form")
        .attr("class", "contact-form")
        .attr("onsubmit", "handleSubmit(event)")
        .child(
            Element::new("input")
                .attr("type", "text")
                .attr("name", "name")
                .attr("id", "name")
                .attr("class", "form-input")
                .attr("placeholder", "Enter your name")
                .flag("required"),
        )
        .child(
            Element::new("input")
                .attr("type", "tel")
                .attr("name", "phone")
                .attr("id", "phone")
                .attr("class", "form-input phone-input")
                .attr("placeholder", "Enter your phone")
                .flag("required"),
        )
        .child(
            Element::new("textarea")
                .attr("name", "message")
                .attr("id", "message")
                .attr("class", "form-textarea")
                .attr("placeholder", "Your message")
                .attr("rows", "4")
                .flag("required"),
        )
        .child(
            Element::new("button")
                .attr("type", "submit")
                .attr("class", "submit-button")
                .text("Send Message"),
        );

    let mut styles = StyleSheet::new();
    styles.insert(
        ".contact-form",
        declarations(&[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "1.5rem"),
            ("max-width", "500px"),
            ("margin", "2rem auto"),
            ("padding", "2rem"),
            ("background", "white"),
            ("border-radius", "1rem"),
            ("box-shadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
        ]),
    );
    styles.insert(
        ".form-input, .form-textarea",
        declarations(&[
            ("width", "100%"),
            ("padding", "0.75rem"),
            ("border", "2px solid #e2e8f0"),
            ("border-radius", "0.5rem"),
            ("font-size", "1rem"),
            ("transition", "border-color 0.2s ease"),
        ]),
    );
    styles.insert(".phone-input", declarations(&[("background", "white")]));
    styles.insert(
        ".form-input:focus, .form-textarea:focus",
        declarations(&[
            ("outline", "none"),
            ("border-color", "#3b82f6"),
            ("box-shadow", "0 0 0 3px rgba(59, 130, 246, 0.1)"),
        ]),
    );
    styles.insert(
        ".submit-button",
        declarations(&[
            ("background", "#3b82f6"),
            ("color", "white"),
            ("padding", "0.75rem 1.5rem"),
            ("border", "none"),
            ("border-radius", "0.5rem"),
            ("font-weight", "600"),
            ("cursor", "pointer"),
            ("transition", "transform 0.2s ease, background-color 0.2s ease"),
        ]),
    );
    styles.insert(
        ".submit-button:hover",
        declarations(&[("background", "#2563eb"), ("transform", "translateY(-1px)")]),
    );

    let mut scripts = ScriptSet::new();
    scripts.push(SUBMIT_HANDLER);

    DocumentModel {
        elements: vec![form],
        styles,
        scripts,
    }
}
