//! Projects a [`DocumentModel`] into markup, stylesheet and script text.
//!
//! Every function here is pure: the same model always yields byte-identical
//! output.

use crate::app::domain::{DocumentModel, Element, GeneratedArtifacts, ScriptSet, StyleSheet};

const INDENT: &str = "  ";

pub fn render(model: &DocumentModel) -> GeneratedArtifacts {
    GeneratedArtifacts {
        markup: render_markup(&model.elements),
        stylesheet: render_stylesheet(&model.styles),
        script: render_scripts(&model.scripts),
    }
}

/// Top-level elements, one per line. Children are nested between their
/// parent's tags and indented by depth.
pub fn render_markup(elements: &[Element]) -> String {
    let mut out = String::new();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_element(&mut out, element, 0);
    }
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    let indent = INDENT.repeat(depth);
    out.push_str(&indent);
    out.push_str(&opening_tag(element));

    if element.is_self_closing() {
        return;
    }

    if let Some(content) = &element.content {
        out.push_str(content);
    }

    if !element.children.is_empty() {
        for child in &element.children {
            out.push('\n');
            write_element(out, child, depth + 1);
        }
        out.push('\n');
        out.push_str(&indent);
    }

    out.push_str("</");
    out.push_str(&element.kind);
    out.push('>');
}

fn opening_tag(element: &Element) -> String {
    let attrs = element
        .attributes
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", name, value))
        .collect::<Vec<_>>()
        .join(" ");

    if attrs.is_empty() {
        format!("<{}>", element.kind)
    } else {
        format!("<{} {}>", element.kind, attrs)
    }
}

pub fn render_stylesheet(sheet: &StyleSheet) -> String {
    sheet
        .iter()
        .map(|(selector, declarations)| {
            let mut block = format!("{} {{\n", selector);
            for (property, value) in declarations.iter() {
                block.push_str(&format!("{}{}: {};\n", INDENT, property, value));
            }
            block.push('}');
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_scripts(scripts: &ScriptSet) -> String {
    scripts.iter().collect::<Vec<_>>().join("\n\n")
}
