//! Applies edit commands to an existing document.
//!
//! Each [`Rule`] reads the whole (lowercased) command on its own and proposes
//! zero or more [`StyleEdit`]s, so one command can carry several instructions.
//! Edits land on a working copy of the model that replaces the live one only
//! after every rule has run.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::app::domain::DocumentModel;
use crate::app::services::templates::contact_form;

static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"change\s+(?:the\s+)?(?:background|bg|color)\s+(?:of\s+)?(\w+)\s+(?:to\s+)?(\w+)")
        .expect("color pattern is a valid regex")
});

pub const ENLARGED_PADDING: &str = "1rem 2rem";
pub const ENLARGED_FONT_SIZE: &str = "1.125rem";

/// Element words a command can point at, in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetElement {
    Phone,
    Name,
    Message,
    Button,
}

impl TargetElement {
    pub const ALL: [TargetElement; 4] = [Self::Phone, Self::Name, Self::Message, Self::Button];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Name => "name",
            Self::Message => "message",
            Self::Button => "button",
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            Self::Phone => ".phone-input",
            Self::Name => ".form-input",
            Self::Message => ".form-textarea",
            Self::Button => ".submit-button",
        }
    }

    /// First target whose keyword occurs anywhere in `word`.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| word.contains(t.keyword()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEdit {
    pub selector: &'static str,
    pub property: &'static str,
    pub value: String,
}

impl StyleEdit {
    pub fn new(selector: &'static str, property: &'static str, value: impl Into<String>) -> Self {
        Self {
            selector,
            property,
            value: value.into(),
        }
    }
}

/// A named extractor from lowercased command text to style edits.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub extract: fn(&str) -> Vec<StyleEdit>,
}

/// What a single `resolve` call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Rules that proposed at least one edit.
    pub matched_rules: Vec<&'static str>,
    /// Edits that found their selector and were written.
    pub applied: usize,
}

impl Resolution {
    pub fn any_rule_matched(&self) -> bool {
        !self.matched_rules.is_empty()
    }

    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

#[derive(Debug, Clone)]
pub struct ModificationResolver {
    rules: Vec<Rule>,
}

impl Default for ModificationResolver {
    fn default() -> Self {
        Self {
            rules: vec![
                Rule {
                    name: "color",
                    extract: color_edits,
                },
                Rule {
                    name: "size",
                    extract: size_edits,
                },
            ],
        }
    }
}

impl ModificationResolver {
    pub fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule against `input` and apply the resulting edits to
    /// `model`. An empty model is first replaced by the contact form
    /// baseline so there is something to edit.
    pub fn resolve(&self, input: &str, model: &mut DocumentModel) -> Resolution {
        if !model.is_populated() {
            log::info!("no live document; editing the contact form baseline");
            *model = contact_form();
        }

        let input = input.to_lowercase();
        let mut working = model.clone();
        let mut resolution = Resolution::default();

        for rule in &self.rules {
            let edits = (rule.extract)(&input);
            if edits.is_empty() {
                continue;
            }
            log::debug!("rule '{}' proposed {} edit(s)", rule.name, edits.len());
            resolution.matched_rules.push(rule.name);
            for edit in &edits {
                if apply_edit(&mut working, edit) {
                    resolution.applied += 1;
                }
            }
        }

        *model = working;
        resolution
    }
}

/// Write one declaration. Selectors missing from the sheet are skipped.
fn apply_edit(model: &mut DocumentModel, edit: &StyleEdit) -> bool {
    match model.styles.rule_mut(edit.selector) {
        Some(declarations) => {
            declarations.set(edit.property, edit.value.as_str());
            true
        }
        None => {
            log::debug!("selector '{}' not in stylesheet; skipping", edit.selector);
            false
        }
    }
}

/// `change [the] (background|bg|color) [of] <element> [to] <color>`
fn color_edits(input: &str) -> Vec<StyleEdit> {
    let Some(caps) = COLOR_PATTERN.captures(input) else {
        return Vec::new();
    };
    let (Some(word), Some(color)) = (caps.get(1), caps.get(2)) else {
        return Vec::new();
    };
    let Some(target) = TargetElement::from_word(word.as_str()) else {
        log::debug!("no element matches '{}'", word.as_str());
        return Vec::new();
    };

    let property = if input.contains("background") || input.contains("bg") {
        "background"
    } else {
        "color"
    };
    vec![StyleEdit::new(target.selector(), property, color.as_str())]
}

fn size_edits(input: &str) -> Vec<StyleEdit> {
    let grows = input.contains("larger") || input.contains("bigger");
    if !grows || !input.contains(TargetElement::Button.keyword()) {
        return Vec::new();
    }

    let selector = TargetElement::Button.selector();
    vec![
        StyleEdit::new(selector, "padding", ENLARGED_PADDING),
        StyleEdit::new(selector, "font-size", ENLARGED_FONT_SIZE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::Declarations;

    fn resolve(input: &str, model: &mut DocumentModel) -> Resolution {
        ModificationResolver::default().resolve(input, model)
    }

    fn rule<'a>(model: &'a DocumentModel, selector: &str) -> &'a Declarations {
        model.styles.rule(selector).unwrap()
    }

    #[test]
    fn test_target_vocabulary() {
        assert_eq!(TargetElement::from_word("phone"), Some(TargetElement::Phone));
        assert_eq!(TargetElement::from_word("phonenumber"), Some(TargetElement::Phone));
        assert_eq!(TargetElement::from_word("username"), Some(TargetElement::Name));
        assert_eq!(TargetElement::from_word("message"), Some(TargetElement::Message));
        assert_eq!(TargetElement::from_word("buttons"), Some(TargetElement::Button));
        assert_eq!(TargetElement::from_word("sidebar"), None);
    }

    #[test]
    fn test_background_of_phone() {
        let mut model = contact_form();
        let before = model.clone();
        let resolution = resolve("change the background of phone to yellow", &mut model);

        assert!(resolution.changed());
        assert_eq!(rule(&model, ".phone-input").get("background"), Some("yellow"));

        let mut expected = before;
        expected
            .styles
            .rule_mut(".phone-input")
            .unwrap()
            .set("background", "yellow");
        assert_eq!(model, expected);
    }

    #[test]
    fn test_color_without_background_word_sets_color() {
        let mut model = contact_form();
        resolve("change the color of button to red", &mut model);
        let button = rule(&model, ".submit-button");
        assert_eq!(button.get("color"), Some("red"));
        assert_eq!(button.get("background"), Some("#3b82f6"));
    }

    #[test]
    fn test_bg_shorthand_sets_background() {
        let mut model = contact_form();
        resolve("Change bg button green", &mut model);
        assert_eq!(rule(&model, ".submit-button").get("background"), Some("green"));
    }

    #[test]
    fn test_unknown_element_is_noop() {
        let mut model = contact_form();
        let before = model.clone();
        let resolution = resolve("change the color of sidebar to blue", &mut model);
        assert_eq!(model, before);
        assert!(!resolution.any_rule_matched());
        assert!(!resolution.changed());
    }

    #[test]
    fn test_absent_selector_is_skipped() {
        // ".form-input" only exists as part of a compound selector.
        let mut model = contact_form();
        let before = model.clone();
        let resolution = resolve("change the background of name to blue", &mut model);
        assert_eq!(resolution.matched_rules, vec!["color"]);
        assert!(!resolution.changed());
        assert_eq!(model, before);
    }

    #[test]
    fn test_bigger_button_preserves_other_properties() {
        let mut model = contact_form();
        resolve("change the background of button to black", &mut model);
        resolve("make the button bigger", &mut model);

        let button = rule(&model, ".submit-button");
        assert_eq!(button.get("padding"), Some(ENLARGED_PADDING));
        assert_eq!(button.get("font-size"), Some(ENLARGED_FONT_SIZE));
        assert_eq!(button.get("background"), Some("black"));
        assert_eq!(button.get("color"), Some("white"));
        assert_eq!(button.get("cursor"), Some("pointer"));
        // padding keeps its original position
        assert_eq!(button.iter().nth(2), Some(("padding", ENLARGED_PADDING)));
    }

    #[test]
    fn test_larger_without_button_is_noop() {
        let mut model = contact_form();
        let before = model.clone();
        resolve("make the form larger", &mut model);
        assert_eq!(model, before);
    }

    #[test]
    fn test_color_and_size_in_one_command() {
        let mut model = contact_form();
        let resolution = resolve(
            "change the color of button to red and make the button bigger",
            &mut model,
        );
        assert_eq!(resolution.matched_rules, vec!["color", "size"]);
        assert_eq!(resolution.applied, 3);

        let button = rule(&model, ".submit-button");
        assert_eq!(button.get("color"), Some("red"));
        assert_eq!(button.get("padding"), Some(ENLARGED_PADDING));
        assert_eq!(button.get("font-size"), Some(ENLARGED_FONT_SIZE));
    }

    #[test]
    fn test_empty_model_recovers_baseline() {
        let mut model = DocumentModel::empty();
        resolve("change the background of phone to pink", &mut model);
        assert_eq!(model.element_count(), 5);
        assert_eq!(rule(&model, ".phone-input").get("background"), Some("pink"));
    }

    #[test]
    fn test_unmatched_command_on_empty_model_still_recovers() {
        let mut model = DocumentModel::empty();
        let resolution = resolve("update something", &mut model);
        assert!(!resolution.any_rule_matched());
        assert_eq!(model, contact_form());
    }

    #[test]
    fn test_registered_rule_runs_after_builtins() {
        fn rounder(input: &str) -> Vec<StyleEdit> {
            if input.contains("round") {
                vec![StyleEdit::new(".contact-form", "border-radius", "2rem")]
            } else {
                Vec::new()
            }
        }

        let mut resolver = ModificationResolver::default();
        resolver.register(Rule {
            name: "round",
            extract: rounder,
        });
        assert_eq!(resolver.rules().len(), 3);

        let mut model = contact_form();
        let resolution = resolver.resolve("make the form more round", &mut model);
        assert_eq!(resolution.matched_rules, vec!["round"]);
        assert_eq!(rule(&model, ".contact-form").get("border-radius"), Some("2rem"));
    }
}
