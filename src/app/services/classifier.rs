use crate::app::domain::GeneratedArtifacts;

/// Words that turn a command into an edit of the current page.
pub const MODIFY_TRIGGERS: &[&str] = &["change", "modify", "update", "make"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Create,
    Modify,
}

/// A command is an edit only when there is already markup to edit and it
/// uses one of [`MODIFY_TRIGGERS`]. Everything else starts a new page.
pub fn classify(input: &str, prior: &GeneratedArtifacts) -> Intent {
    if prior.markup.is_empty() {
        return Intent::Create;
    }

    let input = input.to_lowercase();
    if MODIFY_TRIGGERS.iter().any(|word| input.contains(word)) {
        Intent::Modify
    } else {
        Intent::Create
    }
}
