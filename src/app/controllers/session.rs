use crate::app::domain::{Command, DocumentModel, EngineSettings, GeneratedArtifacts, Transcript};
use crate::app::services::classifier::{Intent, classify};
use crate::app::services::resolver::{ModificationResolver, Resolution};
use crate::app::services::serializer::render;
use crate::app::services::templates::TemplateLibrary;

pub const MODIFY_ACK: &str = "I've updated the styling as requested. The changes have been applied successfully. \
You can continue to modify any other aspects of the form!";

pub const CREATE_FALLBACK_ACK: &str = "I've started a fresh page for you. Describe what you'd like to build, \
for example \"create a contact form\", and I'll generate it.";

const CREATE_UNMATCHED: &str = "I don't have a template for that yet, so the page is empty. \
Try \"create a contact form\".";

const MODIFY_UNMATCHED: &str = "I couldn't find anything to change in that request, so the page is unchanged. \
Try \"change the background of phone to yellow\" or \"make the button bigger\".";

const MODIFY_NO_EFFECT: &str = "I understood the request, but that part of the page has no style I can change, \
so nothing was updated.";

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    pub artifacts: GeneratedArtifacts,
    pub response: String,
    /// Whether a template or at least one edit rule recognized the command.
    pub understood: bool,
}

/// One live document plus the machinery that edits it. Sessions share no
/// state, so several can run side by side; wrap one in a mutex to share it.
pub struct Session {
    model: DocumentModel,
    artifacts: GeneratedArtifacts,
    templates: TemplateLibrary,
    resolver: ModificationResolver,
    announce_unmatched: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TemplateLibrary::default(), ModificationResolver::default())
    }
}

impl Session {
    pub fn new(templates: TemplateLibrary, resolver: ModificationResolver) -> Self {
        Self {
            model: DocumentModel::empty(),
            artifacts: GeneratedArtifacts::default(),
            templates,
            resolver,
            announce_unmatched: false,
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        let mut session = Self::default();
        session.announce_unmatched = settings.announce_unmatched;
        session
    }

    pub fn model(&self) -> &DocumentModel {
        &self.model
    }

    /// Artifacts produced by the most recent command.
    pub fn artifacts(&self) -> &GeneratedArtifacts {
        &self.artifacts
    }

    pub fn templates_mut(&mut self) -> &mut TemplateLibrary {
        &mut self.templates
    }

    pub fn resolver_mut(&mut self) -> &mut ModificationResolver {
        &mut self.resolver
    }

    /// Classify, build or edit, re-render. Appends the input and the
    /// response to `transcript`.
    pub fn handle(&mut self, input: &str, transcript: &mut Transcript) -> Reply {
        let intent = classify(input, &self.artifacts);
        let (response, understood) = match intent {
            Intent::Create => self.create(input),
            Intent::Modify => self.modify(input),
        };

        self.artifacts = render(&self.model);

        transcript.push(Command::user(input));
        transcript.push(Command::assistant(response.as_str()));

        Reply {
            intent,
            artifacts: self.artifacts.clone(),
            response,
            understood,
        }
    }

    fn create(&mut self, input: &str) -> (String, bool) {
        match self.templates.lookup(input) {
            Some(template) => {
                log::info!("creating '{}'", template.phrase);
                self.model = (template.build)();
                (template.acknowledgement.to_string(), true)
            }
            None => {
                log::info!("no template matched; starting an empty page");
                self.model = DocumentModel::empty();
                let response = if self.announce_unmatched {
                    CREATE_UNMATCHED
                } else {
                    CREATE_FALLBACK_ACK
                };
                (response.to_string(), false)
            }
        }
    }

    fn modify(&mut self, input: &str) -> (String, bool) {
        let resolution: Resolution = self.resolver.resolve(input, &mut self.model);
        log::info!(
            "modification matched {:?}, applied {} edit(s)",
            resolution.matched_rules,
            resolution.applied
        );

        let understood = resolution.any_rule_matched();
        let response = if !self.announce_unmatched || resolution.changed() {
            MODIFY_ACK
        } else if understood {
            MODIFY_NO_EFFECT
        } else {
            MODIFY_UNMATCHED
        };
        (response.to_string(), understood)
    }
}
