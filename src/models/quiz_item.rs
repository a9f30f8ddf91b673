use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::{Validate, ValidationError, ValidationErrors};

/// A catalogue entry: one quiz item of a single kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    /// Unique identifier, assigned by the store at creation. Ids grow
    /// monotonically, so ascending id equals insertion order.
    pub id: u64,

    /// Human-readable title; the only field search matches against
    pub title: String,

    /// Kind-specific payload
    #[serde(flatten)]
    pub variant: QuizVariant,

    /// Soft reference to a related item; not checked at write time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sibling_id: Option<u64>,
}

impl QuizItem {
    /// Assemble a catalogue entry from a validated draft and its assigned id
    pub fn from_draft(id: u64, draft: QuizItemDraft) -> Self {
        Self {
            id,
            title: draft.title,
            variant: draft.variant,
            sibling_id: draft.sibling_id,
        }
    }

    /// Wire tag of the active variant
    pub fn kind(&self) -> &'static str {
        self.variant.tag()
    }
}

/// Kind-specific payload. The tag decides which fields exist, so an item
/// can never carry another kind's fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum QuizVariant {
    #[serde(rename = "ANAGRAM", rename_all = "camelCase")]
    Anagram {
        anagram_type: AnagramType,
        #[serde(default)]
        blocks: Vec<AnagramBlock>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        solution: Option<String>,
    },

    #[serde(rename = "MCQ", rename_all = "camelCase")]
    Mcq {
        #[serde(default)]
        options: Vec<McqOption>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        solution: Option<String>,
    },

    #[serde(rename = "READ_ALONG")]
    ReadAlong,
}

impl QuizVariant {
    /// Wire tag of this variant
    pub fn tag(&self) -> &'static str {
        match self {
            QuizVariant::Anagram { .. } => "ANAGRAM",
            QuizVariant::Mcq { .. } => "MCQ",
            QuizVariant::ReadAlong => "READ_ALONG",
        }
    }
}

/// Whether an anagram scrambles words or whole sentences
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, EnumString, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AnagramType {
    Word,
    Sentence,
}

/// One fragment of an anagram prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnagramBlock {
    pub text: String,

    /// Whether the fragment is offered to the player
    #[serde(default = "default_true")]
    pub show_in_option: bool,

    /// Whether the fragment belongs to the assembled answer
    #[serde(default)]
    pub is_answer: bool,
}

/// One selectable choice of a multiple-choice item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct McqOption {
    pub text: String,

    #[serde(default)]
    pub is_correct_answer: bool,
}

/// Creation input: a quiz item minus its store-assigned id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizItemDraft {
    pub title: String,

    #[serde(flatten)]
    pub variant: QuizVariant,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sibling_id: Option<u64>,
}

// The derive cannot express per-variant rules on a tagged enum, so the
// checks live here by hand.
impl Validate for QuizItemDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.title.trim().is_empty() {
            let mut err = ValidationError::new("length");
            err.message = Some("title must not be empty".into());
            errors.add("title", err);
        }

        match &self.variant {
            QuizVariant::Anagram { blocks, .. } => {
                if blocks.iter().any(|b| b.text.trim().is_empty()) {
                    let mut err = ValidationError::new("length");
                    err.message = Some("every block needs non-empty text".into());
                    errors.add("blocks", err);
                }
            }
            QuizVariant::Mcq { options, .. } => {
                if options.iter().any(|o| o.text.trim().is_empty()) {
                    let mut err = ValidationError::new("length");
                    err.message = Some("every option needs non-empty text".into());
                    errors.add("options", err);
                }
                if !options.iter().any(|o| o.is_correct_answer) {
                    let mut err = ValidationError::new("correct_option");
                    err.message = Some("at least one option must be marked correct".into());
                    errors.add("options", err);
                }
            }
            QuizVariant::ReadAlong => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn default_true() -> bool {
    true
}
