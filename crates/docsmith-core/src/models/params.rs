use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::document::DocumentType;
use super::resume::ResumeData;
use crate::error::CoreError;

/// Highest self-assessed skill level.
pub const MAX_SKILL_LEVEL: u8 = 5;

/// Parameters for a content-generation call, keyed by document type.
///
/// Payloads are validated with [`GenerationParams::validate`] before they
/// reach a generator, so downstream code can rely on the required fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "docType", rename_all = "kebab-case")]
#[ts(export)]
pub enum GenerationParams {
    Essay(EssayParams),
    Resume(ResumeData),
    CoverLetter(CoverLetterParams),
    Academic(EssayParams),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EssayParams {
    #[serde(default)]
    pub title: Option<String>,
    pub topic: String,
    /// Rhetorical type, e.g. "argumentative" or "expository".
    #[serde(rename = "type", default = "default_essay_type")]
    pub essay_type: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default = "default_academic_level")]
    pub academic_level: String,
}

fn default_essay_type() -> String {
    "argumentative".to_string()
}

fn default_tone() -> String {
    "academic".to_string()
}

fn default_length() -> String {
    "medium".to_string()
}

fn default_academic_level() -> String {
    "undergraduate".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CoverLetterParams {
    #[serde(default)]
    pub title: Option<String>,
    pub full_name: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl GenerationParams {
    pub fn doc_type(&self) -> DocumentType {
        match self {
            GenerationParams::Essay(_) => DocumentType::Essay,
            GenerationParams::Resume(_) => DocumentType::Resume,
            GenerationParams::CoverLetter(_) => DocumentType::CoverLetter,
            GenerationParams::Academic(_) => DocumentType::Academic,
        }
    }

    /// The caller-supplied title, if any. Blank titles count as absent.
    pub fn title(&self) -> Option<&str> {
        let title = match self {
            GenerationParams::Essay(p) | GenerationParams::Academic(p) => p.title.as_deref(),
            GenerationParams::Resume(r) => r.title.as_deref(),
            GenerationParams::CoverLetter(c) => c.title.as_deref(),
        };
        title.map(str::trim).filter(|t| !t.is_empty())
    }

    /// The JSON body sent to a generation function: the variant's fields
    /// without the type tag.
    pub fn body(&self) -> Result<serde_json::Value, CoreError> {
        let value = match self {
            GenerationParams::Essay(p) | GenerationParams::Academic(p) => serde_json::to_value(p)?,
            GenerationParams::Resume(r) => serde_json::to_value(r)?,
            GenerationParams::CoverLetter(c) => serde_json::to_value(c)?,
        };
        Ok(value)
    }

    /// Reject payloads missing the fields a generator cannot do without.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            GenerationParams::Essay(p) | GenerationParams::Academic(p) => {
                require("topic", &p.topic)
            }
            GenerationParams::Resume(r) => {
                require("personalInfo.fullName", &r.personal_info.full_name)?;
                r.skills.iter().enumerate().try_for_each(|(i, skill)| {
                    // 0 is the unrated default.
                    if skill.level > MAX_SKILL_LEVEL {
                        return Err(CoreError::InvalidField {
                            field: format!("skills[{i}].level"),
                            reason: format!("must be between 1 and {MAX_SKILL_LEVEL}"),
                        });
                    }
                    Ok(())
                })
            }
            GenerationParams::CoverLetter(c) => {
                require("fullName", &c.full_name)?;
                require("company", &c.company)?;
                require("position", &c.position)
            }
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField(field.to_string()));
    }
    Ok(())
}
