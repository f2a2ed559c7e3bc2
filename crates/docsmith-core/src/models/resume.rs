use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Structured resume input, as collected by the resume builder form.
///
/// Field names follow the camelCase keys of the JSON payloads exchanged
/// with the generation functions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResumeData {
    /// Optional document title; resumes without one are exported as
    /// "Untitled Document".
    #[serde(default)]
    pub title: Option<String>,
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonalInfo {
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl PersonalInfo {
    /// Contact entries in display order, with blank or absent ones dropped.
    pub fn contact_entries(&self) -> Vec<&str> {
        [
            Some(self.email.as_str()),
            Some(self.phone.as_str()),
            Some(self.location.as_str()),
            self.linkedin.as_deref(),
            self.website.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Experience {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
}

impl Experience {
    /// `start - Present` for a current job (any end date is ignored),
    /// `start - end` otherwise, or just `start` when no end date was given.
    pub fn date_range(&self) -> String {
        if self.current {
            return format!("{} - Present", self.start_date);
        }
        match self.end_date.as_deref().map(str::trim) {
            Some(end) if !end.is_empty() => format!("{} - {end}", self.start_date),
            _ => self.start_date.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Education {
    pub fn date_range(&self) -> String {
        let end = self.end_date.trim();
        if end.is_empty() {
            self.start_date.clone()
        } else {
            format!("{} - {end}", self.start_date)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 1 to 5; 0 means unrated. Not printed.
    #[serde(default)]
    pub level: u8,
}

/// A labelled block of a formatted resume. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub label: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            lines: Vec::new(),
        }
    }
}
