//! Deterministic stand-in for a generative model.
//!
//! Essays are three paragraphs (`intro`, `body`, `conclusion`) interpolated
//! from the topic, essay type, and academic level. Cover letters follow a
//! fixed letter template. Resumes are formatted by the Content Assembler.

use tera::{Context, Tera};
use tracing::info;

use docsmith_core::models::params::{CoverLetterParams, EssayParams, GenerationParams};
use docsmith_export::assemble::format_resume;

use crate::error::GenerateError;
use crate::generator::{ContentGenerator, GeneratedContent};

const ESSAY: &str = "essay";
const COVER_LETTER: &str = "cover_letter";

const ESSAY_TEMPLATE: &str = "\
This {{ essay_type }} essay explores {{ topic }} from a {{ academic_level }} perspective.

The impact of {{ topic }} has been widely studied in recent years. \
Research shows significant developments in this area.

In conclusion, {{ topic }} remains a critical area of study that warrants further investigation.";

const COVER_LETTER_TEMPLATE: &str = "\
Dear Hiring Manager,

I am writing to express my interest in the {{ position }} role at {{ company }}. \
I am confident that my background makes me a strong fit for your team.

{% if highlights %}Highlights of my experience include: {{ highlights | join(sep=\"; \") }}.\
{% else %}Throughout my career I have delivered consistent results and welcomed new challenges.{% endif %}

Thank you for considering my application. \
I look forward to discussing how I can contribute to {{ company }}.

Sincerely,
{{ full_name }}";

/// Template-backed generator. Same parameters, same text.
pub struct TemplateGenerator {
    tera: Tera,
}

impl TemplateGenerator {
    pub fn new() -> Result<Self, GenerateError> {
        let mut tera = Tera::default();
        tera.add_raw_template(ESSAY, ESSAY_TEMPLATE)?;
        tera.add_raw_template(COVER_LETTER, COVER_LETTER_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the text for `params` without going through the async trait.
    pub fn render(&self, params: &GenerationParams) -> Result<String, GenerateError> {
        params.validate()?;
        match params {
            GenerationParams::Essay(p) | GenerationParams::Academic(p) => self.render_essay(p),
            GenerationParams::Resume(data) => Ok(format_resume(data)),
            GenerationParams::CoverLetter(p) => self.render_cover_letter(p),
        }
    }

    fn render_essay(&self, params: &EssayParams) -> Result<String, GenerateError> {
        let mut context = Context::new();
        context.insert("topic", params.topic.trim());
        context.insert("essay_type", params.essay_type.trim());
        context.insert("academic_level", params.academic_level.trim());
        Ok(self.tera.render(ESSAY, &context)?)
    }

    fn render_cover_letter(&self, params: &CoverLetterParams) -> Result<String, GenerateError> {
        let highlights: Vec<&str> = params
            .highlights
            .iter()
            .map(|h| h.trim())
            .filter(|h| !h.is_empty())
            .collect();

        let mut context = Context::new();
        context.insert("full_name", params.full_name.trim());
        context.insert("company", params.company.trim());
        context.insert("position", params.position.trim());
        context.insert("highlights", &highlights);
        Ok(self.tera.render(COVER_LETTER, &context)?)
    }
}

impl ContentGenerator for TemplateGenerator {
    async fn generate(&self, params: &GenerationParams) -> Result<GeneratedContent, GenerateError> {
        let content = self.render(params)?;
        info!(doc_type = %params.doc_type(), chars = content.len(), "template content generated");
        Ok(GeneratedContent { content })
    }
}
