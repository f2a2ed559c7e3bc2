use docsmith_core::models::resume::ResumeData;

/// Suggest a professional summary from what the resume already says.
///
/// Uses the first experience entry's position, the skill names, and the
/// first education entry. Missing pieces fall back to generic phrases.
pub fn suggest_summary(data: &ResumeData) -> String {
    let position = first_nonblank(data.experience.first().map(|e| e.position.as_str()))
        .unwrap_or("the industry");

    let skills = data
        .skills
        .iter()
        .map(|s| s.name.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let skills = if skills.is_empty() {
        "relevant areas"
    } else {
        skills.as_str()
    };

    let education = data.education.first();
    let institution = first_nonblank(education.map(|e| e.institution.as_str()))
        .unwrap_or("higher education");
    let field = first_nonblank(education.map(|e| e.field_of_study.as_str())).unwrap_or("my field");

    format!(
        "Dedicated professional with experience in {position} seeking to leverage my skills in {skills}. \
         Graduate of {institution} with a degree in {field}, passionate about delivering exceptional \
         results and continuous growth."
    )
}

fn first_nonblank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
