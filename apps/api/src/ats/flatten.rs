use crate::models::resume::ResumeContent;

/// Collapses a structured resume into one lowercase blob for substring search.
///
/// Populated fields are appended with a trailing space in a fixed order:
/// personal, experience, education, then skills joined by spaces. Absent or
/// empty fields add nothing.
pub fn flatten_resume(resume: &ResumeContent) -> String {
    let mut text = String::new();

    if let Some(personal) = &resume.personal {
        for field in [
            &personal.name,
            &personal.email,
            &personal.phone,
            &personal.address,
            &personal.linkedin,
            &personal.github,
        ] {
            push_field(&mut text, field.as_deref());
        }
    }

    for exp in resume.experience() {
        push_field(&mut text, exp.role.as_deref());
        push_field(&mut text, exp.company.as_deref());
        push_field(&mut text, exp.duration.as_deref());
        push_field(&mut text, exp.description.as_deref());
    }

    for edu in resume.education() {
        push_field(&mut text, edu.school.as_deref());
        push_field(&mut text, edu.degree.as_deref());
        push_field(&mut text, edu.duration.as_deref());
    }

    text.push_str(&resume.skills().join(" "));

    text.to_lowercase()
}

fn push_field(text: &mut String, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        text.push_str(v);
        text.push(' ');
    }
}
