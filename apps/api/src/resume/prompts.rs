// Resume extraction prompt template.
// The resume text is embedded verbatim; it is not escaped against prompt injection.

const RESUME_TEXT_SLOT: &str = "{resume_text}";

pub const RESUME_EXTRACT_PROMPT: &str = r#"Extract the following fields from this resume text and return raw JSON.
Do NOT use Markdown formatting.

Resume Text:
{resume_text}

JSON Structure:
{
    "name": "string",
    "email": "string",
    "phone": "string",
    "skills": ["string", "string"],
    "education": [{"degree": "string", "institution": "string"}],
    "experience": [{"job_title": "string", "company": "string", "duration": "string"}]
}"#;

pub fn build_prompt(text: &str) -> String {
    RESUME_EXTRACT_PROMPT.replace(RESUME_TEXT_SLOT, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_verbatim() {
        let text = "Jane Doe\njane@example.com\n\"quoted\" {braces}";
        let prompt = build_prompt(text);
        assert!(prompt.contains(text));
        assert!(!prompt.contains(RESUME_TEXT_SLOT));
    }

    #[test]
    fn test_prompt_describes_all_six_fields() {
        let prompt = build_prompt("x");
        for field in ["name", "email", "phone", "skills", "education", "experience"] {
            assert!(prompt.contains(&format!("\"{field}\"")), "missing field {field}");
        }
        for nested in ["degree", "institution", "job_title", "company", "duration"] {
            assert!(prompt.contains(&format!("\"{nested}\"")), "missing field {nested}");
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt("same"), build_prompt("same"));
    }

    #[test]
    fn test_placeholder_inside_resume_is_not_expanded_twice() {
        let prompt = build_prompt("literal {resume_text} here");
        assert_eq!(prompt.matches("literal {resume_text} here").count(), 1);
    }
}
