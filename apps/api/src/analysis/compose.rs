//! Analysis request composition — the fixed prompt template.

/// Interpolates the extracted resume text and the job description into the
/// analysis prompt. Pure string construction: empty inputs are valid and
/// produce the template with empty substitutions.
///
/// The template wording (including the odd spacing around the colons) is part
/// of the observable contract with the agent and must not be reformatted.
pub fn compose(resume_text: &str, job_description_text: &str) -> String {
    format!(
        "The Candidate Resume is :{resume_text}\n and the Job Description is: {job_description_text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_template() {
        assert_eq!(
            compose("R", "J"),
            "The Candidate Resume is :R\n and the Job Description is: J"
        );
    }

    #[test]
    fn test_empty_substitutions() {
        assert_eq!(
            compose("", ""),
            "The Candidate Resume is :\n and the Job Description is: "
        );
    }

    #[test]
    fn test_multiline_inputs_pass_through() {
        let prompt = compose("line1\nline2", "req1\nreq2");
        assert!(prompt.starts_with("The Candidate Resume is :line1\nline2"));
        assert!(prompt.ends_with(" and the Job Description is: req1\nreq2"));
    }
}
