use crate::types::CheckResult;

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const LOOKUP_FAILED: &str = "Error checking pwned passwords";
pub const NO_SUGGESTIONS: &str = "No suggestions";

/// Join suggestions with `", "` in order, falling back to [`NO_SUGGESTIONS`].
pub fn feedback_line(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        NO_SUGGESTIONS.to_string()
    } else {
        suggestions.join(", ")
    }
}

pub fn breach_sentence(breach_count: u64) -> String {
    if breach_count > 0 {
        format!("This password has been found in {breach_count} breaches.")
    } else {
        "This password is safe from known breaches.".to_string()
    }
}

/// Render the HTML fragment returned for a completed check.
pub fn render_report(result: &CheckResult) -> String {
    format!(
        r#"
    <h2>Password Check Results</h2>
    <p>Score (0-4): {score}</p>
    <p>Feedback: {feedback}</p>
    <p>Estimated Crack Time: {crack_time}</p>
    <p>{breach}</p>
    <br>
    <a href="/">Try Another Password</a>
  "#,
        score = result.score,
        feedback = feedback_line(&result.suggestions),
        crack_time = result.crack_time_display,
        breach = breach_sentence(result.breach_count),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(suggestions: &[&str], breach_count: u64) -> CheckResult {
        CheckResult {
            score: 1,
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            crack_time_display: "2 minutes".into(),
            breach_count,
        }
    }

    #[test]
    fn empty_suggestions_use_fallback() {
        assert_eq!(feedback_line(&[]), "No suggestions");
    }

    #[test]
    fn suggestions_joined_in_order() {
        let s = vec!["Use a longer keyboard pattern".to_string(), "Avoid dates".to_string()];
        assert_eq!(feedback_line(&s), "Use a longer keyboard pattern, Avoid dates");
    }

    #[test]
    fn breach_sentence_variants() {
        assert_eq!(breach_sentence(3), "This password has been found in 3 breaches.");
        assert_eq!(breach_sentence(0), "This password is safe from known breaches.");
    }

    #[test]
    fn report_contains_every_section() {
        let html = render_report(&result(&["Add another word or two."], 17));
        assert!(html.contains("<p>Score (0-4): 1</p>"));
        assert!(html.contains("<p>Feedback: Add another word or two.</p>"));
        assert!(html.contains("<p>Estimated Crack Time: 2 minutes</p>"));
        assert!(html.contains("<p>This password has been found in 17 breaches.</p>"));
        assert!(html.contains(r#"<a href="/">Try Another Password</a>"#));
    }

    #[test]
    fn report_for_clean_password() {
        let html = render_report(&result(&[], 0));
        assert!(html.contains("<p>Feedback: No suggestions</p>"));
        assert!(html.contains("<p>This password is safe from known breaches.</p>"));
    }
}
