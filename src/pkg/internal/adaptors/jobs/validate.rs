use serde_json::Value;

use crate::pkg::server::handlers::jobs::CreateJobInput;

/// Checks a candidate posting and returns one human-readable message per
/// failed rule. An empty list means the payload is valid. `type` and
/// `postedDate` are intentionally not checked; they only get defaulted
/// during normalization.
pub fn validate_job(input: &CreateJobInput) -> Vec<String> {
    let mut errors = Vec::new();

    let title_ok = matches!(&input.title, Some(Value::String(s)) if !s.trim().is_empty());
    if !title_ok {
        errors.push("Title is required and must be a non-empty string".to_string());
    }

    match &input.salary {
        None | Some(Value::Null) => errors.push("Salary is required".to_string()),
        Some(Value::Number(salary)) => {
            if salary.as_f64().is_some_and(|value| value < 0.0) {
                errors.push("Salary cannot be negative".to_string());
            }
        }
        Some(_) => errors.push("Salary must be a valid number".to_string()),
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(title: Value, salary: Value) -> CreateJobInput {
        CreateJobInput {
            title: Some(title),
            salary: Some(salary),
            ..CreateJobInput::default()
        }
    }

    #[test]
    fn valid_payload_has_no_errors() {
        assert!(validate_job(&input(json!("QA"), json!(50000))).is_empty());
    }

    #[test]
    fn missing_title_and_salary_are_both_reported() {
        let errors = validate_job(&CreateJobInput::default());
        assert_eq!(
            errors,
            vec![
                "Title is required and must be a non-empty string".to_string(),
                "Salary is required".to_string(),
            ]
        );
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let errors = validate_job(&input(json!("   "), json!(50000)));
        assert_eq!(errors, vec!["Title is required and must be a non-empty string"]);
    }

    #[test]
    fn non_string_title_is_rejected() {
        let errors = validate_job(&input(json!(42), json!(50000)));
        assert_eq!(errors, vec!["Title is required and must be a non-empty string"]);
    }

    #[test]
    fn null_salary_counts_as_missing() {
        let errors = validate_job(&input(json!("QA"), Value::Null));
        assert_eq!(errors, vec!["Salary is required"]);
    }

    #[test]
    fn non_numeric_salary_is_rejected() {
        let errors = validate_job(&input(json!("QA"), json!("50k")));
        assert_eq!(errors, vec!["Salary must be a valid number"]);
    }

    #[test]
    fn negative_salary_is_rejected() {
        let errors = validate_job(&input(json!("QA"), json!(-5)));
        assert_eq!(errors, vec!["Salary cannot be negative"]);
    }

    #[test]
    fn zero_salary_is_allowed() {
        assert!(validate_job(&input(json!("Intern"), json!(0))).is_empty());
    }

    #[test]
    fn empty_title_and_negative_salary_yield_two_messages() {
        let errors = validate_job(&input(json!(""), json!(-5)));
        assert_eq!(errors.len(), 2);
    }
}
