use home_energy::error::AppError;
use home_energy::household::HouseholdAnswers;
use home_energy::pricing::StubRegionResolver;
use home_energy::ComparisonService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Comparison service over the standard tables and the postcode stub.
pub(crate) fn standard_service() -> ComparisonService<StubRegionResolver> {
    ComparisonService::standard(StubRegionResolver)
}

/// Read questionnaire answers from a JSON file, or fall back to an empty
/// submission so every section takes its default.
pub(crate) fn load_answers(path: Option<&Path>) -> Result<HouseholdAnswers, AppError> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(HouseholdAnswers::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_yields_defaults() {
        let answers = load_answers(None).expect("defaults load");
        assert_eq!(answers, HouseholdAnswers::default());
    }

    #[test]
    fn answers_file_is_parsed() {
        let path = std::env::temp_dir().join(format!("answers-{}.json", std::process::id()));
        fs::write(&path, r#"{"cooktop": {"cooktop": "Electric induction"}}"#).expect("write");

        let answers = load_answers(Some(path.as_path())).expect("answers load");
        fs::remove_file(&path).expect("cleanup");

        assert!(answers.cooktop.is_some());
        assert!(answers.heating.is_none());
    }

    #[test]
    fn malformed_answers_surface_as_errors() {
        let path = std::env::temp_dir().join(format!("bad-answers-{}.json", std::process::id()));
        fs::write(&path, r#"{"cooktop": {"cooktop": "Gas hob"}}"#).expect("write");

        let result = load_answers(Some(path.as_path()));
        fs::remove_file(&path).expect("cleanup");

        assert!(matches!(result, Err(AppError::Answers(_))));
    }
}
