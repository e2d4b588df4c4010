use cycle_forecast::{ForecastError, PredictionSettings};
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let settings = PredictionSettings::default();
    assert_eq!(settings.window_size, 3);
    assert_eq!(settings.period_duration, 4);
    assert!(settings.validate().is_ok());
}

#[rstest]
#[case(1, 3)]
#[case(5, 6)]
#[case(3, 4)]
fn test_new_accepts_bounds(#[case] window: usize, #[case] duration: i64) {
    let settings = PredictionSettings::new(window, duration).unwrap();
    assert_eq!(settings.window_size, window);
    assert_eq!(settings.period_duration, duration);
}

#[rstest]
#[case(0, 4)]
#[case(6, 4)]
#[case(3, 2)]
#[case(3, 7)]
#[case(3, -1)]
fn test_new_rejects_out_of_range(#[case] window: usize, #[case] duration: i64) {
    assert!(matches!(
        PredictionSettings::new(window, duration),
        Err(ForecastError::InvalidSettings(_))
    ));
}

#[test]
fn test_from_toml_partial() {
    let settings = PredictionSettings::from_toml("window_size = 2\n").unwrap();
    assert_eq!(settings.window_size, 2);
    assert_eq!(settings.period_duration, 4);

    let empty = PredictionSettings::from_toml("").unwrap();
    assert_eq!(empty, PredictionSettings::default());
}

#[test]
fn test_from_toml_errors() {
    assert!(matches!(
        PredictionSettings::from_toml("window_size = \"three\""),
        Err(ForecastError::ConfigError(_))
    ));
    assert!(matches!(
        PredictionSettings::from_toml("period_duration = 9"),
        Err(ForecastError::InvalidSettings(_))
    ));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "window_size = 4").unwrap();
    writeln!(file, "period_duration = 5").unwrap();

    let settings = PredictionSettings::load(file.path()).unwrap();
    assert_eq!(settings, PredictionSettings::new(4, 5).unwrap());
}

#[test]
fn test_load_missing_file() {
    let result = PredictionSettings::load("/nonexistent/cycle_owl.toml");
    assert!(matches!(result, Err(ForecastError::ConfigError(_))));
}
