use chrono::NaiveDate;
use cycle_forecast::editor::replace;
use cycle_forecast::gaps::{annotate, group_by_month_descending};
use cycle_forecast::store::import_text;
use cycle_forecast::{
    MergeEngine, MonthKey, PredictionSettings, RangeStore, TemplateSeededStore,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const TEMPLATE: &str = "\
05.11.2023,09.11.2023
03.12.2023,07.12.2023
31.12.2023,04.01.2024
28.01.2024,01.02.2024
";

#[test]
fn test_full_cycle_workflow() {
    // 1. First run seeds the store from the template
    let dir = tempdir().unwrap();
    let path = dir.path().join("date_ranges.txt");
    let mut store = TemplateSeededStore::new(&path, TEMPLATE);
    let today = date(2024, 2, 10);

    // 2. Merge with a three-interval window
    let settings = PredictionSettings::new(3, 5).unwrap();
    let merged = MergeEngine::update_as_of(&mut store, &settings, today).unwrap();
    assert_eq!(merged.len(), 7);
    assert_eq!(
        merged[4..].iter().map(|r| r.start).collect::<Vec<_>>(),
        vec![date(2024, 2, 25), date(2024, 3, 24), date(2024, 4, 21)]
    );
    assert!(merged[4..].iter().all(|r| r.is_future(today)));
    assert_eq!(merged[4].end, date(2024, 3, 1));

    // 3. Group for display
    let buckets = group_by_month_descending(&annotate(&merged));
    assert_eq!(buckets[0].month, MonthKey { year: 2024, month: 4 });
    assert_eq!(buckets.last().unwrap().month, MonthKey { year: 2023, month: 11 });
    assert!(buckets
        .iter()
        .flat_map(|b| b.entries.iter())
        .skip(1)
        .all(|entry| entry.gap_days == 28 || entry.gap_days == 0));

    // 4. Edit a historical range and persist it
    let edited = replace(
        &merged,
        date(2024, 1, 28),
        date(2024, 2, 1),
        date(2024, 1, 30),
        date(2024, 2, 3),
    );
    store.save(&edited).unwrap();

    // 5. Next cycle predicts from the edited history
    let remerged = MergeEngine::update_as_of(&mut store, &settings, today).unwrap();
    assert_eq!(remerged[3].start, date(2024, 1, 30));
    // intervals 28, 28, 30: mean 28.67 -> 28
    assert_eq!(remerged[4].start, date(2024, 2, 27));

    // 6. Template is never re-applied once the file exists
    assert!(fs::read_to_string(&path).unwrap().contains("30.01.2024,03.02.2024"));
}

#[test]
fn test_import_then_update() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("date_ranges.txt");
    let mut store = TemplateSeededStore::new(&path, "");

    let imported = import_text(&mut store, TEMPLATE).unwrap();
    assert_eq!(imported.len(), 4);

    let settings = PredictionSettings::new(1, 3).unwrap();
    let merged = MergeEngine::update_as_of(&mut store, &settings, date(2024, 2, 10)).unwrap();
    assert_eq!(merged.len(), 5);
    assert_eq!(merged[4].start, date(2024, 2, 25));
    assert_eq!(merged[4].end, date(2024, 2, 28));
}
