use chrono::NaiveDate;
use cycle_forecast::gaps::{annotate, group_by_month_descending};
use cycle_forecast::{MemoryRangeStore, MergeEngine, PredictionSettings, RangeStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MemoryRangeStore::new(
        "\
03.11.2023,07.11.2023
01.12.2023,05.12.2023
29.12.2023,02.01.2024
27.01.2024,31.01.2024
24.02.2024,28.02.2024
",
    );

    let settings = PredictionSettings::new(3, 4)?;
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).ok_or("invalid date")?;

    let merged = MergeEngine::update_as_of(&mut store, &settings, today)?;
    println!("Stored text after merge:\n{}", store.contents());

    for bucket in group_by_month_descending(&annotate(&merged)) {
        println!("{}", bucket.month);
        for entry in &bucket.entries {
            let kind = if entry.range.is_future(today) {
                "predicted"
            } else {
                "history"
            };
            println!("  {}  gap {:>2} days  {}", entry.range, entry.gap_days, kind);
        }
    }

    // A second cycle discards the earlier prediction and recomputes it
    let again = MergeEngine::update_as_of(&mut store, &settings, today)?;
    assert_eq!(again, merged);
    assert_eq!(store.load()?, merged);

    Ok(())
}
