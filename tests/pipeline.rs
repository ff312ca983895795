// End-to-end pipeline tests: CSV fixture on disk through
// load → resolve → clean → aggregate.
use collision_viewer::cleaner::clean;
use collision_viewer::loader::load_raw;
use collision_viewer::schema::{resolve_columns, SchemaError, TIME_COL};
use collision_viewer::stats::{CrashSummary, UNKNOWN_VEHICLE};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn full_pipeline_matches_the_worked_scenario() {
    let tmp = TempDir::new().unwrap();
    let path = write_fixture(
        &tmp,
        "crashes.csv",
        "CRASH DATE,CRASH TIME,NUMBER OF PERSONS INJURED,NUMBER OF PERSONS KILLED,\
ON STREET NAME,CROSS STREET NAME,VEHICLE TYPE CODE 1\n\
2024-01-05,08:00,2,,MAIN ST,,Sedan\n\
2024-01-06,09:00,bad,1,,MAIN ST,Sedan\n\
not-a-date,,,,,,\n",
    );

    let table = load_raw(&path).unwrap();
    let cols = resolve_columns(&table.headers).unwrap();
    let (records, report) = clean(&table, &cols);
    let summary = CrashSummary::compute(&records);

    // Third row is dropped for its unparseable timestamp.
    assert_eq!(report.raw_rows, 3);
    assert_eq!(report.dropped_rows, 1);
    assert_eq!(summary.total_crashes, 2);
    assert_eq!(summary.total_injured, 2);
    assert_eq!(summary.total_killed, 1);

    // One street seen once in each street column.
    assert_eq!(summary.street_counts.count("MAIN ST"), 2);
    assert_eq!(summary.street_counts.total(), 2);
    assert_eq!(summary.top_streets, vec![("MAIN ST".to_string(), 2)]);

    assert_eq!(summary.vehicle_type_counts.count("Sedan"), 2);
    assert_eq!(summary.most_common_vehicle, ("Sedan".to_string(), 2));

    assert_eq!(summary.monthly_counts[0], 2);
    assert!(summary.monthly_counts[1..].iter().all(|&n| n == 0));
    assert_eq!(summary.peak_month, 1);
}

#[test]
fn vehicle_feature_is_disabled_when_the_column_is_missing() {
    let tmp = TempDir::new().unwrap();
    let path = write_fixture(
        &tmp,
        "no_vehicles.csv",
        "CRASH DATE,CRASH TIME,ON STREET NAME\n\
01/05/2024,08:00,MAIN ST\n\
01/09/2024,10:30,BROADWAY\n",
    );

    let table = load_raw(&path).unwrap();
    let cols = resolve_columns(&table.headers).unwrap();
    assert!(!cols.vehicle_type.is_present());
    let (records, _) = clean(&table, &cols);
    let summary = CrashSummary::compute(&records);

    assert_eq!(summary.total_crashes, 2);
    assert!(summary.vehicle_type_counts.is_empty());
    assert_eq!(summary.most_common_vehicle, (UNKNOWN_VEHICLE.to_string(), 0));
    assert!(summary.top_3_vehicles.is_empty());
}

#[test]
fn missing_time_column_stops_the_pipeline() {
    let tmp = TempDir::new().unwrap();
    let path = write_fixture(
        &tmp,
        "no_time.csv",
        "CRASH DATE,BOROUGH\n01/05/2024,BROOKLYN\n",
    );

    let table = load_raw(&path).unwrap();
    let err = resolve_columns(&table.headers).unwrap_err();
    assert_eq!(err, SchemaError::MissingColumn(TIME_COL));
}

#[test]
fn monthly_table_stays_dense_across_the_year() {
    let tmp = TempDir::new().unwrap();
    let mut csv = String::from("CRASH DATE,CRASH TIME\n");
    // Two crashes in March, one each in July and December.
    for line in [
        "03/01/2024,00:15",
        "03/20/2024,18:40",
        "07/04/2024,12:00",
        "12/31/2024,23:59",
    ] {
        csv.push_str(line);
        csv.push('\n');
    }
    let path = write_fixture(&tmp, "seasonal.csv", &csv);

    let table = load_raw(&path).unwrap();
    let cols = resolve_columns(&table.headers).unwrap();
    let (records, _) = clean(&table, &cols);
    let summary = CrashSummary::compute(&records);

    assert_eq!(summary.monthly_counts.iter().sum::<u64>(), 4);
    assert_eq!(summary.monthly_counts[2], 2);
    assert_eq!(summary.peak_month, 3);
    assert_eq!(summary.peak(), ("March", 2));
}
