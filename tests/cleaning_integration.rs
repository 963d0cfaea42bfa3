use std::{fs, path::PathBuf};

use anyhow::Result;
use tabclean::{missing_value_counts, DataCleaner, DataLoader, Imputer, OutlierDetector};

const CSV_CONTENTS: &str = "\
customer_id,age,annual_spend,segment
1,10,520.5,basic
2,12,610.0,basic
3,12,,premium
4,13,580.25,basic
5,12,595.0,premium
6,11,560.75,basic
7,14,640.5,premium
8,13,605.0,basic
9,100,598.25,premium
10,,612.5,basic
";

fn write_fixture(name: &str) -> Result<PathBuf> {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir_all(&test_dir)?;

    let csv_path = test_dir.join("customers.csv");
    fs::write(&csv_path, CSV_CONTENTS)?;
    Ok(csv_path)
}

#[test]
fn load_detect_impute_workflow() -> Result<()> {
    let csv_path = write_fixture("load_detect_impute")?;

    let mut loader = DataLoader::new();
    loader.load_csv(csv_path.to_str().expect("utf-8 path"))?;
    assert_eq!(loader.get_row_count(), 10);

    // segment is textual and must not be offered for cleaning
    assert_eq!(
        loader.get_numeric_columns(),
        vec!["customer_id", "age", "annual_spend"]
    );

    let age = loader.extract_column("age")?;
    assert_eq!(age.present_count(), 9);

    let fences = OutlierDetector::compute_fences(&age);
    assert!((fences.lower - 10.5).abs() < 1e-9);
    assert!((fences.upper - 14.5).abs() < 1e-9);

    let outliers = OutlierDetector::find_outliers(&age, &fences);
    let values: Vec<f64> = outliers.iter().map(|o| o.value).collect();
    assert_eq!(values, vec![10.0, 100.0]);

    let imputed = Imputer::impute_missing(&age)?;
    assert_eq!(imputed.values()[9], Some(23.0));

    loader.replace_column(&imputed)?;
    let df = loader.get_dataframe().expect("frame is loaded");
    assert_eq!(df.column("age")?.null_count(), 0);

    Ok(())
}

#[test]
fn whole_table_cleaning_with_report() -> Result<()> {
    let csv_path = write_fixture("whole_table_cleaning")?;

    let mut loader = DataLoader::new();
    let df = loader.load_csv(csv_path.to_str().expect("utf-8 path"))?.clone();

    // the raw frame reports its gaps, most-missing first
    let missing = missing_value_counts(&df);
    assert_eq!(missing[0].1, 1);
    assert!(missing.iter().any(|(name, n)| name == "segment" && *n == 0));

    let (cleaned, report) = DataCleaner::clean_all_numeric(&df)?;
    assert_eq!(report.rows, 10);
    assert_eq!(report.columns.len(), 3);

    let age_report = report
        .columns
        .iter()
        .find(|c| c.name == "age")
        .expect("age column is reported");
    assert_eq!(age_report.outliers.len(), 2);
    assert_eq!(age_report.imputed_count, 1);
    assert!((age_report.summary.mean - 23.0).abs() < 1e-9);

    for name in ["customer_id", "age", "annual_spend"] {
        assert_eq!(cleaned.column(name)?.null_count(), 0, "{name} still has gaps");
    }

    let json = report.to_json()?;
    assert!(json.contains("\"annual_spend\""));

    Ok(())
}
