use std::fs;

use white_box::WhiteBoxError;
use white_box::aggregator::{Level, ZoneSummary, aggregate};
use white_box::output::write_table;
use white_box::parser::read_trips;

const SAMPLE: &str = include_str!("fixtures/gig_sample.csv");

fn sample_table() -> Vec<ZoneSummary> {
    let trips = read_trips(SAMPLE.as_bytes()).expect("Failed to parse fixture");
    aggregate(&trips).expect("Failed to aggregate fixture")
}

#[test]
fn test_full_pipeline() {
    let table = sample_table();

    let zones: Vec<&str> = table.iter().map(|r| r.zone.as_str()).collect();
    assert_eq!(
        zones,
        vec![
            "Gandhipuram",
            "Peelamedu",
            "RS_Puram",
            "Saibaba_Colony",
            "Singanallur",
            "Ukkadam"
        ]
    );

    let levels: Vec<(Level, Level)> = table
        .iter()
        .map(|r| (r.assignment_level, r.incentive_likelihood))
        .collect();
    assert_eq!(
        levels,
        vec![
            (Level::High, Level::Medium),
            (Level::Medium, Level::High),
            (Level::Low, Level::Low),
            (Level::High, Level::High),
            (Level::Medium, Level::Medium),
            (Level::Low, Level::Low),
        ]
    );

    let gandhipuram = &table[0];
    assert_eq!(gandhipuram.avg_fare, 200.0);
    assert_eq!(gandhipuram.min_fare, 100.0);
    assert_eq!(gandhipuram.max_fare, 300.0);
    assert!((gandhipuram.incentive_rate - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_mode_tie_keeps_first_seen_demand() {
    let table = sample_table();
    let ukkadam = table.iter().find(|r| r.zone == "Ukkadam").unwrap();

    assert_eq!(ukkadam.dominant_demand, "Low");
}

#[test]
fn test_two_zones_end_to_end() {
    let data = "\
pickup_zone,total_fare,incentive_bonus,zone_demand_level
Peelamedu,150,0,High
Ukkadam,80,3,Medium
Peelamedu,170,0,High
Ukkadam,90,0,Medium
";
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gig_dataset.csv");
    let output = dir.path().join("zone_ui_data.csv");
    fs::write(&input, data).unwrap();

    let trips = read_trips(fs::File::open(&input).unwrap()).unwrap();
    let table = aggregate(&trips).unwrap();
    write_table(&output, &table).unwrap();

    let mut rdr = csv::Reader::from_path(&output).unwrap();
    let rows: Vec<ZoneSummary> = rdr.deserialize().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert!(!row.explanation.is_empty());
        assert!(row.explanation.contains(&row.dominant_demand));
    }
    assert_eq!(rows, table);
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    write_table(&first, &sample_table()).unwrap();
    write_table(&second, &sample_table()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_unknown_zone_fails_whole_run() {
    let data = format!("{SAMPLE}15,Nowhere,100,0,High\n");
    let trips = read_trips(data.as_bytes()).unwrap();

    let err = aggregate(&trips).unwrap_err();

    assert!(matches!(err, WhiteBoxError::UnknownZone(ref z) if z == "Nowhere"));
}

#[test]
fn test_missing_field_fails_whole_run() {
    let data = format!("{SAMPLE}15,Ukkadam,100,,High\n");

    let err = read_trips(data.as_bytes()).unwrap_err();

    assert!(matches!(
        err,
        WhiteBoxError::MissingField {
            record: 15,
            field: "incentive_bonus"
        }
    ));
}
