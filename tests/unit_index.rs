use region_latency::telemetry::index::RegionSummary;
use region_latency::{RegionIndex, Sample, TelemetryError};

// --- Test helpers ---

fn fixture() -> Vec<Sample> {
    vec![
        Sample::new("us-east", 100.0, 99.9),
        Sample::new("EU-West", 80.0, 99.0),
        Sample::new("US-East", 200.0, 99.5),
        Sample::new(" us-east ", 150.0, 99.8),
        Sample::new("eu-west", 90.0, 98.0),
        Sample::new("apac", 300.0, 97.5),
    ]
}

// --- Build ---

#[test]
fn test_build_groups_by_normalized_region() {
    let index = RegionIndex::build(fixture()).unwrap();
    assert_eq!(index.len(), 6);
    assert_eq!(index.region_count(), 3);
    assert_eq!(index.lookup("us-east").len(), 3);
    assert_eq!(index.lookup("eu-west").len(), 2);
    assert_eq!(index.lookup("apac").len(), 1);
}

#[test]
fn test_build_preserves_source_order_within_bucket() {
    let index = RegionIndex::build(fixture()).unwrap();
    let latencies: Vec<f64> = index.lookup("us-east").iter().map(|s| s.latency_ms).collect();
    assert_eq!(latencies, vec![100.0, 200.0, 150.0]);
}

#[test]
fn test_every_sample_lands_in_exactly_one_bucket() {
    let index = RegionIndex::build(fixture()).unwrap();
    let bucketed: usize = index.regions().iter().map(|r| r.samples).sum();
    assert_eq!(bucketed, fixture().len());
}

#[test]
fn test_build_keeps_original_region_spelling() {
    let index = RegionIndex::build(fixture()).unwrap();
    let spellings: Vec<&str> = index.lookup("us-east").iter().map(|s| s.region.as_str()).collect();
    assert_eq!(spellings, vec!["us-east", "US-East", " us-east "]);
}

#[test]
fn test_build_empty() {
    let index = RegionIndex::build(Vec::new()).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.region_count(), 0);
    assert!(index.regions().is_empty());
}

#[test]
fn test_build_rejects_non_finite_values() {
    let err = RegionIndex::build(vec![
        Sample::new("us-east", 100.0, 99.9),
        Sample::new("us-east", f64::NAN, 99.9),
    ])
    .unwrap_err();
    assert!(matches!(err, TelemetryError::DataIntegrity(ref msg) if msg.contains("sample 1")));

    let err = RegionIndex::build(vec![Sample::new("apac", 100.0, f64::INFINITY)]).unwrap_err();
    assert!(matches!(err, TelemetryError::DataIntegrity(_)));
}

#[test]
fn test_build_rejects_negative_latency() {
    let err = RegionIndex::build(vec![Sample::new("apac", -1.0, 99.0)]).unwrap_err();
    assert!(matches!(err, TelemetryError::DataIntegrity(ref msg) if msg.contains("negative latency")));
}

#[test]
fn test_build_rejects_values_outside_decimal_range() {
    let err = RegionIndex::build(vec![Sample::new("apac", 1e30, 99.0)]).unwrap_err();
    assert!(matches!(err, TelemetryError::DataIntegrity(ref msg) if msg.contains("latency_ms")));

    let err = RegionIndex::build(vec![
        Sample::new("apac", 120.0, 99.0),
        Sample::new("apac", 120.0, -1e30),
    ])
    .unwrap_err();
    assert!(matches!(err, TelemetryError::DataIntegrity(ref msg) if msg.contains("sample 1") && msg.contains("uptime_pct")));
}

#[test]
fn test_build_accepts_large_representable_values() {
    let index = RegionIndex::build(vec![Sample::new("apac", 5e28, 99.0)]).unwrap();
    assert_eq!(index.lookup("apac").len(), 1);
}

// --- Lookup ---

#[test]
fn test_lookup_is_case_and_whitespace_insensitive() {
    let index = RegionIndex::build(fixture()).unwrap();
    let a = index.lookup("US-East");
    let b = index.lookup("us-east");
    let c = index.lookup(" us-east ");
    let d = index.lookup("\tUS-EAST\n");
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c, d);
    assert_eq!(a.len(), 3);
}

#[test]
fn test_lookup_unknown_region_is_empty() {
    let index = RegionIndex::build(fixture()).unwrap();
    assert!(index.lookup("mars-north").is_empty());
    assert!(index.lookup("").is_empty());
}

// --- Catalogue ---

#[test]
fn test_regions_sorted_with_counts() {
    let index = RegionIndex::build(fixture()).unwrap();
    assert_eq!(
        index.regions(),
        vec![
            RegionSummary { region: "apac".into(), samples: 1 },
            RegionSummary { region: "eu-west".into(), samples: 2 },
            RegionSummary { region: "us-east".into(), samples: 3 },
        ]
    );
}
