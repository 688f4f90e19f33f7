use std::fs;
use std::path::{Path, PathBuf};

use mapfile_drift::{Comparison, KNOWN_EXCEPTIONS, MissingRecord, Severity, find_missing};

fn fixture(name: &str) -> (PathBuf, PathBuf) {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    assert!(root.exists(), "missing fixture {}", root.display());
    (root.join("perfmon"), root.join("linux"))
}

fn load(name: &str) -> Comparison {
    let (perfmon, linux) = fixture(name);
    Comparison::new(&perfmon, &linux).expect("load fixture")
}

fn ids(missing: &[MissingRecord], severity: Severity) -> Vec<&str> {
    missing
        .iter()
        .filter(|r| r.severity == severity)
        .map(|r| r.model_id.as_str())
        .collect()
}

fn header_path(kernel_root: &Path) -> PathBuf {
    kernel_root.join("arch/x86/include/asm/intel-family.h")
}

#[test]
fn parses_mapfile_and_header_fixture() {
    let c = load("tgl_missing");
    assert_eq!(c.mapping().len(), 7);

    let skx: Vec<&str> = c
        .mapping()
        .iter()
        .filter(|r| r.family_model == "GenuineIntel-6-55-[56789ABCDEF]")
        .map(|r| r.model_id.as_str())
        .collect();
    assert_eq!(skx, vec!["0x55"]);

    // INTEL_FAM6_ANY is an alias, not a model
    assert_eq!(c.header().len(), 6);
    assert!(c.header().iter().all(|e| e.name != "INTEL_FAM6_ANY"));
}

#[test]
fn simple_missing_tigerlake() {
    let c = load("tgl_missing");
    assert_eq!(
        c.missing(),
        &[MissingRecord {
            name: "INTEL_FAM6_TIGERLAKE".to_string(),
            model_id: "0x8D".to_string(),
            severity: Severity::Error,
            description: String::new(),
        }]
    );
    assert!(c.is_missing_model());

    let lines = c.report().lines();
    assert!(lines.iter().any(|l| l.message.contains("INTEL_FAM6_TIGERLAKE")));
    assert!(!lines.iter().any(|l| l.message.contains("known acceptable mismatches")));
}

#[test]
fn none_missing_leaves_only_warnings() {
    let c = load("none_missing");
    assert!(ids(c.missing(), Severity::Error).is_empty());
    assert_eq!(ids(c.missing(), Severity::Warning), vec!["0x09", "0x0E", "0x8A"]);
    assert!(!c.is_missing_model());

    let lkf = c
        .missing()
        .iter()
        .find(|r| r.name == "INTEL_FAM6_LAKEFIELD")
        .unwrap();
    assert_eq!(lkf.description, "Lakefield event files are not published.");
}

#[test]
fn rocketlake_added_to_mapfile() {
    let c = load("rocketlake_added");
    assert!(c.missing().iter().all(|r| r.name != "INTEL_FAM6_ROCKETLAKE"));
    assert_eq!(ids(c.missing(), Severity::Warning), vec!["0x8A"]);
    assert!(!c.is_missing_model());
}

#[test]
fn kernel_removed_known_missing() {
    let c = load("kernel_removed_known_missing");
    assert!(c.missing().is_empty());
    assert!(!c.is_missing_model());

    let lines = c.report().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].message, "Mapfile and kernel model IDs are in sync.");
}

#[test]
fn empty_exception_list_turns_warnings_into_errors() {
    let (perfmon, linux) = fixture("none_missing");
    let c = Comparison::with_exceptions(&perfmon, &linux, &[]).unwrap();
    assert_eq!(ids(c.missing(), Severity::Error), vec!["0x09", "0x0E", "0x8A"]);
    assert!(c.missing().iter().all(|r| r.description.is_empty()));
    assert!(c.is_missing_model());
}

#[test]
fn comparison_matches_find_missing_over_loaded_tables() {
    for name in ["tgl_missing", "none_missing", "rocketlake_added"] {
        let c = load(name);
        assert_eq!(
            c.missing(),
            find_missing(c.mapping(), c.header(), KNOWN_EXCEPTIONS).as_slice(),
            "{name}"
        );
    }
}

#[test]
fn repeated_comparison_is_identical() {
    let first = load("none_missing");
    let second = load("none_missing");
    assert_eq!(first.missing(), second.missing());
}

#[test]
fn missing_mapfile() {
    let dir = tempfile::tempdir().unwrap();
    let perfmon = dir.path().join("perfmon");
    let linux = dir.path().join("linux");
    fs::create_dir_all(&perfmon).unwrap();
    let header = header_path(&linux);
    fs::create_dir_all(header.parent().unwrap()).unwrap();
    fs::write(&header, "#define INTEL_FAM6_TIGERLAKE\t\t0x8D\n").unwrap();

    let err = Comparison::new(&perfmon, &linux).unwrap_err();
    assert!(err.is_missing_file());
    assert!(err.to_string().contains("mapfile.csv"));
}

#[test]
fn missing_kernel_header() {
    let dir = tempfile::tempdir().unwrap();
    let perfmon = dir.path().join("perfmon");
    let linux = dir.path().join("linux");
    fs::create_dir_all(&perfmon).unwrap();
    fs::create_dir_all(&linux).unwrap();
    fs::write(
        perfmon.join("mapfile.csv"),
        "Family-model,Version,Filename,EventType\nGenuineIntel-6-8D,V1.08,/TGL/events/tigerlake_core.json,core\n",
    )
    .unwrap();

    let err = Comparison::new(&perfmon, &linux).unwrap_err();
    assert!(err.is_missing_file());
    assert!(err.to_string().contains("intel-family.h"));
}
