use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use planar_lab_core::{ConductorsTable, TableError};

const FIXTURE: &str = "\
id,spacegroup,number_of_total_atoms,lattice_angle_gamma_degree,formation_energy_ev_natom,bandgap_energy_ev
1,33,80.0,90.0,0.0680,3.4387
2,194,40.0,120.0,0.2490,2.9210
3,227,24.0,60.0,0.1821,1.5205
4,167,30.0,90.0,0.2108,2.5857
";

fn write_gz_fixture(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("{}_{}.csv.gz", name, std::process::id()));
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(FIXTURE.as_bytes()).unwrap();
    let compressed = encoder.finish().unwrap();
    std::fs::write(&path, compressed).unwrap();
    path
}

#[test]
fn load_gz_round_trips_the_table() {
    let path = write_gz_fixture("conductors_roundtrip");
    let table = ConductorsTable::load_gz(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(table.num_samples(), 4);
    assert_eq!(table.num_features(), 3);
    assert_eq!(
        table.feature_names,
        vec![
            "spacegroup",
            "number_of_total_atoms",
            "lattice_angle_gamma_degree"
        ]
    );
    assert_eq!(table.ids, vec!["1", "2", "3", "4"]);

    // Targets keep the documented column order.
    assert_eq!(table.targets.dim(), (4, 2));
    assert!((table.targets[[0, 0]] - 0.0680).abs() < 1e-12);
    assert!((table.targets[[0, 1]] - 3.4387).abs() < 1e-12);
    assert!((table.targets[[3, 0]] - 0.2108).abs() < 1e-12);

    // Features exclude the id and target columns.
    assert_eq!(table.features.dim(), (4, 3));
    assert!((table.features[[1, 0]] - 194.0).abs() < 1e-12);
    assert!((table.features[[2, 2]] - 60.0).abs() < 1e-12);
}

#[test]
fn load_gz_reports_missing_file_as_io_error() {
    let path = std::env::temp_dir().join("planar_lab_definitely_missing.csv.gz");
    let result = ConductorsTable::load_gz(&path);
    assert!(matches!(result, Err(TableError::Io(_))));
}

#[test]
fn load_gz_rejects_uncompressed_input() {
    let path = std::env::temp_dir().join(format!(
        "conductors_plain_{}.csv.gz",
        std::process::id()
    ));
    std::fs::write(&path, FIXTURE).unwrap();
    let result = ConductorsTable::load_gz(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(TableError::Io(_))));
}
