use std::fs;
use std::path::PathBuf;

use catchment_core::{Axis, BehaviorLabel};
use catchment_io::{
    read_attributes_path, read_errors_path, read_ratings_path, Error, DEFAULT_DELIMITER,
    DEFAULT_ERROR_DELIMITER,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("catchment-io-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_load_all_inputs_from_disk() {
    let dir = scratch_dir("inputs");
    let ratings = dir.join("type_simple_complex.csv");
    let errors = dir.join("least_square_all_catchments.csv");
    let attributes = dir.join("catchments.csv");
    fs::write(&ratings, ",1.0,2.0\n1990.0,1.0,2.0\n1991.0,1.0,\n").unwrap();
    fs::write(&errors, ";1.0;2.0\n1990.0;0.1;0.9\n1991.0;0.2;0.8\n").unwrap();
    fs::write(&attributes, "catchment,area,landuse\n1,10,forest\n2,20,urban\n").unwrap();

    let ratings = read_ratings_path(&ratings, DEFAULT_DELIMITER, Axis::Year).unwrap();
    let errors = read_errors_path(&errors, DEFAULT_ERROR_DELIMITER, Axis::Year).unwrap();
    let attributes = read_attributes_path(&attributes, DEFAULT_DELIMITER, Axis::Catchment).unwrap();

    // ratings, errors and attributes agree on identifiers after normalisation
    assert_eq!(ratings.column_ids(), errors.column_ids());
    assert_eq!(ratings.row_ids(), &["1990", "1991"]);
    for id in ratings.column_ids() {
        assert!(attributes.position(id).is_some());
    }
    assert_eq!(ratings.get(1, 0), Some(&Some(BehaviorLabel::Simple)));
    assert_eq!(ratings.get(1, 1), Some(&None));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_wrong_delimiter_is_reported() {
    let dir = scratch_dir("delimiter");
    let errors = dir.join("errors.csv");
    fs::write(&errors, ";1;2\n1990;0.1;0.9\n").unwrap();

    // read with commas, the whole line is a single column
    let result = read_errors_path(&errors, b',', Axis::Year);
    assert!(matches!(result, Err(Error::EmptyTable(_))));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_non_numeric_error_cell() {
    let dir = scratch_dir("numeric");
    let errors = dir.join("errors.csv");
    fs::write(&errors, "year;1\n1990;high\n").unwrap();

    let err = read_errors_path(&errors, DEFAULT_ERROR_DELIMITER, Axis::Year).unwrap_err();
    assert!(err.to_string().contains("'high'"));

    fs::remove_dir_all(&dir).unwrap();
}
