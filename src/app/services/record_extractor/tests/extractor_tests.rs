//! Tests for record lookup and materialization

use super::*;
use crate::Error;
use crate::app::models::Correction;
use crate::app::services::record_extractor::{extract, extract_all};
use crate::constants::correction_flags;

#[test]
fn test_extract_forsterite_fields() {
    let dataset = create_test_dataset(&[QUARTZ, FORSTERITE]);

    let fo = extract(&dataset, "fo").unwrap();

    assert_eq!(fo.name, "fo");
    assert_eq!(fo.formula, "Si1.0Mg2.0O4.0");
    assert_eq!(fo.atom_count, 7.0);
    assert_eq!(fo.site_count, 3);
    assert_eq!(fo.composition, vec![1.0, 1.0, 5.0, 2.0, 10.0, 4.0]);
    assert_eq!(fo.enthalpy, -2172.59);
    assert_eq!(fo.entropy, 0.0951);
    assert_eq!(fo.volume, 4.366);
    assert_eq!(fo.heat_capacity_coeffs, [0.2333, 1.494e-6, -603.8, -1.8697]);
    assert_eq!(fo.thermal_expansion, 2.85e-5);
    assert_eq!(fo.bulk_modulus_params, [1285.0, 3.84, -0.003]);
    assert_eq!(fo.correction_flag, correction_flags::NONE);
    assert!(fo.order_disorder_params.is_empty());
}

#[test]
fn test_extract_landau_parameters() {
    let dataset = create_test_dataset(&[FORSTERITE, QUARTZ]);

    let q = extract(&dataset, "q").unwrap();

    assert_eq!(q.correction_flag, correction_flags::LANDAU);
    assert_eq!(q.order_disorder_params, vec![847.0, 0.00495, 0.1188]);
    assert_eq!(
        q.correction().unwrap(),
        Correction::Landau {
            tc: 847.0,
            s_d: 0.00495,
            v_d: 0.1188
        }
    );
}

#[test]
fn test_extract_bragg_williams_parameters() {
    let dataset = create_test_dataset(&[SPINEL]);

    let sp = extract(&dataset, "sp").unwrap();

    assert_eq!(sp.correction_flag, correction_flags::BRAGG_WILLIAMS);
    assert_eq!(sp.order_disorder_params, vec![8.0, 0.0, 1.2, 0.0, 2.0, 1.0]);
    assert_eq!(sp.formula, "Mg1.0Al2.0O4.0");
}

#[test]
fn test_liquid_flag_is_forced() {
    let dataset = create_test_dataset(&[QUARTZ_LIQUID]);

    let liquid = extract(&dataset, "qL").unwrap();

    // flag column reads 0, but liquids are always excluded
    assert_eq!(liquid.correction_flag, correction_flags::LIQUID);
    assert_eq!(liquid.order_disorder_params, vec![0.0]);
    assert!(!liquid.is_emittable());
}

#[test]
fn test_extract_missing_record() {
    let dataset = create_test_dataset(&[FORSTERITE]);

    let result = extract(&dataset, "fa");

    assert!(matches!(result, Err(Error::RecordNotFound { name }) if name == "fa"));
}

#[test]
fn test_extract_all_keeps_file_order() {
    let dataset = create_test_dataset(&[QUARTZ, FORSTERITE, ANDALUSITE, QUARTZ_LIQUID]);

    let endmembers = extract_all(&dataset).unwrap();
    let names: Vec<&str> = endmembers.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(names, vec!["q", "fo", "and", "qL"]);
}

#[test]
fn test_extract_rejects_bad_number() {
    let broken = [
        "fo 3 1 1.0 5 2.0 10 4.0 1",
        "-2172.59 oops 4.366",
        "0.2333 1.494e-6 -603.8 -1.8697",
        "2.85e-5 1285 3.84 -0.003 0",
    ];
    let dataset = create_test_dataset(&[broken]);

    let result = extract(&dataset, "fo");

    assert!(matches!(
        result,
        Err(Error::MalformedField { row: 1, column: 1, .. })
    ));
}

#[test]
fn test_extract_rejects_unknown_component() {
    let broken = [
        "zz 1 42 1.0 1",
        "-1 0.1 1.0",
        "0.1 0 0 0",
        "0 100 4.0 -0.04 0",
    ];
    let dataset = create_test_dataset(&[broken]);

    assert!(matches!(
        extract(&dataset, "zz"),
        Err(Error::UnknownComponent { index: 42, .. })
    ));
}

#[test]
fn test_truncated_dataset() {
    let dataset = Dataset::parse("2 records\npre\npre\nfo 1 10 1.0 1\n1 1 1\n");

    assert!(matches!(
        extract(&dataset, "fo"),
        Err(Error::MalformedField { .. })
    ));
}
