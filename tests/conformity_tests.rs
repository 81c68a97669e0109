//! Conformity payload validation tests.
//!
//! Run with: `cargo test --features all --test conformity_tests`

#![cfg(feature = "report")]

use facturae_informe::report::{
    AreaCatalog, ConformityPayload, ConformityResult, build_conformity_report,
    normalize_area_code,
};

fn payload_json(resultado: &str, motivo: &str) -> String {
    format!(
        r#"{{
            "punto_entrada": "GE",
            "id_punto_entrada": "GE0001",
            "fecha_hora_entrada": "16/10/2025 10:45",
            "num_rcf": "2025-0001",
            "proveedor": "Suministros Ebro SL",
            "nif_proveedor": "B12345678",
            "fecha_expedicion": "15/10/2025",
            "vfacnum": "FA-0042",
            "importe_total": "117,00 €",
            "concepto": "Mantenimiento mensual",
            "area_code": "1",
            "unidad": "Contratación",
            "expediente_contrato": "EXP-22/2025",
            "aplicaciones": [
                {{"org": " 01 ", "fun": "9200", "eco": "22699"}},
                {{"vaplorg": "02", "vaplfun": "1500", "vapleco": "60900"}}
            ],
            "observaciones": "  sin incidencias  ",
            "resultado_conformidad": "{resultado}",
            "motivo_no_conformidad": "{motivo}"
        }}"#
    )
}

fn catalog_with(entries: &str) -> AreaCatalog {
    let dir = std::env::temp_dir().join(format!("areas-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("areas.csv");
    std::fs::write(&path, entries).unwrap();
    AreaCatalog::load(&path).unwrap()
}

#[test]
fn conforming_payload_builds() {
    let payload: ConformityPayload =
        serde_json::from_str(&payload_json("conforme", "")).unwrap();
    let report = build_conformity_report(payload, &AreaCatalog::default()).unwrap();
    assert_eq!(report.resultado, ConformityResult::Conforme);
    assert_eq!(report.num_rcf, "2025-0001");
    assert_eq!(report.observaciones, "sin incidencias");
    assert!(report.apps_single_row);
}

#[test]
fn legacy_application_aliases_and_trimming() {
    let payload: ConformityPayload =
        serde_json::from_str(&payload_json("conforme", "")).unwrap();
    let report = build_conformity_report(payload, &AreaCatalog::default()).unwrap();
    assert_eq!(report.aplicaciones.len(), 2);
    assert_eq!(report.aplicaciones[0].org, "01");
    assert_eq!(report.aplicaciones[1].org, "02");
    assert_eq!(report.aplicaciones[1].eco, "60900");
}

#[test]
fn non_conforming_requires_reason() {
    let payload: ConformityPayload =
        serde_json::from_str(&payload_json("no_conforme", "   ")).unwrap();
    let err = build_conformity_report(payload, &AreaCatalog::default()).unwrap_err();
    assert_eq!(err.field, "motivo_no_conformidad");
}

#[test]
fn non_conforming_with_reason_passes() {
    let payload: ConformityPayload =
        serde_json::from_str(&payload_json("no_conforme", "importe no coincide")).unwrap();
    let report = build_conformity_report(payload, &AreaCatalog::default()).unwrap();
    assert_eq!(report.resultado, ConformityResult::NoConforme);
    assert_eq!(report.motivo_no_conformidad, "importe no coincide");
}

#[test]
fn unknown_result_is_rejected_by_name() {
    let payload: ConformityPayload =
        serde_json::from_str(&payload_json("tal_vez", "")).unwrap();
    let err = build_conformity_report(payload, &AreaCatalog::default()).unwrap_err();
    assert_eq!(err.field, "resultado_conformidad");
}

#[test]
fn result_defaults_to_conforme() {
    let payload: ConformityPayload =
        serde_json::from_str(r#"{"num_rcf": "2025-0002"}"#).unwrap();
    let report = build_conformity_report(payload, &AreaCatalog::default()).unwrap();
    assert_eq!(report.resultado, ConformityResult::Conforme);
    assert_eq!(report.area_code, "");
    assert_eq!(report.area_name, "");
}

#[test]
fn num_rcf_is_mandatory() {
    assert!(serde_json::from_str::<ConformityPayload>(r#"{"proveedor": "X"}"#).is_err());
}

#[test]
fn area_name_resolution_order() {
    let catalog = catalog_with("1;Presidencia\n2;Hacienda\n");

    // explicit payload name wins over the catalog
    let mut payload: ConformityPayload =
        serde_json::from_str(&payload_json("conforme", "")).unwrap();
    payload.area_name = Some("Nombre manual".into());
    let report = build_conformity_report(payload, &catalog).unwrap();
    assert_eq!(report.area_name, "Nombre manual");

    // catalog lookup through the normalized code
    let payload: ConformityPayload =
        serde_json::from_str(&payload_json("conforme", "")).unwrap();
    let report = build_conformity_report(payload, &catalog).unwrap();
    assert_eq!(report.area_code, "01");
    assert_eq!(report.area_name, "Presidencia");

    // unknown code falls back to a synthetic label
    let mut payload: ConformityPayload =
        serde_json::from_str(&payload_json("conforme", "")).unwrap();
    payload.area_code = Some("9".into());
    let report = build_conformity_report(payload, &catalog).unwrap();
    assert_eq!(report.area_name, "Área 09");
}

#[test]
fn area_code_normalization() {
    assert_eq!(normalize_area_code("1"), "01");
    assert_eq!(normalize_area_code("A3"), "A3");
    assert_eq!(normalize_area_code(""), "");
}
