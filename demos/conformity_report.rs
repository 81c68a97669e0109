use facturae_informe::report::{AreaCatalog, ConformityPayload, build_conformity_report};

fn main() {
    let payload: ConformityPayload = serde_json::from_str(PAYLOAD).expect("invalid payload");
    let catalog = AreaCatalog::load("areas.csv").expect("could not read area catalog");

    let report = build_conformity_report(payload, &catalog).expect("payload failed validation");
    println!("=== Informe de conformidad ===");
    println!("Num. RCF:   {}", report.num_rcf);
    println!("Proveedor:  {} ({})", report.proveedor, report.nif_proveedor);
    println!("Área:       {} {}", report.area_code, report.area_name);
    println!("Resultado:  {}", report.resultado);
    if !report.motivo_no_conformidad.is_empty() {
        println!("Motivo:     {}", report.motivo_no_conformidad);
    }
    for app in &report.aplicaciones {
        println!("Aplicación: {} / {} / {}", app.org, app.fun, app.eco);
    }
}

const PAYLOAD: &str = r#"{
    "punto_entrada": "GE",
    "id_punto_entrada": "GE0001",
    "fecha_hora_entrada": "16/10/2025 10:45",
    "num_rcf": "2025-0001",
    "proveedor": "Suministros Ebro SL",
    "nif_proveedor": "B12345678",
    "fecha_expedicion": "15/10/2025",
    "vfacnum": "FA-0042",
    "importe_total": "121,00 €",
    "concepto": "Mantenimiento mensual",
    "area_code": "1",
    "unidad": "Contratación",
    "aplicaciones": [{"org": "01", "fun": "9200", "eco": "22699"}],
    "resultado_conformidad": "no_conforme",
    "motivo_no_conformidad": "El importe no coincide con el contrato"
}"#;
