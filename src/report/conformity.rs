//! Conformity-report payload validation (JSON path).
//!
//! This path involves no XML: the caller posts a fully structured payload and
//! the only real rule is cross-field — a non-conforming result must carry a
//! rejection reason.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::ValidationError;

use super::areas::{AreaCatalog, find_logo, normalize_area_code};

/// One budget application line. Legacy payloads use the `vapl*` field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetApplication {
    #[serde(default, alias = "vaplorg")]
    pub org: String,
    #[serde(default, alias = "vaplfun")]
    pub fun: String,
    #[serde(default, alias = "vapleco")]
    pub eco: String,
}

fn default_true() -> bool {
    true
}

fn default_conforme() -> String {
    "conforme".to_string()
}

/// Inbound conformity payload, as posted by the caller.
///
/// `resultado_conformidad` stays a raw string here so an unknown value
/// surfaces as a named validation error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformityPayload {
    #[serde(default)]
    pub punto_entrada: String,
    #[serde(default)]
    pub id_punto_entrada: String,
    /// Printed verbatim; no date parsing is applied.
    #[serde(default)]
    pub fecha_hora_entrada: String,
    pub num_rcf: String,

    #[serde(default)]
    pub proveedor: String,
    #[serde(default)]
    pub nif_proveedor: String,
    #[serde(default)]
    pub fecha_expedicion: String,
    #[serde(default)]
    pub vfacnum: String,
    #[serde(default)]
    pub importe_total: String,
    #[serde(default)]
    pub concepto: String,

    #[serde(default)]
    pub area_code: Option<String>,
    #[serde(default)]
    pub area_name: Option<String>,
    #[serde(default)]
    pub unidad: String,

    #[serde(default)]
    pub aplicaciones: Vec<BudgetApplication>,
    #[serde(default)]
    pub expediente_contrato: String,
    #[serde(default = "default_true")]
    pub apps_single_row: bool,

    #[serde(default = "default_conforme")]
    pub resultado_conformidad: String,
    #[serde(default)]
    pub motivo_no_conformidad: String,

    #[serde(default)]
    pub observaciones: String,
}

/// Validated conformity outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConformityResult {
    Conforme,
    NoConforme,
}

impl std::fmt::Display for ConformityResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConformityResult::Conforme => f.write_str("conforme"),
            ConformityResult::NoConforme => f.write_str("no_conforme"),
        }
    }
}

/// Validated and resolved conformity report data, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConformityReport {
    pub punto_entrada: String,
    pub id_punto_entrada: String,
    pub fecha_hora_entrada: String,
    pub num_rcf: String,

    pub proveedor: String,
    pub nif_proveedor: String,
    pub fecha_expedicion: String,
    pub vfacnum: String,
    pub importe_total: String,
    pub concepto: String,

    /// Normalized two-digit area code, empty when the payload had none.
    pub area_code: String,
    /// Resolved per payload → catalog → `"Área <code>"` → empty.
    pub area_name: String,
    pub area_logo: Option<PathBuf>,
    pub unidad: String,

    pub aplicaciones: Vec<BudgetApplication>,
    pub expediente_contrato: String,
    pub apps_single_row: bool,

    pub resultado: ConformityResult,
    /// Trimmed; non-empty whenever `resultado` is `NoConforme`.
    pub motivo_no_conformidad: String,
    pub observaciones: String,
}

/// Validate a conformity payload and resolve area name and logo against the
/// catalog.
pub fn build_conformity_report(
    payload: ConformityPayload,
    catalog: &AreaCatalog,
) -> Result<ConformityReport, ValidationError> {
    let resultado = match payload.resultado_conformidad.as_str() {
        "conforme" => ConformityResult::Conforme,
        "no_conforme" => ConformityResult::NoConforme,
        _ => {
            return Err(ValidationError::new(
                "resultado_conformidad",
                "debe ser 'conforme' o 'no_conforme'",
            ));
        }
    };

    let motivo = payload.motivo_no_conformidad.trim().to_string();
    if resultado == ConformityResult::NoConforme && motivo.is_empty() {
        return Err(ValidationError::new(
            "motivo_no_conformidad",
            "es obligatorio cuando resultado_conformidad = 'no_conforme'",
        ));
    }

    let area_code = normalize_area_code(payload.area_code.as_deref().unwrap_or_default());
    let area_name = payload
        .area_name
        .filter(|n| !n.trim().is_empty())
        .or_else(|| catalog.name(&area_code).map(str::to_string))
        .unwrap_or_else(|| {
            if area_code.is_empty() {
                String::new()
            } else {
                format!("Área {area_code}")
            }
        });
    let area_logo = if area_code.is_empty() {
        None
    } else {
        find_logo(&area_code)
    };

    let aplicaciones = payload
        .aplicaciones
        .into_iter()
        .map(|a| BudgetApplication {
            org: a.org.trim().to_string(),
            fun: a.fun.trim().to_string(),
            eco: a.eco.trim().to_string(),
        })
        .collect();

    Ok(ConformityReport {
        punto_entrada: payload.punto_entrada,
        id_punto_entrada: payload.id_punto_entrada,
        fecha_hora_entrada: payload.fecha_hora_entrada,
        num_rcf: payload.num_rcf,
        proveedor: payload.proveedor,
        nif_proveedor: payload.nif_proveedor,
        fecha_expedicion: payload.fecha_expedicion,
        vfacnum: payload.vfacnum,
        importe_total: payload.importe_total,
        concepto: payload.concepto,
        area_code,
        area_name,
        area_logo,
        unidad: payload.unidad,
        aplicaciones,
        expediente_contrato: payload.expediente_contrato,
        apps_single_row: payload.apps_single_row,
        resultado,
        motivo_no_conformidad: motivo,
        observaciones: payload.observaciones.trim().to_string(),
    })
}
