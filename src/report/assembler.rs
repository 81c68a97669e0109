//! XSIG upload to renderer-ready report data.

use chrono::{DateTime, Utc};

use crate::core::format::{MAX_FILENAME_LENGTH, format_datetime_es, safe_filename};
use crate::core::{InformeError, InvoiceRecord};
use crate::xsig::{extract_invoice, extract_signature_at, unwrap_container};

/// Registration metadata supplied alongside the uploaded document.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationParams {
    /// Registry entry number.
    pub registry_number: String,
    pub registry_type: String,
    /// RCF number assigned by the invoice registry.
    pub rcf_number: String,
    pub registered_at: DateTime<Utc>,
}

/// Everything the invoice-report renderer consumes, assembled once per
/// request and not mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportData {
    pub invoice: InvoiceRecord,
    pub registry_number: String,
    pub registry_type: String,
    pub rcf_number: String,
    /// Registration timestamp formatted `DD/MM/YYYY HH:MM`.
    pub registered_at: String,
}

/// Build report data from raw XSIG bytes: unwrap the container, extract the
/// invoice and the signature, and merge in the registration metadata.
pub fn report_from_xsig(
    bytes: &[u8],
    params: RegistrationParams,
) -> Result<ReportData, InformeError> {
    report_from_xsig_at(bytes, params, Utc::now())
}

/// Same as [`report_from_xsig`] with an explicit clock for certificate
/// status evaluation.
pub fn report_from_xsig_at(
    bytes: &[u8],
    params: RegistrationParams,
    now: DateTime<Utc>,
) -> Result<ReportData, InformeError> {
    if bytes.is_empty() {
        return Err(InformeError::Empty);
    }
    let payload = unwrap_container(bytes);
    let xml = std::str::from_utf8(payload)
        .map_err(|e| InformeError::Xml(format!("el contenido no es UTF-8: {e}")))?;

    let mut invoice = extract_invoice(xml)?;
    invoice.signature = extract_signature_at(xml, now);
    log::info!(
        "factura {} extraída ({} líneas)",
        invoice.number,
        invoice.lines.len()
    );

    Ok(ReportData {
        invoice,
        registered_at: format_datetime_es(&params.registered_at),
        registry_number: params.registry_number,
        registry_type: params.registry_type,
        rcf_number: params.rcf_number,
    })
}

/// Download filename for a generated invoice report: the RCF number when
/// present, the registry number otherwise, sanitized for header use.
pub fn download_filename(rcf_number: &str, registry_number: &str) -> String {
    let base = if rcf_number.trim().is_empty() {
        registry_number
    } else {
        rcf_number
    };
    safe_filename(&format!("Factura_{}.pdf", base.trim()), MAX_FILENAME_LENGTH)
}
