use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;
use x509_parser::prelude::*;

use crate::core::format::parse_datetime_multi;
use crate::core::*;

/// Resolve the XAdES signature block of a Facturae document against the
/// current clock. See [`extract_signature_at`].
pub fn extract_signature(xml: &str) -> SignatureInfo {
    extract_signature_at(xml, Utc::now())
}

/// Resolve the first embedded X509 certificate and SigningTime into a
/// [`SignatureInfo`], evaluating validity against `now`.
///
/// Degradation rules: no certificate element means [`SignatureInfo::NotFound`];
/// undecodable certificate bytes mean [`SignatureInfo::ExtractionError`]; an
/// unparsable SigningTime keeps the verbatim text and marks the signing-time
/// status [`SigningTimeStatus::Undetermined`] while the current status is
/// still computed. None of these block invoice extraction.
pub fn extract_signature_at(xml: &str, now: DateTime<Utc>) -> SignatureInfo {
    let (cert_b64, signing_time) = match scan_signature_nodes(xml) {
        Ok(found) => found,
        Err(e) => return SignatureInfo::ExtractionError(e),
    };

    let Some(cert_b64) = cert_b64 else {
        log::debug!("documento sin elemento X509Certificate");
        return SignatureInfo::NotFound;
    };

    // Certificates arrive base64-wrapped with line breaks and sometimes
    // encoded carriage returns; strip all whitespace before decoding.
    let cert_clean: String = cert_b64.chars().filter(|c| !c.is_whitespace()).collect();
    let cert_der = match BASE64.decode(cert_clean.as_bytes()) {
        Ok(der) => der,
        Err(e) => {
            log::warn!("certificado con base64 inválido: {e}");
            return SignatureInfo::ExtractionError(format!(
                "no se pudo decodificar el certificado: {e}"
            ));
        }
    };

    let (_, cert) = match X509Certificate::from_der(&cert_der) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("certificado DER no analizable: {e}");
            return SignatureInfo::ExtractionError(format!(
                "no se pudo analizar el certificado: {e}"
            ));
        }
    };

    let validity = cert.validity();
    let (Some(not_before), Some(not_after)) = (
        DateTime::from_timestamp(validity.not_before.timestamp(), 0),
        DateTime::from_timestamp(validity.not_after.timestamp(), 0),
    ) else {
        return SignatureInfo::ExtractionError(
            "la validez del certificado está fuera de rango".to_string(),
        );
    };

    let current_status = if now < not_before {
        CertStatus::NotYetValid
    } else if now > not_after {
        CertStatus::Expired
    } else {
        CertStatus::Valid
    };

    let signing_time_raw = signing_time
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let status_at_signing = match &signing_time_raw {
        None => SigningTimeStatus::Undetermined(
            "la firma no incluye SigningTime".to_string(),
        ),
        Some(raw) => match parse_datetime_multi(raw) {
            Ok(at) if at >= not_before && at <= not_after => SigningTimeStatus::Valid,
            Ok(_) => SigningTimeStatus::NotValid,
            Err(reason) => SigningTimeStatus::Undetermined(reason),
        },
    };

    SignatureInfo::Found(SignatureDetails {
        signer: common_name(cert.subject()).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        tax_id: serial_number_attr(cert.subject())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        hash_algorithm: hash_algorithm_name(&cert).to_string(),
        signing_time: signing_time_raw
            .unwrap_or_else(|| SIGNING_TIME_NOT_SPECIFIED.to_string()),
        valid_from: not_before.format("%Y-%m-%d").to_string(),
        valid_to: not_after.format("%Y-%m-%d").to_string(),
        current_status,
        status_at_signing,
        issuer: common_name(cert.issuer())
            .unwrap_or_else(|| ISSUER_NOT_AVAILABLE.to_string()),
    })
}

/// Pull the first `X509Certificate` and `SigningTime` texts out of the
/// document, ignoring namespace prefixes.
fn scan_signature_nodes(xml: &str) -> Result<(Option<String>, Option<String>), String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut cert: Option<String> = None;
    let mut signing_time: Option<String> = None;
    let mut capture: Option<&'static str> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                match e.local_name().as_ref() {
                    b"X509Certificate" if cert.is_none() => capture = Some("cert"),
                    b"SigningTime" if signing_time.is_none() => capture = Some("time"),
                    _ => {}
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(target) = capture {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    let slot = if target == "cert" {
                        &mut cert
                    } else {
                        &mut signing_time
                    };
                    match slot {
                        Some(existing) => existing.push_str(&text),
                        None => *slot = Some(text),
                    }
                }
            }
            Ok(Event::End(_)) => capture = None,
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("XML inválido: {e}")),
            _ => {}
        }
        if cert.is_some() && signing_time.is_some() && capture.is_none() {
            break;
        }
    }
    Ok((cert, signing_time))
}

fn common_name(name: &X509Name<'_>) -> Option<String> {
    name.iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(|s| s.to_string())
}

/// The subject serialNumber attribute (OID 2.5.4.5), where Spanish qualified
/// certificates place the NIF.
fn serial_number_attr(name: &X509Name<'_>) -> Option<String> {
    name.iter_attributes()
        .find(|attr| attr.attr_type() == &x509_parser::oid_registry::OID_X509_SERIALNUMBER)
        .and_then(|attr| attr.as_str().ok())
        .map(|s| s.to_string())
}

/// Uppercased digest name derived from the certificate signature algorithm.
fn hash_algorithm_name(cert: &X509Certificate<'_>) -> &'static str {
    match cert.signature_algorithm.algorithm.to_id_string().as_str() {
        "1.2.840.113549.1.1.5" | "1.2.840.10040.4.3" | "1.2.840.10045.4.1" => "SHA1",
        "1.2.840.113549.1.1.11" | "1.2.840.10045.4.3.2" => "SHA256",
        "1.2.840.113549.1.1.12" | "1.2.840.10045.4.3.3" => "SHA384",
        "1.2.840.113549.1.1.13" | "1.2.840.10045.4.3.4" => "SHA512",
        _ => NOT_AVAILABLE,
    }
}
