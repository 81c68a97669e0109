//! Fixed Facturae code tables.
//!
//! These are closed vocabularies from the Facturae schema; lookups fall back
//! to a sentinel or to the raw code depending on what the renderer shows.

use super::types::NOT_AVAILABLE;

/// Map an InvoiceClass code to its Spanish description.
///
/// Unknown codes yield the `"N/A"` sentinel, not the raw code.
pub fn invoice_class_description(code: &str) -> &'static str {
    match code {
        "OO" => "Original",
        "OR" => "Original Rectificativa",
        "OC" => "Original Recapitulativa",
        "CO" => "Duplicado Original",
        "CR" => "Duplicado Rectificativa",
        "CC" => "Duplicado Recapitulativa",
        _ => NOT_AVAILABLE,
    }
}

/// Map a PaymentMeans code to its label. Unknown codes pass through raw.
pub fn payment_means_label(code: &str) -> &str {
    match code {
        "01" => "Al contado",
        "02" => "Recibo domiciliado",
        "03" => "Recibo",
        "04" => "Transferencia",
        "05" => "Letra aceptada",
        "06" => "Crédito documentario",
        "07" => "Contrato adjudicación",
        "08" => "Letra de cambio",
        "09" => "Pagaré a la orden",
        "10" => "Pagaré no a la orden",
        "11" => "Cheque",
        "12" => "Reposición",
        "13" => "Especiales",
        "14" => "Compensación",
        "15" => "Giro postal",
        "16" => "Cheque conformado",
        "17" => "Cheque bancario",
        "18" => "Pago contra reembolso",
        "19" => "Pago mediante tarjeta",
        other => other,
    }
}

/// Label for a withheld-tax type code.
pub fn withheld_tax_label(code: &str) -> &'static str {
    match code {
        "01" => "IVA",
        "02" => "IGIC",
        "03" => "IPSI",
        "04" => "IRPF",
        _ => "Otros",
    }
}

/// Label for an output-tax type code.
pub fn output_tax_label(code: &str) -> &'static str {
    match code {
        "01" => "IVA",
        "02" => "IGIC",
        "03" => "IPSI",
        "04" => "IRPF",
        _ => "Otros",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_invoice_classes() {
        assert_eq!(invoice_class_description("OO"), "Original");
        assert_eq!(invoice_class_description("CR"), "Duplicado Rectificativa");
        assert_eq!(invoice_class_description("CC"), "Duplicado Recapitulativa");
    }

    #[test]
    fn unknown_invoice_class_is_sentinel() {
        assert_eq!(invoice_class_description("XX"), "N/A");
        assert_eq!(invoice_class_description(""), "N/A");
    }

    #[test]
    fn payment_means_known_and_raw_fallback() {
        assert_eq!(payment_means_label("04"), "Transferencia");
        assert_eq!(payment_means_label("19"), "Pago mediante tarjeta");
        // Unknown codes print as-is, not as a sentinel.
        assert_eq!(payment_means_label("99"), "99");
        assert_eq!(payment_means_label(""), "");
    }

    #[test]
    fn withheld_labels() {
        assert_eq!(withheld_tax_label("04"), "IRPF");
        assert_eq!(withheld_tax_label("01"), "IVA");
        assert_eq!(withheld_tax_label("07"), "Otros");
    }

    #[test]
    fn output_labels() {
        assert_eq!(output_tax_label("01"), "IVA");
        assert_eq!(output_tax_label("03"), "IPSI");
        assert_eq!(output_tax_label(""), "Otros");
    }
}
