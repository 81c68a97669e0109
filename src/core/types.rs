use serde::{Deserialize, Serialize};

/// Sentinel for optional textual fields the source document did not provide.
///
/// The renderer expects printable strings everywhere; `"N/A"` is the exact
/// marker its layouts were built around. Do not change it.
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel for a missing certificate issuer.
pub const ISSUER_NOT_AVAILABLE: &str = "No disponible";

/// Sentinel for a missing XAdES signing time.
pub const SIGNING_TIME_NOT_SPECIFIED: &str = "No especificada";

fn na() -> String {
    NOT_AVAILABLE.to_string()
}

/// Seller, buyer or third-party identity with normalized address.
///
/// Domestic addresses expose town/postcode/province separately; overseas
/// addresses collapse everything into `address` and leave the components at
/// the sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyRecord {
    /// Corporate name, or first/last names concatenated for individuals.
    pub name: String,
    /// Tax identification number (NIF/CIF).
    pub tax_id: String,
    /// Composed single-line address.
    pub address: String,
    pub town: String,
    pub post_code: String,
    pub province: String,
}

impl Default for PartyRecord {
    fn default() -> Self {
        Self {
            name: na(),
            tax_id: na(),
            address: na(),
            town: na(),
            post_code: na(),
            province: na(),
        }
    }
}

/// The first three buyer-side administrative centres, as `"CODE - NAME"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdministrativeDestinations {
    /// Oficina contable.
    pub accounting_office: String,
    /// Órgano gestor.
    pub managing_body: String,
    /// Unidad tramitadora.
    pub processing_unit: String,
}

impl Default for AdministrativeDestinations {
    fn default() -> Self {
        Self {
            accounting_office: na(),
            managing_body: na(),
            processing_unit: na(),
        }
    }
}

/// One declared output-tax rate (TaxesOutputs/Tax).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxOutputLine {
    /// Facturae tax type code ("01" = IVA).
    pub type_code: String,
    pub rate: String,
    pub taxable_base: String,
    pub tax_amount: String,
    /// Equivalence surcharge rate.
    pub surcharge_rate: String,
    pub surcharge_amount: String,
}

/// One withheld tax (TaxesWithheld/Tax).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithheldTaxLine {
    pub code: String,
    /// Rate reformatted with trailing zeros stripped ("4.00" → "4").
    pub rate: String,
    pub amount: String,
    pub taxable_base: String,
}

/// Line-level charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeLine {
    pub reason: String,
    pub amount: String,
}

/// Line-level discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountLine {
    pub reason: String,
    pub amount: String,
}

/// One invoice line with pre-formatted numeric strings.
///
/// `quantity` and `total_cost` carry 2 decimals, `unit_price` 4; when the
/// source value does not parse as a number the raw string is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub total_cost: String,
    /// Free-text observation (AdditionalLineItemInformation), trimmed.
    pub note: String,
    /// Billing sub-period as `"DD/MM/YYYY–DD/MM/YYYY"`, empty when absent.
    pub period: String,
    pub charges: Vec<ChargeLine>,
    pub discounts: Vec<DiscountLine>,
}

/// Payment terms taken from the first PaymentDetails installment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTerms {
    pub due_date: String,
    pub amount: String,
    /// Human label resolved through the 19-entry payment-means table.
    pub means: String,
    pub means_code: String,
    pub iban: String,
}

/// InvoiceTotals block. Gross amount and general discounts default to
/// `"0.00"`, everything else to the sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub gross_amount: String,
    pub general_discounts: String,
    pub gross_before_taxes: String,
    pub tax_outputs: String,
    pub taxes_withheld: String,
    pub invoice_total: String,
    pub outstanding_amount: String,
    pub executable_amount: String,
}

impl Default for InvoiceTotals {
    fn default() -> Self {
        Self {
            gross_amount: "0.00".to_string(),
            general_discounts: "0.00".to_string(),
            gross_before_taxes: na(),
            tax_outputs: na(),
            taxes_withheld: na(),
            invoice_total: na(),
            outstanding_amount: na(),
            executable_amount: na(),
        }
    }
}

/// Document-level invoicing period, formatted `DD/MM/YYYY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicingPeriod {
    pub start: String,
    pub end: String,
}

/// Certificate validity relative to "now" (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertStatus {
    NotYetValid,
    Valid,
    Expired,
}

impl std::fmt::Display for CertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CertStatus::NotYetValid => "Certificado aún no válido (vigencia futura)",
            CertStatus::Valid => "Certificado actualmente válido",
            CertStatus::Expired => "Certificado caducado",
        };
        f.write_str(s)
    }
}

/// Certificate validity at the claimed signing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SigningTimeStatus {
    Valid,
    NotValid,
    /// The signing-time text matched none of the accepted formats.
    Undetermined(String),
}

impl std::fmt::Display for SigningTimeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SigningTimeStatus::Valid => {
                f.write_str("Certificado válido en la fecha de la firma")
            }
            SigningTimeStatus::NotValid => {
                f.write_str("Certificado NO era válido en la fecha de la firma")
            }
            SigningTimeStatus::Undetermined(reason) => {
                write!(f, "No se pudo validar la fecha de firma: {reason}")
            }
        }
    }
}

/// Decoded signer certificate data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureDetails {
    /// Subject common name.
    pub signer: String,
    /// Subject serialNumber attribute (OID 2.5.4.5) — the NIF on Spanish
    /// qualified certificates.
    pub tax_id: String,
    /// Signature hash algorithm, uppercased.
    pub hash_algorithm: String,
    /// The XAdES SigningTime text, verbatim.
    pub signing_time: String,
    /// Validity window start, `YYYY-MM-DD` in UTC.
    pub valid_from: String,
    /// Validity window end, `YYYY-MM-DD` in UTC.
    pub valid_to: String,
    pub current_status: CertStatus,
    pub status_at_signing: SigningTimeStatus,
    /// Issuer common name.
    pub issuer: String,
}

/// Outcome of the signature/certificate extraction.
///
/// A malformed or absent signature never blocks invoice rendering; the
/// report just carries a degraded signature section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SignatureInfo {
    /// No X509Certificate element in the document.
    NotFound,
    /// The certificate bytes could not be decoded.
    ExtractionError(String),
    Found(SignatureDetails),
}

/// The normalized invoice record handed whole to the renderer.
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Series code concatenated with the invoice number.
    pub number: String,
    /// Issue date as `DD/MM/YYYY` (raw string kept on parse failure).
    pub issue_date: String,
    pub document_type: String,
    pub currency: String,
    /// Invoice class mapped through the 6-entry table ("OO" → "Original").
    pub class_description: String,
    pub period: Option<InvoicingPeriod>,
    pub totals: InvoiceTotals,
    pub seller: PartyRecord,
    pub buyer: PartyRecord,
    pub destinations: AdministrativeDestinations,
    /// Present only when the document carries a ThirdParty block.
    pub third_party: Option<PartyRecord>,
    pub lines: Vec<InvoiceLine>,
    pub signature: SignatureInfo,
    /// InvoiceAdditionalInformation free text, trimmed.
    pub additional_info: String,
    /// Non-empty LegalLiterals/LegalReference texts.
    pub legal_references: Vec<String>,
    pub taxes_output: Vec<TaxOutputLine>,
    pub taxes_withheld: Vec<WithheldTaxLine>,
    pub payment: Option<PaymentTerms>,
}

impl Default for InvoiceRecord {
    fn default() -> Self {
        Self {
            number: na(),
            issue_date: na(),
            document_type: na(),
            currency: na(),
            class_description: na(),
            period: None,
            totals: InvoiceTotals::default(),
            seller: PartyRecord::default(),
            buyer: PartyRecord::default(),
            destinations: AdministrativeDestinations::default(),
            third_party: None,
            lines: Vec::new(),
            signature: SignatureInfo::NotFound,
            additional_info: String::new(),
            legal_references: Vec::new(),
            taxes_output: Vec::new(),
            taxes_withheld: Vec::new(),
            payment: None,
        }
    }
}
