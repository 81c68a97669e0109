use quick_xml::Reader;
use quick_xml::events::Event;

use crate::core::format::{format_amount, format_date_es, format_rate};
use crate::core::*;

/// Parse a Facturae XML document into a normalized [`InvoiceRecord`].
///
/// Every optional node resolves to its documented sentinel or default; the
/// only hard failure is an XML syntax error. Namespace prefixes are stripped
/// so both prefixed (`fe:Facturae`) and unprefixed documents parse.
///
/// The signature section is left at [`SignatureInfo::NotFound`]; run
/// [`super::extract_signature`] on the same document to fill it. The two
/// extractions are independent.
pub fn extract_invoice(xml: &str) -> Result<InvoiceRecord, InformeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut p = FacturaeParsed::default();
    let mut path: Vec<String> = Vec::new();
    let mut saw_element = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                saw_element = true;
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                p.handle_start(&path, &name);
                path.push(name);
            }
            Ok(Event::Empty(ref e)) => {
                saw_element = true;
                // Self-closing elements carry no text; defaults apply, but
                // structural markers (e.g. an empty InvoicingPeriod) still
                // count as present.
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                p.handle_start(&path, &name);
                p.handle_end(&path, &name);
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default().into_owned();
                if !text.is_empty() {
                    p.handle_text(&path, &text);
                }
            }
            Ok(Event::End(_)) => {
                let ended = path.pop().unwrap_or_default();
                p.handle_end(&path, &ended);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(InformeError::Xml(e.to_string())),
            _ => {}
        }
    }

    if !saw_element {
        return Err(InformeError::Xml(
            "el documento no contiene ningún elemento".to_string(),
        ));
    }

    Ok(p.into_record())
}

fn in_path(path: &[String], name: &str) -> bool {
    path.iter().any(|p| p == name)
}

// ---------------------------------------------------------------------------
// Accumulators
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
struct AddressParsed {
    address: Option<String>,
    post_code: Option<String>,
    town: Option<String>,
    province: Option<String>,
    country: Option<String>,
    post_code_and_town: Option<String>,
}

#[derive(Default)]
struct PartyParsed {
    present: bool,
    tax_number: Option<String>,
    has_legal: bool,
    has_individual: bool,
    corporate_name: Option<String>,
    given_name: Option<String>,
    first_surname: Option<String>,
    second_surname: Option<String>,
    addr_spain: Option<AddressParsed>,
    addr_overseas: Option<AddressParsed>,
}

impl PartyParsed {
    /// Resolve the party per the LegalEntity-first rule. Name and address
    /// fall back to the sentinel when neither legal form is present.
    fn into_record(self) -> PartyRecord {
        let mut rec = PartyRecord {
            tax_id: non_empty_or_na(self.tax_number),
            ..PartyRecord::default()
        };

        if self.has_legal {
            let name = self.corporate_name.unwrap_or_default();
            rec.name = trimmed_or_na(&name);
        } else if self.has_individual {
            let joined = [self.given_name, self.first_surname, self.second_surname]
                .into_iter()
                .flatten()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            rec.name = trimmed_or_na(&joined);
        }

        if self.has_legal || self.has_individual {
            if let Some(addr) = self.addr_spain {
                let post_town = format!(
                    "{} {}",
                    addr.post_code.clone().unwrap_or_default(),
                    addr.town.clone().unwrap_or_default()
                )
                .trim()
                .to_string();
                let composed = compose_address(&[
                    addr.address.clone().unwrap_or_default(),
                    post_town,
                    addr.province.clone().unwrap_or_default(),
                    addr.country.clone().unwrap_or_default(),
                ]);
                rec.address = trimmed_or_na(&composed);
                rec.town = non_empty_or_na(addr.town);
                rec.post_code = non_empty_or_na(addr.post_code);
                rec.province = non_empty_or_na(addr.province);
            } else if let Some(addr) = self.addr_overseas {
                // Overseas addresses collapse into a single composed line;
                // town/postcode/province stay at the sentinel.
                let composed = compose_address(&[
                    addr.address.unwrap_or_default(),
                    addr.post_code_and_town.unwrap_or_default(),
                    addr.province.unwrap_or_default(),
                    addr.country.unwrap_or_default(),
                ]);
                rec.address = trimmed_or_na(&composed);
            }
        }
        rec
    }
}

#[derive(Default, Clone)]
struct TaxParsed {
    type_code: Option<String>,
    rate: Option<String>,
    taxable_base: Option<String>,
    amount: Option<String>,
    surcharge: Option<String>,
    surcharge_amount: Option<String>,
}

#[derive(Default, Clone)]
struct LineParsed {
    description: Option<String>,
    quantity: Option<String>,
    unit_price: Option<String>,
    total_cost: Option<String>,
    note: Option<String>,
    period_start: Option<String>,
    period_end: Option<String>,
    has_period: bool,
    charges: Vec<(Option<String>, Option<String>)>,
    current_charge: Option<(Option<String>, Option<String>)>,
    discounts: Vec<(Option<String>, Option<String>)>,
    current_discount: Option<(Option<String>, Option<String>)>,
}

#[derive(Default, Clone)]
struct InstallmentParsed {
    due_date: Option<String>,
    amount: Option<String>,
    means_code: Option<String>,
    iban: Option<String>,
}

#[derive(Default)]
struct FacturaeParsed {
    seller: PartyParsed,
    buyer: PartyParsed,
    third: PartyParsed,
    centres: Vec<(Option<String>, Option<String>)>,
    current_centre: Option<(Option<String>, Option<String>)>,

    invoice_present: bool,
    invoice_done: bool,
    number: Option<String>,
    series: Option<String>,
    document_type: Option<String>,
    invoice_class: Option<String>,
    currency: Option<String>,
    issue_date: Option<String>,
    period_present: bool,
    period_start: Option<String>,
    period_end: Option<String>,

    totals_present: bool,
    gross_amount: Option<String>,
    general_discounts: Option<String>,
    gross_before_taxes: Option<String>,
    tax_outputs: Option<String>,
    taxes_withheld_total: Option<String>,
    invoice_total: Option<String>,
    outstanding_amount: Option<String>,
    executable_amount: Option<String>,

    taxes_output: Vec<TaxParsed>,
    current_output_tax: Option<TaxParsed>,
    taxes_withheld: Vec<TaxParsed>,
    current_withheld_tax: Option<TaxParsed>,

    installment: Option<InstallmentParsed>,
    current_installment: Option<InstallmentParsed>,

    lines: Vec<LineParsed>,
    current_line: Option<LineParsed>,

    additional_info: Option<String>,
    legal_references: Vec<String>,
}

impl FacturaeParsed {
    fn in_invoice(&self, path: &[String]) -> bool {
        !self.invoice_done && in_path(path, "Invoice")
    }

    fn party_mut(&mut self, path: &[String]) -> Option<&mut PartyParsed> {
        if in_path(path, "SellerParty") {
            Some(&mut self.seller)
        } else if in_path(path, "BuyerParty") {
            Some(&mut self.buyer)
        } else if in_path(path, "ThirdParty") {
            Some(&mut self.third)
        } else {
            None
        }
    }

    fn handle_start(&mut self, path: &[String], name: &str) {
        match name {
            "SellerParty" => self.seller.present = true,
            "BuyerParty" => self.buyer.present = true,
            "ThirdParty" => self.third.present = true,
            "AdministrativeCentre" if in_path(path, "BuyerParty") => {
                self.current_centre = Some((None, None));
            }
            "LegalEntity" => {
                if let Some(party) = self.party_mut(path) {
                    party.has_legal = true;
                }
            }
            "Individual" => {
                if let Some(party) = self.party_mut(path) {
                    party.has_individual = true;
                }
            }
            "AddressInSpain" => {
                if let Some(party) = self.party_mut(path) {
                    party.addr_spain.get_or_insert_with(Default::default);
                }
            }
            "OverseasAddress" => {
                if let Some(party) = self.party_mut(path) {
                    party.addr_overseas.get_or_insert_with(Default::default);
                }
            }
            "Invoice" if !self.invoice_done && in_path(path, "Invoices") => {
                self.invoice_present = true;
            }
            "InvoicingPeriod" if self.in_invoice(path) && in_path(path, "InvoiceIssueData") => {
                self.period_present = true;
            }
            "InvoiceTotals" if self.in_invoice(path) => {
                self.totals_present = true;
            }
            "Tax" if self.in_invoice(path) && in_path(path, "TaxesOutputs") => {
                self.current_output_tax = Some(TaxParsed::default());
            }
            "Tax" if self.in_invoice(path) && in_path(path, "TaxesWithheld") => {
                self.current_withheld_tax = Some(TaxParsed::default());
            }
            "Installment"
                if self.in_invoice(path)
                    && in_path(path, "PaymentDetails")
                    && self.installment.is_none() =>
            {
                self.current_installment = Some(InstallmentParsed::default());
            }
            "InvoiceLine" if self.in_invoice(path) && in_path(path, "Items") => {
                self.current_line = Some(LineParsed::default());
            }
            "LineItemPeriod" => {
                if let Some(line) = self.current_line.as_mut() {
                    line.has_period = true;
                }
            }
            "Charge" => {
                if let Some(line) = self.current_line.as_mut() {
                    line.current_charge = Some((None, None));
                }
            }
            "Discount" => {
                if let Some(line) = self.current_line.as_mut() {
                    line.current_discount = Some((None, None));
                }
            }
            _ => {}
        }
    }

    fn handle_end(&mut self, _path: &[String], ended: &str) {
        match ended {
            "Invoice" if self.invoice_present => self.invoice_done = true,
            "AdministrativeCentre" => {
                if let Some(centre) = self.current_centre.take() {
                    self.centres.push(centre);
                }
            }
            "Tax" => {
                if let Some(tax) = self.current_output_tax.take() {
                    self.taxes_output.push(tax);
                }
                if let Some(tax) = self.current_withheld_tax.take() {
                    self.taxes_withheld.push(tax);
                }
            }
            "Installment" => {
                if let Some(inst) = self.current_installment.take() {
                    self.installment = Some(inst);
                }
            }
            "InvoiceLine" => {
                if let Some(line) = self.current_line.take() {
                    self.lines.push(line);
                }
            }
            "Charge" => {
                if let Some(line) = self.current_line.as_mut() {
                    if let Some(c) = line.current_charge.take() {
                        line.charges.push(c);
                    }
                }
            }
            "Discount" => {
                if let Some(line) = self.current_line.as_mut() {
                    if let Some(d) = line.current_discount.take() {
                        line.discounts.push(d);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_text(&mut self, path: &[String], text: &str) {
        let leaf = path.last().map(|s| s.as_str()).unwrap_or("");
        let parent = if path.len() >= 2 {
            path[path.len() - 2].as_str()
        } else {
            ""
        };

        // Administrative centres first: their Name must not leak into the
        // Individual name fields.
        if in_path(path, "AdministrativeCentre") {
            if let Some(centre) = self.current_centre.as_mut() {
                match leaf {
                    "CentreCode" => centre.0 = Some(text.to_string()),
                    "Name" if parent == "AdministrativeCentre" => {
                        centre.1 = Some(text.to_string());
                    }
                    _ => {}
                }
            }
            return;
        }

        // Party blocks
        let in_spain = in_path(path, "AddressInSpain");
        let in_overseas = in_path(path, "OverseasAddress");
        if let Some(party) = self.party_mut(path) {
            if in_spain || in_overseas {
                let addr = if in_spain {
                    party.addr_spain.get_or_insert_with(Default::default)
                } else {
                    party.addr_overseas.get_or_insert_with(Default::default)
                };
                match leaf {
                    "Address" => addr.address = Some(text.to_string()),
                    "PostCode" => addr.post_code = Some(text.to_string()),
                    "Town" => addr.town = Some(text.to_string()),
                    "Province" => addr.province = Some(text.to_string()),
                    "CountryCode" => addr.country = Some(text.to_string()),
                    "PostCodeAndTown" => addr.post_code_and_town = Some(text.to_string()),
                    _ => {}
                }
                return;
            }

            match leaf {
                "TaxIdentificationNumber" if in_path(path, "TaxIdentification") => {
                    party.tax_number = Some(text.to_string());
                }
                "CorporateName" if in_path(path, "LegalEntity") => {
                    party.corporate_name = Some(text.to_string());
                }
                "Name" if in_path(path, "Individual") => {
                    party.given_name = Some(text.to_string());
                }
                "FirstSurname" => party.first_surname = Some(text.to_string()),
                "SecondSurname" => party.second_surname = Some(text.to_string()),
                _ => {}
            }
            return;
        }

        // Document-level free text
        if leaf == "InvoiceAdditionalInformation" && in_path(path, "AdditionalData") {
            self.additional_info = Some(text.to_string());
            return;
        }
        if leaf == "LegalReference" && in_path(path, "LegalLiterals") {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                self.legal_references.push(trimmed.to_string());
            }
            return;
        }

        if !self.in_invoice(path) {
            return;
        }

        // Invoice header and issue data
        if in_path(path, "InvoiceHeader") {
            match leaf {
                "InvoiceNumber" => self.number = Some(text.to_string()),
                "InvoiceSeriesCode" => self.series = Some(text.to_string()),
                "InvoiceDocumentType" => self.document_type = Some(text.to_string()),
                "InvoiceClass" => self.invoice_class = Some(text.to_string()),
                _ => {}
            }
            return;
        }
        if in_path(path, "InvoiceIssueData") {
            if in_path(path, "InvoicingPeriod") {
                match leaf {
                    "StartDate" => self.period_start = Some(text.to_string()),
                    "EndDate" => self.period_end = Some(text.to_string()),
                    _ => {}
                }
            } else {
                match leaf {
                    "InvoiceCurrencyCode" => self.currency = Some(text.to_string()),
                    "IssueDate" => self.issue_date = Some(text.to_string()),
                    _ => {}
                }
            }
            return;
        }

        // Totals
        if in_path(path, "InvoiceTotals")
            && !in_path(path, "TaxesOutputs")
            && !in_path(path, "TaxesWithheld")
        {
            match leaf {
                "TotalGrossAmount" => self.gross_amount = Some(text.to_string()),
                "TotalGeneralDiscounts" => self.general_discounts = Some(text.to_string()),
                "TotalGrossAmountBeforeTaxes" => {
                    self.gross_before_taxes = Some(text.to_string());
                }
                "TotalTaxOutputs" => self.tax_outputs = Some(text.to_string()),
                "TotalTaxesWithheld" => self.taxes_withheld_total = Some(text.to_string()),
                "InvoiceTotal" => self.invoice_total = Some(text.to_string()),
                "TotalOutstandingAmount" => self.outstanding_amount = Some(text.to_string()),
                "TotalExecutableAmount" => self.executable_amount = Some(text.to_string()),
                _ => {}
            }
        }

        // Output and withheld taxes share leaf names; context decides.
        if in_path(path, "TaxesOutputs") {
            if let Some(tax) = self.current_output_tax.as_mut() {
                capture_tax_field(tax, path, leaf, text);
            }
            return;
        }
        if in_path(path, "TaxesWithheld") {
            if let Some(tax) = self.current_withheld_tax.as_mut() {
                capture_tax_field(tax, path, leaf, text);
            }
            return;
        }

        // Payment installment (first only)
        if in_path(path, "Installment") {
            if let Some(inst) = self.current_installment.as_mut() {
                match leaf {
                    "InstallmentDueDate" => inst.due_date = Some(text.to_string()),
                    "InstallmentAmount" => inst.amount = Some(text.to_string()),
                    "PaymentMeans" => inst.means_code = Some(text.to_string()),
                    "IBAN" if in_path(path, "AccountToBeCredited") => {
                        inst.iban = Some(text.to_string());
                    }
                    _ => {}
                }
            }
            return;
        }

        // Line items
        if in_path(path, "InvoiceLine") {
            let Some(line) = self.current_line.as_mut() else {
                return;
            };
            if in_path(path, "Charge") {
                if let Some(c) = line.current_charge.as_mut() {
                    match leaf {
                        "ChargeReason" => c.0 = Some(text.to_string()),
                        "ChargeAmount" => c.1 = Some(text.to_string()),
                        _ => {}
                    }
                }
                return;
            }
            if in_path(path, "Discount") {
                if let Some(d) = line.current_discount.as_mut() {
                    match leaf {
                        "DiscountReason" => d.0 = Some(text.to_string()),
                        "DiscountAmount" => d.1 = Some(text.to_string()),
                        _ => {}
                    }
                }
                return;
            }
            if in_path(path, "LineItemPeriod") {
                match leaf {
                    "StartDate" => line.period_start = Some(text.to_string()),
                    "EndDate" => line.period_end = Some(text.to_string()),
                    _ => {}
                }
                return;
            }
            match leaf {
                "ItemDescription" => line.description = Some(text.to_string()),
                "Quantity" => line.quantity = Some(text.to_string()),
                "UnitPriceWithoutTax" => line.unit_price = Some(text.to_string()),
                "TotalCost" => line.total_cost = Some(text.to_string()),
                "AdditionalLineItemInformation" => line.note = Some(text.to_string()),
                _ => {}
            }
        }
    }

    fn into_record(self) -> InvoiceRecord {
        let mut rec = InvoiceRecord::default();

        rec.seller = self.seller.into_record();
        rec.buyer = self.buyer.into_record();
        if self.third.present {
            rec.third_party = Some(self.third.into_record());
        }

        let centres: Vec<String> = self
            .centres
            .into_iter()
            .map(|(code, name)| {
                format!(
                    "{} - {}",
                    non_empty_or_na(code),
                    non_empty_or_na(name)
                )
            })
            .collect();
        let centre = |i: usize| {
            centres
                .get(i)
                .cloned()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        rec.destinations = AdministrativeDestinations {
            accounting_office: centre(0),
            managing_body: centre(1),
            processing_unit: centre(2),
        };

        if self.invoice_present {
            let series = self.series.unwrap_or_default();
            let number = non_empty_or_na(self.number);
            rec.number = format!("{series}{number}");
            rec.issue_date = format_date_es(&non_empty_or_na(self.issue_date));
            rec.document_type = non_empty_or_na(self.document_type);
            rec.currency = non_empty_or_na(self.currency);
            rec.class_description =
                invoice_class_description(self.invoice_class.as_deref().unwrap_or_default())
                    .to_string();
            if self.period_present {
                rec.period = Some(InvoicingPeriod {
                    start: period_date(self.period_start),
                    end: period_date(self.period_end),
                });
            }
        }

        if self.totals_present {
            rec.totals = InvoiceTotals {
                gross_amount: self.gross_amount.unwrap_or_else(|| "0.00".into()),
                general_discounts: self.general_discounts.unwrap_or_else(|| "0.00".into()),
                gross_before_taxes: non_empty_or_na(self.gross_before_taxes),
                tax_outputs: non_empty_or_na(self.tax_outputs),
                taxes_withheld: non_empty_or_na(self.taxes_withheld_total),
                invoice_total: non_empty_or_na(self.invoice_total),
                outstanding_amount: non_empty_or_na(self.outstanding_amount),
                executable_amount: non_empty_or_na(self.executable_amount),
            };
        }

        rec.taxes_output = self
            .taxes_output
            .into_iter()
            .map(|t| TaxOutputLine {
                type_code: trimmed_or(t.type_code, "01"),
                rate: trimmed_or(t.rate, "21"),
                taxable_base: trimmed_or(t.taxable_base, "0"),
                tax_amount: trimmed_or(t.amount, "0"),
                surcharge_rate: trimmed_or(t.surcharge, "0"),
                surcharge_amount: trimmed_or(t.surcharge_amount, "0"),
            })
            .collect();

        rec.taxes_withheld = self
            .taxes_withheld
            .into_iter()
            .map(|t| WithheldTaxLine {
                code: trimmed_or(t.type_code, ""),
                rate: format_rate(&t.rate.unwrap_or_default()),
                amount: trimmed_or(t.amount, ""),
                taxable_base: trimmed_or(t.taxable_base, ""),
            })
            .collect();

        if let Some(inst) = self.installment {
            let means_code = inst.means_code.unwrap_or_default().trim().to_string();
            let due_raw = inst.due_date.unwrap_or_default().trim().to_string();
            rec.payment = Some(PaymentTerms {
                due_date: if due_raw.is_empty() {
                    String::new()
                } else {
                    format_date_es(&due_raw)
                },
                amount: trimmed_or(inst.amount, ""),
                means: payment_means_label(&means_code).to_string(),
                means_code,
                iban: trimmed_or(inst.iban, ""),
            });
        }

        rec.lines = self
            .lines
            .into_iter()
            .map(|l| InvoiceLine {
                description: non_empty_or_na(l.description),
                quantity: format_amount(l.quantity.as_deref().unwrap_or(NOT_AVAILABLE), 2),
                unit_price: format_amount(l.unit_price.as_deref().unwrap_or(NOT_AVAILABLE), 4),
                total_cost: format_amount(l.total_cost.as_deref().unwrap_or(NOT_AVAILABLE), 2),
                note: l.note.unwrap_or_default().trim().to_string(),
                period: line_period(l.has_period, l.period_start, l.period_end),
                charges: l
                    .charges
                    .into_iter()
                    .map(|(reason, amount)| ChargeLine {
                        reason: reason_or(reason, "Cargo"),
                        amount: trimmed_or(amount, "0"),
                    })
                    .collect(),
                discounts: l
                    .discounts
                    .into_iter()
                    .map(|(reason, amount)| DiscountLine {
                        reason: reason_or(reason, "Dcto."),
                        amount: trimmed_or(amount, "0"),
                    })
                    .collect(),
            })
            .collect();

        rec.additional_info = self.additional_info.unwrap_or_default().trim().to_string();
        rec.legal_references = self.legal_references;
        rec
    }
}

fn capture_tax_field(tax: &mut TaxParsed, path: &[String], leaf: &str, text: &str) {
    match leaf {
        "TaxTypeCode" => tax.type_code = Some(text.to_string()),
        "TaxRate" => tax.rate = Some(text.to_string()),
        "EquivalenceSurcharge" => tax.surcharge = Some(text.to_string()),
        "TotalAmount" if in_path(path, "TaxableBase") => {
            tax.taxable_base = Some(text.to_string());
        }
        "TotalAmount" if in_path(path, "TaxAmount") => {
            tax.amount = Some(text.to_string());
        }
        "TotalAmount" if in_path(path, "EquivalenceSurchargeAmount") => {
            tax.surcharge_amount = Some(text.to_string());
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Sentinel helpers
// ---------------------------------------------------------------------------

fn non_empty_or_na(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn trimmed_or_na(value: &str) -> String {
    let t = value.trim();
    if t.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        t.to_string()
    }
}

fn trimmed_or(value: Option<String>, default: &str) -> String {
    let v = value.unwrap_or_default();
    let t = v.trim();
    if t.is_empty() {
        default.to_string()
    } else {
        t.to_string()
    }
}

fn reason_or(value: Option<String>, default: &str) -> String {
    trimmed_or(value, default)
}

fn compose_address(parts: &[String]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn period_date(value: Option<String>) -> String {
    let raw = value.unwrap_or_default();
    if raw.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        format_date_es(&raw)
    }
}

fn line_period(has_period: bool, start: Option<String>, end: Option<String>) -> String {
    if !has_period {
        return String::new();
    }
    let start = start.unwrap_or_default();
    let end = end.unwrap_or_default();
    let start_f = if start.is_empty() {
        String::new()
    } else {
        format_date_es(&start)
    };
    let end_f = if end.is_empty() {
        String::new()
    } else {
        format_date_es(&end)
    };
    if start_f.is_empty() && end_f.is_empty() {
        String::new()
    } else {
        format!("{start_f}–{end_f}")
    }
}
