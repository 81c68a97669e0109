use facturae_informe::core::SignatureInfo;
use facturae_informe::xsig::{extract_invoice, extract_signature, unwrap_container};

fn main() {
    let bytes = match std::env::args().nth(1) {
        Some(path) => std::fs::read(&path).expect("could not read input file"),
        None => SAMPLE.as_bytes().to_vec(),
    };

    let payload = unwrap_container(&bytes);
    let xml = std::str::from_utf8(payload).expect("payload is not UTF-8");

    let record = extract_invoice(xml).expect("invoice extraction failed");
    println!("=== Factura ===");
    println!("Número:    {}", record.number);
    println!("Fecha:     {}", record.issue_date);
    println!("Clase:     {}", record.class_description);
    println!("Vendedor:  {} ({})", record.seller.name, record.seller.tax_id);
    println!("Comprador: {} ({})", record.buyer.name, record.buyer.tax_id);
    println!("Total:     {} {}", record.totals.invoice_total, record.currency);
    println!("Líneas:    {}", record.lines.len());

    println!("\n=== Firma ===");
    match extract_signature(xml) {
        SignatureInfo::NotFound => println!("Sin certificado en el documento"),
        SignatureInfo::ExtractionError(detail) => println!("Error de extracción: {detail}"),
        SignatureInfo::Found(details) => {
            println!("Firmante:  {} ({})", details.signer, details.tax_id);
            println!("Emisor:    {}", details.issuer);
            println!("Vigencia:  {} a {}", details.valid_from, details.valid_to);
            println!("Estado:    {}", details.current_status);
            println!("En firma:  {}", details.status_at_signing);
        }
    }
}

const SAMPLE: &str = r#"<?xml version="1.0"?><Facturae>
  <Parties>
    <SellerParty>
      <TaxIdentification><TaxIdentificationNumber>B12345678</TaxIdentificationNumber></TaxIdentification>
      <LegalEntity><CorporateName>Suministros Ebro SL</CorporateName></LegalEntity>
    </SellerParty>
    <BuyerParty>
      <TaxIdentification><TaxIdentificationNumber>P5001500J</TaxIdentificationNumber></TaxIdentification>
      <LegalEntity><CorporateName>Ayuntamiento de Zaragoza</CorporateName></LegalEntity>
    </BuyerParty>
  </Parties>
  <Invoices><Invoice>
    <InvoiceHeader>
      <InvoiceNumber>0042</InvoiceNumber>
      <InvoiceSeriesCode>FA-</InvoiceSeriesCode>
      <InvoiceClass>OO</InvoiceClass>
    </InvoiceHeader>
    <InvoiceIssueData>
      <IssueDate>2025-10-16</IssueDate>
      <InvoiceCurrencyCode>EUR</InvoiceCurrencyCode>
    </InvoiceIssueData>
    <InvoiceTotals>
      <TotalGrossAmount>100.00</TotalGrossAmount>
      <InvoiceTotal>121.00</InvoiceTotal>
    </InvoiceTotals>
    <Items><InvoiceLine>
      <ItemDescription>Mantenimiento mensual</ItemDescription>
      <Quantity>1</Quantity>
      <UnitPriceWithoutTax>100</UnitPriceWithoutTax>
      <TotalCost>100</TotalCost>
    </InvoiceLine></Items>
  </Invoice></Invoices>
</Facturae>"#;
