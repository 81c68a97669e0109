use criterion::{Criterion, black_box, criterion_group, criterion_main};

use facturae_informe::xsig::{extract_invoice, unwrap_container};

fn build_invoice_xml(lines: usize) -> String {
    let mut items = String::new();
    for i in 1..=lines {
        items.push_str(&format!(
            "<InvoiceLine>\
             <ItemDescription>Servicio {i}</ItemDescription>\
             <Quantity>2</Quantity>\
             <UnitPriceWithoutTax>45.5</UnitPriceWithoutTax>\
             <TotalCost>91</TotalCost>\
             </InvoiceLine>"
        ));
    }
    format!(
        r#"<?xml version="1.0"?><Facturae>
<Parties>
  <SellerParty>
    <TaxIdentification><TaxIdentificationNumber>B12345678</TaxIdentificationNumber></TaxIdentification>
    <LegalEntity><CorporateName>Suministros Ebro SL</CorporateName>
      <AddressInSpain><Address>Calle Mayor 1</Address><PostCode>50001</PostCode>
      <Town>Zaragoza</Town><Province>Zaragoza</Province><CountryCode>ESP</CountryCode></AddressInSpain>
    </LegalEntity>
  </SellerParty>
  <BuyerParty>
    <TaxIdentification><TaxIdentificationNumber>P5001500J</TaxIdentificationNumber></TaxIdentification>
    <LegalEntity><CorporateName>Ayuntamiento</CorporateName></LegalEntity>
  </BuyerParty>
</Parties>
<Invoices><Invoice>
  <InvoiceHeader><InvoiceNumber>0042</InvoiceNumber><InvoiceSeriesCode>FA-</InvoiceSeriesCode>
  <InvoiceClass>OO</InvoiceClass></InvoiceHeader>
  <InvoiceIssueData><IssueDate>2025-10-16</IssueDate><InvoiceCurrencyCode>EUR</InvoiceCurrencyCode></InvoiceIssueData>
  <InvoiceTotals><TotalGrossAmount>910.00</TotalGrossAmount><InvoiceTotal>1101.10</InvoiceTotal></InvoiceTotals>
  <Items>{items}</Items>
</Invoice></Invoices>
</Facturae>"#
    )
}

fn bench_extract(c: &mut Criterion) {
    let small = build_invoice_xml(1);
    let large = build_invoice_xml(100);

    c.bench_function("extract_invoice_1_line", |b| {
        b.iter(|| extract_invoice(black_box(&small)).unwrap())
    });
    c.bench_function("extract_invoice_100_lines", |b| {
        b.iter(|| extract_invoice(black_box(&large)).unwrap())
    });
}

fn bench_unwrap(c: &mut Criterion) {
    let xml = build_invoice_xml(10);
    let mut container = vec![0u8; 4096];
    container.extend_from_slice(xml.as_bytes());
    container.extend_from_slice(&[0u8; 1024]);

    c.bench_function("unwrap_container_9kb", |b| {
        b.iter(|| unwrap_container(black_box(&container)))
    });
}

criterion_group!(benches, bench_extract, bench_unwrap);
criterion_main!(benches);
