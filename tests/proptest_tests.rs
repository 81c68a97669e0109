//! Property-based tests for the container unwrapper and formatting rules.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "xsig")]

use facturae_informe::core::format::{format_amount, format_rate};
use facturae_informe::xsig::{extract_invoice, unwrap_container};
use proptest::prelude::*;

const DOC: &[u8] = b"<?xml version=\"1.0\"?><Facturae><Invoices><Invoice>\
<InvoiceHeader><InvoiceNumber>1</InvoiceNumber></InvoiceHeader>\
</Invoice></Invoices></Facturae>";

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

proptest! {
    /// Arbitrary prefix/suffix bytes around a well-formed document always
    /// slice back to exactly the document, as long as the prefix does not
    /// fake an XML declaration and the suffix has no closing bracket.
    #[test]
    fn unwrapper_recovers_the_document(
        prefix in prop::collection::vec(any::<u8>(), 0..64),
        suffix in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(!contains(&prefix, b"<?xml"));
        prop_assume!(!suffix.contains(&b'>'));

        let mut container = prefix;
        container.extend_from_slice(DOC);
        container.extend_from_slice(&suffix);
        prop_assert_eq!(unwrap_container(&container), DOC);
    }

    /// Rate formatting is idempotent: once normalized, a second pass is a
    /// no-op.
    #[test]
    fn rate_formatting_is_idempotent(cents in 0u32..1_000_000) {
        let raw = format!("{}.{:02}", cents / 100, cents % 100);
        let once = format_rate(&raw);
        prop_assert_eq!(format_rate(&once), once.clone());
        // never a trailing zero after the decimal point, never a bare dot
        prop_assert!(!once.contains('.') || !once.ends_with('0'));
        prop_assert!(!once.ends_with('.'));
    }

    /// Amount formatting always yields the requested number of decimals for
    /// parseable input.
    #[test]
    fn amounts_have_fixed_decimals(cents in 0u64..10_000_000) {
        let raw = format!("{}.{:02}", cents / 100, cents % 100);
        let formatted = format_amount(&raw, 2);
        let (_, decimals) = formatted.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 2);
    }

    /// Series code and invoice number concatenate verbatim.
    #[test]
    fn series_and_number_concatenate(
        series in "[A-Z]{0,3}",
        number in "[0-9]{1,6}",
    ) {
        let xml = format!(
            "<?xml version=\"1.0\"?><Facturae><Invoices><Invoice><InvoiceHeader>\
             <InvoiceNumber>{number}</InvoiceNumber>\
             <InvoiceSeriesCode>{series}</InvoiceSeriesCode>\
             </InvoiceHeader></Invoice></Invoices></Facturae>"
        );
        let rec = extract_invoice(&xml).unwrap();
        prop_assert_eq!(rec.number, format!("{series}{number}"));
    }
}
