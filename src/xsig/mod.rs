//! XSIG container handling, Facturae extraction, and XAdES certificate
//! validity.
//!
//! The pipeline is: [`unwrap_container`] strips the signed envelope down to
//! XML bytes, [`extract_invoice`] walks the Facturae tree into an
//! [`crate::core::InvoiceRecord`], and [`extract_signature`] independently
//! resolves the embedded certificate into a
//! [`crate::core::SignatureInfo`]. The two extractions share no state and can
//! run in either order.

mod container;
mod extract;
mod signature;

pub use container::unwrap_container;
pub use extract::extract_invoice;
pub use signature::{extract_signature, extract_signature_at};
