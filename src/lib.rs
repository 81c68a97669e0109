//! # facturae-informe
//!
//! Extraction and normalization library for Spanish e-invoicing: turns an
//! XSIG-signed Facturae document (or a structured conformity payload) into the
//! normalized record a report renderer consumes.
//!
//! Every optional field in the Facturae schema resolves to a printable
//! sentinel string rather than an absent value — the renderer never sees
//! `None`. Certificate problems are captured inside [`core::SignatureInfo`]
//! and never block invoice extraction.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "xsig")] {
//! use facturae_informe::xsig::{unwrap_container, extract_invoice};
//!
//! let xml = br#"<?xml version="1.0"?><Facturae><Invoices><Invoice>
//!     <InvoiceHeader><InvoiceNumber>5</InvoiceNumber>
//!     <InvoiceSeriesCode>A</InvoiceSeriesCode></InvoiceHeader>
//! </Invoice></Invoices></Facturae>"#;
//!
//! let payload = unwrap_container(xml);
//! let record = extract_invoice(std::str::from_utf8(payload).unwrap()).unwrap();
//! assert_eq!(record.number, "A5");
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Record types, code tables, formatting, errors |
//! | `xsig` | XSIG unwrapping, Facturae extraction, XAdES certificate validity |
//! | `report` | Report assembly and the conformity JSON path |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "xsig")]
pub mod xsig;

#[cfg(feature = "report")]
pub mod report;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
