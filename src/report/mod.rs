//! Report-data assembly for the document renderer.
//!
//! Two independent paths feed the same renderer: [`report_from_xsig`] builds
//! invoice report data from a signed XSIG upload, and
//! [`build_conformity_report`] validates a structured conformity payload. The
//! area catalog is loaded once at startup and passed by reference into both.

mod areas;
mod assembler;
mod conformity;

pub use areas::{AreaCatalog, find_logo, normalize_area_code};
pub use assembler::{RegistrationParams, ReportData, download_filename, report_from_xsig,
                    report_from_xsig_at};
pub use conformity::{BudgetApplication, ConformityPayload, ConformityReport,
                     ConformityResult, build_conformity_report};
