//! Area-code catalog and logo lookup.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Area-code to area-name lookup, loaded once at startup from a
/// semicolon-delimited file and passed by reference into request handling.
///
/// Keys are zero-padded to two digits at load time so `"1"` and `"01"`
/// resolve to the same entry. The catalog is immutable after construction; a
/// changed file requires reloading.
#[derive(Debug, Clone, Default)]
pub struct AreaCatalog {
    names: HashMap<String, String>,
}

impl AreaCatalog {
    /// Load the catalog from `area;nombre` lines.
    ///
    /// A missing file yields an empty catalog, not an error. Rows with fewer
    /// than two fields or an empty code are skipped. A UTF-8 BOM is
    /// tolerated.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            log::warn!("catálogo de áreas no encontrado en {}", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::parse(&raw))
    }

    fn parse(raw: &str) -> Self {
        let mut names = HashMap::new();
        for line in raw.trim_start_matches('\u{feff}').lines() {
            let mut fields = line.split(';');
            let (Some(code), Some(name)) = (fields.next(), fields.next()) else {
                continue;
            };
            let code = code.trim();
            if code.is_empty() {
                continue;
            }
            names.insert(zero_pad(code), name.trim().to_string());
        }
        Self { names }
    }

    /// Area name for an already-normalized code.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Normalize an area code for catalog lookup.
///
/// Fully numeric codes are zero-padded to at least two digits (`"1"` →
/// `"01"`); anything else is only trimmed. Empty input stays empty.
pub fn normalize_area_code(raw: &str) -> String {
    let s = raw.trim();
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        zero_pad(s)
    } else {
        s.to_string()
    }
}

fn zero_pad(code: &str) -> String {
    format!("{code:0>2}")
}

const LOGO_ROOTS: &[&str] = &["images", ".", "assets", "static"];
const LOGO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Locate `logo_<code>.<ext>` on disk, trying `images/`, the working
/// directory, `assets/` and `static/` in that order for each extension.
pub fn find_logo(area_code: &str) -> Option<PathBuf> {
    if area_code.is_empty() {
        return None;
    }
    for root in LOGO_ROOTS {
        for ext in LOGO_EXTENSIONS {
            let candidate = Path::new(root).join(format!("logo_{area_code}.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
