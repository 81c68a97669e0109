/// Strip an XSIG envelope down to the embedded XML payload.
///
/// Scans forward for the first `<?xml` marker and backward for the last `>`;
/// when both exist in that order, the slice between them is returned.
/// Otherwise the input passes through unchanged so pre-stripped XML still
/// works and the XML parser reports the real error.
///
/// This is a byte-level heuristic, not an envelope parser: it assumes exactly
/// one XML document sits between the first declaration and the last closing
/// angle bracket. A container with a stray `>` in trailing binary signature
/// data will mis-slice; the immediate XML parse downstream is the
/// well-formedness check.
pub fn unwrap_container(bytes: &[u8]) -> &[u8] {
    let start = find(bytes, b"<?xml");
    let end = rfind_byte(bytes, b'>').map(|i| i + 1);
    match (start, end) {
        (Some(s), Some(e)) if e > s => &bytes[s..e],
        _ => bytes,
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|w| w == needle)
}

fn rfind_byte(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().rposition(|&b| b == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &[u8] = b"<?xml version=\"1.0\"?><Root>dato</Root>";

    #[test]
    fn slices_between_markers() {
        let mut container = Vec::new();
        container.extend_from_slice(&[0x00, 0xff, 0x13, 0x37]);
        container.extend_from_slice(DOC);
        container.extend_from_slice(&[0x01, 0x02, 0x03]);
        assert_eq!(unwrap_container(&container), DOC);
    }

    #[test]
    fn bare_xml_passes_through() {
        assert_eq!(unwrap_container(DOC), DOC);
    }

    #[test]
    fn no_marker_passes_through() {
        let raw = b"not xml at all";
        assert_eq!(unwrap_container(raw), raw.as_slice());
    }

    #[test]
    fn empty_passes_through() {
        assert_eq!(unwrap_container(b""), b"".as_slice());
    }

    #[test]
    fn stray_bracket_in_suffix_extends_slice() {
        // Known fragility: a `>` inside trailing binary data widens the
        // slice; the XML parser downstream reports the failure.
        let mut container = Vec::new();
        container.extend_from_slice(DOC);
        container.extend_from_slice(&[0xde, b'>', 0xad]);
        let sliced = unwrap_container(&container);
        assert!(sliced.ends_with(&[0xde, b'>']));
    }

    #[test]
    fn marker_after_last_bracket_passes_through() {
        let raw = b"> trailing <?xml but nothing closes";
        assert_eq!(unwrap_container(raw), raw.as_slice());
    }
}
