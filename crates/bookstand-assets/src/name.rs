use chrono::Utc;

/// Generate a storage name for an uploaded file: millisecond timestamp,
/// a dash, then the sanitized original name.
///
/// The timestamp prefix makes names collision-resistant across requests;
/// backends still guard the residual same-millisecond case themselves.
pub fn generate_name(original_name: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), sanitize(original_name))
}

/// Strip path components and replace anything outside `[A-Za-z0-9._-]`.
///
/// Uploaded names are attacker-controlled; the result must be a single
/// safe path segment.
pub fn sanitize(original_name: &str) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_timestamp_prefixed() {
        let name = generate_name("cover.png");
        let (prefix, rest) = name.split_once('-').unwrap();
        assert!(prefix.parse::<i64>().is_ok());
        assert_eq!(rest, "cover.png");
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize("../../etc/passwd"), "passwd");
        assert_eq!(sanitize("C:\\temp\\evil.pdf"), "evil.pdf");
    }

    #[test]
    fn sanitize_replaces_odd_characters() {
        assert_eq!(sanitize("my book (final).pdf"), "my_book__final_.pdf");
    }

    #[test]
    fn sanitize_never_returns_empty() {
        assert_eq!(sanitize(""), "file");
        assert_eq!(sanitize("..."), "file");
        assert_eq!(sanitize("///"), "file");
    }
}
