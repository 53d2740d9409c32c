//! Challenge label construction.

/// The label an [RFC-8555][RFC-8555] [DNS-01] challenge record is published under.
///
/// [RFC-8555]: https://www.rfc-editor.org/rfc/rfc8555
/// [DNS-01]: https://www.rfc-editor.org/rfc/rfc8555#section-8.4
pub const CHALLENGE_LABEL: &str = "_acme-challenge";

const CHALLENGE_PREFIX: &str = "_acme-challenge.";

/// Turn a domain argument into the fully qualified challenge label to look up.
///
/// The trailing dot and the `_acme-challenge.` prefix are each added only when missing (the
/// prefix check ignores ASCII case). A leading wildcard label is dropped, since the challenge for
/// `*.example.com` is published at `_acme-challenge.example.com.`. Surrounding whitespace is
/// trimmed and the root name maps to `_acme-challenge.`.
///
/// ```
/// use acmecheck::checker::normalize;
///
/// assert_eq!(normalize("example.com"), "_acme-challenge.example.com.");
/// assert_eq!(normalize("*.example.com."), "_acme-challenge.example.com.");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let name = trimmed.strip_prefix("*.").unwrap_or(trimmed);
    if name.is_empty() || name == "." {
        return CHALLENGE_PREFIX.to_string();
    }

    let mut fqdn = String::with_capacity(CHALLENGE_PREFIX.len() + name.len() + 1);
    if !has_challenge_prefix(name) {
        fqdn.push_str(CHALLENGE_PREFIX);
    }
    fqdn.push_str(name);
    if !fqdn.ends_with('.') {
        fqdn.push('.');
    }
    fqdn
}

fn has_challenge_prefix(name: &str) -> bool {
    // "_acme-challenge" alone is the challenge label of the root.
    if name.eq_ignore_ascii_case(CHALLENGE_LABEL) {
        return true;
    }
    name.get(..CHALLENGE_PREFIX.len())
        .map_or(false, |p| p.eq_ignore_ascii_case(CHALLENGE_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("example.com")]
    #[case("example.com.")]
    #[case("_acme-challenge.example.com")]
    #[case("_acme-challenge.example.com.")]
    #[case("  example.com\n")]
    #[case("*.example.com")]
    fn normalizes_to_challenge_label(#[case] raw: &str) {
        assert_eq!(normalize(raw), "_acme-challenge.example.com.");
    }

    #[rstest]
    #[case("_ACME-Challenge.Example.com", "_ACME-Challenge.Example.com.")]
    #[case("sub.example.com", "_acme-challenge.sub.example.com.")]
    #[case("_acme-challenge-not.example.com", "_acme-challenge._acme-challenge-not.example.com.")]
    #[case("", "_acme-challenge.")]
    #[case(".", "_acme-challenge.")]
    #[case("*.", "_acme-challenge.")]
    #[case("_acme-challenge", "_acme-challenge.")]
    #[case("_acme-challenge.", "_acme-challenge.")]
    #[case("é.example", "_acme-challenge.é.example.")]
    fn normalize_edge_cases(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn never_duplicates_the_trailing_dot() {
        let name = normalize("example.com.");
        assert!(!name.ends_with(".."));
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "\\PC*") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalized_names_are_fully_qualified_challenge_labels(raw in "[a-z0-9.*_-]{0,40}") {
            let name = normalize(&raw);
            prop_assert!(name.ends_with('.'));
            prop_assert!(has_challenge_prefix(&name));
        }
    }
}
