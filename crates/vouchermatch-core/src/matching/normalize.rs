/// Canonical form of a payment reference code. Source systems disagree on
/// zero padding and whitespace grouping, so every whitespace run and every
/// leading zero is stripped before equality is checked. An all-zero or
/// all-whitespace input carries no usable code and normalizes to `None`.
pub fn normalize_reference(reference: Option<&str>) -> Option<String> {
    let raw = reference?;
    let compact: String = raw.split_whitespace().collect();
    let stripped = compact.trim_start_matches('0');
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.to_string())
}

/// Company-name equivalence used by the counterparty comparator.
///
/// After case folding and whitespace collapsing, two names match when they
/// are equal; or the shorter is a leading whole-token run of the longer; or
/// both end in the same token and the name with fewer tokens has all of its
/// tokens somewhere in the other. The last rule tolerates reordered or
/// abbreviated legal names sharing a suffix ("Acme Oy" vs "Acme Trading
/// Oy") and is a known over-matcher for unrelated names that share only a
/// generic legal-entity token; the other signals compensate.
pub fn company_names_match(first: Option<&str>, second: Option<&str>) -> bool {
    let (Some(first), Some(second)) = (first, second) else {
        return false;
    };

    let left = normalize_company_name(first);
    let right = normalize_company_name(second);
    if left == right {
        return true;
    }

    let (shorter, longer) = if left.len() < right.len() {
        (left.as_str(), right.as_str())
    } else {
        (right.as_str(), left.as_str())
    };
    if let Some(rest) = longer.strip_prefix(shorter)
        && (rest.is_empty() || rest.starts_with(' '))
    {
        return true;
    }

    let left_tokens: Vec<&str> = left.split_whitespace().collect();
    let right_tokens: Vec<&str> = right.split_whitespace().collect();
    let (Some(left_last), Some(right_last)) = (left_tokens.last(), right_tokens.last()) else {
        return false;
    };
    if left_last != right_last {
        return false;
    }

    let (subset, superset) = if left_tokens.len() <= right_tokens.len() {
        (&left_tokens, &right_tokens)
    } else {
        (&right_tokens, &left_tokens)
    };
    subset.iter().all(|token| superset.contains(token))
}

fn normalize_company_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{company_names_match, normalize_reference};

    #[test]
    fn reference_normalization_strips_whitespace_runs_and_leading_zeros() {
        assert_eq!(
            normalize_reference(Some("  007-ABC")),
            Some("7-ABC".to_string())
        );
        assert_eq!(
            normalize_reference(Some("7-ABC")),
            Some("7-ABC".to_string())
        );
        assert_eq!(
            normalize_reference(Some("00 12 34")),
            Some("1234".to_string())
        );
    }

    #[test]
    fn reference_normalization_yields_absent_for_empty_results() {
        assert_eq!(normalize_reference(Some("000")), None);
        assert_eq!(normalize_reference(Some("   ")), None);
        assert_eq!(normalize_reference(None), None);
    }

    #[test]
    fn name_match_is_case_and_whitespace_insensitive() {
        assert!(company_names_match(Some("Acme Oy"), Some("acme oy")));
        assert!(company_names_match(Some("  Acme   Oy "), Some("ACME OY")));
    }

    #[test]
    fn name_match_accepts_prefix_only_at_a_word_boundary() {
        assert!(company_names_match(Some("Acme"), Some("Acme Logistics Oy")));
        assert!(!company_names_match(Some("Acme"), Some("AcmeLogistics Oy")));
    }

    #[test]
    fn name_match_accepts_token_subset_with_shared_last_token() {
        assert!(company_names_match(Some("Acme Trading Oy"), Some("Acme Oy")));
        assert!(company_names_match(
            Some("Logistics Oy Acme Oy"),
            Some("Acme Logistics Oy")
        ));
    }

    #[test]
    fn name_match_rejects_subset_when_last_tokens_differ() {
        assert!(!company_names_match(
            Some("Acme Oy Trading"),
            Some("Trading Acme Oy")
        ));
    }

    #[test]
    fn name_match_rejects_unrelated_names_and_missing_sides() {
        assert!(!company_names_match(Some("Acme Oy"), Some("Other Corp")));
        assert!(!company_names_match(Some("Acme Oy"), None));
        assert!(!company_names_match(None, Some("Acme Oy")));
    }
}
