// Property-based tests for the local field validators
//
// Uses proptest to check the accept/reject rules across many inputs.

use proptest::prelude::*;
use zarinpal::{
    check_amount, check_authority, check_callback_url, check_currency, check_description,
};

proptest! {
    #[test]
    fn test_every_non_zero_amount_passes(amount in any::<i64>().prop_filter("non-zero", |a| *a != 0)) {
        let result = check_amount(amount);
        prop_assert!(result.ok);
        prop_assert!(result.reason.is_empty());
    }

    #[test]
    fn test_negative_amounts_pass(amount in i64::MIN..0i64) {
        // Locked-in behaviour: negatives are not rejected locally.
        prop_assert!(check_amount(amount).ok);
    }

    #[test]
    fn test_non_empty_description_passes(description in ".{1,64}") {
        prop_assert!(check_description(&description).ok);
    }

    #[test]
    fn test_non_empty_authority_passes(authority in "A[0-9A-Za-z]{35}") {
        prop_assert!(check_authority(&authority).ok);
    }

    #[test]
    fn test_well_formed_urls_pass(
        scheme in "https?",
        host in "[a-z][a-z0-9]{0,12}(\\.[a-z]{2,6}){0,2}",
        port in proptest::option::of(1u16..=65535u16),
        segments in proptest::collection::vec("[a-z0-9_]{1,8}", 0..4),
    ) {
        let mut url = format!("{scheme}://{host}");
        if let Some(port) = port {
            url.push_str(&format!(":{port}"));
        }
        for segment in &segments {
            url.push('/');
            url.push_str(segment);
        }

        let result = check_callback_url(&url);
        prop_assert!(result.ok, "{} rejected: {}", url, result.reason);
    }

    #[test]
    fn test_bare_words_fail(word in "[a-zA-Z0-9 ]{1,32}") {
        prop_assert!(!check_callback_url(&word).ok);
    }

    #[test]
    fn test_urls_with_whitespace_fail(host in "[a-z]{3,10}", tail in "[a-z]{0,5} [a-z]{0,5}") {
        let url = format!("https://{host}.com/{tail}");
        prop_assert!(!check_callback_url(&url).ok);
    }

    #[test]
    fn test_unknown_currencies_fail(code in "[A-Z]{3}".prop_filter("not IRT/IRR", |c| c != "IRT" && c != "IRR")) {
        let result = check_currency(&code);
        prop_assert!(!result.ok);
        prop_assert!(result.reason.ends_with(&code));
    }
}

#[test]
fn test_documented_examples() {
    assert!(!check_amount(0).ok);
    assert!(check_amount(1000).ok);
    assert!(check_amount(-5).ok);

    assert!(!check_description("").ok);
    assert!(check_description("a test").ok);

    assert!(check_callback_url("http://localhost:3000/api").ok);
    assert!(!check_callback_url("not a url").ok);

    assert!(!check_authority("").ok);
}
