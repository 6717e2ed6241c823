use crate::{CustomerDraft, CustomerRecord, filter_records, matches_filter};

use proptest::prelude::*;

fn john_smith() -> CustomerRecord {
    CustomerRecord::from_draft(
        1,
        &CustomerDraft::new(
            "John",
            "Smith",
            "Main Street 1, Amsterdam",
            "0612345678",
            "john@example.com",
        ),
    )
}

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn given_uppercase_last_name_when_filtered_then_matches() {
    assert!(matches_filter(&john_smith(), "SMITH"));
}

#[test]
fn given_unrelated_text_when_filtered_then_no_match() {
    assert!(!matches_filter(&john_smith(), "zzz"));
}

#[test]
fn given_text_spanning_two_fields_when_filtered_then_matches() {
    assert!(matches_filter(&john_smith(), "john smith"));
}

#[test]
fn given_id_when_filtered_then_matches() {
    assert!(matches_filter(&john_smith(), "1 john"));
}

#[test]
fn given_empty_filter_when_filter_records_then_all_returned_in_order() {
    let mut other = john_smith();
    other.id = 2;
    other.first_name = "Jane".to_string();
    let records = vec![john_smith(), other];

    let filtered = filter_records(&records, "");

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].id, 1);
    assert_eq!(filtered[1].id, 2);
}

#[test]
fn given_mixed_list_when_filter_records_then_only_matches_kept() {
    let mut jane = john_smith();
    jane.id = 2;
    jane.first_name = "Jane".to_string();
    jane.last_name = "Doe".to_string();
    jane.email = "jane@example.com".to_string();
    let records = vec![john_smith(), jane];

    let filtered = filter_records(&records, "doe");

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);
}

// =========================================================================
// Property-Based Tests
// =========================================================================

proptest! {
    #[test]
    fn given_any_case_of_first_name_when_filtered_then_matches(name in "[a-zA-Z]{1,20}") {
        let mut record = john_smith();
        record.first_name = name.clone();
        prop_assert!(matches_filter(&record, &name.to_uppercase()));
        prop_assert!(matches_filter(&record, &name.to_lowercase()));
    }

    #[test]
    fn given_filter_with_char_absent_from_record_when_filtered_then_no_match(filter in "[#%&]{1,5}") {
        prop_assert!(!matches_filter(&john_smith(), &filter));
    }
}
