use super::*;

#[test]
fn only_a_complete_document_counts_as_settled() {
    assert!(document_settled("complete"));
    assert!(!document_settled("loading"));
    assert!(!document_settled("interactive"));
    assert!(!document_settled(""));
}
