use super::*;

#[test]
fn page_numbers_cover_partial_last_page() {
    assert_eq!(page_numbers(12, 5), vec![1, 2, 3]);
    assert_eq!(page_numbers(10, 5), vec![1, 2]);
}

#[test]
fn empty_list_still_shows_first_page() {
    assert_eq!(page_numbers(0, 5), vec![1]);
}
