use super::*;

#[test]
fn testimonials_are_attributed() {
    assert!(TESTIMONIALS.iter().all(|t| !t.quote.is_empty() && !t.author.is_empty()));
    assert!(TESTIMONIALS.iter().any(|t| t.role == "Consultant"));
}

#[test]
fn partner_names_are_unique() {
    let mut names = PARTNERS.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), PARTNERS.len());
}
