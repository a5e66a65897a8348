use super::*;

fn category(id: &str, name: &str) -> Taxonomy {
    Taxonomy { id: id.to_owned(), name: name.to_owned(), ..Taxonomy::default() }
}

#[test]
fn only_specializations_have_no_parent() {
    assert_eq!(parent_label(TaxonomyKind::Category), Some("Parent category"));
    assert_eq!(parent_label(TaxonomyKind::Ailment), Some("Category"));
    assert_eq!(parent_label(TaxonomyKind::Specialization), None);
}

#[test]
fn parent_options_exclude_record_being_edited() {
    let categories = vec![category("c1", "Mind"), category("c2", "Body")];
    assert_eq!(parent_options(&categories, Some("c1")), vec![("c2".to_owned(), "Body".to_owned())]);
    assert_eq!(parent_options(&categories, None).len(), 2);
}
