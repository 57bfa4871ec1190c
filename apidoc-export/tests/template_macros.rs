//! Each of the four template macros must be detected independently.

use apidoc_export::template::{
    TemplateMacros, CATEGORIES_MACRO, CONTAINER_MACRO, HEAD_MACRO, TITLE_MACRO,
};
use apidoc_export::ExportError;
use rstest::rstest;

fn full_template() -> Vec<String> {
    [
        "<title>|PAGE_HEAD|</title>",
        "<h1>|DOCS_TITLE|</h1>",
        "<!--CATEGORIES-->",
        "<main>",
        "<!--CONTAINER-->",
        "</main>",
    ]
    .iter()
    .map(|l| l.to_string())
    .collect()
}

#[test]
fn complete_template_scans_cleanly() {
    assert!(TemplateMacros::scan(&full_template()).is_ok());
}

#[rstest]
#[case(HEAD_MACRO)]
#[case(TITLE_MACRO)]
#[case(CATEGORIES_MACRO)]
#[case(CONTAINER_MACRO)]
fn each_missing_macro_is_reported_by_name(#[case] macro_text: &'static str) {
    let template: Vec<String> = full_template()
        .into_iter()
        .filter(|line| !line.contains(macro_text))
        .collect();

    let err = TemplateMacros::scan(&template).unwrap_err();
    assert_eq!(err, ExportError::MissingMacro(macro_text));
    assert!(format!("{err}").contains(macro_text));
}
