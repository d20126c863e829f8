#[test]
fn tln_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/tln_error_pass.rs");
    t.pass("tests/ui/tln_error_classified_pass.rs");
}

#[test]
fn api_model_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/api_model_pass.rs");
}
