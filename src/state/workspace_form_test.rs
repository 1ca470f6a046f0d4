use super::*;

fn form(name: &str, url: &str) -> WorkspaceForm {
    WorkspaceForm {
        name: name.to_owned(),
        url: url.to_owned(),
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn blank_name_is_rejected() {
    assert_eq!(form("", "acme").validate(), None);
    assert_eq!(form("   ", "acme").validate(), None);
}

#[test]
fn blank_url_is_rejected() {
    assert_eq!(form("Acme", "").validate(), None);
    assert_eq!(form("Acme", "\t\n").validate(), None);
}

#[test]
fn valid_form_yields_exactly_name_and_url() {
    assert_eq!(
        form("Acme", "acme").validate(),
        Some(CreateWorkspaceRequest {
            workspace: "Acme".to_owned(),
            url: "acme".to_owned(),
        })
    );
}

#[test]
fn valid_form_keeps_values_as_typed() {
    let request = form(" Acme ", "acme ").validate().unwrap();
    assert_eq!(request.workspace, " Acme ");
    assert_eq!(request.url, "acme ");
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_empties_both_fields() {
    let mut f = form("Acme", "acme");
    f.reset();
    assert_eq!(f, WorkspaceForm::default());
}
