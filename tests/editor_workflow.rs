use std::cell::RefCell;
use std::rc::Rc;

use fieldform::{
    Callbacks, CommandOutcome, DataType, DataTypeCatalog, EditorCommand, EditorConfig,
    ExistingField, FieldDraft, FieldEditor, NameComparison, ValidationError, ValidationMode,
};

#[derive(Default)]
struct Events {
    created: Vec<FieldDraft>,
    cancels: usize,
}

fn recording_editor(
    config: EditorConfig,
) -> (
    FieldEditor<Callbacks<impl FnMut(FieldDraft), impl FnMut()>>,
    Rc<RefCell<Events>>,
) {
    let events = Rc::new(RefCell::new(Events::default()));
    let on_create = {
        let events = Rc::clone(&events);
        move |field: FieldDraft| events.borrow_mut().created.push(field)
    };
    let on_cancel = {
        let events = Rc::clone(&events);
        move || events.borrow_mut().cancels += 1
    };
    let editor = FieldEditor::with_callbacks(config, Callbacks::new(on_create, on_cancel));
    (editor, events)
}

fn existing(names: &[&str]) -> Vec<ExistingField> {
    names.iter().map(|name| ExistingField::named(*name)).collect()
}

#[test]
fn accepted_submit_delivers_formatted_field_and_resets() {
    let (mut editor, events) = recording_editor(EditorConfig::default());
    assert!(editor.take_focus_request());
    editor.set_name("  created_at ");
    editor.set_type(DataType::DateTime);
    editor.toggle_required(true);

    let field = editor
        .submit(&existing(&["id"]))
        .expect("field should be accepted");

    assert_eq!(field.name, "created_at");
    assert_eq!(field.data_type, Some(DataType::DateTime));
    assert!(field.required);
    assert_eq!(events.borrow().created, vec![field]);
    assert_eq!(editor.draft(), &FieldDraft::empty(DataType::String));
    assert!(editor.errors().is_empty());
    assert!(editor.take_focus_request());
    assert!(!editor.take_focus_request());
}

#[test]
fn duplicate_name_is_rejected_then_cleared_by_editing() {
    let (mut editor, events) = recording_editor(EditorConfig::default());
    let fields = existing(&["email"]);
    editor.set_name("email");

    let errors = editor.submit(&fields).expect_err("duplicate must be rejected");
    assert_eq!(errors, vec![ValidationError::UniqueName]);
    assert_eq!(editor.mode(), ValidationMode::Live);
    assert!(!editor.can_submit());
    assert!(events.borrow().created.is_empty());
    assert_eq!(editor.draft().name, "email");

    editor.set_name("email_address");
    assert!(editor.errors().is_empty());
    assert!(editor.can_submit());
    assert_eq!(editor.mode(), ValidationMode::Deferred);

    let field = editor.submit(&fields).expect("renamed field is unique");
    assert_eq!(field.name, "email_address");
    assert_eq!(events.borrow().created.len(), 1);
}

#[test]
fn blank_and_malformed_names_report_every_rule_in_order() {
    let (mut editor, _) = recording_editor(EditorConfig::default());
    editor.set_name("   ");
    editor.clear_type();
    assert_eq!(
        editor.submit::<ExistingField>(&[]),
        Err(vec![ValidationError::RequiredName, ValidationError::RequiredType])
    );

    editor.set_name("9lives");
    assert_eq!(
        editor.errors(),
        &[ValidationError::NameFormat, ValidationError::RequiredType]
    );

    editor.set_type(DataType::Integer);
    assert_eq!(editor.errors(), &[ValidationError::NameFormat]);
}

#[test]
fn edits_before_first_submit_never_surface_errors() {
    let (mut editor, _) = recording_editor(EditorConfig::default());
    editor.set_name("1 bad name!");
    editor.clear_type();
    editor.toggle_unique(true);
    assert!(editor.errors().is_empty());
    assert_eq!(editor.mode(), ValidationMode::Deferred);
}

#[test]
fn cancel_resets_the_draft_but_keeps_errors() {
    let (mut editor, events) = recording_editor(EditorConfig::default());
    editor.set_name("");
    editor
        .submit::<ExistingField>(&[])
        .expect_err("name is required");

    editor.cancel();

    assert_eq!(events.borrow().cancels, 1);
    assert!(events.borrow().created.is_empty());
    assert_eq!(editor.draft(), &FieldDraft::empty(DataType::String));
    assert_eq!(editor.errors(), &[ValidationError::RequiredName]);
    assert_eq!(editor.mode(), ValidationMode::Live);
}

#[test]
fn long_names_are_measured_in_snake_case() {
    let config = EditorConfig::default().with_max_identifier_length(10);
    let (mut editor, _) = recording_editor(config);

    editor.set_name("createdAt");
    assert!(editor.submit::<ExistingField>(&[]).is_ok());

    editor.set_name("createdAtDate");
    assert_eq!(
        editor.submit::<ExistingField>(&[]),
        Err(vec![ValidationError::NameLength])
    );
}

#[test]
fn snake_case_comparison_catches_spelling_variants() {
    let config = EditorConfig::default().with_name_comparison(NameComparison::SnakeCase);
    let (mut editor, _) = recording_editor(config);
    editor.set_name("createdAt");
    assert_eq!(
        editor.submit(&existing(&["created_at"])),
        Err(vec![ValidationError::UniqueName])
    );
}

#[test]
fn commands_drive_the_editor_through_the_reducer() {
    let catalog = DataTypeCatalog::empty()
        .with_entry(DataType::Integer, "Integer")
        .with_entry(DataType::Boolean, "Yes/No");
    let config = EditorConfig::default()
        .with_data_types(catalog)
        .with_default_type(DataType::Integer);
    let mut editor = FieldEditor::new(config).with_existing_fields(&existing(&["id"]));

    assert_eq!(
        editor.apply(EditorCommand::SetName("id".into())),
        CommandOutcome::Edited
    );
    assert_eq!(
        editor.apply(EditorCommand::Submit),
        CommandOutcome::Rejected(vec![ValidationError::UniqueName])
    );
    editor.apply(EditorCommand::SetName("active".into()));
    editor.apply(EditorCommand::SetType(DataType::Boolean));
    editor.apply(EditorCommand::ToggleRequired(true));

    let expected = FieldDraft::empty(DataType::Boolean)
        .with_name("active")
        .with_required(true);
    assert_eq!(
        editor.apply(EditorCommand::Submit),
        CommandOutcome::Created(expected)
    );
    assert_eq!(editor.apply(EditorCommand::Cancel), CommandOutcome::Cancelled);
    assert_eq!(editor.draft().data_type, Some(DataType::Integer));
}

#[test]
fn byte_order_mark_around_the_name_is_trimmed() {
    let (mut editor, events) = recording_editor(EditorConfig::default());
    editor.set_name("\u{FEFF}abc");
    let field = editor
        .submit::<ExistingField>(&[])
        .expect("mark is not part of the name");
    assert_eq!(field.name, "abc");
    assert_eq!(events.borrow().created[0].name, "abc");
}
