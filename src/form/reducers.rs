use super::{
    actions::{CommandOutcome, EditorCommand},
    callbacks::EditorCallbacks,
    state::FieldEditor,
};

pub fn apply_command<C: EditorCallbacks>(
    editor: &mut FieldEditor<C>,
    command: EditorCommand,
) -> CommandOutcome {
    match command {
        EditorCommand::SetName(name) => {
            editor.set_name(name);
            CommandOutcome::Edited
        }
        EditorCommand::SetType(data_type) => {
            editor.set_type(data_type);
            CommandOutcome::Edited
        }
        EditorCommand::ClearType => {
            editor.clear_type();
            CommandOutcome::Edited
        }
        EditorCommand::TogglePrimaryKey(flag) => {
            editor.toggle_primary_key(flag);
            CommandOutcome::Edited
        }
        EditorCommand::ToggleRequired(flag) => {
            editor.toggle_required(flag);
            CommandOutcome::Edited
        }
        EditorCommand::ToggleUnique(flag) => {
            editor.toggle_unique(flag);
            CommandOutcome::Edited
        }
        EditorCommand::Submit => match editor.submit_snapshot() {
            Ok(field) => CommandOutcome::Created(field),
            Err(errors) => CommandOutcome::Rejected(errors),
        },
        EditorCommand::Cancel => {
            editor.cancel();
            CommandOutcome::Cancelled
        }
    }
}
