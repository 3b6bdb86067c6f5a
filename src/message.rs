use crate::api::ApiError;
use crate::core::note::Note;
use crate::store::NoteField;

#[derive(Debug, Clone)]
pub enum Message {
    // Initial load
    NotesLoaded(Result<Vec<Note>, ApiError>),

    // List / selection
    SelectNote(String),
    NewNote,

    // Edit pane
    SetNoteField(NoteField, String),
    EditorAction(cosmic::widget::text_editor::Action),

    // Persistence
    Save,
    SaveCompleted(Result<Option<String>, ApiError>),
}
