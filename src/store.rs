use crate::api::ApiError;
use crate::core::note::Note;

/// Which edit-pane field an input event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    Title,
    Text,
}

/// Working copy of the note being composed. An empty `id` means "new note";
/// the fields diverge from the stored note until a save succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub id: String,
    pub title: String,
    pub text: String,
}

/// The save the caller should send to the backend after `begin_save`.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub id: String,
    pub title: String,
    pub text: String,
}

/// Authoritative client-side state: the note list in backend arrival order
/// plus the edit buffer. All mutations go through here; the UI layer only
/// renders this state and forwards events.
///
/// While a save is in flight (`saving`) the edit buffer is frozen: select,
/// new-note, and field edits are rejected here rather than relying on the
/// view disabling its inputs.
pub struct NoteStore {
    /// False until the initial fetch has completed (either way).
    pub loaded: bool,
    /// Set on a failed initial load; replaces the whole UI when present.
    pub fatal_error: Option<String>,
    pub notes: Vec<Note>,
    pub edit: EditBuffer,
    pub saving: bool,
    /// Business-level message shown above the edit fields; cleared by typing.
    pub inline_error: Option<String>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            loaded: false,
            fatal_error: None,
            notes: Vec::new(),
            edit: EditBuffer::default(),
            saving: false,
            inline_error: None,
        }
    }

    /// Completion of the initial fetch. Transport failures and non-2xx
    /// statuses are fatal; a well-formed `{success: false}` reply keeps the
    /// UI alive with an inline message and an empty list.
    pub fn notes_loaded(&mut self, result: Result<Vec<Note>, ApiError>) {
        self.loaded = true;
        match result {
            Ok(notes) => self.notes = notes,
            Err(ApiError::Rejected(message)) => {
                self.notes.clear();
                self.inline_error = Some(message);
            }
            Err(err) => self.fatal_error = Some(err.to_string()),
        }
    }

    /// Copy the note's fields into the edit buffer. A click on an id that is
    /// no longer in the list is ignored.
    pub fn select_note(&mut self, id: &str) {
        if self.saving {
            return;
        }
        match self.notes.iter().find(|n| n.id == id) {
            Some(note) => {
                self.edit = EditBuffer {
                    id: note.id.clone(),
                    title: note.title.clone(),
                    text: note.text.clone(),
                };
            }
            None => log::warn!("select_note: no note with id {:?}", id),
        }
    }

    pub fn start_new_note(&mut self) {
        if self.saving {
            return;
        }
        self.edit = EditBuffer::default();
        self.inline_error = None;
    }

    pub fn edit_field(&mut self, field: NoteField, value: String) {
        if self.saving {
            return;
        }
        match field {
            NoteField::Title => self.edit.title = value,
            NoteField::Text => self.edit.text = value,
        }
        // Typing dismisses the previous error.
        self.inline_error = None;
    }

    /// Validate the edit buffer and enter the saving state. Returns the
    /// request to send, or `None` when validation failed or a save is
    /// already in flight — in both cases no network call must be made.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        if self.saving {
            return None;
        }
        if self.edit.title.is_empty() || self.edit.text.is_empty() {
            self.inline_error = Some("Note title and text are required".to_string());
            return None;
        }
        self.inline_error = None;
        self.saving = true;
        Some(SaveRequest {
            id: self.edit.id.clone(),
            title: self.edit.title.clone(),
            text: self.edit.text.clone(),
        })
    }

    /// Completion of a save. Success merges the edit buffer into the list:
    /// a create appends with the server-assigned id, an update replaces the
    /// matching entry in place. Any failure leaves the list untouched and
    /// surfaces inline — transport errors included.
    pub fn save_completed(&mut self, result: Result<Option<String>, ApiError>) {
        self.saving = false;
        match result {
            Ok(assigned) => {
                if self.edit.id.is_empty() {
                    // The api layer guarantees an id for successful creates,
                    // but don't trust it with list integrity.
                    match assigned {
                        Some(id) => {
                            self.notes.push(Note {
                                id: id.clone(),
                                title: self.edit.title.clone(),
                                text: self.edit.text.clone(),
                            });
                            self.edit.id = id;
                        }
                        None => {
                            self.inline_error =
                                Some("An unknown error occurred".to_string());
                        }
                    }
                } else if let Some(note) =
                    self.notes.iter_mut().find(|n| n.id == self.edit.id)
                {
                    note.title = self.edit.title.clone();
                    note.text = self.edit.text.clone();
                }
            }
            Err(err) => self.inline_error = Some(err.to_string()),
        }
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
