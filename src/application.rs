use cosmic::app::{Core, Task as CosmicTask};
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, row, text, text_editor, text_input};
use cosmic::{Application, Element, executor};

use crate::api::ApiClient;
use crate::components::note_list;
use crate::config::JotConfig;
use crate::message::Message;
use crate::store::{NoteField, NoteStore};

pub struct Flags {
    pub config: JotConfig,
}

pub struct Jot {
    core: Core,
    config: JotConfig,
    api: ApiClient,
    store: NoteStore,
    /// Widget state for the note body, kept in sync with the store's edit
    /// buffer: rebuilt on select/new, read back on every editor action.
    text_content: text_editor::Content,
}

impl Application for Jot {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.jot.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let api = ApiClient::new(&flags.config.api_base_url);

        let app = Self {
            core,
            config: flags.config,
            api: api.clone(),
            store: NoteStore::new(),
            text_content: text_editor::Content::new(),
        };

        let fetch = CosmicTask::perform(
            async move { api.fetch_notes().await },
            |result| cosmic::Action::App(Message::NotesLoaded(result)),
        );

        (app, fetch)
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::NotesLoaded(result) => {
                self.store.notes_loaded(result);
            }

            Message::SelectNote(id) => {
                self.store.select_note(&id);
                self.sync_editor();
            }

            Message::NewNote => {
                self.store.start_new_note();
                self.sync_editor();
            }

            Message::SetNoteField(field, value) => {
                self.store.edit_field(field, value);
            }

            Message::EditorAction(action) => {
                if !self.store.saving {
                    self.text_content.perform(action);
                    self.store
                        .edit_field(NoteField::Text, editor_text(&self.text_content));
                }
            }

            Message::Save => {
                if let Some(req) = self.store.begin_save() {
                    let api = self.api.clone();
                    return CosmicTask::perform(
                        async move { api.save_note(&req.id, &req.title, &req.text).await },
                        |result| cosmic::Action::App(Message::SaveCompleted(result)),
                    );
                }
            }

            Message::SaveCompleted(result) => {
                self.store.save_completed(result);
            }
        }
        CosmicTask::none()
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Message> {
        cosmic::iced::event::listen_with(|event, _status, _id| {
            match event {
                cosmic::iced::Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                    key: cosmic::iced::keyboard::Key::Character(ref c),
                    modifiers,
                    ..
                }) if c.as_str() == "n" && modifiers.control() => Some(Message::NewNote),
                _ => None,
            }
        })
    }

    fn view(&self) -> Element<'_, Message> {
        // A failed initial load replaces the entire UI, no retry affordance.
        if let Some(ref message) = self.store.fatal_error {
            return container(text::title3(message.clone()))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }

        if !self.store.loaded {
            return container(text::body("Loading notes..."))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }

        let saving = self.store.saving;

        let mut title_input =
            text_input::text_input("Note title", &self.store.edit.title).width(Length::Fill);
        if !saving {
            title_input = title_input
                .on_input(|v| Message::SetNoteField(NoteField::Title, v))
                .on_submit(|_| Message::Save);
        }

        let header = row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(button::suggested("+").on_press(Message::NewNote))
            .push(title_input);

        let mut edit_pane = column().spacing(8);
        if let Some(ref message) = self.store.inline_error {
            edit_pane = edit_pane.push(text::body(message.clone()));
        }

        let mut editor = text_editor(&self.text_content).height(Length::Fill);
        if !saving {
            editor = editor.on_action(Message::EditorAction);
        }
        edit_pane = edit_pane.push(editor);

        let mut save_btn = button::suggested("Save");
        if !saving {
            save_btn = save_btn.on_press(Message::Save);
        }
        edit_pane = edit_pane.push(row().push(save_btn));

        let body = row()
            .spacing(12)
            .push(note_list::note_list(&self.store.notes, &self.store.edit.id))
            .push(edit_pane.width(Length::Fill));

        column()
            .spacing(12)
            .padding(16)
            .push(header)
            .push(body.height(Length::Fill))
            .into()
    }
}

impl Jot {
    /// Rebuild the editor widget state from the store's edit buffer.
    fn sync_editor(&mut self) {
        self.text_content = text_editor::Content::with_text(&self.store.edit.text);
    }
}

/// `Content::text` always reports a trailing newline, even for an empty
/// editor; strip it so emptiness validation sees what the user typed.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}
