use cosmic::iced::Length;
use cosmic::widget::{button, column, container, scrollable, text};
use cosmic::Element;

use crate::core::note::Note;
use crate::message::Message;

const LIST_WIDTH: f32 = 220.0;

/// Sidebar listing every note title in backend arrival order. The note whose
/// id matches `selected_id` is highlighted; clicking a row emits
/// `Message::SelectNote` upward. Selection state lives in the store's edit
/// buffer, so starting a new note clears the highlight for free.
pub fn note_list<'a>(notes: &[Note], selected_id: &str) -> Element<'a, Message> {
    let mut col = column().spacing(4);

    if notes.is_empty() {
        col = col.push(text::caption("No notes yet"));
    }

    for note in notes {
        let selected = !selected_id.is_empty() && note.id == selected_id;
        let label = note.list_title();
        let btn = if selected {
            button::suggested(label)
        } else {
            button::text(label)
        };
        col = col.push(
            btn.on_press(Message::SelectNote(note.id.clone()))
                .width(Length::Fill),
        );
    }

    container(scrollable(col.padding(8)))
        .width(Length::Fixed(LIST_WIDTH))
        .height(Length::Fill)
        .into()
}
