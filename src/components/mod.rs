pub mod note_list;
