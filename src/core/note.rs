/// A note as held by the client. `id` is empty until the backend assigns
/// one on the first successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub text: String,
}

impl Note {
    /// Title as rendered in the sidebar list: shown verbatim up to 40
    /// characters, otherwise cut to the first 25 with an ellipsis.
    pub fn list_title(&self) -> String {
        if self.title.chars().count() <= 40 {
            self.title.clone()
        } else {
            let head: String = self.title.chars().take(25).collect();
            format!("{}...", head)
        }
    }
}
