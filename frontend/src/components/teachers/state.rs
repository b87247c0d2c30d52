use client::workflows::teacher::TeacherEditor;

pub struct TeachersComponent {
    pub editor: TeacherEditor,
}

impl TeachersComponent {
    pub fn new() -> Self {
        Self {
            editor: TeacherEditor::new(),
        }
    }
}
