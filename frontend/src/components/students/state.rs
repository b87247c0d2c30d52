use client::workflows::student::StudentEditor;

/// Student panel state. Everything lives in the editor; the collection itself
/// comes from props.
pub struct StudentsComponent {
    pub editor: StudentEditor,
}

impl StudentsComponent {
    pub fn new() -> Self {
        Self {
            editor: StudentEditor::new(),
        }
    }
}
