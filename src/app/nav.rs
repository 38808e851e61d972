//! Navigation Stack
//!
//! A stack-based router: each navigable screen has one explicit, typed
//! parameter payload, enforced by the compiler at the navigation boundary.
//! Heavy review data (captured image bytes) lives in the capture state, not
//! in the route, so routes stay cheap to clone.

use crate::shared::model::{Measurement, Session, Student};

/// One screen plus its parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Root screen; always the bottom of the stack
    StudentList,
    AddStudent,
    EditStudent { student: Student },
    StudentDetail { student_id: i64, student_name: String },
    AddMeasurement { student_id: i64 },
    EditMeasurement { measurement: Measurement },
    AddSession { student_id: i64 },
    EditSession { session: Session },
    /// Capture a posture frame for a student
    Capture { student_id: i64, student_name: String },
    /// Review a finished capture; the payload is held by the capture state
    PhotoReview { photo_id: i64 },
    GalleryImport { student_id: i64, student_name: String },
    About,
}

impl Route {
    /// Title shown in the top bar
    pub fn title(&self) -> String {
        match self {
            Route::StudentList => "Elevi".to_string(),
            Route::AddStudent => "Adaugă Elev".to_string(),
            Route::EditStudent { .. } => "Editează Elev".to_string(),
            Route::StudentDetail { student_name, .. } => student_name.clone(),
            Route::AddMeasurement { .. } => "Adaugă Măsurători".to_string(),
            Route::EditMeasurement { .. } => "Editează Măsurătoare".to_string(),
            Route::AddSession { .. } => "Adaugă Sesiune".to_string(),
            Route::EditSession { .. } => "Editează Sesiune".to_string(),
            Route::Capture { .. } => "Take Posture Photo".to_string(),
            Route::PhotoReview { .. } => "Review Photo".to_string(),
            Route::GalleryImport { .. } => "Importă Poze Test".to_string(),
            Route::About => "Despre analiza AI".to_string(),
        }
    }
}

/// Forward/back/replace/pop-to-top over a screen stack.
///
/// The stack is never empty: the student list is the permanent root.
#[derive(Debug, Clone)]
pub struct NavStack {
    stack: Vec<Route>,
}

impl NavStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::StudentList],
        }
    }

    /// The screen currently on top
    pub fn current(&self) -> &Route {
        self.stack.last().expect("nav stack is never empty")
    }

    /// Push a screen onto the stack
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Go back one screen; at the root this is a no-op
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Replace the top screen, e.g. capture → review
    pub fn replace(&mut self, route: Route) {
        self.stack.pop();
        self.stack.push(route);
        if self.stack.len() == 1 && !matches!(self.stack[0], Route::StudentList) {
            self.stack.insert(0, Route::StudentList);
        }
    }

    /// Unwind to the student list
    pub fn pop_to_top(&mut self) {
        self.stack.truncate(1);
    }

    /// Whether there is a screen to go back to
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_student_list() {
        let nav = NavStack::new();
        assert_eq!(*nav.current(), Route::StudentList);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_push_and_pop() {
        let mut nav = NavStack::new();
        nav.push(Route::AddStudent);
        assert_eq!(*nav.current(), Route::AddStudent);
        assert!(nav.can_go_back());

        nav.pop();
        assert_eq!(*nav.current(), Route::StudentList);
    }

    #[test]
    fn test_pop_at_root_is_noop() {
        let mut nav = NavStack::new();
        nav.pop();
        nav.pop();
        assert_eq!(*nav.current(), Route::StudentList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_replace_swaps_top() {
        let mut nav = NavStack::new();
        nav.push(Route::Capture {
            student_id: 7,
            student_name: "Maria".to_string(),
        });
        nav.replace(Route::PhotoReview { photo_id: 42 });
        assert_eq!(*nav.current(), Route::PhotoReview { photo_id: 42 });
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_replace_keeps_root_anchored() {
        let mut nav = NavStack::new();
        nav.replace(Route::About);
        assert_eq!(*nav.current(), Route::About);
        assert!(nav.can_go_back());
        nav.pop();
        assert_eq!(*nav.current(), Route::StudentList);
    }

    #[test]
    fn test_pop_to_top() {
        let mut nav = NavStack::new();
        nav.push(Route::StudentDetail {
            student_id: 7,
            student_name: "Maria".to_string(),
        });
        nav.push(Route::AddMeasurement { student_id: 7 });
        nav.pop_to_top();
        assert_eq!(*nav.current(), Route::StudentList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_titles_carry_params() {
        let route = Route::StudentDetail {
            student_id: 7,
            student_name: "Maria".to_string(),
        };
        assert_eq!(route.title(), "Maria");
    }
}
