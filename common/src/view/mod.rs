//! Per-page UI state.
//!
//! Every list page walks `Loading -> {Empty | Loaded | Failed}` and owns one
//! create form that is either hidden or shown. Both front ends drive these same
//! types so their behavior stays aligned.

/// What a list page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Empty,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<T> ListState<T> {
    pub fn from_result(result: Result<Vec<T>, String>) -> Self {
        match result {
            Ok(items) if items.is_empty() => ListState::Empty,
            Ok(items) => ListState::Loaded(items),
            Err(message) => ListState::Failed(message),
        }
    }

    /// Appends a freshly created record without waiting for a reload.
    pub fn push(&mut self, item: T) {
        match self {
            ListState::Loaded(items) => items.push(item),
            _ => *self = ListState::Loaded(vec![item]),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }
}

/// A create form: hidden or shown, its draft data, and whether a submit is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<D: Default> {
    pub visible: bool,
    pub submitting: bool,
    pub data: D,
}

impl<D: Default> FormState<D> {
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hides the form and blanks its draft. Used for both cancel and a successful submit.
    pub fn reset(&mut self) {
        self.visible = false;
        self.submitting = false;
        self.data = D::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_result_picks_the_terminal_state() {
        assert_eq!(ListState::<i32>::from_result(Ok(vec![])), ListState::Empty);
        assert_eq!(ListState::from_result(Ok(vec![1, 2])), ListState::Loaded(vec![1, 2]));
        assert_eq!(
            ListState::<i32>::from_result(Err("boom".into())),
            ListState::Failed("boom".into())
        );
    }

    #[test]
    fn push_turns_any_state_into_loaded() {
        let mut state = ListState::Empty;
        state.push(1);
        state.push(2);
        assert_eq!(state.items(), &[1, 2]);

        let mut failed = ListState::Failed("x".into());
        failed.push(9);
        assert_eq!(failed, ListState::Loaded(vec![9]));
    }

    #[test]
    fn form_reset_hides_and_blanks() {
        let mut form: FormState<String> = FormState::default();
        form.open();
        form.data.push_str("draft");
        form.submitting = true;
        form.reset();
        assert_eq!(form, FormState::default());
    }
}
