use std::cell::RefCell;
use std::collections::VecDeque;

use home_price_map::application::{Dialogs, PromptFlow};
use home_price_map::domain::errors::AppError;
use home_price_map::domain::housing::StateName;

/// Answers prompts from a script and remembers what was asked.
#[derive(Default)]
struct ScriptedDialogs {
    answers: RefCell<VecDeque<Option<String>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    fn with(answers: &[Option<&str>]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.map(str::to_string)).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&self, _message: &str) {}

    fn prompt(&self, message: &str) -> Option<String> {
        self.asked.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().flatten()
    }
}

fn georgia() -> StateName {
    StateName::new("Georgia").unwrap()
}

#[test]
fn collects_all_four_answers_in_order() {
    let flow = PromptFlow::new(ScriptedDialogs::with(&[Some("Atlanta"), Some("3"), Some("2"), Some("1800")]));
    let input = flow.collect(&georgia()).unwrap().unwrap();

    assert_eq!(input.city(), "Atlanta");
    assert_eq!((input.bedrooms(), input.bathrooms(), input.square_footage()), (3, 2, 1_800));
    assert_eq!(
        *flow.dialogs().asked.borrow(),
        vec![
            "Enter the city/borough for Georgia:",
            "Enter number of bedrooms:",
            "Enter number of bathrooms:",
            "Enter square footage:",
        ]
    );
}

#[test]
fn cancelled_city_aborts_without_error() {
    let flow = PromptFlow::new(ScriptedDialogs::with(&[None]));
    assert_eq!(flow.collect(&georgia()).unwrap(), None);
    assert_eq!(flow.dialogs().asked.borrow().len(), 1);

    let flow = PromptFlow::new(ScriptedDialogs::with(&[Some("  ")]));
    assert_eq!(flow.collect(&georgia()).unwrap(), None);
}

#[test]
fn non_numeric_answer_aborts_silently() {
    let flow = PromptFlow::new(ScriptedDialogs::with(&[Some("Macon"), Some("many")]));
    assert_eq!(flow.collect(&georgia()).unwrap(), None);
    assert_eq!(flow.dialogs().asked.borrow().len(), 2);
}

#[test]
fn cancelled_count_defaults_to_zero() {
    let flow = PromptFlow::new(ScriptedDialogs::with(&[Some("Savannah"), None, Some(""), Some("950 sq ft")]));
    let input = flow.collect(&georgia()).unwrap().unwrap();
    assert_eq!((input.bedrooms(), input.bathrooms(), input.square_footage()), (0, 0, 950));
}

#[test]
fn negative_count_is_a_validation_error() {
    let flow = PromptFlow::new(ScriptedDialogs::with(&[Some("Athens"), Some("-1")]));
    assert!(matches!(flow.collect(&georgia()), Err(AppError::Validation(_))));
}

#[test]
fn zero_square_footage_is_a_validation_error() {
    let flow = PromptFlow::new(ScriptedDialogs::with(&[Some("Athens"), Some("2"), Some("1"), None]));
    assert!(matches!(flow.collect(&georgia()), Err(AppError::Validation(_))));
}
