use std::cell::RefCell;

use futures::executor::block_on;
use home_price_map::application::{FAILURE_MESSAGE, PredictionService};
use home_price_map::domain::errors::{AppError, AppResult};
use home_price_map::domain::housing::{PredictionRequest, PriceEstimate, PricePredictor, StateName};
use home_price_map::domain::session::{Completion, PredictionSession};

/// Records every request and answers from a fixed result.
struct FakePredictor {
    calls: RefCell<Vec<PredictionRequest>>,
    answer: AppResult<f64>,
}

impl FakePredictor {
    fn answering(answer: AppResult<f64>) -> Self {
        Self { calls: RefCell::new(Vec::new()), answer }
    }
}

impl PricePredictor for FakePredictor {
    async fn predict(&self, request: &PredictionRequest) -> AppResult<PriceEstimate> {
        self.calls.borrow_mut().push(request.clone());
        self.answer.clone().and_then(PriceEstimate::new)
    }
}

fn submitted_session() -> (PredictionSession, home_price_map::domain::housing::PendingPrediction) {
    let mut session = PredictionSession::new();
    session.select_region(StateName::new("Colorado").unwrap()).unwrap();
    session.set_city("Boulder").unwrap();
    let pending = session.submit().unwrap();
    (session, pending)
}

#[test]
fn valid_submit_triggers_exactly_one_call_and_shows_result() {
    let service = PredictionService::new(FakePredictor::answering(Ok(675_000.0)));
    let (mut session, pending) = submitted_session();

    let result = block_on(service.estimate(&pending));
    let completion = session.complete(pending.ticket, result);

    assert_eq!(completion, Completion::Shown(PriceEstimate::new(675_000.0).unwrap()));
    let calls = service.predictor().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].state, "Colorado");
    assert_eq!(calls[0].city, "Boulder");
    assert_eq!(calls[0].living_space, 1_500);
}

#[test]
fn predictor_errors_are_passed_through() {
    let service = PredictionService::new(FakePredictor::answering(Err(AppError::HttpStatus(503))));
    let (mut session, pending) = submitted_session();

    let result = block_on(service.estimate(&pending));
    assert_eq!(result, Err(AppError::HttpStatus(503)));
    assert!(matches!(session.complete(pending.ticket, result), Completion::Failed(_)));
    assert!(!session.is_loading());
}

#[test]
fn non_finite_answer_is_an_invalid_response() {
    let service = PredictionService::new(FakePredictor::answering(Ok(f64::NAN)));
    let (_, pending) = submitted_session();

    assert!(matches!(block_on(service.estimate(&pending)), Err(AppError::InvalidResponse(_))));
}

#[test]
fn failure_alert_text_is_stable() {
    assert_eq!(FAILURE_MESSAGE, "Something went wrong during prediction. Check console.");
}
