use crate::domain::errors::{AppError, AppResult};
use crate::domain::housing::{FormField, HousingInput, InputForm, PendingPrediction, PriceEstimate, StateName};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Where the user is in the select → input → predict round trip
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    Idle,
    CollectingInput { region: StateName },
    Loading { region: StateName, input: HousingInput, ticket: u64 },
    ShowingResult { region: StateName, input: HousingInput, estimate: PriceEstimate },
}

impl SessionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::CollectingInput { .. } => "collecting-input",
            SessionPhase::Loading { .. } => "loading",
            SessionPhase::ShowingResult { .. } => "showing-result",
        }
    }
}

/// Outcome of delivering a prediction result to the session
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Shown(PriceEstimate),
    Failed(AppError),
    /// Ticket did not match the in-flight request; nothing changed.
    Stale,
}

/// UI state machine behind the map's prediction flow.
///
/// At most one request is in flight: `submit` hands out a ticket and only
/// `complete` with that same ticket leaves `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionSession {
    phase: SessionPhase,
    form: InputForm,
    next_ticket: u64,
    /// False while a prompt-driven request owns the session.
    modal: bool,
}

impl Default for PredictionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionSession {
    pub fn new() -> Self {
        Self { phase: SessionPhase::Idle, form: InputForm::default(), next_ticket: 1, modal: true }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading { .. })
    }

    pub fn modal_open(&self) -> bool {
        self.modal && !matches!(self.phase, SessionPhase::Idle)
    }

    pub fn selected_region(&self) -> Option<&StateName> {
        match &self.phase {
            SessionPhase::Idle => None,
            SessionPhase::CollectingInput { region }
            | SessionPhase::Loading { region, .. }
            | SessionPhase::ShowingResult { region, .. } => Some(region),
        }
    }

    pub fn estimate(&self) -> Option<PriceEstimate> {
        match &self.phase {
            SessionPhase::ShowingResult { estimate, .. } => Some(*estimate),
            _ => None,
        }
    }

    /// Number of tickets handed out so far.
    pub fn requests_issued(&self) -> u64 {
        self.next_ticket - 1
    }

    pub fn select_region(&mut self, region: StateName) -> AppResult<()> {
        if self.is_loading() {
            return Err(AppError::RequestInFlight);
        }
        if self.selected_region() != Some(&region) {
            self.form.city.clear();
        }
        log_debug!(LogComponent::Domain("Session"), "📍 Selected {}", region);
        self.modal = true;
        self.phase = SessionPhase::CollectingInput { region };
        Ok(())
    }

    pub fn set_city(&mut self, city: &str) -> AppResult<()> {
        self.ensure_collecting("edit city")?;
        self.form.city = city.to_string();
        Ok(())
    }

    pub fn update_form(&mut self, field: FormField, text: &str) -> AppResult<u32> {
        self.ensure_collecting("edit form")?;
        self.form.set(field, text)
    }

    pub fn submit(&mut self) -> AppResult<PendingPrediction> {
        let region = match &self.phase {
            SessionPhase::CollectingInput { region } => region.clone(),
            SessionPhase::Loading { .. } => return Err(AppError::RequestInFlight),
            other => {
                return Err(AppError::InvalidTransition(format!("cannot submit while {}", other.name())));
            }
        };
        let input = self.form.to_input()?;
        Ok(self.start_loading(region, input))
    }

    /// Start a request without the modal form (prompt-driven flow).
    pub fn submit_direct(&mut self, region: StateName, input: HousingInput) -> AppResult<PendingPrediction> {
        if self.is_loading() {
            return Err(AppError::RequestInFlight);
        }
        self.modal = false;
        Ok(self.start_loading(region, input))
    }

    pub fn complete(&mut self, ticket: u64, result: AppResult<PriceEstimate>) -> Completion {
        let (region, input) = match &self.phase {
            SessionPhase::Loading { region, input, ticket: current } if *current == ticket => {
                (region.clone(), input.clone())
            }
            _ => return Completion::Stale,
        };

        match result {
            Ok(estimate) => {
                self.phase = SessionPhase::ShowingResult { region, input, estimate };
                Completion::Shown(estimate)
            }
            Err(error) => {
                self.phase = SessionPhase::CollectingInput { region };
                Completion::Failed(error)
            }
        }
    }

    pub fn edit_again(&mut self) -> AppResult<()> {
        match &self.phase {
            SessionPhase::ShowingResult { region, .. } => {
                self.phase = SessionPhase::CollectingInput { region: region.clone() };
                Ok(())
            }
            other => Err(AppError::InvalidTransition(format!("nothing to edit while {}", other.name()))),
        }
    }

    pub fn dismiss(&mut self) -> AppResult<()> {
        if self.is_loading() {
            return Err(AppError::RequestInFlight);
        }
        self.phase = SessionPhase::Idle;
        Ok(())
    }

    fn start_loading(&mut self, region: StateName, input: HousingInput) -> PendingPrediction {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.phase = SessionPhase::Loading { region: region.clone(), input: input.clone(), ticket };
        PendingPrediction { ticket, region, input }
    }

    fn ensure_collecting(&self, action: &str) -> AppResult<()> {
        match &self.phase {
            SessionPhase::CollectingInput { .. } => Ok(()),
            other => Err(AppError::InvalidTransition(format!("cannot {action} while {}", other.name()))),
        }
    }
}
