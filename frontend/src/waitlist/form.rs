use std::rc::Rc;

use log::{error, info, warn};
use thiserror::Error;
use yew::prelude::*;

use super::counter;
use super::service::{ServiceError, WaitlistService};
use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::celebration::Celebration;
use crate::config;

pub const SIGNUP_SOURCE: &str = "hero_section";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fullName" => Some(Field::FullName),
            "email" => Some(Field::Email),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub full_name: String,
    pub email: String,
}

impl FormState {
    /// Same rule as the inputs' `required` attribute.
    pub fn is_complete(&self) -> bool {
        !self.full_name.is_empty() && !self.email.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Submitted,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form incomplete or a submission is already in flight")]
    ValidationSkipped,
    #[error("waitlist rejected the entry: {0}")]
    ServiceRejected(String),
    #[error("waitlist request failed: {0}")]
    TransportError(#[from] ServiceError),
}

impl SubmitError {
    /// What the form shows. None means nothing is surfaced.
    pub fn user_message(&self) -> Option<String> {
        match self {
            SubmitError::ValidationSkipped => None,
            SubmitError::ServiceRejected(message) => Some(message.clone()),
            SubmitError::TransportError(_) => Some(config::GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }
}

/// Trimmed values handed to the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub full_name: String,
    pub email: String,
}

pub enum FormAction {
    FieldChanged(Field, String),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(SubmitError),
    DismissError,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistFormModel {
    pub form: FormState,
    pub status: SubmissionStatus,
}

impl WaitlistFormModel {
    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.form.is_complete()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Guard checked by the submit handler before anything is sent.
    pub fn submission(&self) -> Result<Submission, SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::ValidationSkipped);
        }
        Ok(Submission {
            full_name: self.form.full_name.trim().to_string(),
            email: self.form.email.trim().to_string(),
        })
    }
}

impl Reducible for WaitlistFormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::FieldChanged(Field::FullName, value) => next.form.full_name = value,
            FormAction::FieldChanged(Field::Email, value) => next.form.email = value,
            FormAction::SubmitStarted => next.status = SubmissionStatus::Loading,
            FormAction::SubmitSucceeded => {
                next.form = FormState::default();
                next.status = SubmissionStatus::Submitted;
            }
            FormAction::SubmitFailed(err) => match err.user_message() {
                Some(message) => next.status = SubmissionStatus::Failed(message),
                None => return self,
            },
            FormAction::DismissError => {
                if matches!(next.status, SubmissionStatus::Failed(_)) {
                    next.status = SubmissionStatus::Idle;
                }
            }
        }
        next.into()
    }
}

pub async fn submit_entry(service: &dyn WaitlistService, submission: &Submission) -> Result<(), SubmitError> {
    info!("Submitting waitlist entry");
    match service.add_entry(&submission.full_name, &submission.email).await {
        Ok(response) if response.success => Ok(()),
        Ok(response) => {
            let message = response
                .error
                .unwrap_or_else(|| config::GENERIC_FAILURE_MESSAGE.to_string());
            warn!("Waitlist rejected entry: {}", message);
            Err(SubmitError::ServiceRejected(message))
        }
        Err(e) => {
            error!("Waitlist submission error: {}", e);
            Err(SubmitError::TransportError(e))
        }
    }
}

/// Everything that happens after the submit handler has passed the guard
/// and marked the form as loading.
pub struct SignupFlow<'a> {
    pub service: &'a dyn WaitlistService,
    pub analytics: &'a dyn AnalyticsSink,
    pub celebration: &'a dyn Celebration,
}

impl SignupFlow<'_> {
    pub async fn run(
        &self,
        submission: Submission,
        dispatch: impl Fn(FormAction),
        on_count: impl Fn(u64),
    ) -> Result<(), SubmitError> {
        if let Err(e) = submit_entry(self.service, &submission).await {
            dispatch(FormAction::SubmitFailed(e.clone()));
            return Err(e);
        }

        self.analytics
            .track(AnalyticsEvent::signup(&submission.email, SIGNUP_SOURCE));
        self.celebration.celebrate();
        dispatch(FormAction::SubmitSucceeded);

        if let Some(count) = counter::refresh_after_submit(self.service).await {
            on_count(count);
        }
        info!("Waitlist signup complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::waitlist::service::{AddEntryResponse, CountResponse};
    use crate::waitlist::testing::{MockWaitlist, RecordingAnalytics, RecordingCelebration};

    fn filled() -> Rc<WaitlistFormModel> {
        let model = Rc::new(WaitlistFormModel::default());
        let model = model.reduce(FormAction::FieldChanged(Field::FullName, " Alex Morgan ".into()));
        model.reduce(FormAction::FieldChanged(Field::Email, "alex@example.com ".into()))
    }

    /// Runs the flow and folds dispatched actions back into the model.
    fn run_flow(
        model: Rc<WaitlistFormModel>,
        service: &MockWaitlist,
        analytics: &RecordingAnalytics,
        celebration: &RecordingCelebration,
    ) -> (Rc<WaitlistFormModel>, Result<(), SubmitError>, Option<u64>) {
        let submission = model.submission().unwrap();
        let state = RefCell::new(model.reduce(FormAction::SubmitStarted));
        let count = RefCell::new(None);
        let flow = SignupFlow { service, analytics, celebration };
        let result = block_on(flow.run(
            submission,
            |action| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(action);
            },
            |c| *count.borrow_mut() = Some(c),
        ));
        (state.into_inner(), result, count.into_inner())
    }

    #[test]
    fn field_names_round_trip() {
        for field in [Field::FullName, Field::Email] {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn empty_fields_block_submission() {
        let model = WaitlistFormModel::default();
        assert_eq!(model.submission(), Err(SubmitError::ValidationSkipped));

        let name_only = Rc::new(model).reduce(FormAction::FieldChanged(Field::FullName, "Alex".into()));
        assert!(!name_only.can_submit());
        assert_eq!(name_only.submission(), Err(SubmitError::ValidationSkipped));
    }

    #[test]
    fn submission_is_trimmed() {
        assert_eq!(
            filled().submission(),
            Ok(Submission { full_name: "Alex Morgan".into(), email: "alex@example.com".into() })
        );
    }

    #[test]
    fn loading_blocks_a_second_submission() {
        let service = MockWaitlist::accepting(10);
        let model = filled();
        let first = model.submission().unwrap();
        let loading = model.reduce(FormAction::SubmitStarted);

        assert!(loading.is_loading());
        assert_eq!(loading.submission(), Err(SubmitError::ValidationSkipped));

        block_on(submit_entry(&service, &first)).unwrap();
        assert_eq!(service.add_calls(), 1);
    }

    #[test]
    fn success_clears_form_and_refreshes_count() {
        let service = MockWaitlist::accepting(2574);
        let analytics = RecordingAnalytics::default();
        let celebration = RecordingCelebration::default();

        let (model, result, count) = run_flow(filled(), &service, &analytics, &celebration);

        assert_eq!(result, Ok(()));
        assert_eq!(model.status, SubmissionStatus::Submitted);
        assert_eq!(model.form, FormState { full_name: String::new(), email: String::new() });
        assert_eq!(count, Some(2574));
        assert_eq!(service.added(), vec![("Alex Morgan".to_string(), "alex@example.com".to_string())]);
        assert_eq!(celebration.count(), 1);
        assert_eq!(analytics.events(), vec![AnalyticsEvent::signup("alex@example.com", SIGNUP_SOURCE)]);
    }

    #[test]
    fn rejection_keeps_fields_and_shows_message() {
        let service = MockWaitlist::answering(AddEntryResponse::rejected("Email already registered"));
        let analytics = RecordingAnalytics::default();
        let celebration = RecordingCelebration::default();
        let before = filled();

        let (model, result, count) = run_flow(before.clone(), &service, &analytics, &celebration);

        assert_eq!(result, Err(SubmitError::ServiceRejected("Email already registered".into())));
        assert_eq!(model.status, SubmissionStatus::Failed("Email already registered".into()));
        assert_eq!(model.form, before.form);
        assert!(!model.is_loading());
        assert_eq!(count, None);
        assert_eq!(celebration.count(), 0);
        assert!(analytics.events().is_empty());
        assert_eq!(service.count_calls(), 0);
    }

    #[test]
    fn transport_failure_shows_generic_message() {
        let service = MockWaitlist::failing(ServiceError::Transport("connection reset".into()));
        let analytics = RecordingAnalytics::default();
        let celebration = RecordingCelebration::default();

        let (model, result, _) = run_flow(filled(), &service, &analytics, &celebration);

        assert!(matches!(result, Err(SubmitError::TransportError(_))));
        assert_eq!(model.error_message(), Some("Something went wrong. Please try again."));
        assert_eq!(model.form.email, "alex@example.com ");
    }

    #[test]
    fn rejection_without_message_falls_back_to_generic() {
        let service = MockWaitlist::answering(AddEntryResponse { success: false, error: None });
        let err = block_on(submit_entry(&service, &filled().submission().unwrap())).unwrap_err();
        assert_eq!(err.user_message().as_deref(), Some(config::GENERIC_FAILURE_MESSAGE));
    }

    #[test]
    fn failed_refresh_does_not_undo_success() {
        let service = MockWaitlist::accepting(0).with_count(Err(ServiceError::Status(503)));
        let analytics = RecordingAnalytics::default();
        let celebration = RecordingCelebration::default();

        let (model, result, count) = run_flow(filled(), &service, &analytics, &celebration);

        assert_eq!(result, Ok(()));
        assert_eq!(model.status, SubmissionStatus::Submitted);
        assert_eq!(count, None);
    }

    #[test]
    fn retry_after_failure_sends_a_new_request() {
        let service = MockWaitlist::answering(AddEntryResponse::rejected("Try later"));
        let analytics = RecordingAnalytics::default();
        let celebration = RecordingCelebration::default();

        let (failed, _, _) = run_flow(filled(), &service, &analytics, &celebration);
        assert!(failed.can_submit());
        let (_, _, _) = run_flow(failed, &service, &analytics, &celebration);

        assert_eq!(service.add_calls(), 2);
    }

    #[test]
    fn dismiss_clears_only_errors() {
        let failed = filled().reduce(FormAction::SubmitFailed(SubmitError::ServiceRejected("nope".into())));
        assert_eq!(failed.error_message(), Some("nope"));
        let dismissed = failed.reduce(FormAction::DismissError);
        assert_eq!(dismissed.status, SubmissionStatus::Idle);

        let loading = filled().reduce(FormAction::SubmitStarted);
        assert_eq!(loading.reduce(FormAction::DismissError).status, SubmissionStatus::Loading);
    }

    #[test]
    fn skipped_validation_is_silent() {
        let model = filled();
        let after = model.clone().reduce(FormAction::SubmitFailed(SubmitError::ValidationSkipped));
        assert!(Rc::ptr_eq(&model, &after));
    }

    #[test]
    fn count_response_shape_is_checked() {
        let service = MockWaitlist::accepting(5).with_count(Ok(CountResponse { success: false, count: None }));
        assert_eq!(block_on(counter::refresh_after_submit(&service)), None);
    }
}
