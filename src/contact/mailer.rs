use async_trait::async_trait;
use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use super::submission::{ContactSubmission, FieldErrors, TemplateParams};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("the form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("email service configuration is missing")]
    ConfigurationMissing,
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
    #[error("the form is not accepting submissions")]
    NotEditable,
}

/// The three EmailJS values the deployment has to provide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailJsConfig {
    service_id: Option<String>,
    template_id: Option<String>,
    public_key: Option<String>,
}

fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl EmailJsConfig {
    pub fn new(service_id: Option<&str>, template_id: Option<&str>, public_key: Option<&str>) -> Self {
        Self {
            service_id: present(service_id),
            template_id: present(template_id),
            public_key: present(public_key),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Names of the absent values, for the startup log only.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service_id.is_none() {
            missing.push("EMAILJS_SERVICE_ID");
        }
        if self.template_id.is_none() {
            missing.push("EMAILJS_TEMPLATE_ID");
        }
        if self.public_key.is_none() {
            missing.push("EMAILJS_PUBLIC_KEY");
        }
        missing
    }
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    pub fn build(config: &EmailJsConfig, submission: &ContactSubmission) -> Result<Self, SubmitError> {
        match (&config.service_id, &config.template_id, &config.public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(Self {
                service_id: service_id.clone(),
                template_id: template_id.clone(),
                user_id: public_key.clone(),
                template_params: submission.template_params(),
            }),
            _ => Err(SubmitError::ConfigurationMissing),
        }
    }
}

/// Validation and configuration checks shared by `submit` and the form.
pub fn prepare(config: &EmailJsConfig, submission: &ContactSubmission) -> Result<EmailRequest, SubmitError> {
    let errors = submission.validate();
    if !errors.is_empty() {
        return Err(SubmitError::Invalid(errors));
    }
    EmailRequest::build(config, submission)
}

#[async_trait(?Send)]
pub trait LeadMailer {
    async fn send(&self, request: &EmailRequest) -> Result<(), SubmitError>;
}

pub struct EmailJs {
    endpoint: String,
}

impl EmailJs {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl LeadMailer for EmailJs {
    async fn send(&self, request: &EmailRequest) -> Result<(), SubmitError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| SubmitError::DeliveryFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                gloo_console::error!(format!("EmailJS request failed: {}", e));
                SubmitError::DeliveryFailed(e.to_string())
            })?;

        if response.ok() {
            info!("EmailJS accepted the lead ({})", response.status());
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("EmailJS rejected the lead: {} {}", response.status(), body);
            Err(SubmitError::DeliveryFailed(format!("status {}", response.status())))
        }
    }
}

/// Validates, checks configuration, then makes exactly one delivery attempt.
/// Nothing reaches the mailer unless both checks pass.
pub async fn submit<M: LeadMailer + ?Sized>(
    mailer: &M,
    config: &EmailJsConfig,
    submission: &ContactSubmission,
) -> Result<(), SubmitError> {
    let request = prepare(config, submission)?;
    mailer.send(&request).await
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::contact::submission::Field;

    /// Records every request and answers with a fixed outcome.
    pub(crate) struct RecordingMailer {
        pub calls: RefCell<Vec<EmailRequest>>,
        outcome: Result<(), SubmitError>,
    }

    impl RecordingMailer {
        pub fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                outcome: Ok(()),
            }
        }

        pub fn failing() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                outcome: Err(SubmitError::DeliveryFailed("status 500".to_string())),
            }
        }
    }

    #[async_trait(?Send)]
    impl LeadMailer for RecordingMailer {
        async fn send(&self, request: &EmailRequest) -> Result<(), SubmitError> {
            self.calls.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    pub(crate) fn config() -> EmailJsConfig {
        EmailJsConfig::new(Some("service_x"), Some("template_y"), Some("public_z"))
    }

    pub(crate) fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ana".to_string(),
            email: "ana@empresa.cl".to_string(),
            phone: "+56 9 1234 5678".to_string(),
            message: "Quiero una demo".to_string(),
            selected_package: "Organizador de Inventarios - Avanzado".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn valid_submission_makes_one_call_with_matching_payload() {
        let mailer = RecordingMailer::succeeding();
        let submission = valid_submission();
        assert_eq!(block_on(submit(&mailer, &config(), &submission)), Ok(()));

        let calls = mailer.calls.borrow();
        assert_eq!(calls.len(), 1);
        let request = &calls[0];
        assert_eq!(request.service_id, "service_x");
        assert_eq!(request.template_id, "template_y");
        assert_eq!(request.user_id, "public_z");
        assert_eq!(request.template_params, submission.template_params());
    }

    #[test]
    fn invalid_submission_never_reaches_mailer() {
        let mailer = RecordingMailer::succeeding();
        let mut submission = valid_submission();
        submission.email = "ana@empresa".to_string();
        submission.name = " ".to_string();

        match block_on(submit(&mailer, &config(), &submission)) {
            Err(SubmitError::Invalid(errors)) => {
                assert!(errors.contains(Field::Email));
                assert!(errors.contains(Field::Name));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(mailer.calls.borrow().is_empty());
    }

    #[test]
    fn unaccepted_terms_never_reach_mailer() {
        let mailer = RecordingMailer::succeeding();
        let mut submission = valid_submission();
        submission.accepted_terms = false;
        assert!(matches!(
            block_on(submit(&mailer, &config(), &submission)),
            Err(SubmitError::Invalid(_))
        ));
        assert!(mailer.calls.borrow().is_empty());
    }

    #[test]
    fn any_missing_secret_is_configuration_missing() {
        let partial = [
            EmailJsConfig::new(None, Some("t"), Some("k")),
            EmailJsConfig::new(Some("s"), Some("  "), Some("k")),
            EmailJsConfig::new(Some("s"), Some("t"), None),
            EmailJsConfig::default(),
        ];
        for config in partial {
            let mailer = RecordingMailer::succeeding();
            assert!(!config.is_complete());
            assert_eq!(
                block_on(submit(&mailer, &config, &valid_submission())),
                Err(SubmitError::ConfigurationMissing)
            );
            assert!(mailer.calls.borrow().is_empty());
        }
    }

    #[test]
    fn missing_lists_absent_variables() {
        let partial = EmailJsConfig::new(Some("s"), None, Some(""));
        assert_eq!(partial.missing(), vec!["EMAILJS_TEMPLATE_ID", "EMAILJS_PUBLIC_KEY"]);
        assert!(config().missing().is_empty());
    }

    #[test]
    fn delivery_failure_is_reported_once() {
        let mailer = RecordingMailer::failing();
        assert!(matches!(
            block_on(submit(&mailer, &config(), &valid_submission())),
            Err(SubmitError::DeliveryFailed(_))
        ));
        assert_eq!(mailer.calls.borrow().len(), 1);
    }

    #[test]
    fn request_serializes_to_emailjs_shape() {
        let request = EmailRequest::build(&config(), &valid_submission()).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["service_id"], "service_x");
        assert_eq!(json["user_id"], "public_z");
        assert_eq!(json["template_params"]["package"], "Organizador de Inventarios - Avanzado");
        assert_eq!(json["template_params"]["phone"], "+56 9 1234 5678");
    }
}
