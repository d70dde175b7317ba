//! One render cycle: form input in, page model out.

use skincare_remedies::{LookupOutcome, RemedyTable};

use crate::error::AppError;
use crate::form::FormInput;
use crate::server::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "notice-success",
            Self::Info => "notice-info",
            Self::Warning => "notice-warning",
            Self::Error => "notice-error",
        }
    }
}

/// A user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// What the main area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainContent {
    /// One rendered table per remedy
    Remedies { concern: String, tables: Vec<String> },
    Message(Notice),
}

#[derive(Debug, Clone)]
pub struct PageModel {
    pub form: FormInput,
    /// Season messages shown under the form
    pub sidebar: Vec<Notice>,
    pub main: MainContent,
}

/// Run the season lookup (when a location was given) and the remedy lookup.
/// Failures become notices; this never fails.
pub async fn render_cycle(state: &AppState, form: FormInput) -> PageModel {
    let mut sidebar = Vec::new();

    let location = form.trimmed_location();
    if !location.is_empty() {
        match state.weather.classify(location).await {
            Ok(season) => sidebar.push(Notice::new(
                NoticeLevel::Success,
                format!("The current season in {} is {}.", location, season),
            )),
            Err(e) => {
                sidebar.push(Notice::new(NoticeLevel::Error, e.user_message()));
                sidebar.push(Notice::new(
                    NoticeLevel::Warning,
                    "Sorry, we couldn't determine the season based on your location.",
                ));
                let app_err = AppError::from(e);
                tracing::warn!(
                    "Season lookup for '{}' failed: {} ({})",
                    location,
                    app_err,
                    app_err.user_message()
                );
            }
        }
    }

    let main = match state.catalog.lookup(&form.concern) {
        LookupOutcome::Found { concern, remedies } => MainContent::Remedies {
            concern,
            tables: remedies
                .iter()
                .map(|r| RemedyTable::from_record(r).to_string())
                .collect(),
        },
        LookupOutcome::Unknown { concern } => MainContent::Message(Notice::new(
            NoticeLevel::Warning,
            format!("Sorry, we don't have remedies for {}.", concern),
        )),
        LookupOutcome::Blank => MainContent::Message(Notice::new(
            NoticeLevel::Info,
            "Please enter your skin concern in the sidebar to see remedies.",
        )),
    };

    PageModel {
        form,
        sidebar,
        main,
    }
}
