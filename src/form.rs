use log::{debug, info, warn};
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::RecipeError;
use crate::generator::RecipeGenerator;
use crate::model::Recipe;
use crate::options::{find_language, DEFAULT_LANGUAGE};
use crate::speech::{CaptureError, CaptureEvent, NoSpeechCapture, SpeechCapture};
use crate::view::{result_view, ResultView};

pub const EMPTY_INGREDIENTS_MESSAGE: &str = "Please enter some ingredients.";
pub const MICROPHONE_DENIED_MESSAGE: &str =
    "Microphone access was denied. Please allow it in your system settings.";

/// Snapshot of the form taken when a request is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub ingredients: String,
    pub dietary_options: Vec<String>,
    pub language: String,
}

/// State of the recipe request form.
///
/// At most one request is outstanding at a time: while `is_loading()` is
/// true, [`RecipeForm::begin_submit`] refuses to start another one.
pub struct RecipeForm {
    ingredients: String,
    dietary_options: Vec<String>,
    language: String,
    loading: bool,
    error: Option<String>,
    recipe: Option<Recipe>,
    dictating: bool,
    dictation_supported: bool,
    capture: Box<dyn SpeechCapture>,
    capture_events: Option<UnboundedReceiver<CaptureEvent>>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, Box::new(NoSpeechCapture))
    }
}

impl RecipeForm {
    /// Create a form. An unknown `language` falls back to English.
    pub fn new(language: &str, mut capture: Box<dyn SpeechCapture>) -> Self {
        let language = match find_language(language) {
            Some(option) => option.value.to_string(),
            None => {
                warn!("Unknown language '{}', using {}", language, DEFAULT_LANGUAGE);
                DEFAULT_LANGUAGE.to_string()
            }
        };

        let dictation_supported = capture.is_supported();
        let capture_events = if dictation_supported {
            capture.subscribe()
        } else {
            None
        };

        RecipeForm {
            ingredients: String::new(),
            dietary_options: Vec::new(),
            language,
            loading: false,
            error: None,
            recipe: None,
            dictating: false,
            dictation_supported,
            capture,
            capture_events,
        }
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn dietary_options(&self) -> &[String] {
        &self.dietary_options
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn is_dictating(&self) -> bool {
        self.dictating
    }

    pub fn dictation_supported(&self) -> bool {
        self.dictation_supported
    }

    /// What the result area should currently show
    pub fn view(&self) -> ResultView<'_> {
        result_view(self.loading, self.error(), self.recipe())
    }

    pub fn set_ingredients(&mut self, text: impl Into<String>) {
        self.ingredients = text.into();
    }

    pub fn is_dietary_selected(&self, label: &str) -> bool {
        self.dietary_options.iter().any(|o| o == label)
    }

    /// Select `label` if unselected, unselect it otherwise
    pub fn toggle_dietary(&mut self, label: &str) {
        if self.is_dietary_selected(label) {
            self.dietary_options.retain(|o| o != label);
        } else {
            self.dietary_options.push(label.to_string());
        }
    }

    /// Select an output language by value or label. Returns false if it is not offered.
    pub fn select_language(&mut self, language: &str) -> bool {
        match find_language(language) {
            Some(option) => {
                self.language = option.value.to_string();
                true
            }
            None => false,
        }
    }

    /// Start a submission.
    ///
    /// Returns `None` without sending anything when a request is already in
    /// flight, or when the ingredients are blank (the form error is set).
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.loading {
            debug!("Submit ignored, a request is already in flight");
            return None;
        }
        if self.ingredients.trim().is_empty() {
            self.error = Some(EMPTY_INGREDIENTS_MESSAGE.to_string());
            return None;
        }

        self.error = None;
        self.recipe = None;
        self.loading = true;

        Some(SubmitRequest {
            ingredients: self.ingredients.clone(),
            dietary_options: self.dietary_options.clone(),
            language: self.language.clone(),
        })
    }

    /// Store the outcome of a submission started with [`RecipeForm::begin_submit`]
    pub fn finish_submit(&mut self, result: Result<Option<Recipe>, RecipeError>) {
        match result {
            Ok(recipe) => self.recipe = recipe,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Validate, send the request through `generator` and store the outcome
    pub async fn submit(&mut self, generator: &RecipeGenerator) {
        let Some(request) = self.begin_submit() else {
            return;
        };

        info!(
            "Generating recipe with {} in {}",
            generator.provider_name(),
            request.language
        );
        let result = generator
            .generate(
                &request.ingredients,
                &request.dietary_options,
                &request.language,
            )
            .await;
        self.finish_submit(result);
    }

    /// Start or stop dictation. Does nothing when dictation is unsupported.
    pub fn toggle_dictation(&mut self) {
        if !self.dictation_supported {
            return;
        }
        if self.dictating {
            self.capture.stop();
        } else {
            self.capture.start();
        }
    }

    /// Apply one capture event to the form
    pub fn handle_capture_event(&mut self, event: CaptureEvent) {
        match event {
            CaptureEvent::Started => self.dictating = true,
            CaptureEvent::Ended => self.dictating = false,
            CaptureEvent::Recognized(segments) => {
                let transcript: String = segments.concat();
                if !transcript.is_empty() {
                    self.ingredients = append_transcript(&self.ingredients, &transcript);
                }
            }
            CaptureEvent::Error(error) => {
                warn!("Speech recognition error: {}", error);
                if error == CaptureError::PermissionDenied {
                    self.error = Some(MICROPHONE_DENIED_MESSAGE.to_string());
                }
                self.dictating = false;
            }
        }
    }

    /// Apply every capture event that is already queued. Returns how many were applied.
    pub fn process_capture_events(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let next = match self.capture_events.as_mut() {
                Some(rx) => rx.try_recv(),
                None => return applied,
            };
            match next {
                Ok(event) => {
                    self.handle_capture_event(event);
                    applied += 1;
                }
                Err(TryRecvError::Empty) => return applied,
                Err(TryRecvError::Disconnected) => {
                    self.capture_events = None;
                    return applied;
                }
            }
        }
    }

    /// Wait for the next capture event and apply it. Returns false once the stream is closed.
    pub async fn next_capture_event(&mut self) -> bool {
        let Some(rx) = self.capture_events.as_mut() else {
            return false;
        };
        match rx.recv().await {
            Some(event) => {
                self.handle_capture_event(event);
                true
            }
            None => {
                self.capture_events = None;
                false
            }
        }
    }
}

impl Drop for RecipeForm {
    fn drop(&mut self) {
        self.capture.stop();
    }
}

/// Append a dictated transcript to the ingredients, comma separated
pub fn append_transcript(ingredients: &str, transcript: &str) -> String {
    let existing = ingredients.trim();
    let transcript = transcript.trim();
    if existing.is_empty() {
        transcript.to_string()
    } else {
        format!("{existing}, {transcript}")
    }
}
