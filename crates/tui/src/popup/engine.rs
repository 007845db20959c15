//! The shared popup surface and its show/hide/confirm lifecycle.
//!
//! Responsibilities:
//! - Bind one definition at a time to the single dialog surface.
//! - Run the pre-show hook, rebuild the form, and drive fade transitions.
//! - Collect field values on confirm and hand them to the definition's handler.
//!
//! Does NOT handle:
//! - Mapping keys and clicks to operations (see `dispatch.rs`).
//! - Drawing (see `render.rs`), beyond storing the layout the renderer records.
//!
//! Invariants:
//! - At most one definition is bound at a time; a new `show` replaces it.
//! - Transitions do not queue. Each request restarts the fade and the latest
//!   request wins.
//! - `confirm` starts the hide as soon as the handler future is spawned. It
//!   does not wait for the handler, and the handler cannot keep the surface
//!   open. A handler that wants the dialog back after a validation failure
//!   must ask for another `show`.
//! - Spawned handlers are never cancelled by later transitions.

use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};
use typist_config::constants::POPUP_FADE_MS;

use crate::popup::definition::PopupDefinition;
use crate::popup::error::PopupError;
use crate::popup::form::Form;
use crate::popup::registry::PopupRegistry;

/// Visibility state of the shared surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceState {
    #[default]
    Hidden,
    /// Fading in.
    Showing,
    Visible,
    /// Fading out.
    Hiding,
}

impl SurfaceState {
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }

    pub fn is_fading(self) -> bool {
        matches!(self, Self::Showing | Self::Hiding)
    }

    /// Whether Enter or the confirm control may confirm in this state.
    pub fn accepts_confirm(self) -> bool {
        matches!(self, Self::Showing | Self::Visible)
    }
}

/// What the surface currently presents, captured from the bound definition.
#[derive(Debug, Clone)]
pub struct BoundSurface {
    id: String,
    title: String,
    text: String,
    button_text: String,
    form: Form,
}

impl BoundSurface {
    fn from_definition(definition: &PopupDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            title: definition.title.clone(),
            text: definition.text.clone(),
            button_text: definition.button_text.clone(),
            form: Form::bind(definition.kind, &definition.inputs),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn button_text(&self) -> &str {
        &self.button_text
    }

    pub fn has_confirm(&self) -> bool {
        !self.button_text.is_empty()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }
}

/// Screen rectangles of the last drawn surface, used for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub dialog: Rect,
    /// One rect per field in form order. Hidden fields get an empty rect.
    pub fields: Vec<Rect>,
    pub button: Option<Rect>,
}

/// The single shared dialog instance.
#[derive(Debug)]
pub struct PopupEngine {
    surface: Option<BoundSurface>,
    state: SurfaceState,
    transition_started: Option<Instant>,
    fade: Duration,
    tasks: TaskTracker,
    layout: Option<SurfaceLayout>,
}

impl Default for PopupEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupEngine {
    pub fn new() -> Self {
        Self {
            surface: None,
            state: SurfaceState::Hidden,
            transition_started: None,
            fade: Duration::from_millis(POPUP_FADE_MS),
            tasks: TaskTracker::new(),
            layout: None,
        }
    }

    /// Override the fade duration. Zero completes transitions immediately.
    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    /// Spawn confirm handlers on a shared tracker so shutdown can wait for them.
    pub fn with_task_tracker(mut self, tasks: TaskTracker) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn tasks(&self) -> &TaskTracker {
        &self.tasks
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Id of the definition bound to the surface.
    pub fn active_id(&self) -> Option<&str> {
        self.surface.as_ref().map(BoundSurface::id)
    }

    pub fn surface(&self) -> Option<&BoundSurface> {
        self.surface.as_ref()
    }

    pub fn form(&self) -> Option<&Form> {
        self.surface.as_ref().map(|s| &s.form)
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        self.surface.as_mut().map(|s| &mut s.form)
    }

    pub fn layout(&self) -> Option<&SurfaceLayout> {
        self.layout.as_ref()
    }

    pub fn set_layout(&mut self, layout: SurfaceLayout) {
        self.layout = Some(layout);
    }

    /// Fraction of the current fade completed, or `None` when not fading.
    pub fn transition_progress_at(&self, now: Instant) -> Option<f32> {
        if !self.state.is_fading() {
            return None;
        }
        let started = self.transition_started?;
        if self.fade.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(started);
        Some((elapsed.as_secs_f32() / self.fade.as_secs_f32()).min(1.0))
    }

    /// Bind `id` to the surface and start fading it in.
    ///
    /// Steps: store `parameters` on the definition, run its pre-show hook,
    /// rebuild the surface from the (possibly mutated) definition, then start
    /// the fade-in. Focus moves to the first visible field once the fade
    /// completes.
    ///
    /// # Errors
    ///
    /// `PopupError::NotFound` when `id` is not registered. The surface is left
    /// untouched in that case.
    pub fn show(
        &mut self,
        registry: &mut PopupRegistry,
        id: &str,
        parameters: Vec<String>,
    ) -> Result<(), PopupError> {
        let Some(definition) = registry.get_mut(id) else {
            warn!(popup_id = %id, "Requested popup is not registered");
            return Err(PopupError::NotFound(id.to_string()));
        };

        definition.parameters = parameters;
        if let Some(hook) = definition.before_show() {
            hook(definition);
        }

        if let Some(previous) = self.active_id()
            && previous != id
        {
            debug!(previous = %previous, popup_id = %id, "Rebinding popup surface");
        }

        self.surface = Some(BoundSurface::from_definition(definition));
        self.layout = None;
        info!(
            popup_id = %id,
            inputs = definition.inputs.len(),
            "Showing popup"
        );
        self.begin(SurfaceState::Showing, Instant::now());
        Ok(())
    }

    /// Start fading the surface out. No-op when already hidden.
    pub fn hide(&mut self) {
        if self.state.is_hidden() {
            debug!("Hide requested while popup already hidden");
            return;
        }
        debug!(popup_id = ?self.active_id(), from = ?self.state, "Hiding popup");
        if let Some(form) = self.form_mut() {
            form.clear_focus();
        }
        self.begin(SurfaceState::Hiding, Instant::now());
    }

    /// Run the bound definition's confirm handler, then start the hide.
    ///
    /// Values are read from every field in spec order, as strings. The handler
    /// future is spawned on the engine's task tracker, so this must be called
    /// from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// - `PopupError::NoActivePopup` when nothing is bound; nothing changes.
    /// - `PopupError::NotFound` when the bound id has left the registry; the
    ///   hide still starts.
    pub fn confirm(&mut self, registry: &PopupRegistry) -> Result<(), PopupError> {
        let Some(surface) = self.surface.as_ref() else {
            return Err(PopupError::NoActivePopup);
        };

        let values = surface.form.values();
        let id = surface.id.clone();

        let result = match registry.get(&id) {
            Some(definition) => {
                info!(popup_id = %id, values = values.len(), "Confirming popup");
                let handler = definition.exec();
                self.tasks.spawn(handler(definition.invocation(), values));
                Ok(())
            }
            None => {
                warn!(popup_id = %id, "Bound popup missing from registry on confirm");
                Err(PopupError::NotFound(id))
            }
        };

        self.hide();
        result
    }

    /// Advance transitions using the current time.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Complete the running transition if its fade has elapsed at `now`.
    ///
    /// Returns true when the state changed.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(started) = self.transition_started else {
            return false;
        };
        if now.saturating_duration_since(started) < self.fade {
            return false;
        }
        self.complete_transition();
        true
    }

    fn begin(&mut self, state: SurfaceState, now: Instant) {
        self.state = state;
        self.transition_started = Some(now);
        if self.fade.is_zero() {
            self.complete_transition();
        }
    }

    fn complete_transition(&mut self) {
        self.transition_started = None;
        match self.state {
            SurfaceState::Showing => {
                self.state = SurfaceState::Visible;
                if let Some(form) = self.form_mut() {
                    form.focus_first_visible();
                }
                debug!(popup_id = ?self.active_id(), "Popup visible");
            }
            SurfaceState::Hiding => {
                self.state = SurfaceState::Hidden;
                debug!(popup_id = ?self.active_id(), "Popup hidden");
                self.surface = None;
                self.layout = None;
            }
            SurfaceState::Hidden | SurfaceState::Visible => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::popup::definition::InputSpec;

    fn registry_with(definition: PopupDefinition) -> PopupRegistry {
        let mut registry = PopupRegistry::new();
        registry.register(definition).unwrap();
        registry
    }

    #[test]
    fn test_show_missing_id_leaves_surface_untouched() {
        let mut engine = PopupEngine::new();
        let mut registry = PopupRegistry::new();

        let err = engine.show(&mut registry, "missing-id", vec![]).unwrap_err();

        assert_eq!(err, PopupError::NotFound("missing-id".to_string()));
        assert_eq!(engine.state(), SurfaceState::Hidden);
        assert!(engine.active_id().is_none());
    }

    #[test]
    fn test_fade_in_completes_on_tick() {
        let mut engine = PopupEngine::new();
        let mut registry = registry_with(
            PopupDefinition::builder("demo")
                .input(InputSpec::new("A"))
                .build(),
        );

        engine.show(&mut registry, "demo", vec![]).unwrap();
        assert_eq!(engine.state(), SurfaceState::Showing);
        assert_eq!(engine.form().and_then(Form::focused), None);

        assert!(!engine.tick_at(Instant::now()));
        let later = Instant::now() + Duration::from_millis(POPUP_FADE_MS);
        assert!(engine.tick_at(later));
        assert_eq!(engine.state(), SurfaceState::Visible);
        assert_eq!(engine.form().and_then(Form::focused), Some(0));
    }

    #[test]
    fn test_hide_on_hidden_is_noop() {
        let mut engine = PopupEngine::new();
        engine.hide();
        assert_eq!(engine.state(), SurfaceState::Hidden);
        assert!(!engine.tick());
    }

    #[test]
    fn test_hide_completes_and_unbinds() {
        let mut engine = PopupEngine::new().with_fade(Duration::ZERO);
        let mut registry = registry_with(PopupDefinition::builder("demo").build());

        engine.show(&mut registry, "demo", vec![]).unwrap();
        assert_eq!(engine.state(), SurfaceState::Visible);

        engine.hide();
        assert_eq!(engine.state(), SurfaceState::Hidden);
        assert!(engine.active_id().is_none());
    }

    #[test]
    fn test_show_during_hide_wins() {
        let mut engine = PopupEngine::new();
        let mut registry = registry_with(PopupDefinition::builder("demo").build());

        engine.show(&mut registry, "demo", vec![]).unwrap();
        engine.hide();
        assert_eq!(engine.state(), SurfaceState::Hiding);

        engine.show(&mut registry, "demo", vec![]).unwrap();
        assert_eq!(engine.state(), SurfaceState::Showing);
        let later = Instant::now() + Duration::from_secs(1);
        engine.tick_at(later);
        assert_eq!(engine.state(), SurfaceState::Visible);
    }

    #[test]
    fn test_confirm_without_surface() {
        let mut engine = PopupEngine::new();
        let registry = PopupRegistry::new();
        assert_eq!(
            engine.confirm(&registry).unwrap_err(),
            PopupError::NoActivePopup
        );
        assert_eq!(engine.state(), SurfaceState::Hidden);
    }

    #[test]
    fn test_progress_reported_only_while_fading() {
        let mut engine = PopupEngine::new();
        let mut registry = registry_with(PopupDefinition::builder("demo").build());
        assert!(engine.transition_progress_at(Instant::now()).is_none());

        engine.show(&mut registry, "demo", vec![]).unwrap();
        let progress = engine
            .transition_progress_at(Instant::now() + Duration::from_secs(5))
            .unwrap();
        assert_eq!(progress, 1.0);
    }
}
