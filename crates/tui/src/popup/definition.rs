//! Declarative popup definitions.
//!
//! Responsibilities:
//! - Describe one dialog variant: id, form kind, display text, input specs.
//! - Carry the two callbacks: the pre-show hook and the confirm handler.
//! - Provide a builder for constructing definitions at startup.
//!
//! Does NOT handle:
//! - Turning input specs into editable fields (see `form.rs`).
//! - Surface state or transitions (see `engine.rs`).
//!
//! Invariants:
//! - `inputs` order is the positional order of the values handed to the
//!   confirm handler. Handlers index into that list, so the two must be kept
//!   in lockstep.
//! - An empty `button_text` means the dialog has no confirm control.

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// How a definition's input specs are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupKind {
    /// Every field is numeric with a minimum of 1.
    Numeric,
    /// Fields take the input's declared subtype, plain text by default.
    #[default]
    Text,
}

/// Optional field subtype for `Text` popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Password,
    Email,
}

/// Declarative description of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputSpec {
    pub placeholder: String,
    pub input_type: Option<InputType>,
    /// Value the field is seeded with on every showing.
    pub init_value: String,
    /// Rendered but not visible, and not required.
    pub hidden: bool,
}

impl InputSpec {
    /// A plain field with the given placeholder.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// A masked password field.
    pub fn password(placeholder: impl Into<String>) -> Self {
        Self::new(placeholder).with_type(InputType::Password)
    }

    /// An email field.
    pub fn email(placeholder: impl Into<String>) -> Self {
        Self::new(placeholder).with_type(InputType::Email)
    }

    pub fn with_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    pub fn with_init_value(mut self, value: impl Into<String>) -> Self {
        self.init_value = value.into();
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// The "popup" argument handed to a confirm handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupInvocation {
    pub id: String,
    /// Caller context supplied to the `show` that produced this confirm.
    pub parameters: Vec<String>,
}

/// Pre-show hook. Runs synchronously before every render.
pub type BeforeShowFn = Arc<dyn Fn(&mut PopupDefinition) + Send + Sync>;

/// Confirm handler. Receives the invocation and the field values in input order.
pub type ExecFn = Arc<dyn Fn(PopupInvocation, Vec<String>) -> BoxFuture<'static, ()> + Send + Sync>;

/// One registered dialog variant.
#[derive(Clone)]
pub struct PopupDefinition {
    pub id: String,
    pub kind: PopupKind,
    pub title: String,
    /// Body text shown below the inputs.
    pub text: String,
    /// Confirm control label. Empty hides the control.
    pub button_text: String,
    pub inputs: Vec<InputSpec>,
    /// Parameters of the most recent `show`.
    pub parameters: Vec<String>,
    before_show: Option<BeforeShowFn>,
    exec: ExecFn,
}

impl fmt::Debug for PopupDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopupDefinition")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("text", &self.text)
            .field("button_text", &self.button_text)
            .field("inputs", &self.inputs)
            .field("parameters", &self.parameters)
            .field("has_before_show", &self.before_show.is_some())
            .finish()
    }
}

impl PopupDefinition {
    /// Start building a definition with the given id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typist_tui::popup::{InputSpec, PopupDefinition};
    ///
    /// let popup = PopupDefinition::builder("demo")
    ///     .title("Demo")
    ///     .input(InputSpec::new("A"))
    ///     .button_text("Go")
    ///     .build();
    /// assert!(popup.has_confirm());
    /// ```
    pub fn builder(id: impl Into<String>) -> PopupDefinitionBuilder {
        PopupDefinitionBuilder::new(id)
    }

    /// Whether the dialog shows a confirm control.
    pub fn has_confirm(&self) -> bool {
        !self.button_text.is_empty()
    }

    /// The pre-show hook, if any.
    ///
    /// Mutations the hook makes to `inputs`, `button_text` or `text` are NOT
    /// reset before the next showing. A hook that changes a field
    /// conditionally must restore it on the other branch if later showings
    /// should see the registered value again.
    pub fn before_show(&self) -> Option<BeforeShowFn> {
        self.before_show.clone()
    }

    /// The confirm handler.
    pub fn exec(&self) -> ExecFn {
        Arc::clone(&self.exec)
    }

    /// The invocation passed to the confirm handler.
    pub fn invocation(&self) -> PopupInvocation {
        PopupInvocation {
            id: self.id.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

/// Builder for [`PopupDefinition`].
pub struct PopupDefinitionBuilder {
    id: String,
    kind: PopupKind,
    title: String,
    text: String,
    button_text: String,
    inputs: Vec<InputSpec>,
    before_show: Option<BeforeShowFn>,
    exec: Option<ExecFn>,
}

impl PopupDefinitionBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: PopupKind::Text,
            title: String::new(),
            text: String::new(),
            button_text: String::new(),
            inputs: Vec::new(),
            before_show: None,
            exec: None,
        }
    }

    pub fn kind(mut self, kind: PopupKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn button_text(mut self, label: impl Into<String>) -> Self {
        self.button_text = label.into();
        self
    }

    /// Append one input spec.
    pub fn input(mut self, spec: InputSpec) -> Self {
        self.inputs.push(spec);
        self
    }

    /// Replace all input specs.
    pub fn inputs(mut self, specs: impl IntoIterator<Item = InputSpec>) -> Self {
        self.inputs = specs.into_iter().collect();
        self
    }

    /// Set the pre-show hook.
    pub fn before_show<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut PopupDefinition) + Send + Sync + 'static,
    {
        self.before_show = Some(Arc::new(hook));
        self
    }

    /// Set the confirm handler.
    ///
    /// The returned future is spawned; the surface starts hiding as soon as
    /// it is issued, not when it completes.
    pub fn exec<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(PopupInvocation, Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.exec = Some(Arc::new(move |invocation, values| {
            handler(invocation, values).boxed()
        }));
        self
    }

    pub fn build(self) -> PopupDefinition {
        PopupDefinition {
            id: self.id,
            kind: self.kind,
            title: self.title,
            text: self.text,
            button_text: self.button_text,
            inputs: self.inputs,
            parameters: Vec::new(),
            before_show: self.before_show,
            exec: self.exec.unwrap_or_else(|| {
                Arc::new(|_: PopupInvocation, _: Vec<String>| async {}.boxed())
            }),
        }
    }
}
