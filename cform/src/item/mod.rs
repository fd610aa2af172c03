//! Form items: a labelled control bound to one field.

mod trigger;

pub use trigger::{ErrorPlacement, ValidateTrigger};

use tokio::task::JoinHandle;

use crate::error::FormError;
use crate::form::FormContext;
use crate::layout::{LabelDirection, LabelWidth};
use crate::node::render::PX_PER_CELL;
use crate::node::{Layout, Node, Size, TextRole};
use crate::validation::{FieldStatus, Rule};
use crate::value::display_text;

/// Descriptor of a form field.
///
/// # Example
///
/// ```
/// use cform::prelude::*;
///
/// let email = FormItem::new("email")
///     .label("Email")
///     .required()
///     .rule(rules::required("Email is required"))
///     .rule(rules::email("Not a valid email"))
///     .col(12);
/// # let _ = email;
/// ```
#[derive(Debug, Clone)]
pub struct FormItem {
    field: String,
    label: Option<String>,
    rules: Vec<Rule>,
    col: Option<u8>,
    required: bool,
    trigger: Option<ValidateTrigger>,
    error_placement: Option<ErrorPlacement>,
}

impl FormItem {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: None,
            rules: Vec::new(),
            col: None,
            required: false,
            trigger: None,
            error_placement: None,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append a rule; rules run in the order they are added.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Override the form's column span for this item.
    pub fn col(mut self, col: u8) -> Self {
        self.col = Some(col);
        self
    }

    /// Show a required marker next to the label.
    ///
    /// This is presentation only; add [`rules::required`] to enforce it.
    ///
    /// [`rules::required`]: crate::validation::rules::required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn trigger(mut self, trigger: ValidateTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn error_placement(mut self, placement: ErrorPlacement) -> Self {
        self.error_placement = Some(placement);
        self
    }

    /// Join the form behind `ctx`, registering this item's rules.
    ///
    /// Mounting an item for a field that is already registered replaces
    /// that field's rules.
    pub fn mount(self, ctx: &FormContext) -> MountedItem {
        let layout = ctx.layout();
        let config = ctx.config();
        ctx.add_validator(self.field.clone(), self.rules);
        MountedItem {
            ctx: ctx.clone(),
            span: layout.span_for(self.col),
            trigger: self.trigger.unwrap_or(config.trigger),
            error_placement: self.error_placement.unwrap_or(config.error_placement),
            field: self.field,
            label: self.label,
            required: self.required,
        }
    }
}

/// A form item that has registered itself with a form.
#[derive(Debug, Clone)]
pub struct MountedItem {
    ctx: FormContext,
    field: String,
    label: Option<String>,
    span: u8,
    required: bool,
    trigger: ValidateTrigger,
    error_placement: ErrorPlacement,
}

impl MountedItem {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Resolved column span.
    pub fn span(&self) -> u8 {
        self.span
    }

    pub fn trigger(&self) -> ValidateTrigger {
        self.trigger
    }

    /// Current status of this field.
    pub fn status(&self) -> Option<FieldStatus> {
        self.ctx.status(&self.field)
    }

    /// Current error message of this field.
    pub fn error(&self) -> Option<String> {
        self.ctx.error(&self.field)
    }

    /// Validate this field now, regardless of its trigger.
    pub async fn validate(&self) -> Result<Option<FieldStatus>, FormError> {
        self.ctx.validate_field(&self.field).await
    }

    /// Call after the field's value changed.
    pub async fn on_change(&self) -> Result<(), FormError> {
        match self.trigger {
            ValidateTrigger::Change => {
                self.validate().await?;
            }
            ValidateTrigger::Blur => {
                if self.error().is_some() {
                    self.ctx.clear_field(&self.field);
                }
            }
            ValidateTrigger::Manual => {}
        }
        Ok(())
    }

    /// Call when the field's control loses focus.
    pub async fn on_blur(&self) -> Result<(), FormError> {
        if self.trigger == ValidateTrigger::Blur {
            self.validate().await?;
        }
        Ok(())
    }

    /// Validate on the tokio runtime without waiting for the result.
    ///
    /// For event handlers that cannot await. An unexpected rule failure is
    /// logged and the field keeps its previous status.
    pub fn spawn_validate(&self) -> JoinHandle<()> {
        let ctx = self.ctx.clone();
        let field = self.field.clone();
        tokio::spawn(async move {
            if let Err(e) = ctx.validate_field(&field).await {
                log::error!("form {}: validating '{}' failed: {}", ctx.id(), field, e);
            }
        })
    }

    /// Unregister this item's rules.
    pub fn unmount(self) {
        self.ctx.remove_validator(&self.field);
    }

    /// Render label, control and error message.
    pub fn view(&self) -> Node {
        let layout = self.ctx.layout();
        let error = self.error();

        let mut pair = Vec::with_capacity(3);
        if let Some(label) = &self.label {
            pair.push(self.label_view(label));
        }
        pair.push(Node::Control {
            field: self.field.clone(),
            value: display_text(&self.ctx.value().get(&self.field)),
            invalid: error.is_some(),
            layout: Layout::default()
                .width(Size::Auto)
                .height(Size::Fixed(layout.size.control_height())),
        });

        let error_text = |msg: String| Node::text_as(msg, TextRole::Error, Layout::default());
        let mut body = Vec::with_capacity(2);
        match (self.error_placement, error) {
            (ErrorPlacement::Inline, Some(msg)) => {
                pair.push(error_text(msg));
                body.push(self.pair_container(pair));
            }
            (ErrorPlacement::Below, Some(msg)) => {
                body.push(self.pair_container(pair));
                body.push(self.indented(error_text(msg)));
            }
            _ => body.push(self.pair_container(pair)),
        }

        Node::Container {
            children: body,
            layout: Layout::column().width(Size::Percent(layout.span_percent(self.span))),
        }
    }

    fn label_view(&self, label: &str) -> Node {
        let layout = self.ctx.layout();
        let width = match layout.label_direction {
            LabelDirection::Row => match layout.label_width {
                LabelWidth::Px(px) => Size::Fixed(px),
                LabelWidth::Percent(pct) => Size::Percent(pct),
                LabelWidth::Auto => Size::Auto,
            },
            LabelDirection::Column => Size::Auto,
        };
        let label_layout = Layout::default().width(width).align(layout.label_align);

        if self.required {
            Node::Container {
                children: vec![
                    Node::text_as("*", TextRole::Marker, Layout::default()),
                    Node::text_as(label, TextRole::Label, Layout::default()),
                ],
                layout: Layout::row().width(width).align(layout.label_align),
            }
        } else {
            Node::text_as(label, TextRole::Label, label_layout)
        }
    }

    fn pair_container(&self, children: Vec<Node>) -> Node {
        let layout = self.ctx.layout();
        let direction = match layout.label_direction {
            LabelDirection::Row => Layout::row(),
            LabelDirection::Column => Layout::column(),
        };
        Node::Container {
            children,
            layout: direction.gap(PX_PER_CELL),
        }
    }

    /// Align a node with the control when labels sit beside controls.
    fn indented(&self, node: Node) -> Node {
        let layout = self.ctx.layout();
        match (layout.label_direction, layout.label_width, &self.label) {
            (LabelDirection::Row, LabelWidth::Px(px), Some(_)) => Node::Container {
                children: vec![
                    Node::text_as("", TextRole::Plain, Layout::default().width(Size::Fixed(px))),
                    node,
                ],
                layout: Layout::row().gap(PX_PER_CELL),
            },
            _ => node,
        }
    }
}
