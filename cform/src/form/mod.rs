//! The form container.

mod context;
mod handle;

pub use context::{FormContext, FormId};
pub use handle::FormHandle;

use crate::config::FormConfig;
use crate::item::{FormItem, MountedItem};
use crate::layout::{
    FormLayout, FormSize, GutterSize, LabelAlign, LabelDirection, LabelWidth, LayoutProps,
};
use crate::node::{Layout, Node};
use crate::value::FormValue;

/// Props of a [`Form`].
///
/// Only `value` is required; layout props left unset are taken from the
/// [`FormConfig`] the form is mounted with.
#[derive(Debug, Clone)]
pub struct FormProps {
    value: FormValue,
    layout: LayoutProps,
    items: Vec<FormItem>,
    children: Vec<Node>,
}

impl FormProps {
    /// Props for a form over `value`.
    pub fn new(value: FormValue) -> Self {
        Self {
            value,
            layout: LayoutProps::default(),
            items: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn size(mut self, size: FormSize) -> Self {
        self.layout.size = Some(size);
        self
    }

    pub fn gutter_size(mut self, gutter: GutterSize) -> Self {
        self.layout.gutter_size = Some(gutter);
        self
    }

    /// Default column span of the form's items.
    pub fn col(mut self, col: u8) -> Self {
        self.layout.col = Some(col);
        self
    }

    pub fn label_direction(mut self, direction: LabelDirection) -> Self {
        self.layout.label_direction = Some(direction);
        self
    }

    pub fn label_width(mut self, width: LabelWidth) -> Self {
        self.layout.label_width = Some(width);
        self
    }

    pub fn label_align(mut self, align: LabelAlign) -> Self {
        self.layout.label_align = Some(align);
        self
    }

    /// Add a field descriptor.
    pub fn item(mut self, item: FormItem) -> Self {
        self.items.push(item);
        self
    }

    /// Add several field descriptors.
    pub fn items(mut self, items: impl IntoIterator<Item = FormItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Add extra content rendered after the items.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }
}

/// A mounted form.
///
/// Owns the form context, the mounted items and any extra children. Fields
/// created elsewhere can join the form through [`Form::context`] and
/// [`FormItem::mount`]; the owner drives validation through
/// [`Form::handle`].
///
/// # Example
///
/// ```
/// use cform::prelude::*;
///
/// let value = FormValue::new();
/// value.set("email", "");
///
/// let form = Form::new(
///     FormProps::new(value.clone())
///         .col(12)
///         .item(FormItem::new("email").label("Email").rule(rules::required("required"))),
/// );
/// let handle = form.handle();
/// # let _ = handle;
/// ```
#[derive(Debug)]
pub struct Form {
    ctx: FormContext,
    items: Vec<MountedItem>,
    children: Vec<Node>,
}

impl Form {
    /// Mount a form with the default config.
    pub fn new(props: FormProps) -> Self {
        Self::with_config(props, &FormConfig::default())
    }

    /// Mount a form, inheriting unset props from `config`.
    pub fn with_config(props: FormProps, config: &FormConfig) -> Self {
        let layout = FormLayout::resolve(&props.layout, config);
        let ctx = FormContext::new(layout, config.clone(), props.value);
        let items = props.items.into_iter().map(|item| item.mount(&ctx)).collect();
        Self {
            ctx,
            items,
            children: props.children,
        }
    }

    /// Context for descendant fields.
    pub fn context(&self) -> &FormContext {
        &self.ctx
    }

    /// Imperative handle for the form's owner.
    pub fn handle(&self) -> FormHandle {
        self.ctx.handle()
    }

    pub fn layout(&self) -> &FormLayout {
        self.ctx.layout()
    }

    /// Mount another item after construction.
    pub fn push_item(&mut self, item: FormItem) -> &MountedItem {
        let index = match self.items.iter().position(|m| m.field() == item.field()) {
            Some(index) => {
                self.items[index] = item.mount(&self.ctx);
                index
            }
            None => {
                self.items.push(item.mount(&self.ctx));
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    pub fn items(&self) -> &[MountedItem] {
        &self.items
    }

    /// Mounted item for `field`.
    pub fn item(&self, field: &str) -> Option<&MountedItem> {
        self.items.iter().find(|item| item.field() == field)
    }

    /// Render the form: items laid out on the grid, then the children.
    pub fn view(&self) -> Node {
        let gap = self.layout().gutter_size.spacing();
        let children = self
            .items
            .iter()
            .map(MountedItem::view)
            .chain(self.children.iter().cloned())
            .collect();
        Node::Container {
            children,
            layout: Layout::row().wrap().gap(gap),
        }
    }
}
