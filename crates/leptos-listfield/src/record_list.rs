//! Inline Record List Widget
//!
//! A list of structured records edited in place: every row renders one
//! control per record field, changes flow through delegated listeners on the
//! container, and the whole list is synced into a hidden JSON input.

use leptos::mount::mount_to;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::model::ListField;

/// One editable control in a record row.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Field name; doubles as the `data-field` dispatch key.
    pub name: &'static str,
    pub placeholder: &'static str,
    /// Multi-line fields render a textarea instead of a text input.
    pub multiline: bool,
    /// Textarea row count; ignored for single-line fields.
    pub rows: u32,
    pub class: &'static str,
}

/// A record shape editable inline: an ordered field table driving the row
/// template, plus field access by name for the delegated listeners.
pub trait InlineRecord:
    Clone + Default + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    const FIELDS: &'static [FieldSpec];

    /// Current value of `name`, or empty for unknown names.
    fn field(&self, name: &str) -> String;

    /// Set `name` to `value`; unknown names are ignored.
    fn set_field(&mut self, name: &str, value: String);
}

/// Element ids and row styling for one record list widget.
#[derive(Clone, Copy, Debug)]
pub struct RecordListConfig {
    /// Hidden input holding the serialized list; required.
    pub hidden_id: &'static str,
    /// Add trigger; optional, add-by-click is disabled without it.
    pub add_id: &'static str,
    /// Container whose content is fully owned by the rendered rows; required.
    pub container_id: &'static str,
    pub row_class: &'static str,
}

/// One bound record-list widget instance.
pub struct RecordListEditor<T: InlineRecord> {
    items: RwSignal<ListField<T>>,
    hidden: StoredValue<web_sys::HtmlInputElement, LocalStorage>,
    row_class: &'static str,
}

impl<T: InlineRecord> Clone for RecordListEditor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: InlineRecord> Copy for RecordListEditor<T> {}

impl<T: InlineRecord> RecordListEditor<T> {
    /// Append a blank record; its fields are then edited in place.
    pub fn add_blank(&self) {
        self.items.update(|items| items.push(T::default()));
        self.sync_hidden();
    }

    /// Remove the row at `index` as rendered most recently.
    pub fn remove(&self, index: usize) {
        self.items.update(|items| {
            items.remove(index);
        });
        self.sync_hidden();
    }

    /// Write one field of one record and refresh the hidden input.
    ///
    /// Deliberately does not notify the row view: the edited control already
    /// shows the keystroke, and rebuilding rows here would steal focus from
    /// it mid-typing.
    pub fn edit_field(&self, index: usize, field: &str, value: String) {
        self.items.update_untracked(|items| {
            items.update(index, |item| item.set_field(field, value));
        });
        self.sync_hidden();
    }

    pub fn len(&self) -> usize {
        self.items.with_untracked(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.items.with_untracked(|items| items.is_empty())
    }

    fn sync_hidden(&self) {
        let serialized = self.items.with_untracked(|items| items.serialized());
        self.hidden.with_value(|hidden| hidden.set_value(&serialized));
    }
}

/// Bind a record-list widget to the host page.
///
/// Returns `None` without side effects when the hidden input or the row
/// container is missing; a missing add trigger only disables adding.
pub fn bind_record_list<T: InlineRecord>(config: &RecordListConfig) -> Option<RecordListEditor<T>> {
    let hidden: web_sys::HtmlInputElement = dom::element_by_id(config.hidden_id)?;
    let container: web_sys::HtmlElement = dom::element_by_id(config.container_id)?;
    let add_trigger: Option<web_sys::HtmlElement> = dom::element_by_id(config.add_id);

    let editor = RecordListEditor::<T> {
        items: RwSignal::new(ListField::from_serialized(&hidden.value())),
        hidden: StoredValue::new_local(hidden),
        row_class: config.row_class,
    };

    if let Some(add_trigger) = &add_trigger {
        dom::listen(add_trigger, "click", move |_: web_sys::Event| {
            editor.add_blank();
        });
    }

    // One delegated listener per concern, dispatching on the data-index and
    // data-field attributes stamped onto the controls at the latest render.
    // Nothing is attached per row and nothing is exposed globally.
    dom::listen(&container, "input", move |ev: web_sys::Event| {
        let Some((index, control)) = indexed_control(&ev) else {
            return;
        };
        let Some(field) = control.dataset().get("field") else {
            return;
        };
        editor.edit_field(index, &field, control_value(&control));
    });
    dom::listen(&container, "click", move |ev: web_sys::Event| {
        if let Some(index) = remove_trigger_index(&ev) {
            editor.remove(index);
        }
    });

    container.set_inner_html("");
    mount_to(container, move || record_rows(editor)).forget();
    Some(editor)
}

/// The row index and control behind an input event, when the target is one
/// of the rendered row controls.
fn indexed_control(ev: &web_sys::Event) -> Option<(usize, web_sys::HtmlElement)> {
    let control = ev.target()?.dyn_into::<web_sys::HtmlElement>().ok()?;
    let index = control.dataset().get("index")?.parse().ok()?;
    Some((index, control))
}

fn control_value(control: &web_sys::HtmlElement) -> String {
    if let Some(input) = control.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = control.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

/// The row index of the remove button a click landed on, if any.
fn remove_trigger_index(ev: &web_sys::Event) -> Option<usize> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("button[data-index]").ok()??;
    let button = button.dyn_into::<web_sys::HtmlElement>().ok()?;
    button.dataset().get("index")?.parse().ok()
}

/// X icon for the remove control. Static trusted markup; item text never
/// passes through `inner_html`.
const REMOVE_ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" viewBox="0 0 20 20" fill="currentColor"><path fill-rule="evenodd" d="M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z" clip-rule="evenodd" /></svg>"#;

/// Row view: rebuilt on add and remove, left alone during in-place edits.
fn record_rows<T: InlineRecord>(editor: RecordListEditor<T>) -> impl IntoView {
    move || {
        editor
            .items
            .get()
            .into_items()
            .into_iter()
            .enumerate()
            .map(|(index, item)| record_row(editor.row_class, index, item))
            .collect_view()
    }
}

fn record_row<T: InlineRecord>(row_class: &'static str, index: usize, item: T) -> impl IntoView {
    view! {
        <div class=row_class>
            <div class="flex-1 space-y-2">
                {T::FIELDS
                    .iter()
                    .map(|spec| field_control(spec, index, item.field(spec.name)))
                    .collect_view()}
            </div>
            <button
                type="button"
                class="text-red-500 hover:text-red-700 p-2"
                attr:data-index=index.to_string()
                inner_html=REMOVE_ICON_SVG
            ></button>
        </div>
    }
}

fn field_control(spec: &'static FieldSpec, index: usize, value: String) -> impl IntoView {
    let index = index.to_string();
    if spec.multiline {
        view! {
            <textarea
                placeholder=spec.placeholder
                rows=spec.rows.to_string()
                class=spec.class
                attr:data-index=index
                attr:data-field=spec.name
                prop:value=value
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                placeholder=spec.placeholder
                class=spec.class
                attr:data-index=index
                attr:data-field=spec.name
                prop:value=value
            />
        }
        .into_any()
    }
}
