//! Simple String List Widget
//!
//! A tag-style editor for a list of free-text strings: one entry input, one
//! add trigger, removable pill rows, all synced into a hidden JSON input.

use leptos::mount::mount_to;
use leptos::prelude::*;

use crate::dom;
use crate::model::ListField;

/// Element ids and row styling for one simple list widget.
#[derive(Clone, Copy, Debug)]
pub struct StringListConfig {
    /// Hidden input holding the serialized list; required.
    pub hidden_id: &'static str,
    /// Free-text entry input; optional, add-by-Enter is disabled without it.
    pub entry_id: &'static str,
    /// Add trigger; optional, add-by-click is disabled without it.
    pub add_id: &'static str,
    /// Container whose content is fully owned by the rendered rows; required.
    pub container_id: &'static str,
    pub row_class: &'static str,
}

/// One bound simple-list widget instance.
///
/// `Copy` so event closures can capture it freely; all element handles live
/// in local stored values, all list state in one signal per instance.
#[derive(Clone, Copy)]
pub struct StringListEditor {
    items: RwSignal<ListField<String>>,
    hidden: StoredValue<web_sys::HtmlInputElement, LocalStorage>,
    entry: StoredValue<Option<web_sys::HtmlInputElement>, LocalStorage>,
    row_class: &'static str,
}

impl StringListEditor {
    /// Append the entry control's current text, then clear it.
    pub fn add_from_entry(&self) {
        let raw = self
            .entry
            .with_value(|entry| entry.as_ref().map(|entry| entry.value()));
        if let Some(raw) = raw {
            self.add(&raw);
        }
    }

    /// Append a trimmed value at the tail; blank input is silently ignored.
    pub fn add(&self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.items.update(|items| {
            items.push_trimmed(raw);
        });
        self.entry.with_value(|entry| {
            if let Some(entry) = entry {
                entry.set_value("");
            }
        });
        self.sync_hidden();
    }

    /// Remove the row at `index` as rendered most recently.
    pub fn remove(&self, index: usize) {
        self.items.update(|items| {
            items.remove(index);
        });
        self.sync_hidden();
    }

    pub fn len(&self) -> usize {
        self.items.with_untracked(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.items.with_untracked(|items| items.is_empty())
    }

    /// The hidden input carries `encode(list)` before any operation returns.
    fn sync_hidden(&self) {
        let serialized = self.items.with_untracked(|items| items.serialized());
        self.hidden.with_value(|hidden| hidden.set_value(&serialized));
    }
}

/// Bind a simple string-list widget to the host page.
///
/// Returns `None` without side effects when the hidden input or the row
/// container is missing; a missing entry input or add trigger only disables
/// the corresponding way of adding.
pub fn bind_string_list(config: &StringListConfig) -> Option<StringListEditor> {
    let hidden: web_sys::HtmlInputElement = dom::element_by_id(config.hidden_id)?;
    let container: web_sys::HtmlElement = dom::element_by_id(config.container_id)?;
    let entry: Option<web_sys::HtmlInputElement> = dom::element_by_id(config.entry_id);
    let add_trigger: Option<web_sys::HtmlElement> = dom::element_by_id(config.add_id);

    let editor = StringListEditor {
        items: RwSignal::new(ListField::from_serialized(&hidden.value())),
        hidden: StoredValue::new_local(hidden),
        entry: StoredValue::new_local(entry.clone()),
        row_class: config.row_class,
    };

    if let Some(add_trigger) = &add_trigger {
        dom::listen(add_trigger, "click", move |_: web_sys::Event| {
            editor.add_from_entry();
        });
    }
    if let Some(entry) = &entry {
        // Enter behaves like the add trigger, once, instead of submitting
        // the surrounding form.
        dom::listen(entry, "keydown", move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                editor.add_from_entry();
            }
        });
    }

    container.set_inner_html("");
    mount_to(container, move || string_rows(editor)).forget();
    Some(editor)
}

/// Row view: rebuilt from scratch on every list change, so each remove button
/// closes over the index its row had at the latest render.
fn string_rows(editor: StringListEditor) -> impl IntoView {
    move || {
        editor
            .items
            .get()
            .into_items()
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                view! {
                    <div class=editor.row_class>
                        <span>{item}</span>
                        <button
                            type="button"
                            class="text-red-500 font-bold"
                            on:click=move |_| editor.remove(index)
                        >
                            "×"
                        </button>
                    </div>
                }
            })
            .collect_view()
    }
}
