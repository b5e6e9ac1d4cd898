//! Leptos ListField Widgets
//!
//! Progressive enhancement for list-like form fields backed by a hidden
//! JSON input. A widget binds to elements the server already rendered,
//! keeps an in-memory list, a row view, and the hidden input's serialized
//! value consistent under add/remove/edit, and degrades gracefully when
//! optional controls are missing.
//!
//! Two variants cover the field shapes in use: a free-text tag list and a
//! list of records edited inline through delegated listeners.

mod dom;
mod model;
mod record_list;
mod string_list;

pub use model::ListField;
pub use record_list::{
    bind_record_list, FieldSpec, InlineRecord, RecordListConfig, RecordListEditor,
};
pub use string_list::{bind_string_list, StringListConfig, StringListEditor};
