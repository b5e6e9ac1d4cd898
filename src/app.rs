//! BECC Admin Form Enhancement
//!
//! Wires the list widgets onto the server-rendered organisation form.

use leptos_listfield::{bind_record_list, bind_string_list, RecordListConfig, StringListConfig};

use crate::models::CoreValue;

/// Activities tag list (green pills).
const ACTIVITIES: StringListConfig = StringListConfig {
    hidden_id: "id_activities_json",
    entry_id: "activity-input",
    add_id: "add-activity-btn",
    container_id: "activities-container",
    row_class: "bg-green-100 text-green-800 px-3 py-1 rounded-full flex items-center gap-2",
};

/// Impact tag list (blue pills).
const IMPACT: StringListConfig = StringListConfig {
    hidden_id: "id_impact_json",
    entry_id: "impact-input",
    add_id: "add-impact-btn",
    container_id: "impact-container",
    row_class: "bg-blue-100 text-blue-800 px-3 py-1 rounded-full flex items-center gap-2",
};

/// Core values card list.
const CORE_VALUES: RecordListConfig = RecordListConfig {
    hidden_id: "id_core_values_json",
    add_id: "add-core-value-btn",
    container_id: "core-values-list",
    row_class: "flex gap-4 items-start bg-gray-50 p-4 rounded-lg border border-gray-200 moving-border-animation",
};

/// Bind every list field whose elements are present on this page.
///
/// Admin pages carry any subset of the three fields, so each binding is
/// independent and absent ones are skipped.
pub fn enhance_admin_form() {
    match bind_string_list(&ACTIVITIES) {
        Some(editor) => log(&format!("activities bound, {} loaded", editor.len())),
        None => log("activities field not on this page"),
    }

    match bind_string_list(&IMPACT) {
        Some(editor) => log(&format!("impact bound, {} loaded", editor.len())),
        None => log("impact field not on this page"),
    }

    match bind_record_list::<CoreValue>(&CORE_VALUES) {
        Some(editor) => log(&format!("core values bound, {} loaded", editor.len())),
        None => log("core values field not on this page"),
    }
}

fn log(message: &str) {
    web_sys::console::log_1(&format!("[FIELDS] {}", message).into());
}
