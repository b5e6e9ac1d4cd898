#![allow(warnings)]
//! BECC Admin Frontend Entry Point

mod app;
mod models;

fn main() {
    console_error_panic_hook::set_once();
    app::enhance_admin_form();
}
