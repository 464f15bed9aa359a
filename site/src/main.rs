//! Entry point for the landing page. Built for wasm32 with Trunk.

mod app;
mod sections;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
