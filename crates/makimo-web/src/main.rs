mod address;
mod api;
mod app;
mod components;
mod decor;
mod pages;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
