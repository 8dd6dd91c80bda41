pub mod api;
pub mod app;
pub mod artwork_card;
pub mod artwork_grid;
mod artwork_modal;
pub mod header;
pub mod location;
pub mod similarity_list;

use crate::app::App;
use leptos::mount::mount_to_body;

fn main() {
    mount_to_body(App);
}
