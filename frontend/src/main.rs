use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod logger;

fn main() {
    logger::init();
    yew::Renderer::<App>::new().render();
}
