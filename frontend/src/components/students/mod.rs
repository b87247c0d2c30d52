//! Student panel: creation form, list with inline editing, deletion and
//! per-subject removal.
//!
//! The workflow logic lives in `client::workflows::student`; this component
//! only wires DOM events to it and runs the API calls it asks for.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StudentsProps;
pub use state::StudentsComponent;

impl Component for StudentsComponent {
    type Message = Msg;
    type Properties = StudentsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StudentsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
