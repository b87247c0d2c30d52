//! Teacher panel: creation form and a list with inline editing and deletion.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TeachersProps;
pub use state::TeachersComponent;

impl Component for TeachersComponent {
    type Message = Msg;
    type Properties = TeachersProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TeachersComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
