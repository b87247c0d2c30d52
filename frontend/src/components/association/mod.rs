//! Association panel: pick a student and a subject, attach one to the other.

use client::association::AssociationClient;
use client::workflows::association::AssociationForm;
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{feedback_line, follow_up};

mod messages;
mod props;

pub use messages::Msg;
pub use props::AssociationProps;

pub struct AssociationComponent {
    form: AssociationForm,
}

impl Component for AssociationComponent {
    type Message = Msg;
    type Properties = AssociationProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut form = AssociationForm::new();
        form.select_defaults(&ctx.props().students, &ctx.props().subjects);
        Self { form }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.form
            .select_defaults(&ctx.props().students, &ctx.props().subjects);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectStudent(id) => {
                self.form.student_id = id;
                true
            }
            Msg::SelectSubject(id) => {
                self.form.subject_id = id;
                true
            }
            Msg::Attach => {
                let Some((student_id, subject_id)) = self.form.begin_attach() else {
                    return true;
                };
                let associations = AssociationClient::new(ctx.props().api.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = associations.attach(&student_id, &subject_id).await;
                    link.send_message(Msg::Attached(result));
                });
                true
            }
            Msg::Attached(result) => {
                follow_up(&ctx.props().on_refetch, self.form.finish_attach(result));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Attach
        });

        html! {
            <section class="panel association">
                <h2>{"Associar matéria a aluno"}</h2>
                <form class="entity-form" {onsubmit}>
                    <select onchange={link.callback(|e: Event| Msg::SelectStudent(e.target_unchecked_into::<HtmlSelectElement>().value()))}>
                        <option value="" selected={self.form.student_id.is_empty()}>{"Selecione um aluno"}</option>
                        { for props.students.iter().map(|student| html! {
                            <option value={student.id.clone()} selected={student.id == self.form.student_id}>
                                { format!("{} ({})", student.name, student.enrollment) }
                            </option>
                        }) }
                    </select>
                    <select onchange={link.callback(|e: Event| Msg::SelectSubject(e.target_unchecked_into::<HtmlSelectElement>().value()))}>
                        <option value="" selected={self.form.subject_id.is_empty()}>{"Selecione uma matéria"}</option>
                        { for props.subjects.iter().map(|subject| html! {
                            <option value={subject.id.clone()} selected={subject.id == self.form.subject_id}>
                                { format!("{} ({}º ano)", subject.name, subject.year) }
                            </option>
                        }) }
                    </select>
                    <button type="submit">{"Associar"}</button>
                </form>
                { feedback_line(&self.form.feedback) }
            </section>
        }
    }
}
