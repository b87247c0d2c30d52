use client::workflows::teacher::TeacherForm;
use common::model::teacher::Teacher;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::feedback_line;

use super::messages::Msg;
use super::state::TeachersComponent;

pub fn view(component: &TeachersComponent, ctx: &Context<TeachersComponent>) -> Html {
    let link = ctx.link();

    html! {
        <section class="panel teachers">
            <h2>{"Professores"}</h2>
            { build_create_form(&component.editor.form, link) }
            { feedback_line(&component.editor.feedback) }
            <div class="cards">
                { for ctx.props().teachers.iter().map(|teacher| build_card(component, teacher, link)) }
            </div>
        </section>
    }
}

fn build_create_form(form: &TeacherForm, link: &Scope<TeachersComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Create
    });

    html! {
        <form class="entity-form" {onsubmit}>
            <input
                type="text"
                placeholder="Nome do professor"
                value={form.name.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            <input
                type="text"
                placeholder="Departamento"
                value={form.department.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetDepartment(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            <button type="submit">{"Cadastrar professor"}</button>
        </form>
    }
}

fn build_card(component: &TeachersComponent, teacher: &Teacher, link: &Scope<TeachersComponent>) -> Html {
    let draft = component
        .editor
        .edit
        .original()
        .filter(|original| original.id == teacher.id)
        .and(component.editor.edit.draft());

    match draft {
        Some(draft) => html! {
            <div class="card editing" key={teacher.id.clone()}>
                <p>{ format!("Registro: {}", teacher.registry) }</p>
                <input
                    type="text"
                    value={draft.name.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetDraftName(e.target_unchecked_into::<HtmlInputElement>().value()))}
                />
                <input
                    type="text"
                    value={draft.department.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetDraftDepartment(e.target_unchecked_into::<HtmlInputElement>().value()))}
                />
                <div class="actions">
                    <button onclick={link.callback(|_| Msg::SaveEdit)}>{"Salvar"}</button>
                    <button onclick={link.callback(|_| Msg::CancelEdit)}>{"Cancelar"}</button>
                </div>
            </div>
        },
        None => {
            let to_edit = teacher.clone();
            let to_delete = teacher.clone();
            html! {
                <div class="card" key={teacher.id.clone()}>
                    <h3>{ teacher.name.clone() }</h3>
                    <p>{ format!("Registro: {}", teacher.registry) }</p>
                    <p>{ format!("Departamento: {}", teacher.department) }</p>
                    <div class="actions">
                        <button onclick={link.callback(move |_| Msg::Edit(to_edit.clone()))}>{"Editar"}</button>
                        <button class="danger" onclick={link.callback(move |_| Msg::Delete(to_delete.clone()))}>{"Deletar"}</button>
                    </div>
                </div>
            }
        }
    }
}
