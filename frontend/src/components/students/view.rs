//! View rendering for the student panel.
//!
//! A card per student; the card being edited swaps its text for inputs bound to
//! the draft. All user-facing text is Portuguese.

use client::workflows::student::StudentForm;
use common::model::student::{Shift, Student};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::feedback_line;

use super::messages::Msg;
use super::state::StudentsComponent;

pub fn view(component: &StudentsComponent, ctx: &Context<StudentsComponent>) -> Html {
    let link = ctx.link();
    let students = &ctx.props().students;

    html! {
        <section class="panel students">
            <h2>{"Alunos"}</h2>
            { build_create_form(&component.editor.form, link) }
            { feedback_line(&component.editor.feedback) }
            <div class="cards">
                { for students.iter().map(|student| build_card(component, student, link)) }
            </div>
        </section>
    }
}

fn build_create_form(form: &StudentForm, link: &Scope<StudentsComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Create
    });

    html! {
        <form class="entity-form" {onsubmit}>
            <input
                type="text"
                placeholder="Nome do aluno"
                value={form.name.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            <input
                type="number"
                min="1"
                placeholder="Ano atual"
                value={form.current_year.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetCurrentYear(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            { shift_select(form.shift, link.callback(Msg::SetShift)) }
            <button type="submit">{"Cadastrar aluno"}</button>
        </form>
    }
}

fn build_card(component: &StudentsComponent, student: &Student, link: &Scope<StudentsComponent>) -> Html {
    let editing = component
        .editor
        .edit
        .original()
        .filter(|original| original.id == student.id)
        .and(component.editor.edit.draft());

    let body = match editing {
        Some(draft) => build_edit_fields(draft, link),
        None => html! {
            <>
                <h3>{ student.name.clone() }</h3>
                <p>{ format!("Matrícula: {}", student.enrollment) }</p>
                <p>{ format!("Ano atual: {}", student.current_year) }</p>
                <p>{ format!("Turno: {}", student.shift.label()) }</p>
            </>
        },
    };

    html! {
        <div class="card" key={student.id.clone()}>
            { body }
            { build_subject_list(student, link) }
            { build_card_actions(student, editing.is_some(), link) }
        </div>
    }
}

fn build_edit_fields(draft: &StudentForm, link: &Scope<StudentsComponent>) -> Html {
    html! {
        <div class="edit-fields">
            <input
                type="text"
                value={draft.name.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetDraftName(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            <input
                type="number"
                min="1"
                value={draft.current_year.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetDraftCurrentYear(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            { shift_select(draft.shift, link.callback(Msg::SetDraftShift)) }
        </div>
    }
}

fn build_subject_list(student: &Student, link: &Scope<StudentsComponent>) -> Html {
    if student.subjects.is_empty() {
        return html! { <p class="muted">{"Nenhuma matéria associada."}</p> };
    }

    html! {
        <ul class="subjects">
            { for student.subjects.iter().map(|subject| {
                let owner = student.clone();
                let target = subject.clone();
                html! {
                    <li key={subject.id.clone()}>
                        { format!("{} ({}º ano)", subject.name, subject.year) }
                        <button
                            class="link-btn"
                            title="Remover matéria"
                            onclick={link.callback(move |_| Msg::Detach(owner.clone(), target.clone()))}
                        >
                            {"×"}
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}

fn build_card_actions(student: &Student, editing: bool, link: &Scope<StudentsComponent>) -> Html {
    if editing {
        return html! {
            <div class="actions">
                <button onclick={link.callback(|_| Msg::SaveEdit)}>{"Salvar"}</button>
                <button onclick={link.callback(|_| Msg::CancelEdit)}>{"Cancelar"}</button>
            </div>
        };
    }

    let to_edit = student.clone();
    let to_delete = student.clone();
    html! {
        <div class="actions">
            <button onclick={link.callback(move |_| Msg::Edit(to_edit.clone()))}>{"Editar"}</button>
            <button class="danger" onclick={link.callback(move |_| Msg::Delete(to_delete.clone()))}>{"Deletar"}</button>
        </div>
    }
}

/// `<select>` over the three shifts, emitting the chosen one.
fn shift_select(selected: Shift, on_select: Callback<Shift>) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let code = e.target_unchecked_into::<HtmlSelectElement>().value();
        on_select.emit(Shift::from_code(&code).unwrap_or_default());
    });

    html! {
        <select {onchange}>
            { for Shift::ALL.iter().map(|shift| html! {
                <option value={shift.code()} selected={*shift == selected}>{ shift.label() }</option>
            }) }
        </select>
    }
}
