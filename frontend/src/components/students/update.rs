//! Update function for the student panel.
//!
//! Each mutation runs in two steps: the `begin_*` call on the editor decides
//! whether a request goes out, the request runs in `spawn_local`, and its
//! result comes back as a `*d` message that hands it to the matching
//! `finish_*`. Successful mutations ask the app for a refetch; the list is
//! never patched here.

use client::association::AssociationClient;
use client::resource::ResourceClient;
use common::model::student::Student;
use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{follow_up, rng, BrowserConfirm};

use super::messages::Msg;
use super::state::StudentsComponent;

pub fn update(component: &mut StudentsComponent, ctx: &Context<StudentsComponent>, msg: Msg) -> bool {
    let props = ctx.props();
    let editor = &mut component.editor;

    match msg {
        Msg::SetName(name) => {
            editor.form.name = name;
            true
        }
        Msg::SetCurrentYear(year) => {
            editor.form.current_year = year;
            true
        }
        Msg::SetShift(shift) => {
            editor.form.shift = shift;
            true
        }
        Msg::Create => {
            let Some(payload) = editor.begin_create(&props.subjects, &mut rng()) else {
                return true;
            };
            let students = ResourceClient::<Student, _>::new(props.api.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Created(students.create(&payload).await));
            });
            true
        }
        Msg::Created(result) => {
            if let Ok(student) = &result {
                log!(format!("Aluno criado: {} ({})", student.name, student.enrollment));
            }
            follow_up(&props.on_refetch, editor.finish_create(result));
            true
        }

        Msg::Edit(student) => {
            editor.begin_edit(&student);
            true
        }
        Msg::SetDraftName(name) => {
            if let Some(draft) = editor.edit.draft_mut() {
                draft.name = name;
            }
            true
        }
        Msg::SetDraftCurrentYear(year) => {
            if let Some(draft) = editor.edit.draft_mut() {
                draft.current_year = year;
            }
            true
        }
        Msg::SetDraftShift(shift) => {
            if let Some(draft) = editor.edit.draft_mut() {
                draft.shift = shift;
            }
            true
        }
        Msg::SaveEdit => {
            let Some((id, payload)) = editor.begin_update() else {
                return true;
            };
            let students = ResourceClient::<Student, _>::new(props.api.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Updated(students.update(&id, &payload).await));
            });
            false
        }
        Msg::Updated(result) => {
            if let Ok(student) = &result {
                log!(format!("Aluno atualizado: {} ({})", student.name, student.enrollment));
            }
            follow_up(&props.on_refetch, editor.finish_update(result));
            true
        }
        Msg::CancelEdit => {
            editor.cancel_edit();
            true
        }

        Msg::Delete(student) => {
            let Some(request) = editor.begin_delete(&student, &BrowserConfirm) else {
                return false;
            };
            let students = ResourceClient::<Student, _>::new(props.api.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = students.remove(&request.id).await;
                link.send_message(Msg::Deleted(request, result));
            });
            false
        }
        Msg::Deleted(request, result) => {
            follow_up(&props.on_refetch, editor.finish_delete(&request, result));
            true
        }

        Msg::Detach(student, subject) => {
            let request = editor.begin_detach(&student, &subject);
            let associations = AssociationClient::new(props.api.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = associations
                    .detach(&request.student_id, &request.subject_id)
                    .await;
                link.send_message(Msg::Detached(request, result));
            });
            false
        }
        Msg::Detached(request, result) => {
            follow_up(&props.on_refetch, editor.finish_detach(&request, result));
            true
        }
    }
}
