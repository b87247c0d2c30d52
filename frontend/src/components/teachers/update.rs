use client::resource::ResourceClient;
use common::model::teacher::Teacher;
use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{follow_up, BrowserConfirm};

use super::messages::Msg;
use super::state::TeachersComponent;

pub fn update(component: &mut TeachersComponent, ctx: &Context<TeachersComponent>, msg: Msg) -> bool {
    let props = ctx.props();
    let editor = &mut component.editor;

    match msg {
        Msg::SetName(name) => {
            editor.form.name = name;
            true
        }
        Msg::SetDepartment(department) => {
            editor.form.department = department;
            true
        }
        Msg::Create => {
            let Some(payload) = editor.begin_create() else {
                return true;
            };
            let teachers = ResourceClient::<Teacher, _>::new(props.api.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Created(teachers.create(&payload).await));
            });
            true
        }
        Msg::Created(result) => {
            if let Ok(teacher) = &result {
                log!(format!("Professor criado: {} ({})", teacher.name, teacher.registry));
            }
            follow_up(&props.on_refetch, editor.finish_create(result));
            true
        }

        Msg::Edit(teacher) => {
            editor.begin_edit(&teacher);
            true
        }
        Msg::SetDraftName(name) => {
            if let Some(draft) = editor.edit.draft_mut() {
                draft.name = name;
            }
            true
        }
        Msg::SetDraftDepartment(department) => {
            if let Some(draft) = editor.edit.draft_mut() {
                draft.department = department;
            }
            true
        }
        Msg::SaveEdit => {
            let Some((id, payload)) = editor.begin_update() else {
                return true;
            };
            let teachers = ResourceClient::<Teacher, _>::new(props.api.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Updated(teachers.update(&id, &payload).await));
            });
            false
        }
        Msg::Updated(result) => {
            if let Ok(teacher) = &result {
                log!(format!("Professor atualizado: {} ({})", teacher.name, teacher.registry));
            }
            follow_up(&props.on_refetch, editor.finish_update(result));
            true
        }
        Msg::CancelEdit => {
            editor.cancel_edit();
            true
        }

        Msg::Delete(teacher) => {
            let Some(request) = editor.begin_delete(&teacher, &BrowserConfirm) else {
                return false;
            };
            let teachers = ResourceClient::<Teacher, _>::new(props.api.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = teachers.remove(&request.id).await;
                link.send_message(Msg::Deleted(request, result));
            });
            false
        }
        Msg::Deleted(request, result) => {
            follow_up(&props.on_refetch, editor.finish_delete(&request, result));
            true
        }
    }
}
