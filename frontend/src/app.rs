use client::store::{CollectionKind, ViewStateStore};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api::GlooTransport;
use crate::components::association::AssociationComponent;
use crate::components::students::StudentsComponent;
use crate::components::teachers::TeachersComponent;

pub enum Msg {
    /// A workflow asked for a fresh copy of a collection.
    Refetch(CollectionKind),
    /// The store finished a refetch.
    CollectionChanged(CollectionKind),
}

/// Top-level view. Owns the store; children only read collections from props
/// and ask for refetches through `on_refetch`.
pub struct App {
    api: GlooTransport,
    store: ViewStateStore<GlooTransport>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let api = GlooTransport::from_build_env();
        let store = ViewStateStore::new(api.clone());
        let link = ctx.link().clone();
        store.subscribe(move |kind| link.send_message(Msg::CollectionChanged(kind)));
        Self { api, store }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Refetch(kind) => {
                let store = self.store.clone();
                spawn_local(async move { store.refetch(kind).await });
                false
            }
            Msg::CollectionChanged(kind) => {
                if let Some(err) = self.store.error(kind) {
                    error!(format!("Erro global ao buscar {}: {}", kind, err));
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let store = self.store.clone();
            spawn_local(async move { store.refetch_all().await });
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_refetch = ctx.link().callback(Msg::Refetch);
        let students = self.store.students();
        let teachers = self.store.teachers();
        let subjects = self.store.subjects();

        html! {
            <div class="app">
                <header>
                    <h1>{"Gerenciamento da Faculdade"}</h1>
                </header>
                <main>
                    <StudentsComponent
                        api={self.api.clone()}
                        students={students.clone()}
                        subjects={subjects.clone()}
                        on_refetch={on_refetch.clone()}
                    />
                    <TeachersComponent
                        api={self.api.clone()}
                        teachers={teachers}
                        on_refetch={on_refetch.clone()}
                    />
                    <AssociationComponent
                        api={self.api.clone()}
                        students={students}
                        subjects={subjects}
                        on_refetch={on_refetch}
                    />
                </main>
            </div>
        }
    }
}
