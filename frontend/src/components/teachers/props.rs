use std::rc::Rc;

use client::store::CollectionKind;
use common::model::teacher::Teacher;
use yew::prelude::*;

use crate::api::GlooTransport;

#[derive(Properties, PartialEq, Clone)]
pub struct TeachersProps {
    pub api: GlooTransport,
    pub teachers: Rc<Vec<Teacher>>,
    pub on_refetch: Callback<CollectionKind>,
}
