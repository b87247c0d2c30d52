//! The three collections the UI renders, kept as a cache of server state.
//!
//! Collections are written in exactly one place, [`ViewStateStore::refetch`],
//! which swaps the whole list for the server's current listing. A failed
//! refetch leaves the collection empty rather than stale. Overlapping
//! refetches resolve in completion order: the last one to finish wins.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use common::model::student::Student;
use common::model::subject::Subject;
use common::model::teacher::Teacher;
use futures_util::join;
use log::warn;

use crate::error::{ApiError, Result};
use crate::resource::{Resource, ResourceClient};
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Students,
    Teachers,
    Subjects,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollectionKind::Students => "alunos",
            CollectionKind::Teachers => "professores",
            CollectionKind::Subjects => "matérias",
        };
        f.write_str(name)
    }
}

/// Lifecycle of one cached collection.
///
/// `Uninitialized` until the first refetch completes, then `Loaded` or
/// `EmptyAfterError`. No state is terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection<E> {
    Uninitialized,
    Loaded(Rc<Vec<E>>),
    EmptyAfterError(ApiError),
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Collection::Uninitialized
    }
}

impl<E> Collection<E> {
    /// Current items; empty unless the last refetch succeeded.
    pub fn items(&self) -> Rc<Vec<E>> {
        match self {
            Collection::Loaded(items) => Rc::clone(items),
            Collection::Uninitialized | Collection::EmptyAfterError(_) => Rc::new(Vec::new()),
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Collection::EmptyAfterError(err) => Some(err),
            Collection::Uninitialized | Collection::Loaded(_) => None,
        }
    }

    /// Replaces the collection wholesale with the outcome of a listing.
    pub fn replace(&mut self, listing: Result<Vec<E>>) {
        *self = match listing {
            Ok(items) => Collection::Loaded(Rc::new(items)),
            Err(err) => Collection::EmptyAfterError(err),
        };
    }
}

#[derive(Default)]
struct Collections {
    students: Collection<Student>,
    teachers: Collection<Teacher>,
    subjects: Collection<Subject>,
}

type Listener = Rc<dyn Fn(CollectionKind)>;

/// Shared handle over the cached collections and the clients that fill them.
///
/// Cloning is cheap and every clone sees the same collections. Not `Send`:
/// the store lives on the UI thread.
pub struct ViewStateStore<T> {
    students: ResourceClient<Student, T>,
    teachers: ResourceClient<Teacher, T>,
    subjects: ResourceClient<Subject, T>,
    collections: Rc<RefCell<Collections>>,
    listener: Rc<RefCell<Option<Listener>>>,
}

impl<T: Clone> Clone for ViewStateStore<T> {
    fn clone(&self) -> Self {
        Self {
            students: self.students.clone(),
            teachers: self.teachers.clone(),
            subjects: self.subjects.clone(),
            collections: Rc::clone(&self.collections),
            listener: Rc::clone(&self.listener),
        }
    }
}

impl<T> PartialEq for ViewStateStore<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.collections, &other.collections)
    }
}

impl<T: Transport> ViewStateStore<T> {
    pub fn new(transport: T) -> Self {
        Self {
            students: ResourceClient::new(transport.clone()),
            teachers: ResourceClient::new(transport.clone()),
            subjects: ResourceClient::new(transport),
            collections: Rc::new(RefCell::new(Collections::default())),
            listener: Rc::new(RefCell::new(None)),
        }
    }

    /// Registers the callback run after every refetch, replacing any earlier one.
    pub fn subscribe(&self, listener: impl Fn(CollectionKind) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn students(&self) -> Rc<Vec<Student>> {
        self.collections.borrow().students.items()
    }

    pub fn teachers(&self) -> Rc<Vec<Teacher>> {
        self.collections.borrow().teachers.items()
    }

    pub fn subjects(&self) -> Rc<Vec<Subject>> {
        self.collections.borrow().subjects.items()
    }

    /// Error left by the last refetch of `kind`, if it failed.
    pub fn error(&self, kind: CollectionKind) -> Option<ApiError> {
        let collections = self.collections.borrow();
        match kind {
            CollectionKind::Students => collections.students.error().cloned(),
            CollectionKind::Teachers => collections.teachers.error().cloned(),
            CollectionKind::Subjects => collections.subjects.error().cloned(),
        }
    }

    pub fn is_initialized(&self, kind: CollectionKind) -> bool {
        let collections = self.collections.borrow();
        match kind {
            CollectionKind::Students => !matches!(collections.students, Collection::Uninitialized),
            CollectionKind::Teachers => !matches!(collections.teachers, Collection::Uninitialized),
            CollectionKind::Subjects => !matches!(collections.subjects, Collection::Uninitialized),
        }
    }

    /// Replaces collection `kind` with the server's current listing, or with
    /// nothing if the listing fails.
    pub async fn refetch(&self, kind: CollectionKind) {
        match kind {
            CollectionKind::Students => {
                let listing = fetch(&self.students, kind).await;
                self.collections.borrow_mut().students.replace(listing);
            }
            CollectionKind::Teachers => {
                let listing = fetch(&self.teachers, kind).await;
                self.collections.borrow_mut().teachers.replace(listing);
            }
            CollectionKind::Subjects => {
                let listing = fetch(&self.subjects, kind).await;
                self.collections.borrow_mut().subjects.replace(listing);
            }
        }
        self.notify(kind);
    }

    /// Refetches all three collections concurrently; each one settles on its own.
    pub async fn refetch_all(&self) {
        join!(
            self.refetch(CollectionKind::Students),
            self.refetch(CollectionKind::Teachers),
            self.refetch(CollectionKind::Subjects),
        );
    }

    fn notify(&self, kind: CollectionKind) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(kind);
        }
    }
}

async fn fetch<R: Resource, T: Transport>(
    client: &ResourceClient<R, T>,
    kind: CollectionKind,
) -> Result<Vec<R>> {
    let listing = client.list_all().await;
    if let Err(err) = &listing {
        warn!("refetch of {} failed: {}", kind, err);
    }
    listing
}
