//! Browser glue shared by the components: confirmation prompts, the random
//! source for subject selection, and feedback rendering.

use client::store::CollectionKind;
use client::workflows::{Confirm, Feedback, FeedbackKind, Followup};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use yew::prelude::*;

/// `window.confirm`, the blocking prompt guarding deletions.
///
/// Without a window (or if the prompt throws) the answer is "no".
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

/// Fresh generator seeded from `Math.random`.
pub fn rng() -> SmallRng {
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    SmallRng::seed_from_u64(seed)
}

/// Forwards a workflow's followup to the owner of the store.
pub fn follow_up(on_refetch: &Callback<CollectionKind>, followup: Followup) {
    if let Followup::Refetch(kind) = followup {
        on_refetch.emit(kind);
    }
}

pub fn feedback_line(feedback: &Option<Feedback>) -> Html {
    match feedback {
        Some(feedback) => {
            let kind = match feedback.kind {
                FeedbackKind::Success => "success",
                FeedbackKind::Warning => "warning",
                FeedbackKind::Error => "error",
            };
            html! { <p class={classes!("message", kind)}>{ feedback.text.clone() }</p> }
        }
        None => html! {},
    }
}
