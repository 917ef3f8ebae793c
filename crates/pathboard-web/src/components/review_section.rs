//! Review form and running review list
//!
//! Ratings are validated locally before any network call; the aggregate
//! rating is server-computed, so a successful submission triggers a
//! refetch of both the review list and the roadmap record.

use crate::api::{self, ApiError};
use crate::components::star_rating::StarRating;
use crate::components::toast::use_toast;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pathboard_core::review::{avatar_initial, ReviewDraft};
use pathboard_types::ReviewEntry;

/// Review form + list for one roadmap
#[component]
pub fn ReviewSection(
    roadmap_id: String,
    /// Fired after a successful submission so the page can refetch the
    /// server-computed aggregate rating
    on_rating_changed: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let rating = RwSignal::new(0u8);
    let text = RwSignal::new(String::new());
    let reviews_version = RwSignal::new(0u32);

    let fetch_id = roadmap_id.clone();
    let reviews = LocalResource::new(move || {
        // Re-run whenever a submission lands
        reviews_version.track();
        let id = fetch_id.clone();
        async move { api::fetch_reviews(&id).await }
    });

    let submit_id = roadmap_id.clone();
    let submit = move |_| {
        let draft = ReviewDraft {
            rating: rating.get(),
            text: text.get(),
        };

        // Obviously-invalid input never goes over the wire
        if let Err(message) = draft.validate() {
            toast.warning(message.to_string());
            return;
        }

        let id = submit_id.clone();
        spawn_local(async move {
            match api::submit_review(&id, &draft.to_submission()).await {
                Ok(_) => {
                    toast.success("Review submitted".to_string());
                    rating.set(0);
                    text.set(String::new());
                    reviews_version.update(|v| *v += 1);
                    on_rating_changed.run(());
                }
                Err(ApiError::Unauthorized) => {
                    // Form stays editable, text stays populated
                    toast.error("Please log in to leave a review".to_string());
                }
                Err(_) => {
                    toast.error("Failed to submit review, please try again".to_string());
                }
            }
        });
    };

    view! {
        <section class="review-section">
            <div class="review-form">
                <h3>"Leave a review"</h3>
                <StarRating
                    rating=Signal::derive(move || rating.get())
                    on_select=Callback::new(move |star| rating.set(star))
                />
                <textarea
                    class="review-text"
                    placeholder="Share your experience with this roadmap (optional)"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn-primary" on:click=submit>
                    "Submit review"
                </button>
            </div>

            <Suspense fallback=move || {
                view! { <div class="loading">"Loading reviews..."</div> }
            }>
                {move || match reviews.get().as_ref().map(|r| r.as_ref()) {
                    Some(Ok(entries)) => {
                        let entries = entries.clone();
                        view! { <ReviewList entries=entries /> }.into_any()
                    }
                    Some(Err(e)) => {
                        let err = e.to_string();
                        view! {
                            <div class="error inline-error">
                                <p>"Could not load reviews: " {err}</p>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <div class="loading">"Loading reviews..."</div> }.into_any(),
                }}
            </Suspense>
        </section>
    }
}

/// Review entries, in the order the server returned them
#[component]
fn ReviewList(entries: Vec<ReviewEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! {
            <p class="hint">"No reviews yet - be the first to rate this roadmap."</p>
        }
        .into_any();
    }

    view! {
        <ul class="review-list">
            {entries
                .into_iter()
                .map(|entry| {
                    let initial = avatar_initial(&entry.username).to_string();
                    let stars: String = (1..=5u8)
                        .map(|s| if entry.rating >= s { "★" } else { "☆" })
                        .collect();
                    view! {
                        <li class="review-entry">
                            <span class="review-avatar">{initial}</span>
                            <div class="review-body">
                                <div class="review-meta">
                                    <span class="review-username">{entry.username.clone()}</span>
                                    <span class="review-stars">{stars}</span>
                                    <span class="review-date">
                                        {entry.created_at.format("%Y-%m-%d").to_string()}
                                    </span>
                                </div>
                                {entry
                                    .review
                                    .clone()
                                    .map(|t| view! { <p class="review-content">{t}</p> })}
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
