//! Star rating widgets

use leptos::prelude::*;

/// Interactive 1-5 star selector for the review form
#[component]
pub fn StarRating(
    /// Currently selected rating; 0 means none yet
    rating: Signal<u8>,
    /// Called with the clicked star value (1-5)
    on_select: Callback<u8>,
) -> impl IntoView {
    view! {
        <div class="star-rating" role="radiogroup" aria-label="Rating">
            {(1..=5u8)
                .map(|star| {
                    view! {
                        <button
                            class=move || {
                                if rating.get() >= star { "star star-filled" } else { "star" }
                            }
                            on:click=move |_| on_select.run(star)
                            aria-label=format!("{} stars", star)
                        >
                            {move || if rating.get() >= star { "★" } else { "☆" }}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Read-only stars for the aggregate rating header
#[component]
pub fn StaticStars(
    /// Aggregate rating, 0.0-5.0
    rating: f64,
) -> impl IntoView {
    let rounded = rating.round() as u8;

    view! {
        <span class="static-stars" title=format!("{:.1} / 5", rating)>
            {(1..=5u8)
                .map(|star| if rounded >= star { "★" } else { "☆" })
                .collect::<String>()}
        </span>
    }
}
