//! Roadmap listing page

use crate::api;
use crate::components::StaticStars;
use leptos::prelude::*;
use leptos_router::components::A;

/// Index of all available roadmaps
#[component]
pub fn RoadmapListPage() -> impl IntoView {
    let roadmaps = LocalResource::new(|| async move { api::fetch_roadmaps().await });

    view! {
        <div class="page roadmap-list-page">
            <div class="page-header">
                <h2>"Roadmaps"</h2>
                <p class="subtitle">"Pick a learning path and track your progress"</p>
            </div>

            <Suspense fallback=move || {
                view! { <div class="loading">"Loading roadmaps..."</div> }
            }>
                {move || match roadmaps.get().as_ref().map(|r| r.as_ref()) {
                    Some(Ok(list)) => {
                        let list = list.clone();
                        view! {
                            <ul class="roadmap-cards">
                                {list
                                    .into_iter()
                                    .map(|roadmap| {
                                        view! {
                                            <li class="roadmap-card">
                                                <A href=format!("/roadmaps/{}", roadmap.id)>
                                                    <h3>{roadmap.title.clone()}</h3>
                                                    <p class="card-description">
                                                        {roadmap.description.clone()}
                                                    </p>
                                                    <div class="card-meta">
                                                        <StaticStars rating=roadmap.rating />
                                                        <span class="meta-item">
                                                            {roadmap.difficulty.clone()}
                                                        </span>
                                                        <span class="meta-item">
                                                            {format!("{} enrolled", roadmap.enrolled_count)}
                                                        </span>
                                                    </div>
                                                </A>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                    Some(Err(e)) => {
                        let err = e.to_string();
                        view! {
                            <div class="error">
                                <h3>"Failed to load roadmaps"</h3>
                                <p>{err}</p>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <div class="loading">"Loading roadmaps..."</div> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
