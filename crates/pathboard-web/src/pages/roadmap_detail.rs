//! Roadmap detail page
//!
//! Owns the per-view UI state: one `ProgressTracker` and one
//! `DetailViewState` per visited roadmap. A review submission refetches
//! the record (aggregate rating is server-computed) without resetting
//! either of them.

use crate::api::{self, ApiError};
use crate::components::{
    EmptyState, FlowchartCanvas, NodeDetailModal, ReviewSection, StaticStars, StepChecklist,
    use_toast,
};
use crate::utils::export;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use pathboard_core::scene::FlowScene;
use pathboard_core::view_state::{ClickOutcome, DetailTab, DetailViewState, NodeClick};
use pathboard_core::{ProgressTracker, RoadmapGraph};
use pathboard_types::RoadmapRecord;

/// Roadmap detail page component
#[component]
pub fn RoadmapDetailPage() -> impl IntoView {
    let params = use_params_map();
    let roadmap_id = move || params.read().get("id").unwrap_or_default();

    // Bumped after a review submission to refetch the aggregate rating
    let record_version = RwSignal::new(0u32);

    // Survives record refetches; reset only by navigating to another roadmap
    let tracker = RwSignal::new(ProgressTracker::new());
    let view_state = RwSignal::new(DetailViewState::new());

    let record = LocalResource::new(move || {
        record_version.track();
        let id = roadmap_id();
        async move { api::fetch_roadmap(&id).await }
    });

    view! {
        <div class="page roadmap-detail-page">
            <Suspense fallback=move || {
                view! { <div class="loading">"Loading roadmap..."</div> }
            }>
                {move || match record.get().as_ref().map(|r| r.as_ref()) {
                    Some(Ok(rec)) => {
                        view! {
                            <RoadmapDetailView
                                record=rec.clone()
                                tracker=tracker
                                view_state=view_state
                                record_version=record_version
                            />
                        }
                            .into_any()
                    }
                    Some(Err(ApiError::NotFound)) => {
                        view! {
                            <EmptyState
                                title="Roadmap not found"
                                description="This roadmap does not exist or has been removed."
                                    .to_string()
                            />
                        }
                            .into_any()
                    }
                    Some(Err(e)) => {
                        view! {
                            <EmptyState
                                title="Could not load roadmap"
                                description=format!("{}. Please try again later.", e)
                            />
                        }
                            .into_any()
                    }
                    None => view! { <div class="loading">"Loading roadmap..."</div> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

/// Detail view over a fetched record
#[component]
fn RoadmapDetailView(
    record: RoadmapRecord,
    tracker: RwSignal<ProgressTracker>,
    view_state: RwSignal<DetailViewState>,
    record_version: RwSignal<u32>,
) -> impl IntoView {
    let toast = use_toast();
    let roadmap_id = record.id.clone();

    // Parse once per fetched record; absence of flowchart data just means
    // no flowchart section
    let graph = record
        .flowchart_data
        .as_ref()
        .map(|data| RoadmapGraph::parse(data).0);
    let has_flowchart = graph.is_some();
    let graph = StoredValue::new(graph.unwrap_or_default());

    let scene = Signal::derive(move || {
        graph.with_value(|g| FlowScene::build(g, &tracker.get()))
    });
    let summary = Signal::derive(move || graph.with_value(|g| g.summary()));
    let node_total = graph.with_value(|g| g.node_count());

    let on_node_click = Callback::new(move |(id, click): (String, NodeClick)| {
        let mut outcome = ClickOutcome::None;
        graph.with_value(|g| {
            if let Some(node) = g.get_node(&id) {
                view_state.update(|v| outcome = v.handle_node_click(node, click));
            }
        });
        if let ClickOutcome::Redirect(url) = outcome {
            if let Some(window) = leptos::web_sys::window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        }
    });

    let on_toggle_fullscreen =
        Callback::new(move |_| view_state.update(|v| v.toggle_fullscreen()));

    let record_for_download = StoredValue::new(record.clone());
    let download_id = roadmap_id.clone();
    let download = move |_| {
        record_for_download.with_value(export::export_steps_document);
        let id = download_id.clone();
        spawn_local(async move { api::record_download_event(&id).await });
    };

    let share_id = roadmap_id.clone();
    let share = move |_| {
        if let Some(window) = leptos::web_sys::window() {
            if let Ok(href) = window.location().href() {
                let _ = window.navigator().clipboard().write_text(&href);
                toast.success("Link copied to clipboard".to_string());
            }
        }
        let id = share_id.clone();
        spawn_local(async move { api::record_share_event(&id).await });
    };

    let active_tab = move || view_state.get().active_tab();
    let tab_class = move |tab: DetailTab| {
        if active_tab() == tab { "tab tab-active" } else { "tab" }
    };

    let review_id = roadmap_id.clone();
    let detail_export_name = roadmap_id.clone();

    // Cloned out of `record` so the tab closures own what they render
    let overview_content = record.content.clone().filter(|c| !c.is_empty());
    let steps = record.steps.clone();

    view! {
        <article class="roadmap-detail">
            <header class="roadmap-header">
                <h1>{record.title.clone()}</h1>
                <p class="roadmap-description">{record.description.clone()}</p>
                <div class="roadmap-meta">
                    <StaticStars rating=record.rating />
                    <span class="meta-item">{format!("{:.1}", record.rating)}</span>
                    <span class="meta-item">
                        {format!("{} enrolled", record.enrolled_count)}
                    </span>
                    <span class="meta-item">{record.difficulty.clone()}</span>
                    {record
                        .estimated_time
                        .clone()
                        .map(|t| view! { <span class="meta-item">{t}</span> })}
                </div>
                <div class="roadmap-technologies">
                    {record
                        .technologies
                        .iter()
                        .map(|t| view! { <span class="chip">{t.clone()}</span> })
                        .collect_view()}
                </div>
                <div class="roadmap-actions">
                    <button class="btn btn-secondary" on:click=download>
                        "⤓ Download steps"
                    </button>
                    <button class="btn btn-secondary" on:click=share>
                        "↗ Share"
                    </button>
                </div>
            </header>

            <nav class="tabs">
                <button
                    class=move || tab_class(DetailTab::Overview)
                    on:click=move |_| view_state.update(|v| v.set_tab(DetailTab::Overview))
                >
                    "Overview"
                </button>
                {has_flowchart
                    .then(|| {
                        view! {
                            <button
                                class=move || tab_class(DetailTab::Flowchart)
                                on:click=move |_| {
                                    view_state.update(|v| v.set_tab(DetailTab::Flowchart))
                                }
                            >
                                "Flowchart"
                            </button>
                        }
                    })}
                <button
                    class=move || tab_class(DetailTab::Reviews)
                    on:click=move |_| view_state.update(|v| v.set_tab(DetailTab::Reviews))
                >
                    "Reviews"
                </button>
            </nav>

            <Show when=move || active_tab() == DetailTab::Overview>
                <section class="tab-panel">
                    {overview_content
                        .clone()
                        .map(|c| view! { <div class="roadmap-content">{c}</div> })}
                    <StepChecklist steps=steps.clone() tracker=tracker />
                </section>
            </Show>

            <Show when=move || has_flowchart && active_tab() == DetailTab::Flowchart>
                <section class="tab-panel">
                    <div class="graph-progress">
                        <span class="progress-label">
                            {move || {
                                format!("{}% of nodes completed", tracker.get().progress(node_total))
                            }}
                        </span>
                        <div class="progress-bar">
                            <div
                                class="progress-bar-fill"
                                style=move || {
                                    format!("width: {}%;", tracker.get().progress(node_total))
                                }
                            ></div>
                        </div>
                    </div>

                    <FlowchartCanvas
                        scene=scene
                        summary=summary
                        fullscreen=Signal::derive(move || view_state.get().is_fullscreen())
                        on_node_click=on_node_click
                        on_toggle_fullscreen=on_toggle_fullscreen
                        export_name=detail_export_name.clone()
                    />
                </section>
            </Show>

            <Show when=move || active_tab() == DetailTab::Reviews>
                <section class="tab-panel">
                    <ReviewSection
                        roadmap_id=review_id.clone()
                        on_rating_changed=Callback::new(move |_| {
                            record_version.update(|v| *v += 1);
                        })
                    />
                </section>
            </Show>

            {move || {
                let state = view_state.get();
                state
                    .open_node()
                    .and_then(|id| graph.with_value(|g| g.get_node(id).cloned()))
                    .map(|node| {
                        view! {
                            <NodeDetailModal
                                node=node
                                tracker=tracker
                                on_close=move || view_state.update(|v| v.close_panel())
                            />
                        }
                    })
            }}
        </article>
    }
}
