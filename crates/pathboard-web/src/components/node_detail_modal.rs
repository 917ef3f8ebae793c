//! Node detail panel
//!
//! Single full-screen overlay; at most one node's panel is visible at a
//! time. Backdrop click or the close control collapses it.

use leptos::prelude::*;
use pathboard_core::status::{status_label, StatusStyle};
use pathboard_core::{FlowNode, ProgressTracker};

/// Detail overlay for one flowchart node
#[component]
pub fn NodeDetailModal(
    node: FlowNode,
    tracker: RwSignal<ProgressTracker>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let style = StatusStyle::for_status(node.status);
    let body = node.detail_body().map(|s| s.to_string());
    let node_id = node.id.clone();
    let toggle_id = node.id.clone();
    let completed = move || tracker.get().is_node_completed(&node_id);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div
                class="modal-content node-detail-modal"
                on:click=move |e| e.stop_propagation()
            >
                <div class="modal-header">
                    <h2>{node.label.clone()}</h2>
                    <button class="modal-close" on:click=move |_| on_close()>
                        "×"
                    </button>
                </div>

                <div class="modal-body">
                    <div class="detail-badges">
                        <span
                            class="badge"
                            style=format!(
                                "background: {}; border-color: {}; color: {};",
                                style.background,
                                style.border,
                                style.text,
                            )
                        >
                            {status_label(node.status)}
                        </span>
                        <span class="badge badge-muted">{node.difficulty.clone()}</span>
                        <span class="badge badge-muted">{format!("⏱ {}", node.time_spent)}</span>
                        <span class="badge badge-muted">
                            {format!("{}% done", node.completion)}
                        </span>
                    </div>

                    {body.map(|text| {
                        view! {
                            <div class="detail-section">
                                <p class="detail-body">{text}</p>
                            </div>
                        }
                    })}

                    {(!node.resources.is_empty())
                        .then(|| {
                            view! {
                                <div class="detail-section">
                                    <h3>"Resources"</h3>
                                    <ul class="resource-list">
                                        {node
                                            .resources
                                            .iter()
                                            .map(|r| view! { <li>{r.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })}
                </div>

                <div class="modal-footer">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            tracker.update(|t| t.toggle_node(&toggle_id));
                        }
                    >
                        {move || {
                            if completed() { "Mark as not completed" } else { "Mark as completed" }
                        }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| on_close()>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
