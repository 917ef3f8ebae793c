//! Flowchart canvas component
//!
//! SVG renderer over the core scene builder. The learner view is
//! read-only over layout: nodes are not draggable and edges are not
//! editable, the only node interactions are click-to-open-detail and the
//! external-link glyph. Pan and wheel zoom move the viewBox only.

use crate::components::toast::use_toast;
use crate::utils::export;
use leptos::prelude::*;
use pathboard_core::scene::{FlowScene, NODE_HEIGHT, NODE_WIDTH};
use pathboard_core::view_state::NodeClick;

const SVG_DOM_ID: &str = "flowchart-svg";

const MIN_ZOOM: f64 = 0.25;
const MAX_ZOOM: f64 = 4.0;

/// Active backdrop drag: pointer origin and the pan at drag start
#[derive(Clone, Copy, Default)]
struct PanDrag {
    start_x: f64,
    start_y: f64,
    pan_start_x: f64,
    pan_start_y: f64,
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "check-circle" => "✓",
        "zap" => "⚡",
        _ => "○",
    }
}

/// Interactive flowchart canvas with fullscreen and PNG export
#[component]
pub fn FlowchartCanvas(
    scene: Signal<FlowScene>,
    /// The "N nodes • M connections" header line
    summary: Signal<String>,
    fullscreen: Signal<bool>,
    on_node_click: Callback<(String, NodeClick)>,
    on_toggle_fullscreen: Callback<()>,
    /// Base name for the exported PNG
    export_name: String,
) -> impl IntoView {
    let toast = use_toast();
    let zoom = RwSignal::new(1.0f64);
    let pan = RwSignal::new((0.0f64, 0.0f64));
    let drag = RwSignal::new(None::<PanDrag>);

    // Entering or leaving fullscreen re-fits the framing
    Effect::new(move |_| {
        fullscreen.track();
        zoom.set(1.0);
        pan.set((0.0, 0.0));
    });

    let view_box = move || {
        let bounds = scene.get().fit_bounds();
        let (pan_x, pan_y) = pan.get();
        let k = zoom.get();
        format!(
            "{} {} {} {}",
            bounds.min_x - pan_x,
            bounds.min_y - pan_y,
            bounds.width / k,
            bounds.height / k,
        )
    };

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        ev.prevent_default();
        let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
        zoom.update(|k| *k = (*k * factor).clamp(MIN_ZOOM, MAX_ZOOM));
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        let (pan_x, pan_y) = pan.get();
        drag.set(Some(PanDrag {
            start_x: ev.client_x() as f64,
            start_y: ev.client_y() as f64,
            pan_start_x: pan_x,
            pan_start_y: pan_y,
        }));
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if let Some(d) = drag.get() {
            // Screen-pixel delta is close enough to viewBox units here
            let k = zoom.get();
            pan.set((
                d.pan_start_x + (ev.client_x() as f64 - d.start_x) / k,
                d.pan_start_y + (ev.client_y() as f64 - d.start_y) / k,
            ));
        }
    };

    let on_pointer_up = move |_| drag.set(None);

    let export_click = move |_| {
        let filename = format!("{}-flowchart", export_name);
        if let Err(err) = export::export_svg_as_png(SVG_DOM_ID, &filename) {
            // Export is best-effort, never a crash
            leptos::logging::warn!("flowchart export failed: {:?}", err);
            toast.warning("Could not export flowchart image".to_string());
        }
    };

    view! {
        <div class=move || {
            if fullscreen.get() { "flowchart-wrap flowchart-fullscreen" } else { "flowchart-wrap" }
        }>
            <div class="flowchart-toolbar">
                <span class="flowchart-summary">{move || summary.get()}</span>
                <div class="flowchart-actions">
                    <button class="btn btn-icon" on:click=export_click title="Export as PNG">
                        "⤓ PNG"
                    </button>
                    <button
                        class="btn btn-icon"
                        on:click=move |_| on_toggle_fullscreen.run(())
                        title="Toggle fullscreen"
                    >
                        {move || if fullscreen.get() { "✕ Exit" } else { "⛶ Fullscreen" }}
                    </button>
                </div>
            </div>

            <svg
                id=SVG_DOM_ID
                class="flowchart-canvas"
                viewBox=view_box
                xmlns="http://www.w3.org/2000/svg"
                on:wheel=on_wheel
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_up
            >
                <defs>
                    <marker
                        id="flow-arrow"
                        viewBox="0 0 10 10"
                        refX="9"
                        refY="5"
                        markerWidth="7"
                        markerHeight="7"
                        orient="auto-start-reverse"
                    >
                        <path d="M 0 0 L 10 5 L 0 10 z" fill="#90a4ae"></path>
                    </marker>
                </defs>

                <g class="flow-edges">
                    {move || {
                        scene
                            .get()
                            .edges
                            .iter()
                            .map(|edge| {
                                view! {
                                    <line
                                        class="flow-edge"
                                        x1=edge.from.x
                                        y1=edge.from.y
                                        x2=edge.to.x
                                        y2=edge.to.y
                                        stroke="#90a4ae"
                                        stroke-width="1.5"
                                        marker-end="url(#flow-arrow)"
                                    ></line>
                                }
                            })
                            .collect_view()
                    }}
                </g>

                <g class="flow-nodes">
                    {move || {
                        scene
                            .get()
                            .nodes
                            .iter()
                            .map(|node| {
                                let body_id = node.id.clone();
                                let glyph_id = node.id.clone();
                                let bar_width = NODE_WIDTH * (node.completion as f64) / 100.0;
                                view! {
                                    <g
                                        class="flow-node"
                                        transform=format!(
                                            "translate({},{})",
                                            node.position.x,
                                            node.position.y,
                                        )
                                        on:pointerdown=move |e| e.stop_propagation()
                                        on:click=move |_| {
                                            on_node_click.run((body_id.clone(), NodeClick::Body));
                                        }
                                    >
                                        <rect
                                            width=NODE_WIDTH
                                            height=NODE_HEIGHT
                                            rx="10"
                                            fill=node.style.background
                                            stroke=node.style.border
                                            stroke-width={if node.completed { "3" } else { "1.5" }}
                                        ></rect>
                                        <circle cx="0" cy="0" r="12" fill=node.style.border></circle>
                                        <text
                                            x="0"
                                            y="4"
                                            text-anchor="middle"
                                            class="node-ordinal"
                                            fill="#ffffff"
                                        >
                                            {node.ordinal.clone()}
                                        </text>
                                        <text
                                            x="14"
                                            y="26"
                                            class="node-label"
                                            fill=node.style.text
                                        >
                                            {node.label.clone()}
                                        </text>
                                        <text x="14" y="48" class="node-status" fill=node.style.text>
                                            {format!(
                                                "{} {}",
                                                icon_glyph(node.icon),
                                                node.status_label,
                                            )}
                                        </text>
                                        <rect
                                            x="0"
                                            y={NODE_HEIGHT - 5.0}
                                            width=bar_width
                                            height="5"
                                            rx="2"
                                            fill=node.style.border
                                        ></rect>
                                        {node
                                            .completed
                                            .then(|| {
                                                view! {
                                                    <text
                                                        x={NODE_WIDTH - 18.0}
                                                        y="22"
                                                        class="node-completed-check"
                                                        fill=node.style.border
                                                    >
                                                        "✔"
                                                    </text>
                                                }
                                            })}
                                        {node
                                            .has_redirect
                                            .then(|| {
                                                view! {
                                                    <g
                                                        class="node-redirect"
                                                        on:click=move |e| {
                                                            // Independent affordance: must not also
                                                            // open the detail panel
                                                            e.stop_propagation();
                                                            on_node_click
                                                                .run((
                                                                    glyph_id.clone(),
                                                                    NodeClick::RedirectGlyph,
                                                                ));
                                                        }
                                                    >
                                                        <rect
                                                            x={NODE_WIDTH - 26.0}
                                                            y={NODE_HEIGHT - 30.0}
                                                            width="20"
                                                            height="20"
                                                            rx="4"
                                                            fill="#ffffff"
                                                            stroke="#90a4ae"
                                                        ></rect>
                                                        <text
                                                            x={NODE_WIDTH - 16.0}
                                                            y={NODE_HEIGHT - 15.0}
                                                            text-anchor="middle"
                                                            class="node-redirect-glyph"
                                                        >
                                                            "↗"
                                                        </text>
                                                    </g>
                                                }
                                            })}
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                </g>
            </svg>
        </div>
    }
}
