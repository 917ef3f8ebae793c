//! Learning Steps checklist
//!
//! The linear walkthrough view. Its completion set is independent of the
//! flowchart's: checking a step never marks a graph node and vice versa.

use leptos::prelude::*;
use pathboard_core::ProgressTracker;
use pathboard_types::StepRecord;

/// Checklist over `steps[]` with its own progress bar
#[component]
pub fn StepChecklist(
    steps: Vec<StepRecord>,
    tracker: RwSignal<ProgressTracker>,
) -> impl IntoView {
    let step_total = steps.len();
    let progress = move || tracker.get().step_progress(step_total);

    view! {
        <section class="step-checklist">
            <div class="section-header">
                <h3>"Learning Steps"</h3>
                <span class="progress-label">{move || format!("{}% complete", progress())}</span>
            </div>

            <div class="progress-bar">
                <div
                    class="progress-bar-fill"
                    style=move || format!("width: {}%;", progress())
                ></div>
            </div>

            <ol class="step-list">
                {steps
                    .into_iter()
                    .enumerate()
                    .map(|(index, step)| {
                        view! {
                            <li class=move || {
                                if tracker.get().is_step_completed(index) {
                                    "step-item step-done"
                                } else {
                                    "step-item"
                                }
                            }>
                                <label class="step-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || tracker.get().is_step_completed(index)
                                        on:change=move |_| {
                                            tracker.update(|t| t.toggle_step(index));
                                        }
                                    />
                                    <span class="step-title">{step.title.clone()}</span>
                                </label>
                                {step
                                    .description
                                    .clone()
                                    .map(|d| view! { <p class="step-description">{d}</p> })}
                                {(!step.resources.is_empty())
                                    .then(|| {
                                        view! {
                                            <ul class="step-resources">
                                                {step
                                                    .resources
                                                    .iter()
                                                    .map(|r| view! { <li>{r.clone()}</li> })
                                                    .collect_view()}
                                            </ul>
                                        }
                                    })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
