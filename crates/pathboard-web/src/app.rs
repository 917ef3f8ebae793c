//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::ToastProvider;
use crate::pages::{RoadmapDetailPage, RoadmapListPage};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <Router>
                <div class="app">
                    <header class="app-header">
                        <a href="/" class="app-title">
                            "pathboard"
                        </a>
                    </header>
                    <main class="content">
                        <Routes fallback=|| "Not found">
                            <Route path=path!("/") view=RoadmapListPage />
                            <Route path=path!("/roadmaps/:id") view=RoadmapDetailPage />
                        </Routes>
                    </main>
                </div>
            </Router>
        </ToastProvider>
    }
}
