//! pathboard-web - Web frontend for pathboard using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod utils;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
mod serve {
    use anyhow::Result;
    use pathboard_core::RoadmapStore;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tracing::info;

    /// Run the web server
    pub async fn run(store: Arc<RoadmapStore>, port: u16) -> Result<()> {
        let router = crate::router::create_router(store);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr).await?;

        info!("Web server listening on http://{}", addr);
        println!("Web server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
pub use serve::run;
