//! Detail-view UI state machine
//!
//! One owned state struct per detail-view instance - no module-level
//! globals - so node interaction rules are testable without a DOM. Per
//! node the states are Collapsed -> DetailOpen -> Collapsed; the detail
//! surface is a single full-screen overlay, so opening node B while node
//! A's panel is visible implicitly replaces A's panel.

use crate::models::FlowNode;

/// Which part of a node was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClick {
    /// The node body - opens the detail panel
    Body,
    /// The small external-link glyph - follows `redirect_url` only.
    /// The component layer stops propagation so this never doubles as a
    /// body click.
    RedirectGlyph,
}

/// Side effect the component layer must perform after a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Detail panel opened for the clicked node
    OpenDetail,
    /// Open this URL in a new browsing context
    Redirect(String),
    /// Nothing to do (glyph click on a node without a redirect URL)
    None,
}

/// Tabs of the roadmap detail page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Overview,
    Flowchart,
    Reviews,
}

/// UI state owned by one roadmap detail view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailViewState {
    open_node: Option<String>,
    fullscreen: bool,
    active_tab: DetailTab,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the node whose detail panel is open, if any
    pub fn open_node(&self) -> Option<&str> {
        self.open_node.as_deref()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn active_tab(&self) -> DetailTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
    }

    /// Apply a node click and return the side effect to perform
    ///
    /// A body click opens that node's panel, replacing any other open
    /// panel. A redirect-glyph click follows the node's URL and leaves the
    /// panel state untouched - the two affordances must not conflict.
    pub fn handle_node_click(&mut self, node: &FlowNode, target: NodeClick) -> ClickOutcome {
        match target {
            NodeClick::Body => {
                self.open_node = Some(node.id.clone());
                ClickOutcome::OpenDetail
            }
            NodeClick::RedirectGlyph => match &node.redirect_url {
                Some(url) => ClickOutcome::Redirect(url.clone()),
                None => ClickOutcome::None,
            },
        }
    }

    /// Backdrop or explicit close click while a panel is open
    pub fn close_panel(&mut self) {
        self.open_node = None;
    }

    /// Swap between the bounded canvas and the full-viewport overlay
    ///
    /// The open panel survives the swap; the canvas re-fits its framing on
    /// entry.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathboard_types::RawFlowNode;

    fn node(id: &str, redirect_url: Option<&str>) -> FlowNode {
        FlowNode::from_raw(&RawFlowNode {
            id: Some(id.to_string()),
            redirect_url: redirect_url.map(|s| s.to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_body_click_opens_detail() {
        let mut state = DetailViewState::new();
        let n = node("step-1", Some("https://example.com"));

        let outcome = state.handle_node_click(&n, NodeClick::Body);

        assert_eq!(outcome, ClickOutcome::OpenDetail);
        assert_eq!(state.open_node(), Some("step-1"));
    }

    #[test]
    fn test_redirect_glyph_does_not_open_detail() {
        let mut state = DetailViewState::new();
        let n = node("step-1", Some("https://example.com"));

        let outcome = state.handle_node_click(&n, NodeClick::RedirectGlyph);

        assert_eq!(
            outcome,
            ClickOutcome::Redirect("https://example.com".to_string())
        );
        assert_eq!(state.open_node(), None);
    }

    #[test]
    fn test_glyph_click_without_url_is_inert() {
        let mut state = DetailViewState::new();
        let n = node("step-1", None);

        assert_eq!(
            state.handle_node_click(&n, NodeClick::RedirectGlyph),
            ClickOutcome::None
        );
        assert_eq!(state.open_node(), None);
    }

    #[test]
    fn test_opening_second_node_replaces_panel() {
        let mut state = DetailViewState::new();
        state.handle_node_click(&node("step-1", None), NodeClick::Body);
        state.handle_node_click(&node("step-2", None), NodeClick::Body);

        assert_eq!(state.open_node(), Some("step-2"));
    }

    #[test]
    fn test_close_returns_to_collapsed() {
        let mut state = DetailViewState::new();
        state.handle_node_click(&node("step-1", None), NodeClick::Body);
        state.close_panel();

        assert_eq!(state.open_node(), None);
    }

    #[test]
    fn test_fullscreen_preserves_open_panel() {
        let mut state = DetailViewState::new();
        state.handle_node_click(&node("step-1", None), NodeClick::Body);
        state.toggle_fullscreen();

        assert!(state.is_fullscreen());
        assert_eq!(state.open_node(), Some("step-1"));

        state.toggle_fullscreen();
        assert!(!state.is_fullscreen());
    }
}
