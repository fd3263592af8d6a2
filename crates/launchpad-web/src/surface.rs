//! Start/canvas container switching

use std::cell::RefCell;

use launchpad_core::{LaunchError, LaunchResult, SurfaceEffects};
use web_sys::{Document, Element, HtmlElement, Node};

use crate::dom::element_by_id;
use crate::error::JsResultExt;

/// Where the start container sat before it was detached.
#[derive(Debug)]
struct Detached {
    element: Element,
    parent: Node,
    next_sibling: Option<Node>,
}

/// The page's start and canvas containers.
#[derive(Debug)]
pub struct DomSurface {
    document: Document,
    start_id: String,
    canvas_id: String,
    detached: RefCell<Option<Detached>>,
}

impl DomSurface {
    /// Surface over the containers with the given ids.
    pub fn new(
        document: Document,
        start_id: impl Into<String>,
        canvas_id: impl Into<String>,
    ) -> Self {
        Self {
            document,
            start_id: start_id.into(),
            canvas_id: canvas_id.into(),
            detached: RefCell::new(None),
        }
    }

    fn set_canvas_display(&self, value: &str) -> LaunchResult<()> {
        let canvas: HtmlElement = element_by_id(&self.document, &self.canvas_id)?;
        canvas
            .style()
            .set_property("display", value)
            .map_js_err(LaunchError::dom)
    }
}

impl SurfaceEffects for DomSurface {
    fn remove_start_screen(&self) -> LaunchResult<()> {
        let element: Element = element_by_id(&self.document, &self.start_id)?;
        let parent = element
            .parent_node()
            .ok_or_else(|| LaunchError::dom(format!("#{} is not attached", self.start_id)))?;
        let next_sibling = element.next_sibling();

        element.remove();
        tracing::debug!(id = %self.start_id, "start container removed");
        self.detached.replace(Some(Detached {
            element,
            parent,
            next_sibling,
        }));
        Ok(())
    }

    fn show_canvas(&self) -> LaunchResult<()> {
        self.set_canvas_display("block")?;
        tracing::debug!(id = %self.canvas_id, "canvas container shown");
        Ok(())
    }

    fn restore_start_screen(&self) -> LaunchResult<()> {
        let Some(detached) = self.detached.borrow_mut().take() else {
            return Ok(());
        };

        // The old sibling may have moved while we were detached.
        let anchor = detached.next_sibling.filter(|sibling| {
            sibling
                .parent_node()
                .is_some_and(|parent| parent.is_same_node(Some(&detached.parent)))
        });
        detached
            .parent
            .insert_before(&detached.element, anchor.as_ref())
            .map_js_err(LaunchError::dom)?;
        tracing::debug!(id = %self.start_id, "start container restored");
        Ok(())
    }

    fn hide_canvas(&self) -> LaunchResult<()> {
        self.set_canvas_display("none")
    }
}
