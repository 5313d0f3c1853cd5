//! Smooth-scroll navigation to in-page sections.
//!
//! `ScrollNavigator` is a lookup-and-act operation with two outcomes: the
//! target exists and is scrolled into view (`true`), or nothing happens
//! (`false`). The DOM lookup sits behind `SectionLocator` so tests can use a
//! fake page.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::content::SectionId;

/// Finds scroll targets by id and brings them into view.
pub trait SectionLocator {
    type Target;

    fn locate(&self, section_id: &str) -> Option<Self::Target>;

    /// Smooth-scroll `target` into the viewport.
    fn scroll_into_view(&self, target: &Self::Target);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollNavigator<L> {
    locator: L,
}

impl<L: SectionLocator> ScrollNavigator<L> {
    pub const fn new(locator: L) -> Self {
        Self { locator }
    }

    /// Scroll to the element identified by `section_id`; `false` if absent.
    pub fn scroll_to(&self, section_id: &str) -> bool {
        let Some(target) = self.locator.locate(section_id) else {
            log::debug!("no scroll target for section {section_id:?}");
            return false;
        };
        self.locator.scroll_into_view(&target);
        true
    }

    pub fn scroll_to_section(&self, section: SectionId) -> bool {
        self.scroll_to(section.id())
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }
}

/// `document.getElementById` + `Element.scrollIntoView({ behavior: "smooth" })`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSections;

impl SectionLocator for DocumentSections {
    #[cfg(feature = "hydrate")]
    type Target = web_sys::Element;
    #[cfg(not(feature = "hydrate"))]
    type Target = ();

    fn locate(&self, section_id: &str) -> Option<Self::Target> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?.document()?.get_element_by_id(section_id)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = section_id;
            None
        }
    }

    fn scroll_into_view(&self, target: &Self::Target) {
        #[cfg(feature = "hydrate")]
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    }
}

/// Navigator over the live document.
pub const fn document_navigator() -> ScrollNavigator<DocumentSections> {
    ScrollNavigator::new(DocumentSections)
}
