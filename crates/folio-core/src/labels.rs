//! Collaborator seams the core drives: the UI-side label host and the
//! navigation effect. The web frontend implements these against the DOM;
//! tests use recording doubles.

/// Named boolean visual classes toggled on a label element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelClass {
    /// Label is facing the viewer per the quadrant rules.
    Active,
    /// Pointer is (recently) over the label's marker.
    Hover,
}

/// UI-side owner of the positioned label elements and the idle hint.
///
/// Implementations address elements by anchor name; toggles for names that
/// have no element are silently ignored.
pub trait LabelHost {
    /// Create the positioned text element for a newly registered anchor.
    fn create_label(&mut self, name: &str);
    /// Move a label to viewport pixel coordinates.
    fn set_label_position(&mut self, name: &str, x: f32, y: f32);
    fn set_label_class(&mut self, name: &str, class: LabelClass, on: bool);
    /// Show or hide the idle-activity hint.
    fn set_hint_visible(&mut self, visible: bool);
    fn set_hint_pulsing(&mut self, pulsing: bool);
}

/// Opens an external URL when a hotspot is clicked.
pub trait Navigator {
    fn open_url(&self, url: &str);
}
