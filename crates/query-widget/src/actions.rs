//! The host editor's integration surface.

/// Actions the host integration SDK exposes to the widget.
pub trait HostActions: Send + Sync {
    /// Insert text at the cursor position of the document being edited.
    fn send_text(&self, text: &str);

    /// Close the widget surface.
    fn close_library(&self);
}
