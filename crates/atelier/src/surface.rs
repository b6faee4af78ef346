//! The host boundary.
//!
//! [`Surface`] is everything the page behavior needs from a document. The
//! browser host implements it over the DOM; [`crate::MemorySurface`]
//! implements it in memory for tests and headless use.
//!
//! Writes addressed to an element that does not exist are silent no-ops.
//! Features check for their elements up front and stay inert when any are
//! missing; nothing on this trait reports failure.

use crate::notify::NotificationId;

/// A document the page behavior renders into.
pub trait Surface {
    /// True if an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// True if some element carries this class.
    fn has_marker(&self, class: &str) -> bool;

    /// Current value of a form control.
    fn value(&self, id: &str) -> Option<String>;

    /// Set the value of a form control.
    fn set_value(&mut self, id: &str, value: &str);

    /// Text content of an element.
    fn text(&self, id: &str) -> Option<String>;

    /// Replace the text content of an element.
    fn set_text(&mut self, id: &str, text: &str);

    /// Inner markup of an element.
    fn markup(&self, id: &str) -> Option<String>;

    /// Replace the inner markup of an element.
    fn set_markup(&mut self, id: &str, html: &str);

    /// Text a code block copies: the text of its inner `code` element, or
    /// the block's own text when it has none.
    fn code_text(&self, id: &str) -> Option<String>;

    /// Set a custom property inline on the document root.
    fn set_root_property(&mut self, name: &str, value: &str);

    /// Remove an inline custom property from the document root.
    fn remove_root_property(&mut self, name: &str);

    /// Create the notification container (id
    /// [`crate::ids::NOTIFICATION_CONTAINER`]).
    ///
    /// Only called when [`Surface::has_element`] reports it missing.
    fn create_notification_container(&mut self);

    /// Append a notification node to the container.
    fn append_notification(&mut self, id: NotificationId, class: &str, html: &str);

    /// Start the exit animation of a notification node.
    fn mark_notification_exiting(&mut self, id: NotificationId);

    /// Remove a notification node. Returns false if it was already gone.
    fn remove_notification(&mut self, id: NotificationId) -> bool;

    /// Start writing `text` to the clipboard.
    ///
    /// The host reports the outcome later through
    /// [`crate::Site::on_clipboard`].
    fn write_clipboard(&mut self, text: &str);
}
