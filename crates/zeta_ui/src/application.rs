/// Read-only view of the environment an application runs in.
///
/// Handlers need a couple of facts they cannot own, such as which element
/// holds focus at the moment a modal opens. The browser binding answers them
/// from the live document; tests use a fixed fake.
pub trait Host {
    /// Handle to a focusable element.
    type Focus: Clone;

    /// The element that currently holds keyboard focus.
    fn focused(&self) -> Option<Self::Focus>;

    /// Current vertical page scroll offset in pixels.
    fn scroll_offset(&self) -> i32;
}

/// Core application trait, in the Elm style.
///
/// Applications keep their state, respond to messages one at a time and
/// describe the side effects the host must perform. Every `update` runs to
/// completion before the next message is handled, and effects are applied in
/// the order returned.
pub trait Application {
    /// Focus handle type shared with the [`Host`].
    type Focus: Clone;

    /// Input the application reacts to.
    type Message;

    /// Side effects the host performs on the application's behalf.
    type Effect;

    /// Update state in response to a message.
    fn update<H>(&mut self, message: Self::Message, host: &H) -> Vec<Self::Effect>
    where
        H: Host<Focus = Self::Focus>;
}
