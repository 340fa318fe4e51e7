// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: one current image out of a fixed thumbnail set.

use super::transition::{PendingSwap, SwapTicket, TransitionQueue};
use crate::application::port::{
    CounterDisplay, KeyboardHub, ListenerId, MainDisplay, NavigationKey, Thumbnail,
};
use crate::domain::gallery::{Cursor, FadeDelay, Opacity, TransitionPolicy};

/// Which previous/next controls exist on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub previous: bool,
    pub next: bool,
}

impl Controls {
    /// Both controls present.
    #[must_use]
    pub const fn both() -> Self {
        Self {
            previous: true,
            next: true,
        }
    }
}

/// A previous/next control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

/// Elements the controller is bound to.
#[derive(Debug, Clone)]
pub struct Bindings<D, T, C> {
    pub main_display: Option<D>,
    pub thumbnails: Vec<T>,
    pub controls: Controls,
    pub counter: Option<C>,
}

/// Transition tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub fade_delay: FadeDelay,
    pub policy: TransitionPolicy,
}

/// Messages for the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// Select an image by index; out-of-range values wrap.
    SelectIndex(isize),
    Next,
    Previous,
    ThumbnailClicked(usize),
    ControlClicked(Control),
    KeyPressed(NavigationKey),
    /// The fade delay of a scheduled swap has elapsed.
    SwapDue(SwapTicket),
}

/// Effects produced by gallery changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Deliver `SwapDue(swap.ticket)` once `swap.delay` has elapsed.
    ScheduleSwap(PendingSwap),
}

impl From<Option<PendingSwap>> for Effect {
    fn from(swap: Option<PendingSwap>) -> Self {
        swap.map_or(Effect::None, Effect::ScheduleSwap)
    }
}

/// Keeps the main display, thumbnail highlight and counter in sync with a
/// circular cursor.
///
/// Built with [`GalleryController::bind`]. Until [`teardown`](Self::teardown)
/// the controller holds one keyboard listener; afterwards every input is
/// ignored.
#[derive(Debug)]
pub struct GalleryController<D, T, C> {
    display: D,
    thumbnails: Vec<T>,
    counter: Option<C>,
    controls: Controls,
    cursor: Cursor,
    fade_delay: FadeDelay,
    transitions: TransitionQueue,
    listener: Option<ListenerId>,
}

impl<D, T, C> GalleryController<D, T, C>
where
    D: MainDisplay,
    T: Thumbnail,
    C: CounterDisplay,
{
    /// Binds a controller to its elements and registers its key listener.
    ///
    /// Returns `None` without touching `hub` when the main display is missing
    /// or there are no thumbnails: a partially rendered page simply gets no
    /// gallery behaviour.
    ///
    /// The initial render highlights the first thumbnail and sets the counter.
    /// It does not fade and leaves the display untouched.
    pub fn bind(
        bindings: Bindings<D, T, C>,
        options: Options,
        hub: &mut impl KeyboardHub,
    ) -> Option<Self> {
        let Bindings {
            main_display,
            thumbnails,
            controls,
            counter,
        } = bindings;

        let Some(display) = main_display else {
            tracing::debug!("gallery not bound: no main display");
            return None;
        };
        let Some(cursor) = Cursor::new(thumbnails.len()) else {
            tracing::debug!("gallery not bound: no thumbnails");
            return None;
        };

        let listener = hub.register();
        let mut controller = Self {
            display,
            thumbnails,
            counter,
            controls,
            cursor,
            fade_delay: options.fade_delay,
            transitions: TransitionQueue::new(options.policy, listener),
            listener: Some(listener),
        };
        controller.sync_indicators();

        tracing::info!(
            images = controller.len(),
            %listener,
            policy = ?options.policy,
            "gallery bound"
        );
        Some(controller)
    }

    /// Selects the image at `target`, wrapping out-of-range values.
    ///
    /// Fades the display out, highlights the selected thumbnail and updates
    /// the counter right away. The returned swap must be completed after its
    /// delay to show the new image. Returns `None` after teardown.
    pub fn select_index(&mut self, target: isize) -> Option<PendingSwap> {
        if !self.is_attached() {
            return None;
        }

        let index = self.cursor.select(target);
        self.display.set_opacity(Opacity::TRANSPARENT);
        let swap = self.transitions.schedule(index, self.fade_delay);
        self.sync_indicators();

        tracing::debug!(target, index, ticket = %swap.ticket, "image selected");
        Some(swap)
    }

    pub fn next(&mut self) -> Option<PendingSwap> {
        self.select_index(self.cursor.next_target())
    }

    pub fn previous(&mut self) -> Option<PendingSwap> {
        self.select_index(self.cursor.previous_target())
    }

    /// Thumbnail `index` was clicked.
    pub fn thumbnail_clicked(&mut self, index: usize) -> Option<PendingSwap> {
        self.select_index(isize::try_from(index).unwrap_or(isize::MAX))
    }

    /// A previous/next control was clicked. Clicks on absent controls are ignored.
    pub fn control_clicked(&mut self, control: Control) -> Option<PendingSwap> {
        match control {
            Control::Previous if self.controls.previous => self.previous(),
            Control::Next if self.controls.next => self.next(),
            _ => None,
        }
    }

    /// A key was pressed anywhere in the window.
    pub fn key_pressed(&mut self, key: NavigationKey) -> Option<PendingSwap> {
        match key {
            NavigationKey::ArrowLeft => self.previous(),
            NavigationKey::ArrowRight => self.next(),
            NavigationKey::Other => None,
        }
    }

    /// Applies a swap whose delay has elapsed and shows the display at full
    /// opacity.
    ///
    /// Under [`TransitionPolicy::Overlap`] every swap shows the image at the
    /// cursor as it is when the swap fires, so the first timer of a rapid
    /// burst already lands on the final image. Under
    /// [`TransitionPolicy::CancelPending`] only the latest swap survives and
    /// shows the image it was scheduled for.
    ///
    /// Returns false when the ticket was cancelled, superseded by a newer
    /// swap, issued by another controller, or the controller has been torn
    /// down.
    pub fn complete_swap(&mut self, ticket: SwapTicket) -> bool {
        if !self.is_attached() {
            return false;
        }
        let Some(scheduled) = self.transitions.resolve(ticket) else {
            tracing::trace!(%ticket, "stale swap ignored");
            return false;
        };
        let index = match self.transitions.policy() {
            TransitionPolicy::Overlap => self.cursor.index(),
            TransitionPolicy::CancelPending => scheduled,
        };
        let Some(source) = self.thumbnails.get(index).map(|thumb| thumb.source().clone()) else {
            return false;
        };

        self.display.set_source(source);
        self.display.set_opacity(Opacity::OPAQUE);
        true
    }

    /// Deregisters the key listener and drops in-flight swaps.
    ///
    /// Returns false if the controller was already torn down.
    pub fn teardown(&mut self, hub: &mut impl KeyboardHub) -> bool {
        let Some(listener) = self.listener.take() else {
            return false;
        };
        if !hub.deregister(listener) {
            tracing::debug!(%listener, "listener was not registered with this hub");
        }
        self.transitions.clear();
        tracing::info!(%listener, "gallery torn down");
        true
    }

    /// Handles a gallery message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SelectIndex(target) => self.select_index(target).into(),
            Message::Next => self.next().into(),
            Message::Previous => self.previous().into(),
            Message::ThumbnailClicked(index) => self.thumbnail_clicked(index).into(),
            Message::ControlClicked(control) => self.control_clicked(control).into(),
            Message::KeyPressed(key) => self.key_pressed(key).into(),
            Message::SwapDue(ticket) => {
                self.complete_swap(ticket);
                Effect::None
            }
        }
    }

    /// Current cursor index.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Always false: a bound controller has at least one image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// "current / total" as shown by the counter.
    #[must_use]
    pub fn position_label(&self) -> String {
        self.cursor.position_label()
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[T] {
        &self.thumbnails
    }

    #[must_use]
    pub fn counter(&self) -> Option<&C> {
        self.counter.as_ref()
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        self.controls
    }

    #[must_use]
    pub fn policy(&self) -> TransitionPolicy {
        self.transitions.policy()
    }

    /// Number of swaps waiting for their delay.
    #[must_use]
    pub fn pending_swaps(&self) -> usize {
        self.transitions.len()
    }

    /// Key listener held by this controller, if still attached.
    #[must_use]
    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Highlights the thumbnail at the cursor and refreshes the counter.
    fn sync_indicators(&mut self) {
        let current = self.cursor.index();
        for (index, thumbnail) in self.thumbnails.iter_mut().enumerate() {
            thumbnail.set_active(index == current);
        }
        if let Some(counter) = self.counter.as_mut() {
            counter.set_text(self.cursor.position_label());
        }
    }
}
