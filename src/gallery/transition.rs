// SPDX-License-Identifier: MPL-2.0
//! Delayed image swaps behind the fade transition.
//!
//! Selecting an image fades the display out immediately and swaps the image
//! once the fade delay has elapsed. The controller does not own a timer: it
//! hands out a [`PendingSwap`] and the caller feeds the ticket back through
//! [`GalleryController::complete_swap`](super::GalleryController::complete_swap)
//! when the delay is over.
//!
//! Swaps never apply out of order. When a ticket completes, every older
//! ticket still in flight is superseded and will be ignored when it fires.
//! Tickets carry the listener id of the controller that issued them, so a
//! timer left over from a torn-down gallery never matches a rebound one.

use crate::application::port::ListenerId;
use crate::domain::gallery::{FadeDelay, TransitionPolicy};
use std::collections::VecDeque;
use std::fmt;

/// Identifies one scheduled swap.
///
/// Sequence numbers increase monotonically within one owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwapTicket {
    owner: ListenerId,
    sequence: u64,
}

impl SwapTicket {
    /// Listener id of the controller that issued this ticket.
    #[must_use]
    pub const fn owner(self) -> ListenerId {
        self.owner
    }

    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for SwapTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swap#{}.{}", self.owner.raw(), self.sequence)
    }
}

/// A swap waiting for its fade delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSwap {
    pub ticket: SwapTicket,
    /// Thumbnail index selected when the swap was scheduled.
    pub index: usize,
    pub delay: FadeDelay,
}

/// Waits for the swap's fade delay and returns its ticket.
///
/// Used by the application to turn a [`PendingSwap`] into a task. Nothing
/// awaits the result beyond delivering the ticket back to the controller.
pub async fn elapse(swap: PendingSwap) -> SwapTicket {
    tokio::time::sleep(swap.delay.as_duration()).await;
    swap.ticket
}

/// Swaps in flight, oldest first.
#[derive(Debug, Clone)]
pub(crate) struct TransitionQueue {
    policy: TransitionPolicy,
    owner: ListenerId,
    next_sequence: u64,
    in_flight: VecDeque<PendingSwap>,
}

impl TransitionQueue {
    pub(crate) fn new(policy: TransitionPolicy, owner: ListenerId) -> Self {
        Self {
            policy,
            owner,
            next_sequence: 0,
            in_flight: VecDeque::new(),
        }
    }

    pub(crate) fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Records a new swap. Under [`TransitionPolicy::CancelPending`] any swap
    /// still in flight is cancelled first.
    pub(crate) fn schedule(&mut self, index: usize, delay: FadeDelay) -> PendingSwap {
        if self.policy == TransitionPolicy::CancelPending && !self.in_flight.is_empty() {
            tracing::trace!(cancelled = self.in_flight.len(), "cancelling in-flight swaps");
            self.in_flight.clear();
        }

        let swap = PendingSwap {
            ticket: SwapTicket {
                owner: self.owner,
                sequence: self.next_sequence,
            },
            index,
            delay,
        };
        self.next_sequence += 1;
        self.in_flight.push_back(swap);
        swap
    }

    /// Resolves a fired ticket.
    ///
    /// Returns the index captured when the ticket was scheduled, or `None`
    /// if the ticket was cancelled, superseded by a newer swap, issued by
    /// another owner, or never issued.
    pub(crate) fn resolve(&mut self, ticket: SwapTicket) -> Option<usize> {
        if ticket.owner != self.owner {
            return None;
        }
        let position = self.in_flight.iter().position(|swap| swap.ticket == ticket)?;
        let swap = self.in_flight.drain(..=position).last()?;
        Some(swap.index)
    }

    pub(crate) fn clear(&mut self) {
        self.in_flight.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.in_flight.len()
    }
}
