// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::application::port::{
    CounterDisplay, KeyboardHub, MainDisplay, NavigationKey, Thumbnail,
};
use crate::domain::gallery::{FadeDelay, ImageSource, Opacity, TransitionPolicy};
use crate::infrastructure::{CounterLabel, DisplaySurface, ListenerRegistry, ThumbnailSlot};

type TestGallery = GalleryController<DisplaySurface, ThumbnailSlot, CounterLabel>;

/// Display that records every mutation, to check ordering of fade and swap.
#[derive(Debug)]
struct RecordingDisplay {
    source: ImageSource,
    opacity: Opacity,
    log: Vec<DisplayEvent>,
}

#[derive(Debug, Clone, PartialEq)]
enum DisplayEvent {
    Opacity(f32),
    Source(ImageSource),
}

impl MainDisplay for RecordingDisplay {
    fn source(&self) -> &ImageSource {
        &self.source
    }

    fn set_source(&mut self, source: ImageSource) {
        self.log.push(DisplayEvent::Source(source.clone()));
        self.source = source;
    }

    fn opacity(&self) -> Opacity {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: Opacity) {
        self.log.push(DisplayEvent::Opacity(opacity.value()));
        self.opacity = opacity;
    }
}

fn image_names(count: usize) -> Vec<ImageSource> {
    (0..count)
        .map(|i| ImageSource::from(format!("img_{i}.png").as_str()))
        .collect()
}

fn bindings(count: usize) -> Bindings<DisplaySurface, ThumbnailSlot, CounterLabel> {
    let images = image_names(count);
    Bindings {
        main_display: images.first().cloned().map(DisplaySurface::new),
        thumbnails: images.into_iter().map(ThumbnailSlot::new).collect(),
        controls: Controls::both(),
        counter: Some(CounterLabel::default()),
    }
}

fn gallery_with_policy(count: usize, policy: TransitionPolicy) -> (TestGallery, ListenerRegistry) {
    let mut hub = ListenerRegistry::new();
    let options = Options {
        fade_delay: FadeDelay::default(),
        policy,
    };
    let gallery = GalleryController::bind(bindings(count), options, &mut hub).expect("bound");
    (gallery, hub)
}

fn gallery(count: usize) -> (TestGallery, ListenerRegistry) {
    gallery_with_policy(count, TransitionPolicy::Overlap)
}

fn active_indices(gallery: &TestGallery) -> Vec<usize> {
    gallery
        .thumbnails()
        .iter()
        .enumerate()
        .filter(|(_, thumb)| thumb.is_active())
        .map(|(index, _)| index)
        .collect()
}

fn counter_text(gallery: &TestGallery) -> &str {
    gallery.counter().expect("counter bound").text()
}

fn signed(value: usize) -> isize {
    isize::try_from(value).expect("small value")
}

// =============================================================================
// Binding
// =============================================================================

#[test]
fn bind_without_thumbnails_is_silent_no_op() {
    let mut hub = ListenerRegistry::new();
    let result = TestGallery::bind(bindings(0), Options::default(), &mut hub);

    assert!(result.is_none());
    assert!(!hub.has_listeners());
}

#[test]
fn bind_without_main_display_is_silent_no_op() {
    let mut hub = ListenerRegistry::new();
    let mut partial = bindings(3);
    partial.main_display = None;

    let result = TestGallery::bind(partial, Options::default(), &mut hub);
    assert!(result.is_none());
    assert!(!hub.has_listeners());
}

#[test]
fn bind_registers_one_listener() {
    let (gallery, hub) = gallery(3);
    let listener = gallery.listener().expect("attached");
    assert!(hub.is_registered(listener));
    assert_eq!(hub.len(), 1);
}

#[test]
fn initial_render_highlights_first_and_sets_counter() {
    let (gallery, _hub) = gallery(4);
    assert_eq!(gallery.cursor(), 0);
    assert_eq!(active_indices(&gallery), vec![0]);
    assert_eq!(counter_text(&gallery), "1 / 4");
    assert_eq!(gallery.pending_swaps(), 0);
}

#[test]
fn initial_render_does_not_fade() {
    let mut hub = ListenerRegistry::new();
    let images = image_names(3);
    let display = RecordingDisplay {
        source: images[0].clone(),
        opacity: Opacity::OPAQUE,
        log: Vec::new(),
    };
    let gallery = GalleryController::bind(
        Bindings {
            main_display: Some(display),
            thumbnails: images.into_iter().map(ThumbnailSlot::new).collect(),
            controls: Controls::default(),
            counter: None::<CounterLabel>,
        },
        Options::default(),
        &mut hub,
    )
    .expect("bound");

    assert!(gallery.display().log.is_empty());
    assert_eq!(gallery.display().opacity(), Opacity::OPAQUE);
}

#[test]
fn missing_counter_is_tolerated() {
    let mut hub = ListenerRegistry::new();
    let mut without_counter = bindings(2);
    without_counter.counter = None;

    let mut gallery = TestGallery::bind(without_counter, Options::default(), &mut hub).expect("bound");
    gallery.next();
    assert!(gallery.counter().is_none());
    assert_eq!(gallery.cursor(), 1);
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn select_below_zero_wraps_to_last() {
    for count in 1..=7 {
        let (mut gallery, _hub) = gallery(count);
        gallery.select_index(-1);
        assert_eq!(gallery.cursor(), count - 1, "count={count}");
    }
}

#[test]
fn select_past_end_wraps_to_first() {
    for count in 1..=7 {
        let (mut gallery, _hub) = gallery(count);
        gallery.select_index(signed(count - 1));
        gallery.select_index(signed(count));
        assert_eq!(gallery.cursor(), 0, "count={count}");
    }
}

#[test]
fn next_then_previous_round_trips() {
    for count in 1..=6 {
        for start in 0..count {
            let (mut gallery, _hub) = gallery(count);
            gallery.select_index(signed(start));
            gallery.next();
            gallery.previous();
            assert_eq!(gallery.cursor(), start, "count={count} start={start}");
        }
    }
}

#[test]
fn selection_keeps_exactly_one_highlight_and_counter_in_sync() {
    let count = 6;
    let (mut gallery, _hub) = gallery(count);
    for target in -3..=9 {
        gallery.select_index(target);
        let cursor = gallery.cursor();
        assert_eq!(active_indices(&gallery), vec![cursor]);
        assert_eq!(counter_text(&gallery), format!("{} / {count}", cursor + 1));
    }
}

#[test]
fn select_fades_out_before_swap() {
    let mut hub = ListenerRegistry::new();
    let images = image_names(3);
    let display = RecordingDisplay {
        source: images[0].clone(),
        opacity: Opacity::OPAQUE,
        log: Vec::new(),
    };
    let mut gallery = GalleryController::bind(
        Bindings {
            main_display: Some(display),
            thumbnails: images.iter().cloned().map(ThumbnailSlot::new).collect(),
            controls: Controls::both(),
            counter: Some(CounterLabel::default()),
        },
        Options::default(),
        &mut hub,
    )
    .expect("bound");

    let swap = gallery.select_index(2).expect("attached");
    assert_eq!(gallery.display().log, vec![DisplayEvent::Opacity(0.0)]);
    assert_eq!(gallery.display().source(), &images[0]);
    assert_eq!(swap.index, 2);
    assert_eq!(swap.delay, FadeDelay::default());

    assert!(gallery.complete_swap(swap.ticket));
    assert_eq!(
        gallery.display().log,
        vec![
            DisplayEvent::Opacity(0.0),
            DisplayEvent::Source(images[2].clone()),
            DisplayEvent::Opacity(1.0),
        ]
    );
}

#[test]
fn highlight_and_counter_update_before_swap() {
    let (mut gallery, _hub) = gallery(3);
    gallery.next();
    assert_eq!(active_indices(&gallery), vec![1]);
    assert_eq!(counter_text(&gallery), "2 / 3");
    assert!(gallery.display().opacity().is_transparent());
    assert_eq!(gallery.display().source(), &ImageSource::from("img_0.png"));
}

#[test]
fn five_images_wrap_after_last() {
    let (mut gallery, _hub) = gallery(5);
    for _ in 0..4 {
        gallery.next();
    }
    assert_eq!(gallery.cursor(), 4);
    assert_eq!(counter_text(&gallery), "5 / 5");

    gallery.next();
    assert_eq!(gallery.cursor(), 0);
    assert_eq!(counter_text(&gallery), "1 / 5");
}

#[test]
fn previous_from_first_of_three_selects_last() {
    let (mut gallery, _hub) = gallery(3);
    gallery.previous();
    assert_eq!(gallery.cursor(), 2);
    assert_eq!(active_indices(&gallery), vec![2]);
}

// =============================================================================
// Inputs
// =============================================================================

#[test]
fn thumbnail_click_selects_that_thumbnail() {
    let (mut gallery, _hub) = gallery(4);
    gallery.thumbnail_clicked(3);
    assert_eq!(gallery.cursor(), 3);
}

#[test]
fn arrow_keys_navigate_and_other_keys_are_ignored() {
    let (mut gallery, _hub) = gallery(4);

    assert!(gallery.key_pressed(NavigationKey::ArrowRight).is_some());
    assert_eq!(gallery.cursor(), 1);

    assert!(gallery.key_pressed(NavigationKey::ArrowLeft).is_some());
    assert!(gallery.key_pressed(NavigationKey::ArrowLeft).is_some());
    assert_eq!(gallery.cursor(), 3);

    assert!(gallery.key_pressed(NavigationKey::Other).is_none());
    assert_eq!(gallery.cursor(), 3);
}

#[test]
fn controls_navigate_only_when_bound() {
    let mut hub = ListenerRegistry::new();
    let mut only_next = bindings(3);
    only_next.controls = Controls {
        previous: false,
        next: true,
    };
    let mut gallery = TestGallery::bind(only_next, Options::default(), &mut hub).expect("bound");

    assert!(gallery.control_clicked(Control::Previous).is_none());
    assert_eq!(gallery.cursor(), 0);

    assert!(gallery.control_clicked(Control::Next).is_some());
    assert_eq!(gallery.cursor(), 1);
}

#[test]
fn handle_maps_messages_to_effects() {
    let (mut gallery, _hub) = gallery(3);

    let effect = gallery.handle(Message::Next);
    let Effect::ScheduleSwap(swap) = effect else {
        panic!("expected a scheduled swap");
    };
    assert_eq!(swap.index, 1);

    assert_eq!(gallery.handle(Message::SwapDue(swap.ticket)), Effect::None);
    assert_eq!(gallery.display().source(), &ImageSource::from("img_1.png"));
    assert_eq!(gallery.display().opacity(), Opacity::OPAQUE);

    assert_eq!(
        gallery.handle(Message::KeyPressed(NavigationKey::Other)),
        Effect::None
    );
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn rapid_double_next_ends_on_final_image() {
    for policy in [TransitionPolicy::Overlap, TransitionPolicy::CancelPending] {
        let (mut gallery, _hub) = gallery_with_policy(5, policy);
        let start = gallery.select_index(3).expect("attached");
        gallery.complete_swap(start.ticket);

        let first = gallery.next().expect("attached");
        let second = gallery.next().expect("attached");
        assert!(gallery.display().opacity().is_transparent());

        gallery.complete_swap(first.ticket);
        gallery.complete_swap(second.ticket);

        assert_eq!(gallery.cursor(), 0, "policy={policy:?}");
        assert_eq!(
            gallery.display().source(),
            &ImageSource::from("img_0.png"),
            "policy={policy:?}"
        );
        assert_eq!(gallery.display().opacity(), Opacity::OPAQUE);
    }
}

#[test]
fn overlap_first_swap_already_shows_final_image() {
    let (mut gallery, _hub) = gallery(4);
    let first = gallery.next().expect("attached");
    let second = gallery.next().expect("attached");
    assert_eq!(gallery.pending_swaps(), 2);

    assert!(gallery.complete_swap(first.ticket));
    assert_eq!(gallery.cursor(), 2);
    assert_eq!(gallery.display().source(), &ImageSource::from("img_2.png"));
    assert_eq!(gallery.display().opacity(), Opacity::OPAQUE);

    assert!(gallery.complete_swap(second.ticket));
    assert_eq!(gallery.display().source(), &ImageSource::from("img_2.png"));
}

#[test]
fn overlap_never_regresses_to_older_swap() {
    let (mut gallery, _hub) = gallery(4);
    let first = gallery.next().expect("attached");
    let second = gallery.next().expect("attached");

    assert!(gallery.complete_swap(second.ticket));
    assert!(!gallery.complete_swap(first.ticket));
    assert_eq!(gallery.display().source(), &ImageSource::from("img_2.png"));
}

#[test]
fn cancel_pending_drops_superseded_swap() {
    let (mut gallery, _hub) = gallery_with_policy(4, TransitionPolicy::CancelPending);
    let first = gallery.next().expect("attached");
    let second = gallery.next().expect("attached");
    assert_eq!(gallery.pending_swaps(), 1);

    assert!(!gallery.complete_swap(first.ticket));
    assert!(gallery.display().opacity().is_transparent());
    assert!(gallery.complete_swap(second.ticket));
    assert_eq!(gallery.display().source(), &ImageSource::from("img_2.png"));
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn teardown_deregisters_listener() {
    let (mut gallery, mut hub) = gallery(3);
    let listener = gallery.listener().expect("attached");

    assert!(gallery.teardown(&mut hub));
    assert!(!hub.is_registered(listener));
    assert!(!gallery.is_attached());
    assert!(!gallery.teardown(&mut hub));
}

#[test]
fn teardown_against_another_hub_still_detaches() {
    let (mut gallery, hub) = gallery(3);
    let listener = gallery.listener().expect("attached");
    let mut other = ListenerRegistry::new();

    assert!(gallery.teardown(&mut other));
    assert!(!gallery.is_attached());
    assert!(other.is_empty());
    assert!(hub.is_registered(listener));
}

#[test]
fn navigation_after_teardown_has_no_effect() {
    let (mut gallery, mut hub) = gallery(3);
    let pending = gallery.next().expect("attached");
    gallery.teardown(&mut hub);

    assert!(gallery.next().is_none());
    assert!(gallery.key_pressed(NavigationKey::ArrowRight).is_none());
    assert!(!gallery.complete_swap(pending.ticket));
    assert_eq!(gallery.cursor(), 1);
    assert_eq!(gallery.pending_swaps(), 0);
}

#[test]
fn swap_from_torn_down_gallery_is_ignored_after_rebind() {
    let mut hub = ListenerRegistry::new();
    let mut previous = TestGallery::bind(bindings(5), Options::default(), &mut hub).expect("bound");
    let leftover = previous.next().expect("attached");
    previous.teardown(&mut hub);

    let mut current = TestGallery::bind(bindings(5), Options::default(), &mut hub).expect("bound");
    current.select_index(2);
    let latest = current.select_index(3).expect("attached");

    assert!(!current.complete_swap(leftover.ticket));
    assert_eq!(current.pending_swaps(), 2);
    assert!(current.display().opacity().is_transparent());
    assert_eq!(current.display().source(), &ImageSource::from("img_0.png"));

    assert!(current.complete_swap(latest.ticket));
    assert_eq!(current.display().source(), &ImageSource::from("img_3.png"));
}

#[test]
fn rebinding_does_not_accumulate_listeners() {
    let mut hub = ListenerRegistry::new();
    let mut current = TestGallery::bind(bindings(2), Options::default(), &mut hub).expect("bound");
    for _ in 0..5 {
        current.teardown(&mut hub);
        current = TestGallery::bind(bindings(2), Options::default(), &mut hub).expect("bound");
    }
    assert_eq!(hub.len(), 1);
}
