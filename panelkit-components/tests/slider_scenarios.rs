//! End-to-end slider sessions driven through the event dispatcher,
//! with real frame ticks between gestures.

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use panelkit_components::{
    input::InputTarget,
    mode_slider::{ModeOption, ModeSlider, ModeSliderArgs},
    slider::{Slider, SliderArgs},
};
use panelkit_foundation::{CursorEvent, Px, PxPosition};

const FRAME: Duration = Duration::from_millis(16);

fn at(x: i32) -> PxPosition {
    PxPosition::new(Px(x), Px(16))
}

fn run_frames(target: &mut impl InputTarget, clock: &mut Instant, frames: usize) {
    for _ in 0..frames {
        *clock += FRAME;
        target.tick(*clock);
    }
}

#[test]
fn snap_session_settles_exactly_on_the_committed_slot() {
    let commits = Arc::new(Mutex::new(Vec::new()));
    let args = SliderArgs::default().on_change({
        let commits = commits.clone();
        move |index| commits.lock().expect("commits").push(index)
    });
    let mut slider = Slider::new(&args);
    slider.set_track_width(Px(1200));
    let mut clock = Instant::now();

    slider.handle_event(&CursorEvent::pressed(at(410)));
    slider.handle_event(&CursorEvent::moved(at(760)));
    slider.handle_event(&CursorEvent::moved(at(1150)));
    slider.handle_event(&CursorEvent::released(at(1150)));

    // Let the release spring play out; it must land exactly on the
    // slot pixel and stop.
    run_frames(&mut slider, &mut clock, 300);
    assert!(!slider.is_animating());
    assert_eq!(slider.thumb_offset(), Px(1000));
    assert_eq!(commits.lock().expect("commits").as_slice(), &[5]);
}

#[test]
fn interrupted_sync_then_drag_commits_from_the_interrupt_point() {
    let commits = Arc::new(Mutex::new(Vec::new()));
    let args = SliderArgs::default().on_change({
        let commits = commits.clone();
        move |index| commits.lock().expect("commits").push(index)
    });
    let mut slider = Slider::new(&args);
    slider.set_track_width(Px(1200));
    let mut clock = Instant::now();

    slider.sync_index(5);
    run_frames(&mut slider, &mut clock, 8);
    let inflight = slider.thumb_offset();
    assert!(inflight > Px(400) && inflight < Px(1000));

    // Grab the moving thumb and nudge it backward a little; the
    // release must snap from where the drag left it, not from slot 5.
    slider.handle_event(&CursorEvent::pressed(at(inflight.0 + 16)));
    slider.handle_event(&CursorEvent::moved(at(inflight.0 - 80)));
    slider.handle_event(&CursorEvent::released(at(inflight.0 - 80)));

    run_frames(&mut slider, &mut clock, 300);
    let committed = slider.committed_index().expect("snap mode commits indices");
    // Interrupting early in the flight means the drag ended well short
    // of slot 5, and the thumb must rest exactly on the committed slot.
    assert!(committed < 5, "committed {committed}");
    let resting = slider.geometry().index_to_pixel(committed, 6);
    assert_eq!(slider.thumb_offset(), Px(resting as i32));
    assert!(!slider.is_animating());
}

#[test]
fn continuous_session_reports_once_per_move_plus_release() {
    let reports = Arc::new(Mutex::new(Vec::new()));
    let args = SliderArgs::default()
        .snap_enabled(false)
        .thumb_size(panelkit_foundation::Dp(80.0))
        .on_value_change({
            let reports = reports.clone();
            move |ratio| reports.lock().expect("reports").push(ratio)
        });
    let mut slider = Slider::new(&args);
    slider.set_track_width(Px(300));

    slider.handle_event(&CursorEvent::pressed(at(30)));
    for x in [40, 60, 90, 120] {
        slider.handle_event(&CursorEvent::moved(at(x)));
    }
    slider.handle_event(&CursorEvent::released(at(120)));

    let reports = reports.lock().expect("reports");
    assert_eq!(reports.len(), 5);
    // Monotonic rightward drag: monotonic ratios, all normalized.
    for pair in reports.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
    assert!(reports.iter().all(|ratio| (0.0..=1.0).contains(ratio)));
    let expected = 190.0 / 300.0;
    assert!((reports[reports.len() - 1] - expected).abs() < 1.0e-6);
}

#[test]
fn mode_slider_session_tracks_and_settles() {
    let commits = Arc::new(Mutex::new(Vec::new()));
    let args = ModeSliderArgs::default()
        .options(vec![
            ModeOption::new("cool", "Cool", "❄"),
            ModeOption::new("heat", "Heat", "☀"),
            ModeOption::new("dehumidify", "Dehumidify", "💧"),
            ModeOption::new("fan", "Fan", "💨"),
        ])
        .on_change({
            let commits = commits.clone();
            move |index| commits.lock().expect("commits").push(index)
        });
    let mut slider = ModeSlider::new(&args);
    slider.set_track_width(Px(400));
    let mut clock = Instant::now();

    // Press in segment 2, drag to the far right, release.
    slider.handle_event(&CursorEvent::pressed(at(250)));
    slider.handle_event(&CursorEvent::moved(at(399)));
    slider.handle_event(&CursorEvent::released(at(399)));

    run_frames(&mut slider, &mut clock, 300);
    assert_eq!(commits.lock().expect("commits").as_slice(), &[2, 3]);
    assert_eq!(slider.selected(), 3);
    // Anchor 3 of 4 sits at the full 312px travel, plus 4px padding.
    assert_eq!(slider.capsule_offset(), Px(316));
    assert!(!slider.is_animating());
}
