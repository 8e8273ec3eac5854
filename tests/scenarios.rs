use std::{sync::Arc, time::Duration};

use egg_timer::{
    app::{App, Exit, Input, Screen},
    components::CountdownController,
    config::Timings,
    services::{Language, RecordingNavigator, RecordingSound, Route, SoundCall, SoundId},
    state::Direction,
};
use tokio::{sync::mpsc, time::sleep};

fn countdown() -> (CountdownController, Arc<RecordingSound>, Arc<RecordingNavigator>) {
    let sound = Arc::new(RecordingSound::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let controller = CountdownController::new(
        &Timings::default(),
        Language::En,
        sound.clone(),
        navigator.clone(),
    );
    (controller, sound, navigator)
}

#[tokio::test(start_paused = true)]
async fn six_minutes_finish_exactly_at_tick_360() {
    let (mut c, sound, nav) = countdown();
    c.start(6);
    c.on_focus();

    for elapsed in 1..360u64 {
        c.drive_for(Duration::from_secs(1)).await;
        assert_eq!(c.remaining_seconds(), 360 - elapsed);
        assert!(c.is_running());
    }
    assert!(nav.routes().is_empty());

    c.drive_for(Duration::from_secs(1)).await;
    assert_eq!(c.remaining_seconds(), 0);
    assert_eq!(nav.routes(), vec![Route::TimerFinish]);

    c.drive_for(Duration::from_secs(30)).await;
    assert_eq!(nav.count(Route::TimerFinish), 1);
    assert_eq!(c.pending_timers(), 0);
    assert!(!sound.is_playing(SoundId::Tick));
}

#[tokio::test(start_paused = true)]
async fn pause_at_300_survives_ten_idle_seconds() {
    let (mut c, _, _) = countdown();
    c.start(6);
    c.on_focus();
    c.drive_for(Duration::from_secs(60)).await;
    assert_eq!(c.remaining_seconds(), 300);

    c.pause();
    c.drive_for(Duration::from_secs(10)).await;
    c.resume();
    assert_eq!(c.remaining_seconds(), 300);

    c.drive_for(Duration::from_secs(300)).await;
    assert_eq!(c.remaining_seconds(), 0);
}

#[tokio::test(start_paused = true)]
async fn every_short_duration_finishes_once() {
    for minutes in 1..=3u64 {
        let (mut c, _, nav) = countdown();
        c.start(minutes);
        c.drive_for(Duration::from_secs(minutes * 60 + 5)).await;
        assert_eq!(c.remaining_seconds(), 0);
        assert_eq!(nav.count(Route::TimerFinish), 1, "minutes={}", minutes);
    }
}

#[tokio::test(start_paused = true)]
async fn zero_minutes_falls_back_to_default() {
    let (mut c, _, _) = countdown();
    c.start(0);
    assert_eq!(c.remaining_seconds(), 360);
}

#[tokio::test(start_paused = true)]
async fn reset_after_pause_and_mid_bounce() {
    let (mut c, _, _) = countdown();
    c.start(8);
    // 4 frames: after 5 frame ticks the animation is on its way down
    c.drive_for(Duration::from_millis(2_000)).await;
    assert_eq!(c.animation().direction(), Direction::Descending);
    c.pause();
    c.reset();
    assert_eq!(c.remaining_seconds(), 480);
    assert_eq!(c.animation().current_index(), 0);
    assert_eq!(c.animation().direction(), Direction::Ascending);
    assert!(c.is_running());
}

#[tokio::test(start_paused = true)]
async fn rapid_focus_changes_start_sound_once() {
    let (mut c, sound, _) = countdown();
    c.start(6);
    for _ in 0..5 {
        c.on_focus();
        c.drive_for(Duration::from_millis(100)).await;
        c.on_blur();
    }
    assert_eq!(sound.count(SoundCall::Play(SoundId::Tick)), 0);

    c.on_focus();
    c.drive_for(Duration::from_secs(1)).await;
    assert_eq!(sound.count(SoundCall::Play(SoundId::Tick)), 1);
}

#[tokio::test(start_paused = true)]
async fn app_hands_over_from_countdown_to_finish_and_home() {
    let sound = Arc::new(RecordingSound::new());
    let mut app = App::new(Timings::default(), Language::It, sound.clone());
    assert_eq!(app.open(Route::Timer { minutes: 1 }), None);

    let (tx, rx) = mpsc::channel(4);
    tokio::spawn(async move {
        sleep(Duration::from_secs(65)).await;
        tx.send(Input::Close).await.ok();
        // keep the channel open until the app has exited
        sleep(Duration::from_secs(60)).await;
    });

    let exit = app.run(rx, std::future::pending()).await;
    assert_eq!(exit, Exit::Navigated(Route::Home));

    let calls = sound.calls();
    let tick_stopped = calls
        .iter()
        .rposition(|c| *c == SoundCall::Stop(SoundId::Tick))
        .expect("tick loop stopped");
    let alarm_started = calls
        .iter()
        .position(|c| *c == SoundCall::Play(SoundId::Alarm))
        .expect("alarm loop started");
    assert!(tick_stopped < alarm_started);
    assert!(!sound.is_playing(SoundId::Alarm));
    assert!(!sound.is_playing(SoundId::Tick));
}

#[tokio::test(start_paused = true)]
async fn app_quits_and_tears_down_active_screen() {
    let sound = Arc::new(RecordingSound::new());
    let mut app = App::new(Timings::default(), Language::En, sound.clone());
    app.open(Route::Timer { minutes: 6 });
    assert!(matches!(app.screen(), Some(Screen::Countdown(_))));
    // clock, animation and the pending tick-sound start
    assert_eq!(app.screen().map(|s| s.pending_timers()), Some(3));

    let (tx, rx) = mpsc::channel(4);
    tx.send(Input::Tap).await.unwrap();
    tx.send(Input::Status).await.unwrap();
    tx.send(Input::Quit).await.unwrap();

    let exit = app.run(rx, std::future::pending()).await;
    assert_eq!(exit, Exit::Quit);
    assert!(!sound.is_playing(SoundId::Tick));
}

#[tokio::test(start_paused = true)]
async fn long_press_in_app_leaves_for_preparation() {
    let sound = Arc::new(RecordingSound::new());
    let mut app = App::new(Timings::default(), Language::Pt, sound.clone());
    app.open(Route::Timer { minutes: 6 });

    let (tx, rx) = mpsc::channel(4);
    tx.send(Input::Down).await.unwrap();
    let exit = app.run(rx, std::future::pending()).await;
    assert_eq!(exit, Exit::Navigated(Route::EggPreparation));
    assert_eq!(sound.count(SoundCall::Once(SoundId::Click)), 1);
    drop(tx);
}
