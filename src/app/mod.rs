//! Application loop
//!
//! Drives exactly one screen at a time. Inputs, navigation requests and the
//! active screen's timers are awaited in a single `select!`, so every event
//! is handled to completion before the next one is looked at.

pub mod input;
pub mod screen;

use std::{future::Future, sync::Arc};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    components::{CountdownController, CountdownWakeup, FinishAnimator},
    config::Timings,
    services::{ChannelNavigator, Language, Route, SoundController},
};

pub use input::{Input, UnknownInput};
pub use screen::{Screen, ScreenSnapshot, ScreenWakeup};

/// Why the app loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Navigation left the screens this application drives
    Navigated(Route),
    Quit,
    InputClosed,
    Shutdown,
}

pub struct App {
    timings: Timings,
    language: Language,
    sound: Arc<dyn SoundController>,
    navigator: Arc<ChannelNavigator>,
    routes: mpsc::UnboundedReceiver<Route>,
    screen: Option<Screen>,
}

impl App {
    pub fn new(timings: Timings, language: Language, sound: Arc<dyn SoundController>) -> Self {
        let (navigator, routes) = ChannelNavigator::new();
        Self {
            timings,
            language,
            sound,
            navigator: Arc::new(navigator),
            routes,
            screen: None,
        }
    }

    pub fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    /// Show the screen for `route`, tearing down the current one first
    pub fn open(&mut self, route: Route) -> Option<Exit> {
        self.close_screen();
        match route {
            Route::Timer { minutes } => {
                let mut countdown = CountdownController::new(
                    &self.timings,
                    self.language,
                    Arc::clone(&self.sound),
                    self.navigator.clone(),
                );
                countdown.start(minutes);
                countdown.on_focus();
                println!("[{}]", self.language.back_label());
                println!("{}", self.language.countdown_heading());
                self.screen = Some(Screen::Countdown(countdown));
                None
            }
            Route::TimerFinish => {
                let mut finish = FinishAnimator::new(
                    &self.timings,
                    self.language,
                    Arc::clone(&self.sound),
                    self.navigator.clone(),
                );
                finish.on_focus();
                println!("{}", self.language.finish_heading());
                println!("[{}]", self.language.close_label());
                self.screen = Some(Screen::Finish(finish));
                None
            }
            Route::Home | Route::EggPreparation => Some(Exit::Navigated(route)),
        }
    }

    /// Apply one line command to the active screen
    pub fn apply(&mut self, input: Input) -> Option<Exit> {
        if input == Input::Quit {
            return Some(Exit::Quit);
        }
        match (self.screen.as_mut(), input) {
            (Some(screen), Input::Status) => print_snapshot(&screen.snapshot()),
            (Some(Screen::Countdown(c)), Input::Down) => c.press_in(),
            (Some(Screen::Countdown(c)), Input::Up) => c.press_out(),
            (Some(Screen::Countdown(c)), Input::Tap) => {
                c.press_in();
                c.press_out();
            }
            (Some(Screen::Countdown(c)), Input::Pause) => c.pause(),
            (Some(Screen::Countdown(c)), Input::Resume) => c.resume(),
            (Some(Screen::Countdown(c)), Input::Toggle) => c.toggle(),
            (Some(Screen::Countdown(c)), Input::Reset) => c.reset(),
            (Some(Screen::Countdown(c)), Input::Back) => c.back(),
            (Some(Screen::Finish(f)), Input::Close) => f.close(),
            (screen, input) => {
                let name = screen.map(|s| s.name()).unwrap_or("none");
                warn!("Command {:?} does not apply to screen {}", input, name);
            }
        }
        None
    }

    /// Run until navigation leaves the driven screens, input ends or `shutdown` resolves
    pub async fn run<F>(mut self, mut inputs: mpsc::Receiver<Input>, shutdown: F) -> Exit
    where
        F: Future<Output = ()>,
    {
        let mut shutdown = std::pin::pin!(shutdown);
        let exit = loop {
            let exit = tokio::select! {
                biased;
                _ = &mut shutdown => Some(Exit::Shutdown),
                Some(route) = self.routes.recv() => self.open(route),
                wakeup = next_wakeup(&mut self.screen) => {
                    self.handle(wakeup);
                    None
                }
                input = inputs.recv() => match input {
                    Some(input) => self.apply(input),
                    None => Some(Exit::InputClosed),
                },
            };
            if let Some(exit) = exit {
                break exit;
            }
        };

        self.close_screen();
        info!("App loop finished: {:?}", exit);
        exit
    }

    fn handle(&mut self, wakeup: ScreenWakeup) {
        let Some(screen) = self.screen.as_mut() else {
            return;
        };
        screen.handle(wakeup);
        if let (Screen::Countdown(c), ScreenWakeup::Countdown(CountdownWakeup::Clock)) =
            (&*screen, wakeup)
        {
            let snapshot = c.snapshot();
            println!("{}  frame {}", snapshot.display, snapshot.frame_index + 1);
        }
    }

    fn close_screen(&mut self) {
        if let Some(mut screen) = self.screen.take() {
            debug!("Closing screen {}", screen.name());
            screen.teardown();
        }
    }
}

async fn next_wakeup(screen: &mut Option<Screen>) -> ScreenWakeup {
    match screen {
        Some(screen) => screen.next_wakeup().await,
        None => std::future::pending().await,
    }
}

fn print_snapshot(snapshot: &ScreenSnapshot) {
    match serde_json::to_string_pretty(snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => warn!("Failed to render status: {}", e),
    }
}
