//! Navigation collaborator

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Screens the core can ask navigation to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screenName", content = "params")]
pub enum Route {
    Home,
    EggPreparation,
    Timer { minutes: u64 },
    TimerFinish,
}

impl Route {
    pub fn screen_name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::EggPreparation => "EggPreparation",
            Route::Timer { .. } => "Timer",
            Route::TimerFinish => "TimerFinish",
        }
    }
}

/// Navigation stack owned outside the core
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: Route);
}

/// Navigator that forwards requested routes to the app loop
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<Route>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate_to(&self, route: Route) {
        info!("Navigating to {}", route.screen_name());
        if let Err(e) = self.tx.send(route) {
            warn!("Navigation request dropped: {}", e);
        }
    }
}
