//! Actor running a view model.
//!
//! Each view model is owned by a single task. The GUI talks to it through a [`ViewHandle`]:
//! commands go in over an mpsc channel and snapshots of the view come out over a watch
//! channel. Data is loaded by background tasks whose results are posted back to the same
//! channel as the commands, so the model is only ever changed by its own task.
//!
//! Every background task is tagged with a generation per task kind. Starting a new task of a
//! kind bumps its generation, and results carrying an older generation are discarded. A slow
//! fetch can therefore never overwrite the result of a newer one.

use std::{collections::HashMap, time::Duration};

use dioxus_logger::tracing;
use futures::future::BoxFuture;
use tokio::{
    sync::{mpsc, watch},
    time::{Instant, Interval},
};

use crate::{
    app::{context::AppContext, error::Error, event::AppEvent, view::ViewConfig},
    model::Character,
};

/// Kind of the background task loading the main data of a view.
pub const FETCH: &str = "fetch";

/// What the actor should do after the model handled a message.
pub enum Effect<D> {
    /// Only publish a new snapshot.
    None,
    /// Reload the main data of the view via [`ViewModel::fetch`].
    Refresh,
    /// Run a background task of the given kind and pass its result to [`ViewModel::apply`].
    Spawn(&'static str, BoxFuture<'static, Result<D, Error>>),
}

impl<D> std::fmt::Debug for Effect<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Refresh => write!(f, "Refresh"),
            Self::Spawn(kind, _) => write!(f, "Spawn({})", kind),
        }
    }
}

/// State and behavior of a view, independent of the GUI toolkit.
pub trait ViewModel: Send + 'static {
    /// Result of a background task.
    type Data: Send + 'static;
    /// Commands sent by the GUI.
    type Command: Send + 'static;
    /// Everything the GUI needs to render the view.
    type Snapshot: Clone + Send + Sync + 'static;

    /// Name of the view for logging.
    fn name(&self) -> &'static str;

    /// Returns a future loading the main data of the view.
    ///
    /// The future must not borrow the model, so it can run while the model handles commands.
    fn fetch(&self, ctx: &AppContext) -> BoxFuture<'static, Result<Self::Data, Error>>;

    /// Applies the result of a background task.
    fn apply(
        &mut self,
        kind: &'static str,
        result: Result<Self::Data, Error>,
        ctx: &AppContext,
    ) -> Effect<Self::Data>;

    fn handle(&mut self, command: Self::Command, ctx: &AppContext) -> Effect<Self::Data>;

    /// Decides how to react to an application event.
    fn on_event(&mut self, _event: &AppEvent, _ctx: &AppContext) -> Effect<Self::Data> {
        Effect::None
    }

    /// Called when the current character was exchanged.
    fn on_character(&mut self, _character: Option<&Character>) -> Effect<Self::Data> {
        Effect::Refresh
    }

    /// Interval of [`ViewModel::on_tick`], `None` for views without periodic updates.
    fn tick_interval(&self, _config: &ViewConfig) -> Option<Duration> {
        None
    }

    fn on_tick(&mut self, _ctx: &AppContext) -> Effect<Self::Data> {
        Effect::None
    }

    fn snapshot(&self) -> Self::Snapshot;
}

enum Message<M: ViewModel> {
    Command(M::Command),
    Refresh,
    Loaded {
        kind: &'static str,
        generation: u64,
        result: Result<M::Data, Error>,
    },
}

/// Handle for talking to a running view. Clones refer to the same view.
///
/// The view stops when all handles are dropped and no background task is running.
pub struct ViewHandle<M: ViewModel> {
    messages: mpsc::Sender<Message<M>>,
    snapshots: watch::Receiver<M::Snapshot>,
}

impl<M: ViewModel> Clone for ViewHandle<M> {
    fn clone(&self) -> Self {
        Self {
            messages: self.messages.clone(),
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<M: ViewModel> ViewHandle<M> {
    /// Sends a command to the view.
    ///
    /// # Returns
    /// - `true` - The command was queued
    /// - `false` - The queue is full or the view stopped. The command was dropped.
    pub fn send(&self, command: M::Command) -> bool {
        self.post(Message::Command(command))
    }

    /// Requests the view to reload its data.
    pub fn refresh(&self) -> bool {
        self.post(Message::Refresh)
    }

    fn post(&self, message: Message<M>) -> bool {
        match self.messages.try_send(message) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!("View command queue is full, dropping message");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                tracing::warn!("View has stopped, dropping message");
                false
            }
        }
    }

    /// Returns a receiver which is notified whenever the view changed.
    pub fn subscribe(&self) -> watch::Receiver<M::Snapshot> {
        self.snapshots.clone()
    }

    /// Returns the latest snapshot of the view.
    pub fn snapshot(&self) -> M::Snapshot {
        self.snapshots.borrow().clone()
    }
}

/// Starts a view model on its own task and requests an initial refresh.
///
/// Must be called from within a tokio runtime.
pub fn spawn_view<M: ViewModel>(model: M, ctx: AppContext) -> ViewHandle<M> {
    let (messages, receiver) = mpsc::channel(ctx.view_config.command_capacity);
    let (snapshot_tx, snapshots) = watch::channel(model.snapshot());

    let actor = ViewActor {
        ticker: model
            .tick_interval(&ctx.view_config)
            .map(|d| tokio::time::interval_at(Instant::now() + d, d)),
        model,
        generations: HashMap::new(),
        sender: messages.downgrade(),
        snapshot_tx,
        ctx,
    };
    tokio::spawn(actor.run(receiver));

    let handle = ViewHandle {
        messages,
        snapshots,
    };
    handle.refresh();
    handle
}

struct ViewActor<M: ViewModel> {
    model: M,
    ctx: AppContext,
    generations: HashMap<&'static str, u64>,
    sender: mpsc::WeakSender<Message<M>>,
    snapshot_tx: watch::Sender<M::Snapshot>,
    ticker: Option<Interval>,
}

impl<M: ViewModel> ViewActor<M> {
    async fn run(mut self, mut receiver: mpsc::Receiver<Message<M>>) {
        let name = self.model.name();
        tracing::debug!(view = name, "View started");

        let mut events = self.ctx.events.subscribe();
        let mut character = self.ctx.watch_character();
        character.borrow_and_update();

        loop {
            let effect = tokio::select! {
                message = receiver.recv() => match message {
                    None => break,
                    Some(message) => self.on_message(message),
                },
                Some(event) = events.recv() => self.model.on_event(&event, &self.ctx),
                Ok(()) = character.changed() => {
                    let current = character.borrow_and_update().clone();
                    self.model.on_character(current.as_ref())
                }
                _ = tick(&mut self.ticker) => self.model.on_tick(&self.ctx),
            };
            self.run_effect(effect);
            self.snapshot_tx.send_replace(self.model.snapshot());
        }

        tracing::debug!(view = name, "View stopped");
    }

    fn on_message(&mut self, message: Message<M>) -> Effect<M::Data> {
        match message {
            Message::Command(command) => self.model.handle(command, &self.ctx),
            Message::Refresh => Effect::Refresh,
            Message::Loaded {
                kind,
                generation,
                result,
            } => {
                let current = self.generations.get(kind).copied().unwrap_or(0);
                if generation != current {
                    tracing::debug!(
                        view = self.model.name(),
                        kind,
                        generation,
                        current,
                        "Discarding stale result"
                    );
                    return Effect::None;
                }
                if let Err(err) = &result {
                    tracing::error!(view = self.model.name(), kind, "Failed to load data: {}", err);
                }
                self.model.apply(kind, result, &self.ctx)
            }
        }
    }

    fn run_effect(&mut self, effect: Effect<M::Data>) {
        match effect {
            Effect::None => {}
            Effect::Refresh => {
                let future = self.model.fetch(&self.ctx);
                self.spawn(FETCH, future);
            }
            Effect::Spawn(kind, future) => self.spawn(kind, future),
        }
    }

    fn spawn(&mut self, kind: &'static str, future: BoxFuture<'static, Result<M::Data, Error>>) {
        let generation = self.generations.entry(kind).or_insert(0);
        *generation += 1;
        let generation = *generation;

        let Some(sender) = self.sender.upgrade() else {
            return;
        };
        tokio::spawn(async move {
            let result = future.await;
            let _ = sender
                .send(Message::Loaded {
                    kind,
                    generation,
                    result,
                })
                .await;
        });
    }
}

async fn tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}
