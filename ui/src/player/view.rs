use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tracing::debug;

use crate::core::{platform, timing};
use crate::dashboard::DashboardSlide;
use crate::renderers::RenderedSlide;
use crate::slides::{SlideKind, Wrap};
use crate::t;

use super::engine::{Navigation, PlayerConfig, PlayerEngine, ScheduledAdvance};
use super::progress::IndicatorState;

type SenderSlot = Rc<RefCell<Option<UnboundedSender<PlayerEvent>>>>;
type TimerSlot = Rc<RefCell<Option<Task>>>;

/// Input to the player's event loop. Manual navigation and timer firings
/// all go through one queue so they apply in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Next,
    Prev,
    JumpTo(usize),
    DwellElapsed { generation: u64 },
    TogglePause,
}

/// A running player: the engine state and the queue that drives it.
#[derive(Clone, Copy)]
pub struct PlayerHandle {
    engine: Signal<PlayerEngine>,
    events: Coroutine<PlayerEvent>,
}

impl PlayerHandle {
    pub fn send(&self, event: PlayerEvent) {
        self.events.send(event);
    }

    /// Current engine state. Subscribes the calling component.
    pub fn snapshot(&self) -> PlayerEngine {
        self.engine.cloned()
    }

    pub fn index(&self) -> usize {
        self.engine.read().index()
    }

    /// Callback for the overview slide's cards.
    pub fn jump_handler(&self) -> EventHandler<usize> {
        let handle = *self;
        EventHandler::new(move |position: usize| handle.send(PlayerEvent::JumpTo(position)))
    }
}

/// Start the player for `wrap`. The dwell timer is a spawned task that is
/// cancelled whenever it is re-armed and when the calling scope is dropped.
pub fn use_player(wrap: &Wrap, config: PlayerConfig) -> PlayerHandle {
    let engine = use_signal({
        let wrap = wrap.clone();
        move || PlayerEngine::for_wrap(&wrap, config)
    });

    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let timer_slot: TimerSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let events = {
        let sender_slot = sender_slot.clone();
        let timer_slot = timer_slot.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<PlayerEvent>| {
            let sender_slot = sender_slot.clone();
            let timer_slot = timer_slot.clone();
            let mut engine_signal = engine;

            async move {
                let initial = engine_signal.peek().schedule();
                arm_dwell(&sender_slot, &timer_slot, initial);

                while let Some(event) = rx.next().await {
                    let navigation = match event {
                        PlayerEvent::Next => engine_signal.with_mut(|eng| eng.next()),
                        PlayerEvent::Prev => engine_signal.with_mut(|eng| eng.prev()),
                        PlayerEvent::JumpTo(position) => engine_signal
                            .with_mut(|eng| eng.jump_to(i64::try_from(position).unwrap_or(i64::MAX))),
                        PlayerEvent::DwellElapsed { generation } => {
                            let navigation = engine_signal.with_mut(|eng| eng.dwell_elapsed(generation));
                            if !matches!(navigation, Navigation::Stale) {
                                // The timer that sent this has already finished.
                                timer_slot.borrow_mut().take();
                            }
                            navigation
                        }
                        PlayerEvent::TogglePause => {
                            let schedule = engine_signal.with_mut(|eng| eng.toggle_pause());
                            arm_dwell(&sender_slot, &timer_slot, schedule);
                            continue;
                        }
                    };

                    if let Navigation::Moved { from, to, schedule } = navigation {
                        debug!(from, to, "player moved");
                        arm_dwell(&sender_slot, &timer_slot, schedule);
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(events.tx());

    use_drop({
        let timer_slot = timer_slot.clone();
        move || {
            if let Some(task) = timer_slot.borrow_mut().take() {
                task.cancel();
            }
        }
    });

    PlayerHandle { engine, events }
}

#[component]
pub fn WrapPlayer(
    wrap: Wrap,
    #[props(default)] config: PlayerConfig,
    on_open_dashboard: EventHandler<()>,
    on_save: Option<EventHandler<()>>,
) -> Element {
    let player = use_player(&wrap, config);
    let send_event = move |event: PlayerEvent| player.send(event);
    let on_jump = player.jump_handler();

    let snapshot = player.snapshot();
    let index = snapshot.index();
    let total = snapshot.len();
    let position = index + 1;
    let generation = snapshot.generation();
    let paused = snapshot.is_paused();
    let animate = snapshot.config.auto_advance && !paused;
    let dwell_ms = snapshot.config.dwell_ms;
    let show_save = on_save.is_some() && snapshot.is_last();

    let indicators = snapshot
        .indicators()
        .into_iter()
        .enumerate()
        .map(|(i, state)| {
            let fill_class = if state == IndicatorState::Active && animate {
                "wrap-player__fill wrap-player__fill--running"
            } else {
                "wrap-player__fill"
            };
            (i, state.css_modifier(), fill_class)
        })
        .collect::<Vec<_>>();

    let current = wrap.get(index).cloned();
    let slide_key = current.as_ref().map(|slide| slide.id.clone()).unwrap_or_default();
    let on_dashboard = current
        .as_ref()
        .is_some_and(|slide| slide.kind() == Some(SlideKind::Dashboard));
    let pause_label = if paused {
        t!("player-resume")
    } else {
        t!("player-pause")
    };

    rsx! {
        section {
            class: "wrap-player",
            tabindex: 0,
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt| {
                let key = evt.key().to_string();
                match key.as_str() {
                    "ArrowRight" => send_event(PlayerEvent::Next),
                    "ArrowLeft" => send_event(PlayerEvent::Prev),
                    " " | "Spacebar" => {
                        evt.prevent_default();
                        send_event(PlayerEvent::TogglePause);
                    }
                    _ => {}
                }
            },

            div { class: "wrap-player__progress", role: "progressbar",
                for (i, modifier, fill_class) in indicators {
                    span {
                        key: "{i}-{generation}",
                        class: "wrap-player__indicator wrap-player__indicator--{modifier}",
                        span {
                            class: "{fill_class}",
                            style: "animation-duration: {dwell_ms}ms;",
                        }
                    }
                }
            }

            div { class: "wrap-player__stage",
                if on_dashboard {
                    DashboardSlide {
                        wrap: wrap.clone(),
                        current: index,
                        on_jump,
                        on_open_dashboard: move |_| on_open_dashboard.call(()),
                    }
                } else if let Some(slide) = current {
                    RenderedSlide { key: "{slide_key}", slide }
                }
            }

            nav { class: "wrap-player__controls",
                button {
                    r#type: "button",
                    class: "wrap-player__prev",
                    disabled: snapshot.is_first(),
                    onclick: move |_| send_event(PlayerEvent::Prev),
                    {t!("player-previous")}
                }
                button {
                    r#type: "button",
                    class: "wrap-player__pause",
                    disabled: !snapshot.config.auto_advance,
                    onclick: move |_| send_event(PlayerEvent::TogglePause),
                    "{pause_label}"
                }
                span { class: "wrap-player__position",
                    {t!("player-position", current = position, total = total)}
                }
                button {
                    r#type: "button",
                    class: "wrap-player__next",
                    disabled: snapshot.is_last(),
                    onclick: move |_| send_event(PlayerEvent::Next),
                    {t!("player-next")}
                }
                if show_save {
                    button {
                        r#type: "button",
                        class: "wrap-player__save",
                        onclick: move |_| {
                            if let Some(handler) = on_save {
                                handler.call(());
                            }
                        },
                        {t!("player-save")}
                    }
                }
            }
        }
    }
}

/// Replace the pending dwell timer. The previous timer is cancelled even if
/// no new one is scheduled.
fn arm_dwell(sender_slot: &SenderSlot, timer_slot: &TimerSlot, schedule: Option<ScheduledAdvance>) {
    if let Some(task) = timer_slot.borrow_mut().take() {
        task.cancel();
    }

    let Some(schedule) = schedule else {
        return;
    };

    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        let task = platform::spawn_future(async move {
            timing::sleep_ms(schedule.dwell_ms).await;
            let _ = sender.unbounded_send(PlayerEvent::DwellElapsed {
                generation: schedule.generation,
            });
        });
        timer_slot.borrow_mut().replace(task);
    }
}
