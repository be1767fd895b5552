use dioxus::prelude::*;
use tracing::{info, warn};

use crate::builder::{build_wrap, MetricsBundle};
#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::dashboard::WrapDashboard;
use crate::error::WrapError;
use crate::player::{PlayerConfig, WrapPlayer};
use crate::share::{save_wrap, SaveReceipt};
use crate::slides::Wrap;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Player,
    FullDashboard,
}

#[derive(Debug, Clone, PartialEq)]
enum SaveStatus {
    Idle,
    Working,
    Done(SaveReceipt),
    Error(String),
}

fn load_sample() -> Result<Wrap, WrapError> {
    let bundle = MetricsBundle::sample()?;
    build_wrap(&bundle)
}

/// The wrap page: plays the sample wrap and switches to the full grid when
/// the overview slide asks for it.
#[component]
pub fn WrapView() -> Element {
    let loaded = use_hook(|| {
        load_sample().map_err(|err| {
            warn!(%err, "failed to build sample wrap");
            err.to_string()
        })
    });
    let mut mode = use_signal(|| Mode::Player);
    let status = use_signal(|| SaveStatus::Idle);

    let wrap = match loaded {
        Ok(wrap) => wrap,
        Err(error) => {
            return rsx! {
                section { class: "page page-wrap",
                    p { class: "page-wrap__error", {t!("wrap-load-error", error = error)} }
                }
            };
        }
    };

    let save_handler = {
        let wrap = wrap.clone();
        let mut status_signal = status;
        move |_: ()| {
            if status_signal() == SaveStatus::Working {
                return;
            }
            status_signal.set(SaveStatus::Working);
            let wrap = wrap.clone();

            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                platform::spawn_future(async move {
                    status_signal.set(save_outcome(save_wrap(wrap).await));
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                status_signal.set(save_outcome(futures::executor::block_on(save_wrap(wrap))));
            }
        }
    };

    let feedback = match status() {
        SaveStatus::Idle => None,
        SaveStatus::Working => Some(("page-wrap__status", t!("wrap-saving"))),
        SaveStatus::Done(SaveReceipt::Saved { path }) => Some((
            "page-wrap__status page-wrap__status--success",
            t!("wrap-saved-file", path = path),
        )),
        SaveStatus::Done(SaveReceipt::Downloaded) => Some((
            "page-wrap__status page-wrap__status--success",
            t!("wrap-saved-download"),
        )),
        SaveStatus::Error(error) => Some((
            "page-wrap__status page-wrap__status--error",
            t!("wrap-save-error", error = error),
        )),
    };

    let body = match mode() {
        Mode::Player => rsx! {
            WrapPlayer {
                wrap: wrap.clone(),
                config: PlayerConfig::default(),
                on_open_dashboard: move |_| {
                    info!("opening full dashboard");
                    mode.set(Mode::FullDashboard);
                },
                on_save: save_handler,
            }
        },
        Mode::FullDashboard => rsx! {
            WrapDashboard {
                wrap: wrap.clone(),
                on_exit: move |_| mode.set(Mode::Player),
            }
        },
    };

    rsx! {
        section { class: "page page-wrap",
            {body}
            if let Some((class, message)) = feedback {
                p { class: "{class}", role: "status", "{message}" }
            }
        }
    }
}

fn save_outcome(result: Result<SaveReceipt, WrapError>) -> SaveStatus {
    match result {
        Ok(receipt) => SaveStatus::Done(receipt),
        Err(err) => {
            warn!(%err, "saving wrap failed");
            SaveStatus::Error(err.to_string())
        }
    }
}
