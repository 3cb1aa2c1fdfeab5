//! Browser build: the dashboard drawn on a canvas in a page served by `trunk`.
//!
//! The page fetches its dataset over HTTP (`?data=<url>`, by default
//! `education_career_success.csv` next to `index.html`). File → Open uses the
//! browser's file picker. Both hand raw bytes to an [`Inbox`] that the app
//! drains at the start of every frame.

use std::sync::mpsc::{channel, Receiver, Sender};

use eframe::egui;
use js_sys::Uint8Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlCanvasElement, Response, UrlSearchParams};

use crate::app::CareerDashApp;
use crate::state::AppState;

/// `id` of the `<canvas>` in `index.html`.
pub const CANVAS_ID: &str = "career_dash_canvas";
pub const DEFAULT_DATA_URL: &str = "education_career_success.csv";

/// File contents waiting to be parsed on the UI thread.
pub struct IncomingFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Hand-off between browser callbacks and the app.
pub struct Inbox {
    tx: Sender<IncomingFile>,
    rx: Receiver<IncomingFile>,
}

impl Default for Inbox {
    fn default() -> Self {
        let (tx, rx) = channel();
        Inbox { tx, rx }
    }
}

impl Inbox {
    pub fn sender(&self) -> Sender<IncomingFile> {
        self.tx.clone()
    }

    pub fn try_recv(&self) -> Option<IncomingFile> {
        self.rx.try_recv().ok()
    }
}

/// Mount the dashboard on the page's canvas.
pub fn start() {
    let _ = eframe::WebLogger::init(log::LevelFilter::Info);

    spawn_local(async {
        if let Err(e) = run().await {
            log::error!("Failed to start the dashboard: {e:?}");
        }
    });
}

async fn run() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;

    let result = eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| {
                let state = AppState::default();
                fetch_into(data_url(), state.inbox.sender(), cc.egui_ctx.clone());
                Ok(Box::new(CareerDashApp::new(state)))
            }),
        )
        .await;

    if let Some(loading) = document.get_element_by_id("loading_text") {
        match &result {
            Ok(()) => loading.remove(),
            Err(_) => loading.set_inner_html(
                "<p>The dashboard failed to start. See the developer console for details.</p>",
            ),
        }
    }
    result
}

/// `?data=` from the page URL, or the default file beside the page.
fn data_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|query| UrlSearchParams::new_with_str(&query).ok())
        .and_then(|params| params.get("data"))
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
}

/// Download `url` in the background and queue it for loading.
pub fn fetch_into(url: String, tx: Sender<IncomingFile>, ctx: egui::Context) {
    spawn_local(async move {
        match fetch_bytes(&url).await {
            Ok(bytes) => {
                let name = url
                    .split(['?', '#'])
                    .next()
                    .and_then(|path| path.rsplit('/').next())
                    .unwrap_or(DEFAULT_DATA_URL)
                    .to_string();
                let _ = tx.send(IncomingFile { name, bytes });
                ctx.request_repaint();
            }
            Err(e) => log::warn!("{url} not loaded ({e:?}); starting without data"),
        }
    });
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
    }
    let buffer = JsFuture::from(response.array_buffer()?).await?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Browser file picker; the chosen file arrives through the inbox.
pub fn pick_file(tx: Sender<IncomingFile>, ctx: egui::Context) {
    spawn_local(async move {
        let Some(handle) = rfd::AsyncFileDialog::new()
            .add_filter("Supported files", &["csv", "json"])
            .pick_file()
            .await
        else {
            return;
        };
        let bytes = handle.read().await;
        let _ = tx.send(IncomingFile {
            name: handle.file_name(),
            bytes,
        });
        ctx.request_repaint();
    });
}
