//! TranslationWorker - Background model owner
//!
//! The model is slow to load and slow to run, so it lives on its own thread.
//! The UI submits [`TranslationRequest`]s over a channel and receives
//! [`AppEvent`]s back.
//!
//! ```text
//! UI thread ──TranslationRequest──▶ worker thread (owns the model)
//!     ▲                                   │
//!     └──────────── AppEvent ◀────────────┘
//! ```
//!
//! When several requests are queued only the newest one is translated; the
//! UI ignores results for anything but its pending request anyway.

use std::time::Instant;

use gpui::Global;
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::eventing::AppEvent;
use crate::services::translation::{TranslationRequest, Translator};

/// Handle to the translation worker thread
pub struct TranslationWorker {
    request_tx: flume::Sender<TranslationRequest>,
}

impl Global for TranslationWorker {}

impl TranslationWorker {
    /// Start the worker. `load` runs on the worker thread and builds the
    /// translator; its outcome is reported as `ModelReady` or `ModelFailed`.
    pub fn spawn<F, T>(load: F, event_tx: flume::Sender<AppEvent>) -> Result<Self>
    where
        F: FnOnce() -> Result<T> + Send + 'static,
        T: Translator + 'static,
    {
        let (request_tx, request_rx) = flume::unbounded::<TranslationRequest>();

        std::thread::Builder::new()
            .name("translation-worker".to_string())
            .spawn(move || run_worker(load, request_rx, event_tx))?;

        Ok(Self { request_tx })
    }

    /// Queue a request for translation
    pub fn submit(&self, request: TranslationRequest) -> Result<()> {
        debug!(request_id = request.id, "Submitting translation request");
        self.request_tx.send(request).map_err(|e| Error::ChannelSend {
            message: e.to_string(),
        })
    }
}

fn run_worker<F, T>(
    load: F,
    request_rx: flume::Receiver<TranslationRequest>,
    event_tx: flume::Sender<AppEvent>,
) where
    F: FnOnce() -> Result<T>,
    T: Translator,
{
    info!("Loading translation model...");
    let started = Instant::now();

    let translator = match load() {
        Ok(translator) => {
            info!(elapsed_ms = started.elapsed().as_millis() as u64, "Translation model ready");
            let _ = event_tx.send(AppEvent::ModelReady);
            Ok(translator)
        }
        Err(e) => {
            error!(error = %e, "Failed to load translation model");
            let message = e.to_string();
            let _ = event_tx.send(AppEvent::ModelFailed {
                message: message.clone(),
            });
            Err(message)
        }
    };

    while let Ok(mut request) = request_rx.recv() {
        while let Ok(newer) = request_rx.try_recv() {
            debug!(skipped = request.id, next = newer.id, "Coalescing queued request");
            request = newer;
        }

        let started = Instant::now();
        let result = match &translator {
            Ok(translator) => translator.translate(&request.text, request.source, request.target),
            Err(message) => Err(Error::ModelUnavailable {
                message: message.clone(),
            }),
        };

        match &result {
            Ok(_) => info!(
                request_id = request.id,
                source = request.source.code(),
                target = request.target.code(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Translation finished"
            ),
            Err(e) => error!(request_id = request.id, error = %e, "Translation failed"),
        }

        let event = AppEvent::TranslationFinished {
            request_id: request.id,
            result,
        };
        if event_tx.send(event).is_err() {
            break;
        }
    }

    debug!("Translation worker stopped");
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::Language;
    use crate::services::translation::scripted::ScriptedTranslator;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn request(id: u64, text: &str) -> TranslationRequest {
        TranslationRequest {
            id,
            text: text.to_string(),
            source: Language::Sinhala,
            target: Language::English,
        }
    }

    #[test]
    fn reports_ready_and_answers_requests() {
        let (event_tx, event_rx) = flume::unbounded();
        let translator = ScriptedTranslator::replying("Hello");
        let calls = translator.calls();
        let worker = TranslationWorker::spawn(move || Ok(translator), event_tx).expect("spawn");

        assert!(matches!(event_rx.recv_timeout(TIMEOUT), Ok(AppEvent::ModelReady)));

        worker.submit(request(1, "ආයුබෝවන්")).expect("submit");
        match event_rx.recv_timeout(TIMEOUT) {
            Ok(AppEvent::TranslationFinished { request_id, result }) => {
                assert_eq!(request_id, 1);
                assert_eq!(result.expect("translation"), "Hello");
            }
            other => panic!("unexpected event: {other:?}"),
        }

        let calls = calls.lock().expect("lock");
        assert_eq!(
            calls.as_slice(),
            &[("ආයුබෝවන්".to_string(), Language::Sinhala, Language::English)]
        );
    }

    #[test]
    fn queued_requests_are_coalesced_to_newest() {
        let (event_tx, event_rx) = flume::unbounded();
        let (gate_tx, gate_rx) = flume::bounded::<()>(1);
        let translator = ScriptedTranslator::replying("done");
        let calls = translator.calls();

        let worker = TranslationWorker::spawn(
            move || {
                let _ = gate_rx.recv();
                Ok(translator)
            },
            event_tx,
        )
        .expect("spawn");

        for id in 1..=3 {
            worker.submit(request(id, &format!("text {id}"))).expect("submit");
        }
        gate_tx.send(()).expect("open gate");

        assert!(matches!(event_rx.recv_timeout(TIMEOUT), Ok(AppEvent::ModelReady)));
        match event_rx.recv_timeout(TIMEOUT) {
            Ok(AppEvent::TranslationFinished { request_id, .. }) => assert_eq!(request_id, 3),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(event_rx.recv_timeout(Duration::from_millis(200)).is_err());

        let calls = calls.lock().expect("lock");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "text 3");
    }

    #[test]
    fn failed_load_answers_with_model_unavailable() {
        let (event_tx, event_rx) = flume::unbounded();
        let worker = TranslationWorker::spawn(
            || -> Result<ScriptedTranslator> {
                Err(Error::ModelLoad {
                    source: rust_bert::RustBertError::IOError("weights missing".to_string()),
                })
            },
            event_tx,
        )
        .expect("spawn");

        match event_rx.recv_timeout(TIMEOUT) {
            Ok(AppEvent::ModelFailed { message }) => assert!(message.contains("weights missing")),
            other => panic!("unexpected event: {other:?}"),
        }

        worker.submit(request(7, "hello")).expect("submit");
        match event_rx.recv_timeout(TIMEOUT) {
            Ok(AppEvent::TranslationFinished { request_id, result }) => {
                assert_eq!(request_id, 7);
                assert!(matches!(result, Err(Error::ModelUnavailable { .. })));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
