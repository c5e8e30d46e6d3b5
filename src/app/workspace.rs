//! Workspace - Main Window with Layout and Event Pump
//!
//! The workspace is the root view: title bar, the two panes with their
//! clipboard buttons, the swap and translate buttons, and the status bar.
//! It also runs the event pump that feeds worker results back into the
//! translator state and the output pane.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, ElementId, FontWeight, IntoElement,
    KeyUpEvent, ParentElement, Render, SharedString, Styled, Subscription, Window,
};
use gpui_component::{h_flex, v_flex};
use tracing::error;

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::status_bar::StatusBar;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::text_pane::TextPane;
use crate::constants::CONTENT_PADDING_X;
use crate::error::Error;
use crate::eventing::AppEvent;
use crate::services::TranslationWorker;
use crate::state::{PaneId, PaneUpdate, TranslateTrigger, TranslatorState};
use crate::theme::{Palette, Typography};

/// Main workspace containing the translator layout
pub struct Workspace {
    entities: AppEntities,
    input: TextPane,
    output: TextPane,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let input = TextPane::new(window, cx);
        let output = TextPane::new(window, cx);

        // Re-render on any state change (labels, theme, status)
        let subscriptions = vec![cx.observe(&entities.translator, |_this, _, cx| cx.notify())];

        // Start event pump
        Self::start_event_pump(event_rx, window, cx);

        input.focus(window, cx);

        Self {
            entities,
            input,
            output,
            _subscriptions: subscriptions,
        }
    }

    /// Start the event pump that applies worker events to the window
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        window: &Window,
        cx: &mut Context<Self>,
    ) {
        cx.spawn_in(window, async move |this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let handled =
                    this.update_in(cx, |this, window, cx| this.handle_event(event, window, cx));
                if handled.is_err() {
                    break;
                }
            }
        })
        .detach();
    }

    fn handle_event(&mut self, event: AppEvent, window: &mut Window, cx: &mut Context<Self>) {
        let update = self.entities.translator.update(cx, |state, cx| {
            let update = dispatch_event(event, state);
            cx.notify();
            update
        });
        if let Some(update) = update {
            self.apply_update(update, window, cx);
        }
    }

    fn pane(&self, pane: PaneId) -> &TextPane {
        match pane {
            PaneId::Input => &self.input,
            PaneId::Output => &self.output,
        }
    }

    fn apply_update(&self, update: PaneUpdate, window: &mut Window, cx: &mut App) {
        self.pane(update.pane).set_text(update.text, window, cx);
    }

    /// Submit the input pane to the worker, if it holds any text
    fn request_translation(&mut self, trigger: TranslateTrigger, cx: &mut Context<Self>) {
        let text = self.input.text(cx);
        let request = self.entities.translator.update(cx, |state, cx| {
            let request = state.begin_translation(&text, trigger);
            if request.is_some() {
                cx.notify();
            }
            request
        });
        let Some(request) = request else {
            return;
        };

        let submitted = match cx.try_global::<TranslationWorker>() {
            Some(worker) => worker.submit(request),
            None => Err(Error::ModelUnavailable {
                message: "translation worker is not running".to_string(),
            }),
        };

        if let Err(e) = submitted {
            error!(error = %e, "Failed to submit translation request");
            self.entities.translator.update(cx, |state, cx| {
                state.abandon_translation(&e);
                cx.notify();
            });
        }
    }

    fn swap_languages(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let updates = self.entities.translator.update(cx, |state, cx| {
            let updates = state.toggle_direction();
            cx.notify();
            updates
        });
        for update in updates {
            self.apply_update(update, window, cx);
        }
    }

    fn toggle_theme(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let theme = self.entities.translator.update(cx, |state, cx| {
            state.toggle_theme();
            cx.notify();
            state.theme()
        });
        theme.apply(Some(window), cx);
    }

    fn copy(&mut self, pane: PaneId, window: &mut Window, cx: &mut Context<Self>) {
        let snapshot = self.pane(pane).snapshot(window, cx);
        self.entities.translator.update(cx, |state, cx| {
            let clipboard: &mut App = cx;
            let _ = state.copy(pane, &snapshot, clipboard);
            cx.notify();
        });
    }

    fn cut(&mut self, pane: PaneId, window: &mut Window, cx: &mut Context<Self>) {
        let snapshot = self.pane(pane).snapshot(window, cx);
        let edit = self.entities.translator.update(cx, |state, cx| {
            let clipboard: &mut App = cx;
            let edit = state.cut(pane, &snapshot, clipboard).ok();
            cx.notify();
            edit
        });
        if let Some(edit) = edit {
            self.pane(pane).apply(edit, window, cx);
        }
    }

    fn paste(&mut self, pane: PaneId, window: &mut Window, cx: &mut Context<Self>) {
        let snapshot = self.pane(pane).snapshot(window, cx);
        let edit = self.entities.translator.update(cx, |state, cx| {
            let clipboard: &mut App = cx;
            state.paste(pane, &snapshot, clipboard)
        });
        if let Some(edit) = edit {
            self.pane(pane).apply(edit, window, cx);
        }
    }

    fn render_label(&self, label: String, palette: &Palette) -> impl IntoElement {
        div()
            .w_full()
            .px(px(CONTENT_PADDING_X))
            .pt_2()
            .bg(palette.label_bg)
            .text_color(palette.label_text)
            .text_size(px(Typography::LABEL))
            .font_weight(FontWeight::BOLD)
            .child(label)
    }

    fn render_clipboard_buttons(
        &self,
        pane: PaneId,
        palette: &Palette,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let button_id = |action: &str| -> ElementId {
            ElementId::Name(SharedString::from(format!("{}-{action}", pane.name())))
        };

        h_flex()
            .w_full()
            .justify_center()
            .gap_2()
            .py_1()
            .child(
                Button::new(button_id("copy"), "Copy")
                    .colors(palette.button)
                    .size(ButtonSize::Small)
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.copy(pane, window, cx)
                    })),
            )
            .child(
                Button::new(button_id("paste"), "Paste")
                    .colors(palette.button)
                    .size(ButtonSize::Small)
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.paste(pane, window, cx)
                    })),
            )
            .child(
                Button::new(button_id("cut"), "Cut")
                    .colors(palette.button)
                    .size(ButtonSize::Small)
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.cut(pane, window, cx)
                    })),
            )
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.entities.translator.read(cx);
        let theme = state.theme();
        let palette = state.palette();
        let input_label = state.input_label();
        let output_label = state.output_label();
        let translate_label = state.translate_label();
        let translate_enabled = state.can_click_translate();
        let status = state.status().cloned();

        v_flex()
            .size_full()
            .bg(palette.window_bg)
            .child(Header::new(
                theme,
                cx.listener(|this, _: &ClickEvent, window, cx| this.toggle_theme(window, cx)),
            ))
            // Input pane; every key release in it triggers a translation
            .child(self.render_label(input_label, &palette))
            .child(
                div()
                    .w_full()
                    .px(px(CONTENT_PADDING_X))
                    .pt_1()
                    .on_key_up(cx.listener(|this, _: &KeyUpEvent, _, cx| {
                        this.request_translation(TranslateTrigger::KeyRelease, cx)
                    }))
                    .child(self.input.render(&palette)),
            )
            .child(self.render_clipboard_buttons(PaneId::Input, &palette, cx))
            .child(
                h_flex().w_full().justify_center().py_1().child(
                    Button::new("swap-languages", "Swap Languages")
                        .colors(palette.button)
                        .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                            this.swap_languages(window, cx)
                        })),
                ),
            )
            // Output pane
            .child(self.render_label(output_label, &palette))
            .child(
                div()
                    .w_full()
                    .px(px(CONTENT_PADDING_X))
                    .pt_1()
                    .child(self.output.render(&palette)),
            )
            .child(self.render_clipboard_buttons(PaneId::Output, &palette, cx))
            .child(
                h_flex().w_full().justify_center().py_1().child(
                    Button::new("translate", translate_label)
                        .colors(palette.button)
                        .disabled(!translate_enabled)
                        .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                            this.request_translation(TranslateTrigger::Button, cx)
                        })),
                ),
            )
            .child(div().flex_1())
            .child(StatusBar::new(status, palette))
    }
}

/// Dispatch a worker event to the translator state
fn dispatch_event(event: AppEvent, state: &mut TranslatorState) -> Option<PaneUpdate> {
    match event {
        AppEvent::ModelReady => {
            state.set_model_ready();
            None
        }
        AppEvent::ModelFailed { message } => {
            state.set_model_failed(message);
            None
        }
        AppEvent::TranslationFinished { request_id, result } => {
            state.finish_translation(request_id, result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModelStatus;

    #[test]
    fn dispatch_applies_pending_result() {
        let mut state = TranslatorState::new();
        let request = state
            .begin_translation("ආයුබෝවන්", TranslateTrigger::KeyRelease)
            .expect("request");

        assert_eq!(dispatch_event(AppEvent::ModelReady, &mut state), None);
        let update = dispatch_event(
            AppEvent::TranslationFinished {
                request_id: request.id,
                result: Ok("Hello".to_string()),
            },
            &mut state,
        );

        assert_eq!(state.model_status(), &ModelStatus::Ready);
        assert_eq!(
            update,
            Some(PaneUpdate {
                pane: PaneId::Output,
                text: "Hello".to_string(),
            })
        );
        assert!(!state.is_translating());
    }

    #[test]
    fn dispatch_drops_stale_result() {
        let mut state = TranslatorState::new();
        let stale = state
            .begin_translation("first", TranslateTrigger::KeyRelease)
            .expect("first");
        state
            .begin_translation("second", TranslateTrigger::KeyRelease)
            .expect("second");

        let update = dispatch_event(
            AppEvent::TranslationFinished {
                request_id: stale.id,
                result: Ok("one".to_string()),
            },
            &mut state,
        );

        assert_eq!(update, None);
        assert!(state.is_translating());
    }

    #[test]
    fn dispatch_records_model_failure() {
        let mut state = TranslatorState::new();
        let update = dispatch_event(
            AppEvent::ModelFailed {
                message: "offline".to_string(),
            },
            &mut state,
        );
        assert_eq!(update, None);
        assert_eq!(
            state.model_status(),
            &ModelStatus::Failed("offline".to_string())
        );
    }
}
