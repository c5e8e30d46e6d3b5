//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    px, size, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{APP_TITLE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::domain::AppConfig;
use crate::eventing::AppEvent;
use crate::services::{M2M100Translator, TranslationWorker};
use crate::theme::ThemeMode;

/// Run the translator application
pub fn run_app(config: AppConfig) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);
            ThemeMode::default().apply(None, cx);

            // Quit the app when the window is closed
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            let entities = AppEntities::init(cx);

            // Create event channel for worker -> UI communication
            let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

            // Start the translation worker; the model loads in the background
            let device = config.model.device;
            info!(device = ?device, "Starting translation worker");
            match TranslationWorker::spawn(move || M2M100Translator::load(device), event_tx) {
                Ok(worker) => cx.set_global(worker),
                Err(e) => {
                    error!(error = %e, "Failed to start translation worker");
                    entities.translator.update(cx, |state, cx| {
                        state.set_model_failed(e.to_string());
                        cx.notify();
                    });
                }
            }

            // Create the fixed-size main window
            let window_size = size(px(WINDOW_WIDTH), px(WINDOW_HEIGHT));
            let bounds = Bounds::centered(None, window_size, cx);
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from(APP_TITLE)),
                    ..Default::default()
                }),
                is_resizable: false,
                window_min_size: Some(window_size),
                ..Default::default()
            };

            // gpui-component inputs need a Root as the window's first layer
            let opened = cx.open_window(window_options, |window, cx| {
                let workspace =
                    cx.new(|cx| Workspace::new(entities.clone(), event_rx, window, cx));
                cx.new(|cx| Root::new(workspace, window, cx))
            });
            if let Err(e) = opened {
                error!(error = %e, "Failed to open main window");
                cx.quit();
                return;
            }

            cx.activate(true);
        });
}
