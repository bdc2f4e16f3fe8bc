#[cfg(any(target_arch = "wasm32", test))]
mod selectors;
#[cfg(target_arch = "wasm32")]
mod wasm_constants;
#[cfg(target_arch = "wasm32")]
mod wasm_state;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use gloo_timers::callback::Timeout;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use setup_guide_core::confetti;
    use setup_guide_core::{
        ButtonTarget, GuideConfig, KeyCommand, Lifetime, LogLevel, LogLine, ModalPanels,
        NavDirection, Notification, PageAction, PageController, PageEffect, ScrollSnapshot,
        SectionSpan, completion_modal_lifetime, confetti_lifetime, nav_button_targets,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::{
        Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
        IntersectionObserverEntry, IntersectionObserverInit, Window,
    };

    use crate::selectors::{attribute_selector, method_button_index, scoped_attribute_selector};
    use crate::wasm_constants::*;
    use crate::wasm_state::ShellDiagnostics;

    mod clipboard;
    mod dom;
    mod effects;
    mod lifecycle;
    mod listeners;
    mod transient;

    use clipboard::*;
    use dom::*;
    use effects::*;
    use lifecycle::*;
    use listeners::*;
    use transient::*;

    type EventHandler = Closure<dyn FnMut(web_sys::Event)>;
    type KeyboardHandler = Closure<dyn FnMut(web_sys::KeyboardEvent)>;
    type TouchHandler = Closure<dyn FnMut(web_sys::TouchEvent)>;
    type RevealHandler = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    thread_local! {
        static CONTROLLER: RefCell<PageController> = RefCell::new(PageController::default());
        static DIAGNOSTICS: RefCell<ShellDiagnostics> = RefCell::new(ShellDiagnostics::default());
        static CONFETTI_RNG: RefCell<Option<SmallRng>> = const { RefCell::new(None) };
        static SCROLL_HANDLER: RefCell<Option<EventHandler>> = const { RefCell::new(None) };
        static GLOBAL_SHORTCUT_HANDLER: RefCell<Option<KeyboardHandler>> = const { RefCell::new(None) };
        static MODAL_ESCAPE_HANDLER: RefCell<Option<KeyboardHandler>> = const { RefCell::new(None) };
        static DOCUMENT_CLICK_HANDLER: RefCell<Option<EventHandler>> = const { RefCell::new(None) };
        static TOUCH_START_HANDLER: RefCell<Option<TouchHandler>> = const { RefCell::new(None) };
        static TOUCH_END_HANDLER: RefCell<Option<TouchHandler>> = const { RefCell::new(None) };
        static STEP_CARD_HANDLERS: RefCell<Vec<EventHandler>> = const { RefCell::new(Vec::new()) };
        static METHOD_STEP_HANDLERS: RefCell<Vec<EventHandler>> = const { RefCell::new(Vec::new()) };
        static COMPLETION_CLOSE_HANDLER: RefCell<Option<EventHandler>> = const { RefCell::new(None) };
        static REVEAL_OBSERVER: RefCell<Option<(IntersectionObserver, RevealHandler)>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        set_boot_phase("booting");
        if document_is_loading() {
            let on_ready = Closure::once_into_js(run_boot);
            match web_sys::window() {
                Some(window) => {
                    let _ = window.add_event_listener_with_callback(
                        "DOMContentLoaded",
                        on_ready.unchecked_ref(),
                    );
                }
                None => set_boot_error("window is unavailable"),
            }
            return;
        }
        run_boot();
    }

    #[wasm_bindgen(js_name = guideStateJson)]
    pub fn guide_state_json() -> String {
        let controller = CONTROLLER.with(|controller| serde_json::to_value(&*controller.borrow()));
        let shell = DIAGNOSTICS.with(|state| serde_json::to_value(&*state.borrow()));
        match (controller, shell) {
            (Ok(controller), Ok(shell)) => {
                serde_json::json!({ "controller": controller, "shell": shell }).to_string()
            }
            _ => "{\"phase\":\"error\",\"detail\":\"state serialization failed\"}".to_string(),
        }
    }

    #[wasm_bindgen(js_name = scrollToSection)]
    pub fn scroll_to_section(section_id: String) {
        dispatch(PageAction::ScrollToSection { id: section_id });
    }

    #[wasm_bindgen(js_name = navigateSections)]
    pub fn navigate_sections(direction: String) {
        match direction.parse::<NavDirection>() {
            Ok(direction) => dispatch(PageAction::Navigate {
                direction,
                snapshot: measure_sections(),
            }),
            Err(error) => log_line(&LogLine::error(error.to_string())),
        }
    }

    #[wasm_bindgen(js_name = selectMethod)]
    pub fn select_method(method: u32) {
        dispatch(PageAction::SelectMethod { method });
    }

    #[wasm_bindgen(js_name = completeSetup)]
    pub fn complete_setup() {
        dispatch(PageAction::CompleteSetup);
    }

    #[wasm_bindgen(js_name = closeModal)]
    pub fn close_modal() {
        dispatch(PageAction::CloseCompletionModal);
    }

    #[wasm_bindgen(js_name = addCelebrationAnimation)]
    pub fn add_celebration_animation() {
        dispatch(PageAction::LaunchCelebration);
    }

    #[wasm_bindgen(js_name = showImageModal)]
    pub fn show_image_modal(image_src: String, title: String) {
        dispatch(PageAction::ShowImageModal {
            src: image_src,
            title,
        });
    }

    #[wasm_bindgen(js_name = closeImageModal)]
    pub fn close_image_modal() {
        dispatch(PageAction::CloseImageModal);
    }

    #[wasm_bindgen(js_name = copyCommand)]
    pub fn copy_command(command: String) {
        dispatch(PageAction::CopyCommand { text: command });
    }

    #[wasm_bindgen(js_name = copyModalCommand)]
    pub fn copy_modal_command() {
        let text = document()
            .ok()
            .and_then(|document| document.get_element_by_id(MODAL_COMMAND_TEXT_ID))
            .and_then(|element| element.text_content());
        dispatch(PageAction::CopyModalCommand { text });
    }

    pub(super) fn dispatch(action: PageAction) {
        dispatch_for_event(action, None);
    }

    /// Feeds one action through the controller, then runs its effects. The
    /// controller borrow ends before any effect runs, so effects may
    /// dispatch again.
    pub(super) fn dispatch_for_event(action: PageAction, event: Option<&web_sys::Event>) {
        let effects = CONTROLLER.with(|controller| controller.borrow_mut().apply(action));
        DIAGNOSTICS.with(|state| state.borrow_mut().dispatched_actions += 1);
        for effect in effects {
            if let Err(error) = run_effect(effect, event) {
                record_effect_failure(&error);
            }
        }
    }

    pub(super) fn current_config() -> GuideConfig {
        CONTROLLER.with(|controller| controller.borrow().config().clone())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::guide_state_json;

#[cfg(not(target_arch = "wasm32"))]
pub fn guide_state_json() -> String {
    "{\"phase\":\"native\",\"detail\":\"setup guide state only available on wasm\"}".to_string()
}
