use super::*;

use js_sys::{JSON, Reflect};

pub(super) fn run_boot() {
    match boot() {
        Ok(()) => {
            set_boot_phase("ready");
            dispatch(PageAction::Initialized);
        }
        Err(error) => set_boot_error(&error),
    }
}

fn boot() -> Result<(), String> {
    let document = document()?;

    match config_override()? {
        Some(Ok(config)) => {
            CONTROLLER.with(|controller| *controller.borrow_mut() = PageController::new(config));
        }
        Some(Err(error)) => {
            log_line(&LogLine::error(format!(
                "ignoring {CONFIG_GLOBAL_KEY}: {error}"
            )));
        }
        None => {}
    }

    ensure_confetti_keyframes(&document)?;
    install_page_listeners(&document)?;
    let observed = install_reveal_observer(&document)?;
    DIAGNOSTICS.with(|state| state.borrow_mut().sections_observed = observed);
    Ok(())
}

/// Reads `window.__SETUP_GUIDE_CONFIG__`, which may be a JSON string or a
/// plain object. Absent or `null` keeps the defaults.
fn config_override() -> Result<Option<Result<GuideConfig, String>>, String> {
    let window = window()?;
    let raw = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL_KEY))
        .map_err(|_| format!("failed to read {CONFIG_GLOBAL_KEY}"))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(None);
    }

    let json = match raw.as_string() {
        Some(json) => json,
        None => match JSON::stringify(&raw).ok().and_then(|json| json.as_string()) {
            Some(json) => json,
            None => return Ok(Some(Err("value is not serializable".to_string()))),
        },
    };
    Ok(Some(
        GuideConfig::from_json(&json).map_err(|error| error.to_string()),
    ))
}

/// Fades sections in the first time they scroll into view.
fn install_reveal_observer(document: &Document) -> Result<usize, String> {
    let already_installed = REVEAL_OBSERVER.with(|slot| slot.borrow().is_some());
    if already_installed {
        return Ok(DIAGNOSTICS.with(|state| state.borrow().sections_observed));
    }

    let config = current_config();
    let callback = RevealHandler::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Ok(section) = target.clone().dyn_into::<HtmlElement>() {
                    let _ = set_style(&section, "opacity", "1");
                    let _ = set_style(&section, "transform", "translateY(0)");
                }
                observer.unobserve(&target);
            }
        },
    ));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| "failed to create reveal observer".to_string())?;

    let sections = query_all(document, SECTION_SELECTOR)?;
    for section in &sections {
        observer.observe(section);
    }
    REVEAL_OBSERVER.with(|slot| *slot.borrow_mut() = Some((observer, callback)));
    Ok(sections.len())
}

pub(super) fn set_boot_phase(phase: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = phase.to_string();
        if phase != "error" {
            state.last_error = None;
        }
    });
}

pub(super) fn set_boot_error(message: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = "error".to_string();
        state.last_error = Some(message.to_string());
    });
    log_line(&LogLine::error(format!("setup guide failed to start: {message}")));
}
