use super::*;

pub(super) fn install_page_listeners(document: &Document) -> Result<(), String> {
    let window = window()?;
    install_scroll_listener(&window)?;
    install_shortcut_listener(document)?;
    install_document_click_listener(document)?;
    install_touch_listeners(document)?;
    install_step_card_listeners(document)?;
    install_method_step_hover(document)?;
    Ok(())
}

fn install_scroll_listener(window: &Window) -> Result<(), String> {
    let already_installed = SCROLL_HANDLER.with(|slot| slot.borrow().is_some());
    if already_installed {
        return Ok(());
    }
    SCROLL_HANDLER.with(|slot| {
        let callback = EventHandler::wrap(Box::new(move |_event: web_sys::Event| {
            let now_ms = js_sys::Date::now();
            let accepted =
                CONTROLLER.with(|controller| controller.borrow().accepts_scroll_at(now_ms));
            if !accepted {
                return;
            }
            dispatch(PageAction::Scrolled {
                now_ms,
                snapshot: measure_sections(),
            });
        }));
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|_| "failed to add scroll listener".to_string())?;
        *slot.borrow_mut() = Some(callback);
        Ok(())
    })
}

fn install_shortcut_listener(document: &Document) -> Result<(), String> {
    let already_installed = GLOBAL_SHORTCUT_HANDLER.with(|slot| slot.borrow().is_some());
    if already_installed {
        return Ok(());
    }
    GLOBAL_SHORTCUT_HANDLER.with(|slot| {
        let callback = KeyboardHandler::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            let key = event.key();
            if KeyCommand::from_key(&key).is_none() {
                return;
            }
            let event: &web_sys::Event = &event;
            dispatch_for_event(
                PageAction::KeyDown {
                    key,
                    snapshot: measure_sections(),
                },
                Some(event),
            );
        }));
        document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .map_err(|_| "failed to add keydown listener".to_string())?;
        *slot.borrow_mut() = Some(callback);
        Ok(())
    })
}

/// Separate from the page shortcuts: only present while the image modal is
/// open.
pub(super) fn install_escape_listener() -> Result<(), String> {
    let document = document()?;
    MODAL_ESCAPE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return Ok(());
        }
        let callback = KeyboardHandler::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            dispatch(PageAction::ModalKeyDown { key: event.key() });
        }));
        document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .map_err(|_| "failed to add escape listener".to_string())?;
        *slot.borrow_mut() = Some(callback);
        Ok(())
    })
}

pub(super) fn remove_escape_listener() -> Result<(), String> {
    let document = document()?;
    let Some(callback) = MODAL_ESCAPE_HANDLER.with(|slot| slot.borrow_mut().take()) else {
        return Ok(());
    };
    let removed = document
        .remove_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        .map_err(|_| "failed to remove escape listener".to_string());
    // Removal usually happens from inside this same callback.
    Timeout::new(0, move || drop(callback)).forget();
    removed
}

fn install_document_click_listener(document: &Document) -> Result<(), String> {
    let already_installed = DOCUMENT_CLICK_HANDLER.with(|slot| slot.borrow().is_some());
    if already_installed {
        return Ok(());
    }
    DOCUMENT_CLICK_HANDLER.with(|slot| {
        let callback = EventHandler::wrap(Box::new(move |event: web_sys::Event| {
            let on_image_modal_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .is_some_and(|target| target.id() == IMAGE_MODAL_ID);
            dispatch(PageAction::DocumentClicked {
                on_image_modal_backdrop,
            });
        }));
        document
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|_| "failed to add click listener".to_string())?;
        *slot.borrow_mut() = Some(callback);
        Ok(())
    })
}

fn first_changed_touch_y(event: &web_sys::TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| f64::from(touch.screen_y()))
}

fn install_touch_listeners(document: &Document) -> Result<(), String> {
    let already_installed = TOUCH_START_HANDLER.with(|slot| slot.borrow().is_some());
    if already_installed {
        return Ok(());
    }

    let on_start = TouchHandler::wrap(Box::new(move |event: web_sys::TouchEvent| {
        if let Some(screen_y) = first_changed_touch_y(&event) {
            dispatch(PageAction::TouchStarted { screen_y });
        }
    }));
    let on_end = TouchHandler::wrap(Box::new(move |event: web_sys::TouchEvent| {
        if let Some(screen_y) = first_changed_touch_y(&event) {
            dispatch(PageAction::TouchEnded {
                screen_y,
                snapshot: measure_sections(),
            });
        }
    }));

    document
        .add_event_listener_with_callback("touchstart", on_start.as_ref().unchecked_ref())
        .map_err(|_| "failed to add touchstart listener".to_string())?;
    document
        .add_event_listener_with_callback("touchend", on_end.as_ref().unchecked_ref())
        .map_err(|_| "failed to add touchend listener".to_string())?;
    TOUCH_START_HANDLER.with(|slot| *slot.borrow_mut() = Some(on_start));
    TOUCH_END_HANDLER.with(|slot| *slot.borrow_mut() = Some(on_end));
    Ok(())
}

fn install_step_card_listeners(document: &Document) -> Result<(), String> {
    let already_installed = STEP_CARD_HANDLERS.with(|slot| !slot.borrow().is_empty());
    if already_installed {
        return Ok(());
    }
    let mut handlers = Vec::new();
    for card in query_all(document, STEP_CARD_SELECTOR)? {
        let Some(step) = card.get_attribute(STEP_ATTRIBUTE) else {
            continue;
        };
        let callback = EventHandler::wrap(Box::new(move |_event: web_sys::Event| {
            dispatch(PageAction::StepCardClicked { step: step.clone() });
        }));
        card.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|_| "failed to add step card listener".to_string())?;
        handlers.push(callback);
    }
    STEP_CARD_HANDLERS.with(|slot| *slot.borrow_mut() = handlers);
    Ok(())
}

/// Hover styling on method steps. Bypasses the controller.
fn install_method_step_hover(document: &Document) -> Result<(), String> {
    let already_installed = METHOD_STEP_HANDLERS.with(|slot| !slot.borrow().is_empty());
    if already_installed {
        return Ok(());
    }
    let mut handlers = Vec::new();
    for step in query_all(document, METHOD_STEP_SELECTOR)? {
        let Ok(step) = step.dyn_into::<HtmlElement>() else {
            continue;
        };
        for (event_name, transform) in [
            ("mouseenter", METHOD_STEP_HOVER_TRANSFORM),
            ("mouseleave", METHOD_STEP_REST_TRANSFORM),
        ] {
            let target = step.clone();
            let callback = EventHandler::wrap(Box::new(move |_event: web_sys::Event| {
                let _ = set_style(&target, "transform", transform);
            }));
            step.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
                .map_err(|_| format!("failed to add {event_name} listener"))?;
            handlers.push(callback);
        }
    }
    METHOD_STEP_HANDLERS.with(|slot| *slot.borrow_mut() = handlers);
    Ok(())
}
