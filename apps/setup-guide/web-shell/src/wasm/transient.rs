use super::*;

/// Schedules the enter and exit steps of a transient element that is already
/// attached. An element without an exit time stays until dismissed.
pub(super) fn drive_lifetime(
    element: HtmlElement,
    lifetime: Lifetime,
    enter: fn(&HtmlElement),
    exit: fn(&HtmlElement),
) {
    let entering = element.clone();
    Timeout::new(lifetime.enter_after_ms, move || enter(&entering)).forget();

    let Some(exit_after_ms) = lifetime.exit_after_ms else {
        return;
    };
    let transition_ms = lifetime.exit_transition_ms;
    Timeout::new(exit_after_ms, move || {
        exit(&element);
        Timeout::new(transition_ms, move || detach(&element)).forget();
    })
    .forget();
}

pub(super) fn show_notification(notification: &Notification) -> Result<(), String> {
    let config = current_config();
    let document = document()?;
    let body = body(&document)?;

    let banner = create_html_element(&document, "div")?;
    banner.set_class_name(notification.class_name());
    let icon = create_html_element(&document, "i")?;
    icon.set_class_name(notification.icon_class());
    let label = create_html_element(&document, "span")?;
    label.set_text_content(Some(notification.message()));
    let _ = banner.append_child(&icon);
    let _ = banner.append_child(&label);

    let declarations: &[(&str, &str)] = match notification {
        Notification::Success { .. } => &SUCCESS_NOTIFICATION_STYLE,
        Notification::CopySuccess => &COPY_NOTIFICATION_STYLE,
    };
    apply_styles(&banner, declarations)?;
    set_style(&banner, "transform", NOTIFICATION_HIDDEN_TRANSFORM)?;
    set_style(
        &banner,
        "transition",
        &format!("transform {}ms ease", config.transition_ms),
    )?;

    body.append_child(&banner)
        .map_err(|_| "failed to append notification".to_string())?;
    drive_lifetime(
        banner,
        notification.lifetime(&config),
        |banner| {
            let _ = set_style(banner, "transform", NOTIFICATION_SHOWN_TRANSFORM);
        },
        |banner| {
            let _ = set_style(banner, "transform", NOTIFICATION_HIDDEN_TRANSFORM);
        },
    );
    Ok(())
}

pub(super) fn show_completion_modal() -> Result<(), String> {
    let config = current_config();
    let document = document()?;
    let body = body(&document)?;

    if let Some(existing) = document.get_element_by_id(COMPLETION_MODAL_ID) {
        detach(&existing);
    }

    let modal = create_html_element(&document, "div")?;
    modal.set_id(COMPLETION_MODAL_ID);
    modal.set_class_name("completion-modal");
    apply_styles(&modal, &COMPLETION_MODAL_STYLE)?;
    set_style(&modal, "opacity", "0")?;
    set_style(
        &modal,
        "transition",
        &format!("opacity {}ms ease", config.transition_ms),
    )?;

    let content = create_html_element(&document, "div")?;
    content.set_class_name("modal-content");
    content.set_inner_html(COMPLETION_MODAL_BODY_HTML);
    apply_styles(&content, &COMPLETION_CONTENT_STYLE)?;
    set_style(&content, "transform", MODAL_CONTENT_HIDDEN_TRANSFORM)?;
    set_style(
        &content,
        "transition",
        &format!("transform {}ms ease", config.transition_ms),
    )?;

    let footer = create_html_element(&document, "div")?;
    footer.set_class_name("modal-footer");
    let close_button = create_html_element(&document, "button")?;
    close_button.set_class_name("modal-btn");
    let _ = close_button.set_attribute("type", "button");
    close_button.set_inner_html("<i class=\"fas fa-times\"></i> Close");
    COMPLETION_CLOSE_HANDLER.with(|slot| {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            dispatch(PageAction::CloseCompletionModal);
        }));
        let _ = close_button
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
    let _ = footer.append_child(&close_button);
    let _ = content.append_child(&footer);
    let _ = modal.append_child(&content);

    body.append_child(&modal)
        .map_err(|_| "failed to append completion modal".to_string())?;
    drive_lifetime(
        modal,
        completion_modal_lifetime(&config),
        |modal| {
            let _ = set_style(modal, "opacity", "1");
            if let Some(content) = modal_content(modal) {
                let _ = set_style(&content, "transform", MODAL_CONTENT_SHOWN_TRANSFORM);
            }
        },
        |_| {},
    );
    Ok(())
}

pub(super) fn dismiss_completion_modal() -> Result<(), String> {
    let document = document()?;
    let Some(modal) = query_one(&document, COMPLETION_MODAL_SELECTOR)? else {
        return Ok(());
    };
    set_style(&modal, "opacity", "0")?;
    if let Some(content) = modal_content(&modal) {
        set_style(&content, "transform", MODAL_CONTENT_HIDDEN_TRANSFORM)?;
    }
    Timeout::new(current_config().transition_ms, move || detach(&modal)).forget();
    Ok(())
}

fn modal_content(modal: &HtmlElement) -> Option<HtmlElement> {
    modal
        .query_selector(MODAL_CONTENT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|content| content.dyn_into::<HtmlElement>().ok())
}

pub(super) fn ensure_confetti_keyframes(document: &Document) -> Result<(), String> {
    if document.get_element_by_id(CONFETTI_STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| "document head is unavailable".to_string())?;
    let style = document
        .create_element("style")
        .map_err(|_| "failed to create keyframes style".to_string())?;
    style.set_id(CONFETTI_STYLE_ID);
    style.set_text_content(Some(setup_guide_core::CONFETTI_KEYFRAMES));
    head.append_child(&style)
        .map_err(|_| "failed to append keyframes style".to_string())?;
    Ok(())
}

pub(super) fn launch_confetti(count: usize) -> Result<(), String> {
    let config = current_config();
    let window = window()?;
    let document = document()?;
    let body = body(&document)?;
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0);

    let particles = CONFETTI_RNG.with(|slot| {
        let mut slot = slot.borrow_mut();
        let rng = slot.get_or_insert_with(seeded_rng);
        confetti::burst(rng, count, viewport_width)
    });

    let lifetime = confetti_lifetime(&config);
    for particle in particles {
        let piece = create_html_element(&document, "div")?;
        piece
            .style()
            .set_css_text(&particle.css_text(config.confetti_lifetime_ms));
        body.append_child(&piece)
            .map_err(|_| "failed to append confetti".to_string())?;
        drive_lifetime(piece, lifetime, |_| {}, |_| {});
    }
    Ok(())
}

fn seeded_rng() -> SmallRng {
    let entropy = js_sys::Math::random() * u64::MAX as f64;
    let clock = js_sys::Date::now();
    SmallRng::seed_from_u64((entropy as u64) ^ (clock as u64))
}
