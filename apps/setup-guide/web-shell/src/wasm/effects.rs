use super::*;

pub(super) fn run_effect(effect: PageEffect, event: Option<&web_sys::Event>) -> Result<(), String> {
    match effect {
        PageEffect::Log(line) => {
            log_line(&line);
            Ok(())
        }
        PageEffect::PreventDefault => {
            if let Some(event) = event {
                event.prevent_default();
            }
            Ok(())
        }
        PageEffect::SetActiveNav(section_id) => set_active_nav(section_id.as_deref()),
        PageEffect::ScrollTo { section_id } => scroll_section_into_view(&section_id),
        PageEffect::Schedule { delay_ms, action } => {
            Timeout::new(delay_ms, move || dispatch(action)).forget();
            Ok(())
        }
        PageEffect::PulseStepCard { step } => {
            style_step_card(&step, STEP_PULSE_TRANSFORM, STEP_PULSE_SHADOW)
        }
        PageEffect::RestoreStepCard { step } => {
            style_step_card(&step, STEP_REST_TRANSFORM, STEP_REST_SHADOW)
        }
        PageEffect::ResetMethodButtons => reset_method_buttons(),
        PageEffect::SetButtonLoading { target, loading } => {
            let button = button_for(&document()?, target)?;
            set_button_loading(&button, loading);
            Ok(())
        }
        PageEffect::ShowNotification(notification) => show_notification(&notification),
        PageEffect::ShowCompletionModal => show_completion_modal(),
        PageEffect::DismissCompletionModal => dismiss_completion_modal(),
        PageEffect::LaunchConfetti { count } => launch_confetti(count),
        PageEffect::OpenImageModal { src, title, panels } => {
            open_image_modal(&src, &title, &panels)
        }
        PageEffect::HideImageModal => hide_image_modal(),
        PageEffect::InstallEscapeListener => install_escape_listener(),
        PageEffect::RemoveEscapeListener => remove_escape_listener(),
        PageEffect::WriteClipboard { text } => {
            start_clipboard_write(text);
            Ok(())
        }
        PageEffect::FallbackCopy { text } => {
            dispatch(run_fallback_copy(&text));
            Ok(())
        }
    }
}

pub(super) fn open_image_modal(src: &str, title: &str, panels: &ModalPanels) -> Result<(), String> {
    let document = document()?;
    let modal = html_element_by_id(&document, IMAGE_MODAL_ID)?;
    let image = document
        .get_element_by_id(MODAL_IMAGE_ID)
        .ok_or_else(|| format!("missing #{MODAL_IMAGE_ID}"))?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| format!("#{MODAL_IMAGE_ID} is not an image"))?;
    let title_element = html_element_by_id(&document, MODAL_TITLE_ID)?;
    let command_panel = html_element_by_id(&document, MODAL_COMMAND_ID)?;
    let command_text = html_element_by_id(&document, MODAL_COMMAND_TEXT_ID)?;
    let note_panel = html_element_by_id(&document, MODAL_NOTE_ID)?;
    let note_text = html_element_by_id(&document, MODAL_NOTE_TEXT_ID)?;

    image.set_src(src);
    title_element.set_text_content(Some(title));

    match &panels.command {
        Some(command) => {
            command_text.set_text_content(Some(command));
            set_style(&command_panel, "display", "flex")?;
        }
        None => set_style(&command_panel, "display", "none")?,
    }
    match &panels.note {
        Some(note) => {
            note_text.set_text_content(Some(note));
            set_style(&note_panel, "display", "flex")?;
        }
        None => set_style(&note_panel, "display", "none")?,
    }

    modal
        .class_list()
        .add_1(ACTIVE_CLASS)
        .map_err(|_| "failed to activate image modal".to_string())?;
    set_style(&body(&document)?, "overflow", "hidden")
}

pub(super) fn hide_image_modal() -> Result<(), String> {
    let document = document()?;
    let modal = html_element_by_id(&document, IMAGE_MODAL_ID)?;
    let _ = modal.class_list().remove_1(ACTIVE_CLASS);
    set_style(&body(&document)?, "overflow", "auto")
}

pub(super) fn record_effect_failure(error: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.effect_failures += 1;
        state.last_error = Some(error.to_string());
    });
    log_line(&LogLine::error(error));
}
