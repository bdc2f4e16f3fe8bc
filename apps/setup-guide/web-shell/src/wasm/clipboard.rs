use super::*;

use js_sys::{Function, Reflect};
use web_sys::HtmlTextAreaElement;

pub(super) fn start_clipboard_write(text: String) {
    spawn_local(async move {
        let error = write_clipboard(&text).await.err();
        dispatch(PageAction::ClipboardWriteFinished { text, error });
    });
}

async fn write_clipboard(text: &str) -> Result<(), String> {
    let navigator = window()?.navigator();
    let has_clipboard = Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);
    if !has_clipboard {
        return Err("clipboard API is unavailable".to_string());
    }
    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .map(|_| ())
        .map_err(|error| describe_js_error(&error))
}

/// Copies through a hidden textarea and `document.execCommand('copy')`. The
/// textarea is removed whether or not the copy worked.
pub(super) fn run_fallback_copy(text: &str) -> PageAction {
    match fallback_copy(text) {
        Ok(copied) => PageAction::FallbackCopyFinished {
            copied,
            error: None,
        },
        Err(error) => PageAction::FallbackCopyFinished {
            copied: false,
            error: Some(error),
        },
    }
}

fn fallback_copy(text: &str) -> Result<bool, String> {
    let document = document()?;
    let body = body(&document)?;
    let textarea = document
        .create_element("textarea")
        .map_err(|_| "failed to create textarea".to_string())?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| "textarea is not HtmlTextAreaElement".to_string())?;
    textarea.set_value(text);
    let style = textarea.style();
    let _ = style.set_property("top", "0");
    let _ = style.set_property("left", "0");
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("opacity", "0");

    body.append_child(&textarea)
        .map_err(|_| "failed to append textarea".to_string())?;
    let _ = textarea.focus();
    textarea.select();

    let copied = exec_copy(&document);
    textarea.remove();
    copied
}

fn exec_copy(document: &Document) -> Result<bool, String> {
    let exec = Reflect::get(document, &JsValue::from_str("execCommand"))
        .map_err(|error| describe_js_error(&error))?;
    let exec = exec
        .dyn_into::<Function>()
        .map_err(|_| "execCommand is unavailable".to_string())?;
    let result = exec
        .call1(document, &JsValue::from_str("copy"))
        .map_err(|error| describe_js_error(&error))?;
    Ok(result.as_bool().unwrap_or(false))
}

fn describe_js_error(error: &JsValue) -> String {
    if let Some(message) = error.as_string() {
        return message;
    }
    Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{error:?}"))
}
