use super::*;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub(super) fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "window is unavailable".to_string())
}

pub(super) fn document() -> Result<Document, String> {
    window()?
        .document()
        .ok_or_else(|| "document is unavailable".to_string())
}

pub(super) fn body(document: &Document) -> Result<HtmlElement, String> {
    document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())
}

pub(super) fn document_is_loading() -> bool {
    let Ok(document) = document() else {
        return false;
    };
    js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading")
}

pub(super) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, String> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| format!("invalid selector {selector}"))?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub(super) fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>, String> {
    let element = document
        .query_selector(selector)
        .map_err(|_| format!("invalid selector {selector}"))?;
    Ok(element.and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

pub(super) fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("missing #{id}"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("#{id} is not HtmlElement"))
}

pub(super) fn create_html_element(document: &Document, tag: &str) -> Result<HtmlElement, String> {
    document
        .create_element(tag)
        .map_err(|_| format!("failed to create {tag} element"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("{tag} element is not HtmlElement"))
}

pub(super) fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), String> {
    element
        .style()
        .set_property(property, value)
        .map_err(|_| format!("failed to set {property}"))
}

pub(super) fn apply_styles(element: &HtmlElement, declarations: &[(&str, &str)]) -> Result<(), String> {
    for (property, value) in declarations {
        set_style(element, property, value)?;
    }
    Ok(())
}

/// Removes an element unless something else already detached it.
pub(super) fn detach(element: &Element) {
    if element.parent_node().is_some() {
        element.remove();
    }
}

pub(super) fn measure_sections() -> ScrollSnapshot {
    let Ok(window) = window() else {
        return ScrollSnapshot::default();
    };
    let Some(document) = window.document() else {
        return ScrollSnapshot::default();
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let spans = query_all(&document, SECTION_SELECTOR)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionSpan::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.client_height()),
            )
        })
        .collect();
    ScrollSnapshot::new(offset, spans)
}

pub(super) fn set_active_nav(section_id: Option<&str>) -> Result<(), String> {
    let document = document()?;
    for button in query_all(&document, NAV_BUTTON_SELECTOR)? {
        let classes = button.class_list();
        let _ = classes.remove_1(ACTIVE_CLASS);
        let Some(section_id) = section_id else {
            continue;
        };
        let data_section = button.get_attribute(SECTION_ATTRIBUTE);
        let onclick = button.get_attribute("onclick");
        if nav_button_targets(data_section.as_deref(), onclick.as_deref(), section_id) {
            let _ = classes.add_1(ACTIVE_CLASS);
        }
    }
    Ok(())
}

pub(super) fn scroll_section_into_view(section_id: &str) -> Result<(), String> {
    let document = document()?;
    let Some(section) = document.get_element_by_id(section_id) else {
        return Ok(());
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    set_active_nav(Some(section_id))
}

pub(super) fn step_card(document: &Document, step: &str) -> Result<HtmlElement, String> {
    query_one(document, &attribute_selector(STEP_ATTRIBUTE, step))?
        .ok_or_else(|| format!("missing step card {step}"))
}

pub(super) fn style_step_card(step: &str, transform: &str, shadow: &str) -> Result<(), String> {
    let card = step_card(&document()?, step)?;
    set_style(&card, "transform", transform)?;
    set_style(&card, "box-shadow", shadow)
}

pub(super) fn button_for(document: &Document, target: ButtonTarget) -> Result<HtmlElement, String> {
    match target {
        ButtonTarget::Finish => query_one(document, FINISH_BUTTON_SELECTOR)?
            .ok_or_else(|| "missing finish button".to_string()),
        ButtonTarget::Method(method) => {
            let tagged = scoped_attribute_selector(
                METHOD_BUTTON_SELECTOR,
                METHOD_ATTRIBUTE,
                &method.to_string(),
            );
            if let Some(button) = query_one(document, &tagged)? {
                return Ok(button);
            }
            method_button_index(method)
                .and_then(|index| {
                    query_all(document, METHOD_BUTTON_SELECTOR)
                        .ok()?
                        .into_iter()
                        .nth(index)
                })
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                .ok_or_else(|| format!("missing method button {method}"))
        }
    }
}

pub(super) fn set_button_loading(button: &HtmlElement, loading: bool) {
    let classes = button.class_list();
    if loading {
        let _ = classes.add_1(LOADING_CLASS);
    } else {
        let _ = classes.remove_1(LOADING_CLASS);
    }
    if let Some(button) = button.dyn_ref::<web_sys::HtmlButtonElement>() {
        button.set_disabled(loading);
    } else if loading {
        let _ = button.set_attribute("disabled", "");
    } else {
        let _ = button.remove_attribute("disabled");
    }
}

pub(super) fn reset_method_buttons() -> Result<(), String> {
    let document = document()?;
    for button in query_all(&document, METHOD_BUTTON_SELECTOR)? {
        if let Ok(button) = button.dyn_into::<HtmlElement>() {
            set_button_loading(&button, false);
        }
    }
    Ok(())
}

pub(super) fn log_line(line: &LogLine) {
    let message = JsValue::from_str(&line.message);
    match line.level {
        LogLevel::Info => web_sys::console::log_1(&message),
        LogLevel::Error => web_sys::console::error_1(&message),
    }
}
