/// `[attribute="value"]`, with quotes and backslashes in the value escaped so
/// values read back from the DOM always form a valid selector.
pub(crate) fn attribute_selector(attribute: &str, value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("[{attribute}=\"{escaped}\"]")
}

pub(crate) fn scoped_attribute_selector(scope: &str, attribute: &str, value: &str) -> String {
    format!("{scope}{}", attribute_selector(attribute, value))
}

/// Position of a method button among all `.method-btn` elements when the
/// markup does not carry `data-method`. Methods are numbered from 1.
pub(crate) fn method_button_index(method: u32) -> Option<usize> {
    method
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
}
