pub(crate) const CONFIG_GLOBAL_KEY: &str = "__SETUP_GUIDE_CONFIG__";
pub(crate) const CONFETTI_STYLE_ID: &str = "setup-guide-confetti-keyframes";
pub(crate) const COMPLETION_MODAL_ID: &str = "setup-guide-completion-modal";

pub(crate) const SECTION_SELECTOR: &str = ".section";
pub(crate) const NAV_BUTTON_SELECTOR: &str = ".nav-btn";
pub(crate) const STEP_CARD_SELECTOR: &str = ".step-card";
pub(crate) const METHOD_STEP_SELECTOR: &str = ".method-step";
pub(crate) const METHOD_BUTTON_SELECTOR: &str = ".method-btn";
pub(crate) const FINISH_BUTTON_SELECTOR: &str = ".finish-btn";
pub(crate) const COMPLETION_MODAL_SELECTOR: &str = ".completion-modal";
pub(crate) const MODAL_CONTENT_SELECTOR: &str = ".modal-content";

pub(crate) const IMAGE_MODAL_ID: &str = "imageModal";
pub(crate) const MODAL_IMAGE_ID: &str = "modalImage";
pub(crate) const MODAL_TITLE_ID: &str = "modalTitle";
pub(crate) const MODAL_COMMAND_ID: &str = "modalCommand";
pub(crate) const MODAL_COMMAND_TEXT_ID: &str = "modalCommandText";
pub(crate) const MODAL_NOTE_ID: &str = "modalNote";
pub(crate) const MODAL_NOTE_TEXT_ID: &str = "modalNoteText";

pub(crate) const ACTIVE_CLASS: &str = "active";
pub(crate) const LOADING_CLASS: &str = "loading";
pub(crate) const STEP_ATTRIBUTE: &str = "data-step";
pub(crate) const METHOD_ATTRIBUTE: &str = "data-method";
pub(crate) const SECTION_ATTRIBUTE: &str = "data-section";

pub(crate) const STEP_PULSE_TRANSFORM: &str = "scale(1.05)";
pub(crate) const STEP_PULSE_SHADOW: &str = "0 25px 50px rgba(102, 126, 234, 0.4)";
pub(crate) const STEP_REST_TRANSFORM: &str = "scale(1)";
pub(crate) const STEP_REST_SHADOW: &str = "0 10px 30px rgba(0,0,0,0.2)";
pub(crate) const METHOD_STEP_HOVER_TRANSFORM: &str = "translateX(10px) scale(1.02)";
pub(crate) const METHOD_STEP_REST_TRANSFORM: &str = "translateX(0) scale(1)";

pub(crate) const NOTIFICATION_HIDDEN_TRANSFORM: &str = "translateX(400px)";
pub(crate) const NOTIFICATION_SHOWN_TRANSFORM: &str = "translateX(0)";
pub(crate) const MODAL_CONTENT_HIDDEN_TRANSFORM: &str = "scale(0.8)";
pub(crate) const MODAL_CONTENT_SHOWN_TRANSFORM: &str = "scale(1)";

pub(crate) const SUCCESS_NOTIFICATION_STYLE: [(&str, &str); 13] = [
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("background", "linear-gradient(135deg, #28a745, #20c997)"),
    ("color", "white"),
    ("padding", "15px 25px"),
    ("border-radius", "10px"),
    ("box-shadow", "0 10px 30px rgba(40, 167, 69, 0.4)"),
    ("z-index", "10000"),
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "10px"),
    ("font-weight", "600"),
];

pub(crate) const COPY_NOTIFICATION_STYLE: [(&str, &str); 14] = [
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("background", "linear-gradient(135deg, #28a745, #20c997)"),
    ("color", "white"),
    ("padding", "12px 20px"),
    ("border-radius", "8px"),
    ("box-shadow", "0 8px 25px rgba(40, 167, 69, 0.4)"),
    ("z-index", "10000"),
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "8px"),
    ("font-weight", "600"),
    ("font-size", "0.9rem"),
];

pub(crate) const COMPLETION_MODAL_STYLE: [(&str, &str); 10] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("background", "rgba(0,0,0,0.8)"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("z-index", "10000"),
];

pub(crate) const COMPLETION_CONTENT_STYLE: [(&str, &str); 6] = [
    ("background", "white"),
    ("border-radius", "20px"),
    ("padding", "40px"),
    ("max-width", "500px"),
    ("width", "90%"),
    ("text-align", "center"),
];

pub(crate) const COMPLETION_MODAL_BODY_HTML: &str = r#"
    <div class="modal-header">
        <i class="fas fa-trophy"></i>
        <h2>Setup Complete!</h2>
    </div>
    <div class="modal-body">
        <p>&#127881; Congratulations! Your Discord AI bot is now ready to use.</p>
        <div class="completion-features">
            <div class="feature">
                <i class="fas fa-check-circle"></i>
                <span>Bot is online and responsive</span>
            </div>
            <div class="feature">
                <i class="fas fa-check-circle"></i>
                <span>All permissions configured</span>
            </div>
            <div class="feature">
                <i class="fas fa-check-circle"></i>
                <span>Ready for production use</span>
            </div>
        </div>
    </div>
"#;
