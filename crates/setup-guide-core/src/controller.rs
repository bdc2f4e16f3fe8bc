use serde::Serialize;

use crate::commands::ModalPanels;
use crate::config::GuideConfig;
use crate::error::GuideError;
use crate::input::{KeyCommand, classify_swipe, is_escape};
use crate::section::{NavDirection, ScrollSnapshot, Section, step_from};
use crate::throttle::Throttle;
use crate::transient::Notification;

pub const INITIALIZED_MESSAGE: &str = "Discord AI Setup Guide initialized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "method")]
pub enum ButtonTarget {
    Method(u32),
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLine {
    pub level: LogLevel,
    pub message: String,
}

impl LogLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Error,
            message: message.into(),
        }
    }
}

/// Everything the page reacts to: browser events, exported calls, timer
/// expiries and async completions.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    Initialized,
    Scrolled {
        now_ms: f64,
        snapshot: ScrollSnapshot,
    },
    ScrollToSection {
        id: String,
    },
    Navigate {
        direction: NavDirection,
        snapshot: ScrollSnapshot,
    },
    KeyDown {
        key: String,
        snapshot: ScrollSnapshot,
    },
    TouchStarted {
        screen_y: f64,
    },
    TouchEnded {
        screen_y: f64,
        snapshot: ScrollSnapshot,
    },
    StepCardClicked {
        step: String,
    },
    StepCardSettled {
        step: String,
    },
    SelectMethod {
        method: u32,
    },
    MethodLoaded {
        method: u32,
    },
    CompleteSetup,
    SetupFinished,
    CloseCompletionModal,
    LaunchCelebration,
    ShowImageModal {
        src: String,
        title: String,
    },
    CloseImageModal,
    ModalKeyDown {
        key: String,
    },
    DocumentClicked {
        on_image_modal_backdrop: bool,
    },
    CopyCommand {
        text: String,
    },
    CopyModalCommand {
        text: Option<String>,
    },
    ClipboardWriteFinished {
        text: String,
        error: Option<String>,
    },
    FallbackCopyFinished {
        copied: bool,
        error: Option<String>,
    },
}

/// Work for the DOM layer. Effects are returned in the order they should be
/// carried out.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEffect {
    Log(LogLine),
    PreventDefault,
    /// Clear every nav button, then activate the ones targeting this id.
    SetActiveNav(Option<String>),
    /// Smooth-scroll the section to the top of the viewport and activate its
    /// nav button. Ignored when no element carries the id.
    ScrollTo {
        section_id: String,
    },
    Schedule {
        delay_ms: u32,
        action: PageAction,
    },
    PulseStepCard {
        step: String,
    },
    RestoreStepCard {
        step: String,
    },
    ResetMethodButtons,
    SetButtonLoading {
        target: ButtonTarget,
        loading: bool,
    },
    ShowNotification(Notification),
    ShowCompletionModal,
    DismissCompletionModal,
    LaunchConfetti {
        count: usize,
    },
    OpenImageModal {
        src: String,
        title: String,
        panels: ModalPanels,
    },
    HideImageModal,
    InstallEscapeListener,
    RemoveEscapeListener,
    WriteClipboard {
        text: String,
    },
    FallbackCopy {
        text: String,
    },
}

/// Single owner of the page's transient state. Built once at start-up.
#[derive(Debug, Clone, Serialize)]
pub struct PageController {
    config: GuideConfig,
    scroll_throttle: Throttle,
    touch_start_y: Option<f64>,
    loading: Option<ButtonTarget>,
    image_modal_open: bool,
    escape_listener_installed: bool,
    completion_modal_open: bool,
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(GuideConfig::default())
    }
}

impl PageController {
    pub fn new(config: GuideConfig) -> Self {
        Self {
            scroll_throttle: Throttle::new(config.scroll_throttle_ms),
            config,
            touch_start_y: None,
            loading: None,
            image_modal_open: false,
            escape_listener_installed: false,
            completion_modal_open: false,
        }
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    pub fn loading(&self) -> Option<ButtonTarget> {
        self.loading
    }

    pub fn image_modal_open(&self) -> bool {
        self.image_modal_open
    }

    pub fn escape_listener_installed(&self) -> bool {
        self.escape_listener_installed
    }

    pub fn completion_modal_open(&self) -> bool {
        self.completion_modal_open
    }

    /// Lets the shell skip measuring sections for scroll events that the
    /// throttle would drop anyway.
    pub fn accepts_scroll_at(&self, now_ms: f64) -> bool {
        self.scroll_throttle.is_open(now_ms)
    }

    pub fn apply(&mut self, action: PageAction) -> Vec<PageEffect> {
        tracing::debug!(?action, "page action");
        match action {
            PageAction::Initialized => vec![PageEffect::Log(LogLine::info(INITIALIZED_MESSAGE))],
            PageAction::Scrolled { now_ms, snapshot } => {
                if !self.scroll_throttle.try_acquire(now_ms) {
                    return Vec::new();
                }
                let current = snapshot
                    .current_section_id(self.config.section_top_offset_px)
                    .map(str::to_string);
                vec![PageEffect::SetActiveNav(current)]
            }
            PageAction::ScrollToSection { id } => scroll_to(id),
            PageAction::Navigate {
                direction,
                snapshot,
            } => self.navigate(direction, &snapshot),
            PageAction::KeyDown { key, snapshot } => {
                let Some(command) = KeyCommand::from_key(&key) else {
                    return Vec::new();
                };
                let mut effects = Vec::new();
                if command.suppresses_default() {
                    effects.push(PageEffect::PreventDefault);
                }
                match command {
                    KeyCommand::Step(direction) => {
                        effects.extend(self.navigate(direction, &snapshot));
                    }
                    KeyCommand::Jump(section) => effects.extend(scroll_to(section.id())),
                }
                effects
            }
            PageAction::TouchStarted { screen_y } => {
                self.touch_start_y = Some(screen_y);
                Vec::new()
            }
            PageAction::TouchEnded { screen_y, snapshot } => {
                let Some(start_y) = self.touch_start_y.take() else {
                    return Vec::new();
                };
                match classify_swipe(start_y, screen_y, self.config.swipe_threshold_px) {
                    Some(direction) => self.navigate(direction, &snapshot),
                    None => Vec::new(),
                }
            }
            PageAction::StepCardClicked { step } => vec![
                PageEffect::PulseStepCard { step: step.clone() },
                PageEffect::Log(LogLine::info(format!("Step {step} clicked"))),
                PageEffect::Schedule {
                    delay_ms: self.config.step_pulse_ms,
                    action: PageAction::StepCardSettled { step },
                },
            ],
            PageAction::StepCardSettled { step } => vec![PageEffect::RestoreStepCard { step }],
            PageAction::SelectMethod { method } => self.select_method(method),
            PageAction::MethodLoaded { method } => {
                let target = ButtonTarget::Method(method);
                if self.loading == Some(target) {
                    self.loading = None;
                }
                vec![
                    PageEffect::SetButtonLoading {
                        target,
                        loading: false,
                    },
                    PageEffect::ShowNotification(Notification::method_selected(method)),
                    PageEffect::Schedule {
                        delay_ms: self.config.finish_advance_ms,
                        action: PageAction::ScrollToSection {
                            id: Section::Finish.id().to_string(),
                        },
                    },
                ]
            }
            PageAction::CompleteSetup => {
                self.loading = Some(ButtonTarget::Finish);
                vec![
                    PageEffect::SetButtonLoading {
                        target: ButtonTarget::Finish,
                        loading: true,
                    },
                    PageEffect::Schedule {
                        delay_ms: self.config.setup_loading_ms,
                        action: PageAction::SetupFinished,
                    },
                ]
            }
            PageAction::SetupFinished => {
                if self.loading == Some(ButtonTarget::Finish) {
                    self.loading = None;
                }
                self.completion_modal_open = true;
                vec![
                    PageEffect::SetButtonLoading {
                        target: ButtonTarget::Finish,
                        loading: false,
                    },
                    PageEffect::ShowCompletionModal,
                    PageEffect::LaunchConfetti {
                        count: self.config.confetti_count,
                    },
                ]
            }
            PageAction::CloseCompletionModal => {
                self.completion_modal_open = false;
                vec![PageEffect::DismissCompletionModal]
            }
            PageAction::LaunchCelebration => vec![PageEffect::LaunchConfetti {
                count: self.config.confetti_count,
            }],
            PageAction::ShowImageModal { src, title } => {
                let panels = ModalPanels::for_image(&src);
                self.image_modal_open = true;
                let mut effects = vec![PageEffect::OpenImageModal { src, title, panels }];
                if !self.escape_listener_installed {
                    self.escape_listener_installed = true;
                    effects.push(PageEffect::InstallEscapeListener);
                }
                effects
            }
            PageAction::CloseImageModal => self.close_image_modal(),
            PageAction::ModalKeyDown { key } => {
                if is_escape(&key) && self.image_modal_open {
                    self.close_image_modal()
                } else {
                    Vec::new()
                }
            }
            PageAction::DocumentClicked {
                on_image_modal_backdrop,
            } => {
                if on_image_modal_backdrop {
                    self.close_image_modal()
                } else {
                    Vec::new()
                }
            }
            PageAction::CopyCommand { text } => vec![PageEffect::WriteClipboard { text }],
            PageAction::CopyModalCommand { text } => match text {
                Some(text) if !text.is_empty() => vec![PageEffect::WriteClipboard { text }],
                _ => Vec::new(),
            },
            PageAction::ClipboardWriteFinished { text, error } => match error {
                None => vec![PageEffect::ShowNotification(Notification::CopySuccess)],
                Some(error) => {
                    tracing::warn!(%error, "clipboard write rejected, using fallback");
                    vec![
                        PageEffect::Log(LogLine::error(format!("Could not copy text: {error}"))),
                        PageEffect::FallbackCopy { text },
                    ]
                }
            },
            PageAction::FallbackCopyFinished { copied, error } => {
                if copied {
                    return vec![PageEffect::ShowNotification(Notification::CopySuccess)];
                }
                match error {
                    Some(error) => vec![PageEffect::Log(LogLine::error(format!(
                        "Fallback: unable to copy: {error}"
                    )))],
                    None => Vec::new(),
                }
            }
        }
    }

    fn navigate(&self, direction: NavDirection, snapshot: &ScrollSnapshot) -> Vec<PageEffect> {
        let current = snapshot.current_section_id(self.config.section_top_offset_px);
        let next = step_from(current, direction);
        tracing::debug!(?current, %next, ?direction, "section navigation");
        scroll_to(next.id())
    }

    fn select_method(&mut self, method: u32) -> Vec<PageEffect> {
        if method == 0 {
            return vec![PageEffect::Log(LogLine::error(
                GuideError::InvalidMethod.to_string(),
            ))];
        }
        let target = ButtonTarget::Method(method);
        self.loading = Some(target);
        vec![
            PageEffect::ResetMethodButtons,
            PageEffect::SetButtonLoading {
                target,
                loading: true,
            },
            PageEffect::Schedule {
                delay_ms: self.config.method_loading_ms,
                action: PageAction::MethodLoaded { method },
            },
        ]
    }

    fn close_image_modal(&mut self) -> Vec<PageEffect> {
        self.image_modal_open = false;
        let mut effects = vec![PageEffect::HideImageModal];
        if self.escape_listener_installed {
            self.escape_listener_installed = false;
            effects.push(PageEffect::RemoveEscapeListener);
        }
        effects
    }
}

fn scroll_to(id: impl Into<String>) -> Vec<PageEffect> {
    vec![PageEffect::ScrollTo {
        section_id: id.into(),
    }]
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use crate::section::SectionSpan;

    /// Runs scheduled actions in due order the way the browser timer queue
    /// would, recording every effect with the time it was produced.
    struct Timeline {
        controller: PageController,
        now_ms: u64,
        sequence: u64,
        pending: Vec<(u64, u64, PageAction)>,
        produced: Vec<(u64, PageEffect)>,
    }

    impl Timeline {
        fn new() -> Self {
            Self {
                controller: PageController::default(),
                now_ms: 0,
                sequence: 0,
                pending: Vec::new(),
                produced: Vec::new(),
            }
        }

        fn dispatch(&mut self, action: PageAction) {
            for effect in self.controller.apply(action) {
                if let PageEffect::Schedule { delay_ms, action } = &effect {
                    self.sequence += 1;
                    self.pending.push((
                        self.now_ms + u64::from(*delay_ms),
                        self.sequence,
                        action.clone(),
                    ));
                }
                self.produced.push((self.now_ms, effect));
            }
        }

        fn run_until_idle(&mut self) {
            loop {
                self.pending.sort_by(|left, right| match left.0.cmp(&right.0) {
                    Ordering::Equal => left.1.cmp(&right.1),
                    other => other,
                });
                if self.pending.is_empty() {
                    break;
                }
                let (due_ms, _, action) = self.pending.remove(0);
                self.now_ms = due_ms;
                self.dispatch(action);
            }
        }

        fn effects_at(&self, at_ms: u64) -> Vec<&PageEffect> {
            self.produced
                .iter()
                .filter(|(time, effect)| {
                    *time == at_ms && !matches!(effect, PageEffect::Schedule { .. })
                })
                .map(|(_, effect)| effect)
                .collect()
        }

        fn notifications(&self) -> usize {
            self.produced
                .iter()
                .filter(|(_, effect)| matches!(effect, PageEffect::ShowNotification(_)))
                .count()
        }
    }

    fn page() -> ScrollSnapshot {
        ScrollSnapshot::new(
            0.0,
            vec![
                SectionSpan::new("steps", 600.0, 900.0),
                SectionSpan::new("methods", 1_500.0, 1_200.0),
                SectionSpan::new("finish", 2_700.0, 700.0),
            ],
        )
    }

    fn at(offset: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            offset,
            ..page()
        }
    }

    fn scroll_target(id: &str) -> PageEffect {
        PageEffect::ScrollTo {
            section_id: id.to_string(),
        }
    }

    #[test]
    fn scroll_marks_current_section_and_throttles() {
        let mut controller = PageController::default();
        assert_eq!(
            controller.apply(PageAction::Scrolled {
                now_ms: 0.0,
                snapshot: at(1_450.0),
            }),
            vec![PageEffect::SetActiveNav(Some("methods".to_string()))]
        );
        assert!(
            controller
                .apply(PageAction::Scrolled {
                    now_ms: 50.0,
                    snapshot: at(2_650.0),
                })
                .is_empty()
        );
        assert_eq!(
            controller.apply(PageAction::Scrolled {
                now_ms: 100.0,
                snapshot: at(2_650.0),
            }),
            vec![PageEffect::SetActiveNav(Some("finish".to_string()))]
        );
    }

    #[test]
    fn scroll_outside_sections_clears_navigation() {
        let mut controller = PageController::default();
        assert_eq!(
            controller.apply(PageAction::Scrolled {
                now_ms: 0.0,
                snapshot: at(100.0),
            }),
            vec![PageEffect::SetActiveNav(None)]
        );
    }

    #[test]
    fn pressing_two_scrolls_to_methods() {
        let mut controller = PageController::default();
        let effects = controller.apply(PageAction::KeyDown {
            key: "2".to_string(),
            snapshot: at(0.0),
        });
        assert_eq!(effects, vec![scroll_target("methods")]);
    }

    #[test]
    fn arrow_down_from_finish_wraps_and_prevents_default() {
        let mut controller = PageController::default();
        let effects = controller.apply(PageAction::KeyDown {
            key: "ArrowDown".to_string(),
            snapshot: at(2_700.0),
        });
        assert_eq!(
            effects,
            vec![PageEffect::PreventDefault, scroll_target("steps")]
        );
    }

    #[test]
    fn arrow_up_above_all_sections_treats_page_as_steps() {
        let mut controller = PageController::default();
        let effects = controller.apply(PageAction::KeyDown {
            key: "ArrowUp".to_string(),
            snapshot: at(0.0),
        });
        assert_eq!(
            effects,
            vec![PageEffect::PreventDefault, scroll_target("finish")]
        );
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut controller = PageController::default();
        assert!(
            controller
                .apply(PageAction::KeyDown {
                    key: "Enter".to_string(),
                    snapshot: at(0.0),
                })
                .is_empty()
        );
    }

    #[test]
    fn swipe_up_moves_to_next_section() {
        let mut controller = PageController::default();
        assert!(
            controller
                .apply(PageAction::TouchStarted { screen_y: 500.0 })
                .is_empty()
        );
        let effects = controller.apply(PageAction::TouchEnded {
            screen_y: 380.0,
            snapshot: at(600.0),
        });
        assert_eq!(effects, vec![scroll_target("methods")]);
    }

    #[test]
    fn short_swipe_and_orphan_touchend_are_ignored() {
        let mut controller = PageController::default();
        controller.apply(PageAction::TouchStarted { screen_y: 500.0 });
        assert!(
            controller
                .apply(PageAction::TouchEnded {
                    screen_y: 460.0,
                    snapshot: at(600.0),
                })
                .is_empty()
        );
        assert!(
            controller
                .apply(PageAction::TouchEnded {
                    screen_y: 100.0,
                    snapshot: at(600.0),
                })
                .is_empty()
        );
    }

    #[test]
    fn step_card_pulses_then_settles() {
        let mut timeline = Timeline::new();
        timeline.dispatch(PageAction::StepCardClicked {
            step: "3".to_string(),
        });
        timeline.run_until_idle();
        assert_eq!(
            timeline.effects_at(0),
            vec![
                &PageEffect::PulseStepCard {
                    step: "3".to_string()
                },
                &PageEffect::Log(LogLine::info("Step 3 clicked")),
            ]
        );
        assert_eq!(
            timeline.effects_at(300),
            vec![&PageEffect::RestoreStepCard {
                step: "3".to_string()
            }]
        );
    }

    #[test]
    fn selecting_method_runs_loading_notification_and_advance() {
        let mut timeline = Timeline::new();
        timeline.dispatch(PageAction::SelectMethod { method: 1 });
        assert_eq!(
            timeline.controller.loading(),
            Some(ButtonTarget::Method(1))
        );
        timeline.run_until_idle();

        assert_eq!(
            timeline.effects_at(0),
            vec![
                &PageEffect::ResetMethodButtons,
                &PageEffect::SetButtonLoading {
                    target: ButtonTarget::Method(1),
                    loading: true,
                },
            ]
        );
        assert_eq!(
            timeline.effects_at(2_000),
            vec![
                &PageEffect::SetButtonLoading {
                    target: ButtonTarget::Method(1),
                    loading: false,
                },
                &PageEffect::ShowNotification(Notification::Success {
                    message: "Method 1 selected successfully!".to_string(),
                }),
            ]
        );
        assert_eq!(timeline.effects_at(3_000), vec![&scroll_target("finish")]);
        assert_eq!(timeline.controller.loading(), None);
    }

    #[test]
    fn reselecting_method_keeps_latest_loading_target() {
        let mut timeline = Timeline::new();
        timeline.dispatch(PageAction::SelectMethod { method: 1 });
        timeline.now_ms = 500;
        timeline.dispatch(PageAction::SelectMethod { method: 2 });
        assert_eq!(
            timeline.controller.loading(),
            Some(ButtonTarget::Method(2))
        );
        timeline.run_until_idle();
        assert_eq!(timeline.notifications(), 2);
        assert_eq!(timeline.controller.loading(), None);
    }

    #[test]
    fn method_zero_is_rejected() {
        let mut controller = PageController::default();
        let effects = controller.apply(PageAction::SelectMethod { method: 0 });
        assert_eq!(
            effects,
            vec![PageEffect::Log(LogLine::error(
                "method number must be at least 1"
            ))]
        );
        assert_eq!(controller.loading(), None);
    }

    #[test]
    fn completing_setup_opens_modal_and_confetti_after_three_seconds() {
        let mut timeline = Timeline::new();
        timeline.dispatch(PageAction::CompleteSetup);
        timeline.run_until_idle();
        assert_eq!(
            timeline.effects_at(3_000),
            vec![
                &PageEffect::SetButtonLoading {
                    target: ButtonTarget::Finish,
                    loading: false,
                },
                &PageEffect::ShowCompletionModal,
                &PageEffect::LaunchConfetti { count: 50 },
            ]
        );
        assert!(timeline.controller.completion_modal_open());

        timeline.dispatch(PageAction::CloseCompletionModal);
        assert!(!timeline.controller.completion_modal_open());
    }

    #[test]
    fn image_modal_installs_escape_listener_once() {
        let mut controller = PageController::default();
        let first = controller.apply(PageAction::ShowImageModal {
            src: "images/Method_1.3.png".to_string(),
            title: "Edit the .env file".to_string(),
        });
        assert_eq!(
            first,
            vec![
                PageEffect::OpenImageModal {
                    src: "images/Method_1.3.png".to_string(),
                    title: "Edit the .env file".to_string(),
                    panels: ModalPanels {
                        command: Some("nano .env".to_string()),
                        note: Some("Or open it in notepad on Windows".to_string()),
                    },
                },
                PageEffect::InstallEscapeListener,
            ]
        );
        let second = controller.apply(PageAction::ShowImageModal {
            src: "images/overview.png".to_string(),
            title: "Overview".to_string(),
        });
        assert!(!second.contains(&PageEffect::InstallEscapeListener));
        assert!(matches!(
            &second[0],
            PageEffect::OpenImageModal { panels, .. } if *panels == ModalPanels::default()
        ));
    }

    #[test]
    fn escape_closes_and_removes_listener() {
        let mut controller = PageController::default();
        controller.apply(PageAction::ShowImageModal {
            src: "images/Method_1.1.png".to_string(),
            title: "Clone".to_string(),
        });
        assert!(
            controller
                .apply(PageAction::ModalKeyDown {
                    key: "Enter".to_string()
                })
                .is_empty()
        );
        assert_eq!(
            controller.apply(PageAction::ModalKeyDown {
                key: "Escape".to_string()
            }),
            vec![PageEffect::HideImageModal, PageEffect::RemoveEscapeListener]
        );
        assert!(!controller.image_modal_open());
        assert!(!controller.escape_listener_installed());
    }

    #[test]
    fn backdrop_click_closes_but_inner_click_does_not() {
        let mut controller = PageController::default();
        controller.apply(PageAction::ShowImageModal {
            src: "images/Method_1.2.png".to_string(),
            title: "cd".to_string(),
        });
        assert!(
            controller
                .apply(PageAction::DocumentClicked {
                    on_image_modal_backdrop: false
                })
                .is_empty()
        );
        assert_eq!(
            controller.apply(PageAction::DocumentClicked {
                on_image_modal_backdrop: true
            }),
            vec![PageEffect::HideImageModal, PageEffect::RemoveEscapeListener]
        );
    }

    #[test]
    fn clipboard_success_skips_fallback() {
        let mut timeline = Timeline::new();
        timeline.dispatch(PageAction::CopyCommand {
            text: "cd DiscordAI".to_string(),
        });
        timeline.dispatch(PageAction::ClipboardWriteFinished {
            text: "cd DiscordAI".to_string(),
            error: None,
        });
        assert!(
            !timeline
                .produced
                .iter()
                .any(|(_, effect)| matches!(effect, PageEffect::FallbackCopy { .. }))
        );
        assert_eq!(timeline.notifications(), 1);
    }

    #[test]
    fn clipboard_rejection_routes_to_fallback() {
        let mut timeline = Timeline::new();
        timeline.dispatch(PageAction::ClipboardWriteFinished {
            text: "python run.py".to_string(),
            error: Some("NotAllowedError".to_string()),
        });
        assert_eq!(
            timeline.effects_at(0),
            vec![
                &PageEffect::Log(LogLine::error("Could not copy text: NotAllowedError")),
                &PageEffect::FallbackCopy {
                    text: "python run.py".to_string()
                },
            ]
        );
        assert_eq!(timeline.notifications(), 0);
        timeline.dispatch(PageAction::FallbackCopyFinished {
            copied: true,
            error: None,
        });
        assert_eq!(timeline.notifications(), 1);
    }

    #[test]
    fn fallback_failure_is_logged_only() {
        let mut controller = PageController::default();
        assert!(
            controller
                .apply(PageAction::FallbackCopyFinished {
                    copied: false,
                    error: None,
                })
                .is_empty()
        );
        assert_eq!(
            controller.apply(PageAction::FallbackCopyFinished {
                copied: false,
                error: Some("execCommand missing".to_string()),
            }),
            vec![PageEffect::Log(LogLine::error(
                "Fallback: unable to copy: execCommand missing"
            ))]
        );
    }

    #[test]
    fn modal_copy_ignores_empty_command() {
        let mut controller = PageController::default();
        assert!(
            controller
                .apply(PageAction::CopyModalCommand {
                    text: Some(String::new())
                })
                .is_empty()
        );
        assert!(
            controller
                .apply(PageAction::CopyModalCommand { text: None })
                .is_empty()
        );
        assert_eq!(
            controller.apply(PageAction::CopyModalCommand {
                text: Some("nano .env".to_string())
            }),
            vec![PageEffect::WriteClipboard {
                text: "nano .env".to_string()
            }]
        );
    }

    #[test]
    fn state_serializes_for_diagnostics() -> Result<(), serde_json::Error> {
        let mut controller = PageController::default();
        controller.apply(PageAction::CompleteSetup);
        let value = serde_json::to_value(&controller)?;
        assert_eq!(value["loading"]["kind"], "finish");
        assert_eq!(value["image_modal_open"], false);
        assert_eq!(value["config"]["confetti_count"], 50);
        Ok(())
    }
}
