use std::time::Duration;

use dioxus::prelude::*;

use services::preview::PreviewMode;

use super::scripts::write_clipboard_text;

//
// ─── CODE BLOCK ────────────────────────────────────────────────────────────────
//

/// Read-only source display with a copy button. The copied flag resets
/// itself after two seconds.
#[component]
pub fn CodeBlock(code: String) -> Element {
    let mut copied = use_signal(|| false);
    let code_for_copy = code.clone();

    rsx! {
        div { class: "code-block",
            button {
                class: if copied() { "copy-btn copy-btn--copied" } else { "copy-btn" },
                r#type: "button",
                onclick: move |_| {
                    let text = code_for_copy.clone();
                    spawn(async move {
                        write_clipboard_text(&text).await;
                        copied.set(true);
                        tokio::time::sleep(Duration::from_secs(2)).await;
                        copied.set(false);
                    });
                },
                if copied() { "Copied!" } else { "Copy" }
            }
            pre { code { "{code}" } }
        }
    }
}

//
// ─── LIVE PREVIEW ──────────────────────────────────────────────────────────────
//

#[derive(Props, Clone, PartialEq)]
pub struct LivePreviewProps {
    pub code: String,
    /// The markup face currently selected by the pane (before or after).
    pub markup: String,
    pub mode: PreviewMode,
    pub has_before: bool,
    pub show_before: bool,
    pub on_set_mode: EventHandler<PreviewMode>,
    pub on_toggle_before: EventHandler<()>,
}

/// Rendered-preview/raw-code switcher for one example, with an optional
/// before/after comparison toggle.
///
/// The preview face injects the markup verbatim: fidelity with the
/// styling being taught requires unsanitized author markup here.
#[component]
pub fn LivePreview(props: LivePreviewProps) -> Element {
    rsx! {
        div { class: "live-preview",
            div { class: "live-preview-toolbar",
                div { class: "live-preview-modes",
                    button {
                        class: if props.mode == PreviewMode::Preview { "mode-btn mode-btn--active" } else { "mode-btn" },
                        r#type: "button",
                        onclick: move |_| props.on_set_mode.call(PreviewMode::Preview),
                        "Preview"
                    }
                    button {
                        class: if props.mode == PreviewMode::Code { "mode-btn mode-btn--active" } else { "mode-btn" },
                        r#type: "button",
                        onclick: move |_| props.on_set_mode.call(PreviewMode::Code),
                        "Code"
                    }
                }
                if props.has_before {
                    button {
                        class: "before-toggle",
                        r#type: "button",
                        onclick: move |_| props.on_toggle_before.call(()),
                        if props.show_before { "Show After" } else { "Show Before" }
                    }
                }
            }
            match props.mode {
                PreviewMode::Preview => rsx! {
                    div { class: "live-preview-canvas", dangerous_inner_html: "{props.markup}" }
                },
                PreviewMode::Code => rsx! {
                    CodeBlock { code: props.code.clone() }
                },
            }
        }
    }
}

//
// ─── INLINE PLAYGROUND ─────────────────────────────────────────────────────────
//

#[derive(Props, Clone, PartialEq)]
pub struct InlinePlaygroundProps {
    pub code: String,
    pub dirty: bool,
    pub on_change: EventHandler<String>,
    pub on_reset: EventHandler<()>,
}

/// Editable markup buffer with a live preview of whatever the learner
/// types. The preview is the learner's own local input, rendered as-is.
#[component]
pub fn InlinePlayground(props: InlinePlaygroundProps) -> Element {
    rsx! {
        div { class: "inline-playground",
            div { class: "inline-playground-editor",
                textarea {
                    class: "playground-input",
                    spellcheck: "false",
                    value: "{props.code}",
                    oninput: move |evt| props.on_change.call(evt.value()),
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !props.dirty,
                    onclick: move |_| props.on_reset.call(()),
                    "Reset"
                }
            }
            div { class: "inline-playground-preview",
                div { class: "live-preview-canvas", dangerous_inner_html: "{props.code}" }
            }
        }
    }
}
