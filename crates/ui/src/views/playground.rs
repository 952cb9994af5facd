use std::time::Duration;

use dioxus::prelude::*;

use services::playground::PlaygroundBuffer;

use super::scripts::write_clipboard_text;

const DEFAULT_CODE: &str = r#"<!-- Try editing this code! -->
<div class="flex items-center justify-center min-h-[200px] bg-gradient-to-br from-cyan-500 to-blue-600 rounded-2xl p-8">
  <div class="text-center">
    <h2 class="text-3xl font-bold text-white mb-2">
      Hello Tailwind! 👋
    </h2>
    <p class="text-white/80">
      Edit the code to see changes live
    </p>
    <button class="mt-4 px-6 py-2 bg-white text-blue-600 font-semibold rounded-lg hover:bg-white/90 transition-colors">
      Click me!
    </button>
  </div>
</div>"#;

const TEMPLATES: &[(&str, &str)] = &[
    (
        "Card Component",
        r#"<div class="max-w-sm rounded-2xl overflow-hidden shadow-lg bg-white">
  <div class="h-48 bg-gradient-to-br from-purple-500 to-pink-500"></div>
  <div class="p-6">
    <h3 class="font-bold text-xl mb-2 text-gray-900">Card Title</h3>
    <p class="text-gray-600 text-sm">
      This is a beautiful card component built with Tailwind CSS utilities.
    </p>
    <div class="mt-4 flex gap-2">
      <span class="px-3 py-1 bg-purple-100 text-purple-700 text-xs font-medium rounded-full">
        Tag 1
      </span>
      <span class="px-3 py-1 bg-pink-100 text-pink-700 text-xs font-medium rounded-full">
        Tag 2
      </span>
    </div>
  </div>
</div>"#,
    ),
    (
        "Navigation Bar",
        r##"<nav class="flex items-center justify-between p-4 bg-gray-900 rounded-xl">
  <div class="text-white font-bold text-xl">Logo</div>
  <div class="flex items-center gap-6">
    <a href="#" class="text-white/80 hover:text-white transition-colors">Home</a>
    <a href="#" class="text-white/80 hover:text-white transition-colors">About</a>
    <a href="#" class="text-white/80 hover:text-white transition-colors">Contact</a>
    <button class="px-4 py-2 bg-blue-500 text-white font-medium rounded-lg hover:bg-blue-600 transition-colors">
      Sign Up
    </button>
  </div>
</nav>"##,
    ),
    (
        "Profile Card",
        r#"<div class="flex items-center gap-4 p-4 bg-white rounded-xl shadow-md">
  <div class="w-16 h-16 rounded-full bg-gradient-to-br from-green-400 to-cyan-500 flex items-center justify-center text-white text-2xl font-bold">
    JD
  </div>
  <div>
    <h4 class="font-semibold text-gray-900">John Doe</h4>
    <p class="text-sm text-gray-500">Software Developer</p>
    <div class="flex items-center gap-1 mt-1">
      <span class="w-2 h-2 bg-green-500 rounded-full"></span>
      <span class="text-xs text-green-600">Available for work</span>
    </div>
  </div>
</div>"#,
    ),
    (
        "Button Group",
        r#"<div class="flex flex-col gap-4 items-center">
  <button class="px-6 py-3 bg-blue-600 text-white font-semibold rounded-lg hover:bg-blue-700 transition-all hover:scale-105 shadow-lg shadow-blue-500/30">
    Primary Button
  </button>
  <button class="px-6 py-3 bg-transparent border-2 border-gray-300 text-gray-700 font-semibold rounded-lg hover:border-gray-400 transition-colors">
    Secondary Button
  </button>
  <button class="px-6 py-3 bg-gradient-to-r from-purple-500 to-pink-500 text-white font-semibold rounded-lg hover:opacity-90 transition-opacity">
    Gradient Button
  </button>
</div>"#,
    ),
];

const QUICK_REFERENCE: &[(&str, &[&str])] = &[
    ("Spacing", &["p-4", "m-2", "gap-4", "space-y-2"]),
    ("Flexbox", &["flex", "items-center", "justify-between", "flex-col"]),
    ("Grid", &["grid", "grid-cols-3", "col-span-2", "gap-6"]),
    (
        "Colors",
        &["bg-blue-500", "text-white", "border-gray-200", "hover:bg-blue-600"],
    ),
];

/// Free-form scratchpad: editor, live preview, starter templates, and a
/// class cheat sheet. State is view-local and resets on navigation.
#[component]
pub fn PlaygroundView() -> Element {
    let mut buffer = use_signal(|| PlaygroundBuffer::new(DEFAULT_CODE));
    let mut copied = use_signal(|| false);

    let code = buffer.read().code().to_string();
    let dirty = buffer.read().is_dirty();
    let code_for_copy = code.clone();

    let templates = TEMPLATES.iter().map(|(name, template)| {
        rsx! {
            button {
                class: "template-btn",
                r#type: "button",
                onclick: move |_| buffer.write().set_code((*template).to_string()),
                "{name}"
            }
        }
    });

    let reference = QUICK_REFERENCE.iter().map(|(title, classes)| {
        rsx! {
            div { class: "reference-card",
                h3 { "{title}" }
                div { class: "reference-classes",
                    for class in classes.iter() {
                        code {
                            class: "reference-class",
                            onclick: move |_| {
                                spawn(async move {
                                    write_clipboard_text(class).await;
                                });
                            },
                            "{class}"
                        }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "page playground-page",
            header { class: "view-header",
                h2 { class: "view-title", "Playground" }
                p { class: "view-subtitle",
                    "Write utility-class markup and see it render in real-time. Perfect for experimenting!"
                }
            }
            div { class: "playground-templates",
                p { class: "playground-templates-label", "Quick Templates:" }
                div { class: "playground-templates-row", {templates} }
            }
            div { class: "playground-split",
                div { class: "playground-editor-card",
                    div { class: "playground-editor-toolbar",
                        span { class: "playground-filename", "index.html" }
                        div { class: "playground-editor-actions",
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
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                disabled: !dirty,
                                onclick: move |_| buffer.write().reset(),
                                "Reset"
                            }
                        }
                    }
                    textarea {
                        class: "playground-input playground-input--large",
                        spellcheck: "false",
                        value: "{code}",
                        oninput: move |evt| buffer.write().set_code(evt.value()),
                    }
                }
                div { class: "playground-preview-card",
                    div { class: "playground-preview-toolbar",
                        span { "Live Preview" }
                    }
                    div { class: "live-preview-canvas playground-canvas", dangerous_inner_html: "{code}" }
                }
            }
            section { class: "quick-reference",
                h2 { "Quick Reference" }
                div { class: "reference-grid", {reference} }
            }
        }
    }
}
