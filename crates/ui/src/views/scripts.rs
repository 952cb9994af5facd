use dioxus::document::eval;

/// Escapes text into a double-quoted JS string literal.
#[must_use]
pub fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Copies text to the system clipboard. Fire-and-forget: failures are
/// dropped and never touch session state.
pub async fn write_clipboard_text(text: &str) {
    let literal = js_string_literal(text);
    let script = format!(
        r#"
        const text = {literal};
        if (navigator.clipboard && navigator.clipboard.writeText) {{
            navigator.clipboard.writeText(text).catch(() => {{}});
        }}
        "#
    );
    let _ = eval(&script).await;
}

/// A short confetti-style burst over the viewport, fired on a perfect
/// quiz score. Cleans itself up after the animation.
pub async fn fire_celebration() {
    let _ = eval(CELEBRATION_SCRIPT).await;
}

const CELEBRATION_SCRIPT: &str = r##"(function() {
    const colors = ["#3b82f6", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981"];
    const root = document.createElement("div");
    root.style.cssText =
        "position:fixed;inset:0;pointer-events:none;overflow:hidden;z-index:9999;";
    document.body.appendChild(root);
    for (let i = 0; i < 60; i += 1) {
        const piece = document.createElement("span");
        const size = 6 + Math.random() * 6;
        piece.style.cssText =
            "position:absolute;top:-12px;border-radius:2px;" +
            "width:" + size + "px;height:" + size + "px;" +
            "left:" + (Math.random() * 100) + "%;" +
            "background:" + colors[i % colors.length] + ";" +
            "transition:transform 1.4s ease-in, opacity 1.4s ease-in;";
        root.appendChild(piece);
        requestAnimationFrame(() => {
            const drift = (Math.random() - 0.5) * 200;
            const spin = Math.random() * 720 - 360;
            piece.style.transform =
                "translate(" + drift + "px, " + (window.innerHeight + 24) + "px) " +
                "rotate(" + spin + "deg)";
            piece.style.opacity = "0";
        });
    }
    setTimeout(() => root.remove(), 1600);
})();"##;
