use dioxus::prelude::*;
use folio_engine::math::{MathMode, MathTypesetter, SourceTypesetter};

const KATEX_CSS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.28/dist/katex.min.css";
const KATEX_JS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.28/dist/katex.min.js";

/// Typeset every `[data-math]` element on the page. Safe to run repeatedly.
pub const RENDER_MATH_JS: &str = r#"
(function() {
    if (typeof katex === 'undefined') return;
    document.querySelectorAll('[data-math]').forEach(function(el) {
        try {
            katex.render(el.dataset.math, el, {
                displayMode: el.classList.contains('math-display'),
                throwOnError: false
            });
        } catch(e) {}
    });
})();
"#;

/// Inject the KaTeX stylesheet and script once, typesetting when it loads.
pub fn load_katex() {
    let js = format!(
        r#"(function() {{
            if (document.getElementById('katex-css')) return;
            var link = document.createElement('link');
            link.id = 'katex-css';
            link.rel = 'stylesheet';
            link.href = '{KATEX_CSS}';
            document.head.appendChild(link);

            var script = document.createElement('script');
            script.id = 'katex-js';
            script.src = '{KATEX_JS}';
            script.onload = function() {{
                {RENDER_MATH_JS}
            }};
            document.head.appendChild(script);
        }})();"#
    );
    document::eval(&js);
}

/// Rerun typesetting after the DOM changed.
pub fn typeset_page() {
    document::eval(RENDER_MATH_JS);
}

/// A math span. The source is shown escaped until KaTeX replaces it.
///
/// Display mode puts an optional label after the equation; inline mode never
/// shows one.
#[component]
pub fn MathView(source: String, mode: MathMode, label: Option<String>) -> Element {
    let markup = SourceTypesetter.typeset(&source, mode);

    match mode {
        MathMode::Inline => rsx! {
            span { class: "math-host", dangerous_inner_html: "{markup}" }
        },
        MathMode::Display => rsx! {
            div {
                class: "flex items-center justify-center gap-2",
                div { class: "math-host", dangerous_inner_html: "{markup}" }
                if let Some(label) = label {
                    span { class: "text-sm text-neutral-500", "({label})" }
                }
            }
        },
    }
}
