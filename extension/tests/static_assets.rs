// Checks on the shipped extension pages and glue scripts

const MANIFEST: &str = include_str!("../static/manifest.json");
const BACKGROUND_JS: &str = include_str!("../static/background.js");
const BACKGROUND_RS: &str = include_str!("../src/background.rs");
const PANEL_HTML: &str = include_str!("../static/panel/index.html");
const PANEL_MAIN_JS: &str = include_str!("../static/panel/main.js");
const PANEL_CSS: &str = include_str!("../static/panel/panel.css");
const UTILITIES_CSS: &str = include_str!("../static/panel/utilities.css");

const PANEL_SOURCES: [(&str, &str); 4] = [
    ("panel/mod.rs", include_str!("../src/panel/mod.rs")),
    ("panel/alert.rs", include_str!("../src/panel/alert.rs")),
    ("panel/claims.rs", include_str!("../src/panel/claims.rs")),
    ("panel/menus.rs", include_str!("../src/panel/menus.rs")),
];

/// String literals in `source` that hold class lists: `class: "..."`,
/// `class: Some("...")`, `if dark { "..." } else { "..." }` and `&str` consts.
fn class_literals(source: &str) -> Vec<&str> {
    let segments: Vec<&str> = source.split('"').collect();
    segments
        .iter()
        .enumerate()
        .skip(1)
        .step_by(2)
        .filter(|(i, _)| {
            let before = segments[i - 1].trim_end();
            ["class:", "Some(", "&str =", "if dark {", "} else {"]
                .iter()
                .any(|marker| before.ends_with(marker))
        })
        .map(|(_, literal)| *literal)
        .collect()
}

fn css_selector(class: &str) -> String {
    let mut selector = String::from(".");
    for ch in class.chars() {
        if matches!(ch, ':' | '[' | ']' | '#') {
            selector.push('\\');
        }
        selector.push(ch);
    }
    selector
}

#[test]
fn test_panel_page_has_no_inline_script() {
    let mut rest = PANEL_HTML;
    let mut scripts = 0;
    while let Some(start) = rest.find("<script") {
        let tag_end = rest[start..].find('>').unwrap() + start;
        let tag = &rest[start..tag_end];
        assert!(tag.contains("src="), "inline script in index.html: {}", tag);
        assert!(rest[tag_end + 1..].trim_start().starts_with("</script>"));
        scripts += 1;
        rest = &rest[tag_end..];
    }
    assert_eq!(scripts, 1);
    assert!(PANEL_HTML.contains(r#"src="main.js""#));
    assert!(PANEL_MAIN_JS.contains("import init from '../pkg/panel.js'"));
}

#[test]
fn test_extension_pages_forbid_inline_script() {
    let manifest: serde_json::Value = serde_json::from_str(MANIFEST).unwrap();
    let csp = manifest["content_security_policy"]["extension_pages"]
        .as_str()
        .unwrap();
    assert!(csp.contains("script-src 'self'"));
    assert!(!csp.contains("unsafe-inline"));
    assert_eq!(manifest["background"]["service_worker"], "background.js");
}

#[test]
fn test_worker_listeners_registered_at_top_level() {
    for listener in [
        "chrome.runtime.onInstalled.addListener(",
        "chrome.action.onClicked.addListener(",
    ] {
        assert!(
            BACKGROUND_JS.lines().any(|line| line.starts_with(listener)),
            "{} must be registered synchronously",
            listener
        );
    }

    // Rust must not register a second set once the wasm has loaded
    assert!(!BACKGROUND_RS.contains("addListener"));
    assert!(!BACKGROUND_RS.contains("on_action_clicked"));
}

#[test]
fn test_worker_glue_calls_exported_handlers() {
    for export in ["init_background", "handle_install", "handle_icon_click"] {
        assert!(BACKGROUND_JS.contains(&format!("wasm_bindgen.{}(", export)));
        assert!(BACKGROUND_RS.contains(&format!("pub fn {}(", export)));
    }
}

#[test]
fn test_panel_stylesheets_are_linked() {
    let utilities = PANEL_HTML.find(r#"href="utilities.css""#).unwrap();
    let panel = PANEL_HTML.find(r#"href="panel.css""#).unwrap();
    // panel.css overrides utilities, e.g. `.hidden`
    assert!(utilities < panel);
}

#[test]
fn test_every_panel_class_is_styled() {
    let css = format!("{}\n{}", UTILITIES_CSS, PANEL_CSS);
    let mut checked = 0;

    for (file, source) in PANEL_SOURCES {
        for literal in class_literals(source) {
            for class in literal.split_whitespace().filter(|c| !c.contains('{')) {
                let selector = css_selector(class);
                assert!(
                    css.contains(&selector),
                    "{} uses class `{}` but no stylesheet defines {}",
                    file,
                    class,
                    selector
                );
                checked += 1;
            }
        }
    }
    assert!(checked > 100);
}

#[test]
fn test_menus_render_as_dropdowns() {
    for rule in [".absolute { position: absolute; }", ".top-12 { top: 3rem; }", ".right-4 { right: 1rem; }"] {
        assert!(UTILITIES_CSS.contains(rule), "missing {}", rule);
    }
}

#[test]
fn test_class_literal_scan() {
    let source = r##"
const BUTTON: &str =
    "flex-1 p-4";
div { class: if dark { "bg-[#111926]" } else { "bg-gray-100" }, "{title}" }
icons::X { class: Some("w-5 h-5".to_string()) }
input { r#type: "checkbox", id: "x" }
"##;
    assert_eq!(
        class_literals(source),
        vec!["flex-1 p-4", "bg-[#111926]", "bg-gray-100", "w-5 h-5"]
    );
    assert_eq!(css_selector("hover:bg-red-700"), r".hover\:bg-red-700");
    assert_eq!(css_selector("bg-[#111926]"), r".bg-\[\#111926\]");
}
