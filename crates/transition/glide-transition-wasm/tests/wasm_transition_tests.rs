#![cfg(target_arch = "wasm32")]
use futures::future::join;
use glide_transition_wasm::Transition;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
    }
    obj.into()
}

fn append_div(id: &str) -> web_sys::Element {
    let doc = web_sys::window().unwrap().document().unwrap();
    let el = doc.create_element("div").unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn constructs_and_appends_style_element() {
    let t = Transition::new().unwrap();
    assert_eq!(t.rule_count(), 0);
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.query_selector("style").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn start_applies_animation_shorthand() {
    let el = append_div("slide-target");
    let t = Transition::new().unwrap();
    t.start(options(&[
        ("$el", JsValue::from_str("#slide-target")),
        ("slide", JsValue::TRUE),
        ("duration", JsValue::from_str("2s")),
    ]))
    .await
    .unwrap();

    assert_eq!(t.rule_count(), 1);
    let style = el
        .dyn_ref::<web_sys::HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("animation")
        .unwrap();
    assert!(style.contains("transition-"));
    assert!(style.contains("2s"));
    assert!(t.stylesheet_text().contains("translateX(-100%)"));
}

#[wasm_bindgen_test]
async fn repeated_semantics_reuse_one_rule() {
    append_div("fade-target");
    let t = Transition::new().unwrap();
    t.start(options(&[
        ("$el", JsValue::from_str("#fade-target")),
        ("fade", JsValue::TRUE),
    ]))
    .await
    .unwrap();
    let text_after_first = t.stylesheet_text();

    // Same transition semantics, different timing fields.
    t.start(options(&[
        ("$el", JsValue::from_str("#fade-target")),
        ("fade", JsValue::from_str("in")),
        ("duration", JsValue::from_str("300ms")),
        ("easing", JsValue::from_str("linear")),
    ]))
    .await
    .unwrap();

    assert_eq!(t.rule_count(), 1);
    assert_eq!(t.stylesheet_text(), text_after_first);
}

#[wasm_bindgen_test]
async fn overlapping_same_turn_starts_share_one_rule() {
    append_div("race-target");
    let t = Transition::new().unwrap();
    let first = t.start(options(&[
        ("$el", JsValue::from_str("#race-target")),
        ("rotate", JsValue::TRUE),
    ]));
    let second = t.start(options(&[
        ("$el", JsValue::from_str("#race-target")),
        ("rotate", JsValue::from_str("in")),
        ("duration", JsValue::from_str("4s")),
    ]));

    // Neither call is awaited before the other exists; both must complete.
    let (a, b) = join(first, second).await;
    a.unwrap();
    b.unwrap();

    assert_eq!(t.rule_count(), 1);
    assert!(t.stylesheet_text().contains("rotate(1turn)"));
}

#[wasm_bindgen_test]
async fn caller_options_object_is_not_mutated() {
    let el = append_div("keep-el-target");
    let t = Transition::new().unwrap();
    let opts = options(&[
        ("$el", JsValue::from(el)),
        ("fade", JsValue::from_str("out")),
    ]);
    t.start(opts.clone()).await.unwrap();

    let el_after = Reflect::get(&opts, &JsValue::from_str("$el")).unwrap();
    assert!(!el_after.is_undefined());
    assert!(el_after.dyn_ref::<web_sys::Element>().is_some());
}

#[wasm_bindgen_test]
async fn element_handle_target_is_accepted() {
    let el = append_div("handle-target");
    let t = Transition::new().unwrap();
    t.start(options(&[
        ("$el", JsValue::from(el)),
        ("zoom", JsValue::from_str("out")),
    ]))
    .await
    .unwrap();
    assert_eq!(t.rule_count(), 1);
    assert!(t.stylesheet_text().contains("scale(1)"));
}

#[wasm_bindgen_test]
async fn svg_element_target_is_accepted() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let rect = doc
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "rect")
        .unwrap();
    doc.body().unwrap().append_child(&rect).unwrap();

    let t = Transition::new().unwrap();
    t.start(options(&[
        ("$el", JsValue::from(rect.clone())),
        ("fade", JsValue::TRUE),
    ]))
    .await
    .unwrap();

    let style = rect
        .dyn_ref::<web_sys::SvgElement>()
        .unwrap()
        .style()
        .get_property_value("animation")
        .unwrap();
    assert!(style.contains("transition-"));
}

#[wasm_bindgen_test]
async fn missing_selector_is_an_error() {
    let t = Transition::new().unwrap();
    let err = t
        .start(options(&[
            ("$el", JsValue::from_str("#no-such-element")),
            ("blur", JsValue::TRUE),
        ]))
        .await
        .unwrap_err();
    let message = format!("{:?}", JsValue::from(err));
    assert!(message.contains("#no-such-element"));
    // Nothing was cached for the failed call.
    assert_eq!(t.rule_count(), 0);
}
