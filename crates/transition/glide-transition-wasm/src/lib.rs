//! wasm-bindgen DOM adapter for Glide transitions.
//!
//! Owns the live `<style>` element backing the style cache, resolves targets
//! (selector string or element handle), injects rendered keyframes rules, and
//! assigns the `animation` shorthand. Stylesheet injection resolves after one
//! zero-delay timeout tick so the browser has parsed the new rule before the
//! animation is applied.

use std::cell::RefCell;

use js_sys::{Object, Promise, Reflect};
use log::debug;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, HtmlStyleElement, SvgElement};

use glide_transition_core::{TransitionBuilder, TransitionError, TransitionOptions};

/// Target reference pulled out of the options object.
enum Target {
    Selector(String),
    Element(Element),
}

/// The builder sits in a `RefCell` so `start` can take `&self`: overlapping
/// same-turn calls then interleave instead of tripping the exported object's
/// aliasing guard while an earlier call is parked at the deferred tick. Each
/// borrow is scoped to a synchronous section, never held across an await.
#[wasm_bindgen]
pub struct Transition {
    builder: RefCell<TransitionBuilder>,
    style: HtmlStyleElement,
}

fn document() -> Result<Document, TransitionError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| TransitionError::Injection {
            reason: "no document in this environment".into(),
        })
}

fn to_js(err: TransitionError) -> JsError {
    JsError::new(&err.to_string())
}

/// Shallow-copy the options object so removing `$el` below never mutates the
/// caller's own object.
fn copy_options(options: &JsValue) -> JsValue {
    match options.dyn_ref::<Object>() {
        Some(obj) => Object::assign(&Object::new(), obj).into(),
        None => options.clone(),
    }
}

/// Read and remove `$el` from the (copied) options object. Removing it keeps
/// the element handle out of the serde pass over the remaining fields.
fn take_target(options: &JsValue) -> Result<Target, TransitionError> {
    let key = JsValue::from_str("$el");
    let raw = Reflect::get(options, &key).map_err(|_| TransitionError::InvalidTarget {
        reason: "options is not an object".into(),
    })?;
    if let Some(obj) = options.dyn_ref::<Object>() {
        let _ = Reflect::delete_property(obj, &key);
    }
    if let Some(selector) = raw.as_string() {
        return Ok(Target::Selector(selector));
    }
    raw.dyn_into::<Element>()
        .map(Target::Element)
        .map_err(|_| TransitionError::InvalidTarget {
            reason: "$el must be a selector string or an element".into(),
        })
}

fn resolve_target(target: Target) -> Result<Element, TransitionError> {
    match target {
        Target::Element(el) => Ok(el),
        Target::Selector(selector) => {
            let doc = document()?;
            doc.query_selector(&selector)
                .map_err(|_| TransitionError::InvalidTarget {
                    reason: format!("invalid selector: {selector}"),
                })?
                .ok_or(TransitionError::ElementNotFound { selector })
        }
    }
}

/// Inline style of an HTML or SVG element; anything else has no `style`
/// property to animate.
fn inline_style(element: &Element) -> Result<CssStyleDeclaration, TransitionError> {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        Ok(el.style())
    } else if let Some(el) = element.dyn_ref::<SvgElement>() {
        Ok(el.style())
    } else {
        Err(TransitionError::InvalidTarget {
            reason: "target element has no inline style".into(),
        })
    }
}

fn set_animation(element: &Element, shorthand: &str) -> Result<(), TransitionError> {
    inline_style(element)?
        .set_property("animation", shorthand)
        .map_err(|_| TransitionError::Injection {
            reason: "failed to set animation shorthand".into(),
        })
}

/// Resolve after one zero-delay timeout so the rendering loop runs once
/// between the stylesheet write and the animation assignment.
async fn next_tick() -> Result<(), TransitionError> {
    let promise = Promise::new(&mut |resolve, reject| match web_sys::window() {
        Some(window) => {
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
                .is_err()
            {
                let _ = reject.call0(&JsValue::UNDEFINED);
            }
        }
        None => {
            let _ = reject.call0(&JsValue::UNDEFINED);
        }
    });
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| TransitionError::Injection {
            reason: "deferred stylesheet tick failed".into(),
        })
}

#[wasm_bindgen]
impl Transition {
    /// Create the builder and append its backing `<style>` element to
    /// `document.body`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Transition, JsError> {
        console_error_panic_hook::set_once();

        let doc = document().map_err(to_js)?;
        let style: HtmlStyleElement = doc
            .create_element("style")
            .map_err(|_| JsError::new("failed to create style element"))?
            .dyn_into()
            .map_err(|_| JsError::new("created element is not a style element"))?;
        let body = doc
            .body()
            .ok_or_else(|| JsError::new("document has no body"))?;
        body.append_child(&style)
            .map_err(|_| JsError::new("failed to append style element"))?;

        Ok(Transition {
            builder: RefCell::new(TransitionBuilder::new()),
            style,
        })
    }

    /// Public entry point. `options` is
    /// `{ $el, duration?, easing?, fillModel?, slide?|fade?|zoom?|blur?|rotate?: boolean|string }`.
    /// `$el` may be a selector string or an HTML/SVG element handle; the
    /// caller's object is not modified.
    ///
    /// Resolves once the animation shorthand is assigned; on the first use of
    /// a distinct transition set this includes one deferred tick after the
    /// stylesheet rebuild. Calls may overlap within one turn: the cache
    /// check-then-insert runs synchronously before the tick, so a duplicate
    /// request sees the rule as live and skips straight to the assignment.
    #[wasm_bindgen]
    pub async fn start(&self, options: JsValue) -> Result<(), JsError> {
        let options = copy_options(&options);
        let target = take_target(&options).map_err(to_js)?;
        let opts: TransitionOptions = swb::from_value(options).map_err(|e| {
            to_js(TransitionError::InvalidOptions {
                reason: e.to_string(),
            })
        })?;

        let element = resolve_target(target).map_err(to_js)?;
        let prepared = self.builder.borrow_mut().prepare(opts);

        if let Some(stylesheet) = prepared.stylesheet.as_deref() {
            debug!("injecting stylesheet rule {}", prepared.rule_name);
            self.style.set_text_content(Some(stylesheet));
            if let Err(err) = next_tick().await {
                // Roll back the cache write so a retry renders and injects
                // again instead of treating the rule as live.
                self.builder.borrow_mut().invalidate(&prepared.rule_name);
                return Err(to_js(err));
            }
        }

        set_animation(&element, &prepared.animation).map_err(to_js)?;
        Ok(())
    }

    /// Number of distinct keyframes rules currently cached/injected.
    #[wasm_bindgen(js_name = ruleCount)]
    pub fn rule_count(&self) -> usize {
        self.builder.borrow().cache().len()
    }

    /// Current stylesheet text (all cached rules).
    #[wasm_bindgen(js_name = stylesheetText)]
    pub fn stylesheet_text(&self) -> String {
        self.builder.borrow().cache().stylesheet_text()
    }
}
