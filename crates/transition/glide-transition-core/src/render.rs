//! CSS text rendering for keyframes rules.
//!
//! The output layout is deliberately plain (newline-joined declarations, no
//! indentation) and stable, since cached rule text is compared and rebuilt
//! wholesale by the adapter.

use crate::keyframes::{Declaration, KeyframeSpec, Snapshot};

fn render_declaration(decl: &Declaration) -> Option<String> {
    match decl {
        Declaration::Shorthand { parts, .. } if parts.is_empty() => None,
        Declaration::Shorthand { property, parts } => {
            let subs: Vec<String> = parts
                .iter()
                .map(|(sub, value)| format!("{sub}({value})"))
                .collect();
            Some(format!("{property}: {};", subs.join(" ")))
        }
        Declaration::Direct { property, value } => Some(format!("{property}: {value};")),
    }
}

fn render_snapshot(snapshot: &Snapshot) -> String {
    snapshot
        .declarations()
        .iter()
        .filter_map(render_declaration)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble the full `@keyframes` block for one rule.
pub fn render_css(rule_name: &str, spec: &KeyframeSpec) -> String {
    let from = render_snapshot(&spec.start);
    let to = render_snapshot(&spec.end);
    format!("@keyframes {rule_name} {{\nfrom {{\n{from}\n}}\nto {{\n{to}\n}}\n}}\n")
}
