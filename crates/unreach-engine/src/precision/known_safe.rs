//! Context-aware known-safe functions (extension a).
//!
//! A static table of fully-qualified callee names known to consume a
//! boxed `any` value precisely (formatting, JSON/text codecs and the
//! like) mapped to the small set of methods they actually invoke via
//! reflection. When the function currently being visited contains a
//! static call to one of these, a zero-method interface conversion can
//! route through the selective path instead of marking every exported
//! method live.

use crate::name::NameCache;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use unreach_ir::{CallTarget, Function, Instr, Program};

static KNOWN_SAFE_CALLEES: Lazy<FxHashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert("fmt.Printf", &["String"][..]);
    m.insert("fmt.Sprintf", &["String"][..]);
    m.insert("fmt.Println", &["String"][..]);
    m.insert("fmt.Fprintf", &["String"][..]);
    m.insert("encoding/json.Marshal", &["MarshalJSON", "String"][..]);
    m.insert("encoding/json.MarshalIndent", &["MarshalJSON", "String"][..]);
    m.insert("encoding/json.Unmarshal", &["UnmarshalJSON"][..]);
    m.insert("encoding/xml.Marshal", &["MarshalXML", "String"][..]);
    m
});

/// The union of safe method names reachable via calls this function
/// makes to a known-safe callee, or `None` if it calls none.
pub fn known_safe_methods(function: &Function, program: &Program, names: &NameCache) -> Option<Vec<&'static str>> {
    let mut found: Vec<&'static str> = Vec::new();
    for instr in function.instrs() {
        if let Instr::Call(call) = instr {
            if let CallTarget::Static(callee) = &call.target {
                let name = names.function_name(program, *callee);
                if let Some(methods) = KNOWN_SAFE_CALLEES.get(&*name) {
                    for m in *methods {
                        if !found.contains(m) {
                            found.push(m);
                        }
                    }
                }
            }
        }
    }
    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}
