//! Renders encoded runs back into a C header.
//!
//! The output instantiates the firmware's `RLERun` record but never declares
//! it: the record type lives in a shared header on the consumer side, and
//! re-emitting a typedef per generated file would collide at compile time.
//! Every generated file therefore only contains the dimension defines, the
//! run array, and a derived element count.

use crate::Run;

/// Renders a compressed image header.
///
/// `name` is the identifier the array is bound to, normally the source
/// file's base name; the dimension defines use its uppercased form. The
/// output is deterministic: same inputs, same text.
///
/// # Example
///
/// ```
/// use rle565::{render_header, Run};
///
/// let runs = vec![Run { value: 0x0000, length: 2 }];
/// let header = render_header("logo", 2, 1, &runs);
/// assert!(header.contains("#define LOGO_WIDTH 2"));
/// assert!(header.contains("{ 0x0000, 2 },"));
/// ```
#[must_use = "this returns the rendered header text"]
pub fn render_header(name: &str, width: usize, height: usize, runs: &[Run]) -> String {
    let upper = name.to_uppercase();

    let mut out = String::with_capacity(256 + runs.len() * 20);
    out.push_str("/* Auto-generated file - RLE RGB565 */\n");
    out.push_str("#pragma once\n\n");

    out.push_str("// Image dimensions\n");
    out.push_str(&format!("#define {upper}_WIDTH {width}\n"));
    out.push_str(&format!("#define {upper}_HEIGHT {height}\n\n"));

    out.push_str("// RLE array (color, count)\n");
    out.push_str(&format!("static const RLERun {name}[] PROGMEM = {{\n"));
    for run in runs {
        out.push_str(&format!("    {{ 0x{:04X}, {} }},\n", run.value, run.length));
    }
    out.push_str("};\n\n");

    out.push_str(&format!(
        "static const size_t {name}_count = sizeof({name})/sizeof(RLERun);\n"
    ));
    out
}
