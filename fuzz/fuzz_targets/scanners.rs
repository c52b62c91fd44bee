#![no_main]

use std::ops::Range;

use libfuzzer_sys::fuzz_target;
use parrot_syntax::{
    count_parens, preceding_expr, slurp_backward_target, slurp_forward_target,
    surrounding_top_level_expr, symbol_under_or_before_cursor, CursorContext, SlurpTarget,
};
use text_size::TextSize;

const MAX_SOURCE_BYTES: usize = 4096;

fn decode_source(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_SOURCE_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fn cursor_offset(seed: u8, source: &str) -> usize {
    let mut offset = usize::from(seed) % (source.len() + 1);
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

fn check_target(source: &str, target: Option<SlurpTarget>) {
    let Some(target) = target else {
        return;
    };
    let len = TextSize::of(source);
    assert!(target.end() <= len);
    assert!(target.dest <= len);
    assert!(source.get(Range::<usize>::from(target.target)).is_some());
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let source = decode_source(&data[1..]);
    let offset = cursor_offset(data[0], &source);
    let ctx = match CursorContext::at_offset(&source, TextSize::from(offset as u32)) {
        Some(ctx) => ctx,
        None => panic!("char boundary offset {offset} rejected"),
    };

    let _ = count_parens(&source);

    if let Some(expr) = preceding_expr(ctx.before) {
        assert!(ctx.before.ends_with(expr));
    }
    let _ = symbol_under_or_before_cursor(ctx.before, ctx.after);

    if let Some(expr) = surrounding_top_level_expr(&ctx) {
        let range = expr.range();
        assert_eq!(source.get(Range::<usize>::from(range)), Some(expr.text.as_str()));
    }

    check_target(&source, slurp_forward_target(&ctx));
    check_target(&source, slurp_backward_target(&ctx));
});
