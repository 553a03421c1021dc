// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_style_config`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;

use understory_style_config::{
    ColorMode, ComponentConfig, DeepMerge, Layer, Merger, Props, StructuralEq, StyleCache,
    StyleResolver, Theme, ThemeBuilder, ThemeContext,
};

fn theme() -> Theme {
    let input = ComponentConfig::builder()
        .parts(["field", "addon", "element"])
        .default_prop("size", "md")
        .default_prop("variant", "outline")
        .base_style(json!({
            "field": { "width": "100%", "minWidth": 0, "outline": 0, "position": "relative" },
            "addon": { "display": "flex", "alignItems": "center" }
        }))
        .size("sm", json!({ "field": { "fontSize": "sm", "h": 8, "px": 3 } }))
        .size("md", json!({ "field": { "fontSize": "md", "h": 10, "px": 4 } }))
        .variant(
            "outline",
            Layer::dynamic(|cx| {
                let border = if cx.color_mode() == ColorMode::Dark { "whiteAlpha.300" } else { "inherit" };
                json!({
                    "field": {
                        "border": "1px solid",
                        "borderColor": border,
                        "_hover": { "borderColor": "gray.300" },
                        "_focusVisible": { "zIndex": 1, "borderColor": "blue.500" }
                    }
                })
                .as_object()
                .cloned()
                .unwrap_or_default()
            }),
        )
        .build();
    ThemeBuilder::new().component("Input", input).build()
}

fn bench_resolve(c: &mut Criterion) {
    let cx = ThemeContext::new(theme(), ColorMode::Light);
    let props = Props::new().size("sm").set("isInvalid", false);

    let mut group = c.benchmark_group("style_config/resolve");

    group.bench_function("single_part/cache_hit", |b| {
        let mut resolver = StyleResolver::new();
        b.iter(|| black_box(resolver.resolve_style(&cx, "Input", &props)))
    });

    group.bench_function("multi_part/cache_hit", |b| {
        let mut resolver = StyleResolver::new();
        b.iter(|| black_box(resolver.resolve_multi_part_style(&cx, "Input", &props)))
    });

    group.bench_function("multi_part/alternating", |b| {
        let mut resolver = StyleResolver::new();
        let other = Props::new().size("md");
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let props = if flip { &props } else { &other };
            black_box(resolver.resolve_multi_part_style(&cx, "Input", props))
        })
    });

    group.bench_function("missing_component", |b| {
        let mut resolver = StyleResolver::new();
        b.iter(|| black_box(resolver.resolve_style(&cx, "Nope", &props)))
    });

    group.finish();

    let mut group = c.benchmark_group("style_config/primitives");

    let base = json!({ "a": { "b": { "c": 1, "d": [1, 2, 3] } }, "e": "x" });
    let over = json!({ "a": { "b": { "c": 2 } }, "f": true });
    let (base, over) = (
        base.as_object().cloned().unwrap_or_default(),
        over.as_object().cloned().unwrap_or_default(),
    );

    group.bench_function("deep_merge", |b| {
        b.iter(|| black_box(DeepMerge.merge(&[&base, &over])))
    });

    group.bench_function("cache_update/equal", |b| {
        let mut cache = StyleCache::new();
        cache.update(&StructuralEq, base.clone());
        b.iter_batched(
            || base.clone(),
            |fresh| black_box(cache.update(&StructuralEq, fresh)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
