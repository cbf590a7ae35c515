//! Property checks for reference normalization.

use mediaref_core::cdn::CdnConfig;
use mediaref_core::normalize::normalize;
use mediaref_core::{ExtractionRules, ResolveContext};
use proptest::prelude::*;
use serde_json::{json, Value};

fn ctx() -> ResolveContext {
    ResolveContext::new("https://shop.example.com", CdnConfig::default())
        .unwrap()
        .with_cdn_cloud("demo")
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        ".{0,12}".prop_map(Value::String),
        "(url|secure_url|file|public_id|media|images|asset|is_primary)".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::hash_map(
                "(url|secure_url|file|src|path|public_id|resource_type|format|asset|media|images|gallery|primary_image|is_primary|media_type)",
                inner,
                0..6,
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn absolute_urls_are_identity(rest in "[a-zA-Z0-9./_?=&-]{0,40}", scheme in "(http://|https://|data:)") {
        let s = format!("{scheme}{rest}");
        prop_assert_eq!(normalize(&json!(s.clone()), false, &ctx()), Some(s));
    }

    #[test]
    fn rooted_paths_get_origin(path in "/[a-zA-Z0-9._-][a-zA-Z0-9/._-]{0,40}") {
        let expected = format!("https://shop.example.com{path}");
        prop_assert_eq!(normalize(&json!(path), false, &ctx()), Some(expected));
    }

    #[test]
    fn protocol_relative_gets_protocol(rest in "[a-z0-9.-]{1,20}/[a-zA-Z0-9/._-]{0,30}") {
        let input = format!("//{rest}");
        prop_assert_eq!(normalize(&json!(input.clone()), false, &ctx()), Some(format!("https:{input}")));
    }

    #[test]
    fn arbitrary_json_never_panics(value in arb_json(), thumb in any::<bool>()) {
        let ctx = ctx();
        if let Some(url) = normalize(&value, thumb, &ctx) {
            let lower = url.to_ascii_lowercase();
            prop_assert!(lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("data:"));
        }
        let rules = ExtractionRules::default();
        let gallery = mediaref_core::gallery::collect_gallery(&value, &rules, &ctx);
        let mut unique = gallery.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), gallery.len());
        let _ = mediaref_core::thumbnail::select_thumbnail(&value, &rules, &ctx);
    }
}
