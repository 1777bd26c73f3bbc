//! Property tests for reco-core id canonicalization.

use proptest::prelude::*;

use reco_core::models::{ArticleId, RawArticleId};

proptest! {
    #[test]
    fn prop_integral_renderings_agree(v in -1_000_000i64..1_000_000) {
        let from_int = ArticleId::from_raw(&RawArticleId::Int(v)).unwrap();
        let from_float = ArticleId::from_raw(&RawArticleId::Float(v as f64)).unwrap();
        let from_text = ArticleId::from_raw(&RawArticleId::Text(format!("{v}.0"))).unwrap();
        prop_assert_eq!(&from_int, &from_float);
        prop_assert_eq!(&from_float, &from_text);
    }

    #[test]
    fn prop_canonicalization_is_idempotent(s in "[a-z0-9.]{1,8}") {
        if let Some(id) = ArticleId::parse(&s) {
            let again = ArticleId::parse(id.as_str()).unwrap();
            prop_assert_eq!(id, again);
        }
    }

    #[test]
    fn prop_ordering_follows_numeric_value(a in 0u64..100_000, b in 0u64..100_000) {
        let ia = ArticleId::from(a);
        let ib = ArticleId::from(b);
        prop_assert_eq!(ia.cmp(&ib), a.cmp(&b));
    }
}
