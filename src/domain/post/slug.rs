// src/domain/post/slug.rs
use std::future::Future;

use slug::slugify;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::PostSlug;

/// Used when a title contains nothing that transliterates to `[a-z0-9]`.
pub const FALLBACK_SLUG: &str = "post";

/// Derives the base slug of a title. Pure: equal titles give equal slugs, and
/// the result always matches `[a-z0-9]+(-[a-z0-9]+)*`.
pub fn make_slug(title: &str) -> String {
    let slug = slugify(title)
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Returns the base slug of `title`, or the first `base-N` (N = 1, 2, ...)
/// for which `exists` reports no live post.
///
/// `exists` must consult the current persisted state. With `max_suffix` set,
/// gives up with `DomainError::SlugExhausted` once N would exceed it.
pub async fn make_unique_slug<F, Fut>(
    title: &str,
    max_suffix: Option<u64>,
    mut exists: F,
) -> DomainResult<PostSlug>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = DomainResult<bool>>,
{
    let base = make_slug(title);
    if !exists(base.clone()).await? {
        return PostSlug::new(base);
    }

    let mut counter: u64 = 1;
    loop {
        if let Some(max) = max_suffix {
            if counter > max {
                return Err(DomainError::SlugExhausted {
                    base,
                    attempts: max,
                });
            }
        }

        let candidate = format!("{base}-{counter}");
        if !exists(candidate.clone()).await? {
            return PostSlug::new(candidate);
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::value_objects::is_slug_shaped;
    use std::collections::HashSet;

    fn taken(slugs: &[&str]) -> HashSet<String> {
        slugs.iter().map(|s| (*s).to_string()).collect()
    }

    async fn unique_against(title: &str, existing: &HashSet<String>) -> DomainResult<PostSlug> {
        make_unique_slug(title, None, |candidate| {
            let hit = existing.contains(&candidate);
            async move { Ok(hit) }
        })
        .await
    }

    #[test]
    fn make_slug_is_deterministic() {
        let title = "Rust & Friends: Ownership 101";
        assert_eq!(make_slug(title), make_slug(title));
        assert_eq!(make_slug(title), "rust-friends-ownership-101");
    }

    #[test]
    fn make_slug_output_is_slug_shaped() {
        for title in [
            "Hello World",
            "  --Leading and trailing--  ",
            "Multiple   spaces\tand\ttabs",
            "Ünïcödé Çafé",
            "日本語のタイトル",
            "!!!",
            "",
            "a--b__c..d",
            "UPPER lower 123",
        ] {
            let slug = make_slug(title);
            assert!(is_slug_shaped(&slug), "{title:?} produced {slug:?}");
        }
    }

    #[test]
    fn make_slug_transliterates() {
        assert_eq!(make_slug("Crème Brûlée"), "creme-brulee");
    }

    #[test]
    fn make_slug_falls_back_when_nothing_survives() {
        assert_eq!(make_slug("?!*"), FALLBACK_SLUG);
        assert_eq!(make_slug(""), FALLBACK_SLUG);
    }

    #[tokio::test]
    async fn unique_slug_returns_base_when_free() {
        let slug = unique_against("Hello World", &taken(&[])).await.unwrap();
        assert_eq!(slug.as_str(), "hello-world");
    }

    #[tokio::test]
    async fn unique_slug_skips_taken_suffixes() {
        let existing = taken(&["hello-world", "hello-world-1"]);
        let slug = unique_against("Hello World", &existing).await.unwrap();
        assert_eq!(slug.as_str(), "hello-world-2");
    }

    #[tokio::test]
    async fn unique_slug_fills_first_gap() {
        let existing = taken(&["hello-world", "hello-world-2"]);
        let slug = unique_against("Hello World", &existing).await.unwrap();
        assert_eq!(slug.as_str(), "hello-world-1");
    }

    #[tokio::test]
    async fn unique_slug_gives_up_past_the_cap() {
        let existing = taken(&["foo", "foo-1", "foo-2"]);
        let err = make_unique_slug("Foo", Some(2), |candidate| {
            let hit = existing.contains(&candidate);
            async move { Ok(hit) }
        })
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            DomainError::SlugExhausted { ref base, attempts: 2 } if base == "foo"
        ));
    }

    #[tokio::test]
    async fn unique_slug_propagates_predicate_errors() {
        let err = make_unique_slug("Foo", None, |_| async {
            Err(DomainError::Persistence("down".into()))
        })
        .await
        .unwrap_err();

        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
