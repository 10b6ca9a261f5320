//! Property-based tests for the breed range predicates.
//!
//! The filter builder accepts arbitrary free-text criteria and must never
//! fail: malformed numeric input degrades to "no filter" rather than an
//! error. These tests drive the builder with random input and check the
//! documented fallbacks.
//!
//! Refer to `src/domain/breed_filter.rs` for more details.
use chrono::Utc;
use proptest::{prelude::*, test_runner::Config};
use ruchky_api::domain::{build_breed_filter, BreedFilter};
use ruchky_api::models::{Breed, Species};

fn breed(life_span: Option<&str>, weight: Option<&str>) -> Breed {
    Breed {
        id: "breed-1".to_string(),
        name: "Labrador Retriever".to_string(),
        species: Species::Dog,
        description: None,
        origin: None,
        life_span: life_span.map(String::from),
        weight: weight.map(String::from),
        is_active: true,
        image_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

proptest! {
  #![proptest_config(Config {
    cases: 1000, ..Config::default()
  })]

  /// Building a filter from arbitrary text never panics and always yields a
  /// predicate that can be evaluated.
  #[test]
  fn prop_build_breed_filter_total(
    search in ".*",
    origin in ".*",
    weight in ".*",
  ) {
      let criteria = BreedFilter {
          search: Some(search),
          origin: Some(origin),
          weight: Some(weight),
          ..Default::default()
      };
      let predicate = build_breed_filter(&criteria);
      // Evaluation must also be total.
      let _ = predicate.matches(&breed(Some("10 - 12 years"), Some("25 - 36 kg")));
  }

  /// A weight criterion that contains no digits filters nothing out: the
  /// result equals what the same criteria produce without the weight field.
  /// Stored weights may themselves be digitless or missing; a dropped
  /// criterion must not exclude those records either.
  #[test]
  fn prop_non_numeric_weight_is_dropped(
    weight in "[a-zA-Z -]*",
    stored_weight in proptest::option::of(prop_oneof![
        "[0-9]{1,2} - [0-9]{1,2} kg",
        "[a-z]{1,8}",
    ]),
  ) {
      let with_weight = build_breed_filter(&BreedFilter {
          weight: Some(weight),
          ..Default::default()
      });
      let without_weight = build_breed_filter(&BreedFilter::default());

      let subject = breed(None, stored_weight.as_deref());
      prop_assert_eq!(with_weight.matches(&subject), without_weight.matches(&subject));
  }

  /// An inverted numeric range (low > high) is malformed and therefore
  /// dropped: the filter behaves as if no weight criterion were given.
  #[test]
  fn prop_inverted_weight_range_is_dropped(
    low in 2u32..=120,
    stored in 0u32..=120,
  ) {
      let high = low - 1;
      let predicate = build_breed_filter(&BreedFilter {
          weight: Some(format!("{}-{}", low, high)),
          ..Default::default()
      });
      let stored_weight = format!("{} kg", stored);
      prop_assert!(predicate.matches(&breed(None, Some(&stored_weight))));
  }

  /// A breed whose stored weight lies inside the requested range matches.
  #[test]
  fn prop_weight_inside_range_matches(
    low in 0u32..=118,
    span in 1u32..=2,
  ) {
      let high = low + span;
      let inside = low + span / 2;
      let predicate = build_breed_filter(&BreedFilter {
          weight: Some(format!("{}-{}", low, high)),
          ..Default::default()
      });
      let stored_weight = format!("{} kg", inside);
      prop_assert!(predicate.matches(&breed(None, Some(&stored_weight))));
  }
}
