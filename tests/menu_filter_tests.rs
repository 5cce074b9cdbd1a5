mod common;

#[cfg(test)]
pub mod menu_filter_tests {
    use super::common::*;

    use maizul::i18n::Locale;
    use maizul::menu::*;
    use maizul::models::*;

    #[test]
    fn test_category_filter_sorts_by_sort_order() {
        let items = vec![
            menu_item(MenuCategory::Lunch, 3, &[]),
            menu_item(MenuCategory::Breakfast, 0, &[]),
            menu_item(MenuCategory::Lunch, 1, &[]),
            menu_item(MenuCategory::Dinner, 2, &[]),
            menu_item(MenuCategory::Lunch, 2, &[]),
        ];

        let filter = MenuFilter::new(MenuCategory::Lunch);
        let result = filter_items(&items, &filter, Locale::Es);

        let orders: Vec<i32> = result.iter().map(|i| i.sort_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert!(result.iter().all(|i| i.category == MenuCategory::Lunch));
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let first = named_item(MenuCategory::Lunch, 1, "Primero", "First");
        let second = named_item(MenuCategory::Lunch, 1, "Segundo", "Second");
        let items = vec![first.clone(), second.clone()];

        let filter = MenuFilter::new(MenuCategory::Lunch);
        let result = filter_items(&items, &filter, Locale::Es);

        assert_eq!(result[0].id, first.id);
        assert_eq!(result[1].id, second.id);
    }

    #[test]
    fn test_query_matches_active_locale_only() {
        let items = vec![fish_tacos()];
        let filter =
            MenuFilter::new(MenuCategory::Breakfast).with_query("TACO");

        assert_eq!(filter_items(&items, &filter, Locale::Es).len(), 1);
        assert!(filter_items(&items, &filter, Locale::En).is_empty());
    }

    #[test]
    fn test_query_matches_description() {
        let items = vec![fish_tacos()];
        let filter =
            MenuFilter::new(MenuCategory::Breakfast).with_query("chipotle");

        assert_eq!(filter_items(&items, &filter, Locale::En).len(), 1);
    }

    #[test]
    fn test_empty_query_matches_everything_in_category() {
        let items =
            vec![fish_tacos(), menu_item(MenuCategory::Breakfast, 2, &[])];
        let filter = MenuFilter::new(MenuCategory::Breakfast).with_query("");

        assert_eq!(filter_items(&items, &filter, Locale::En).len(), 2);
    }

    #[test]
    fn test_tag_filter_scenario() {
        let items = vec![
            menu_item(MenuCategory::Lunch, 2, &[MenuTag::Popular]),
            menu_item(MenuCategory::Lunch, 1, &[]),
            menu_item(MenuCategory::Breakfast, 0, &[MenuTag::Popular]),
        ];

        let filter =
            MenuFilter::new(MenuCategory::Lunch).with_tag(MenuTag::Popular);
        let result = filter_items(&items, &filter, Locale::Es);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].sort_order, 2);
    }

    #[test]
    fn test_no_matches_is_distinct_outcome() {
        let items = vec![menu_item(MenuCategory::Lunch, 1, &[])];
        let filter =
            MenuFilter::new(MenuCategory::Lunch).with_tag(MenuTag::Vegetarian);

        let outcome = apply_filter(&items, &filter, Locale::Es);
        assert_eq!(outcome, FilterOutcome::NoMatches);
        assert!(outcome.is_empty());
        assert!(outcome.items().is_empty());
    }

    #[test]
    fn test_tag_filter_parsing() {
        assert_eq!("".parse::<TagFilter>().unwrap(), TagFilter::All);
        assert_eq!("all".parse::<TagFilter>().unwrap(), TagFilter::All);
        assert_eq!(
            "vegetarian".parse::<TagFilter>().unwrap(),
            TagFilter::Only(MenuTag::Vegetarian)
        );
        assert!("spicy".parse::<TagFilter>().is_err());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let items = vec![
            menu_item(MenuCategory::Lunch, 5, &[]),
            menu_item(MenuCategory::Lunch, 1, &[]),
        ];
        let before = items.clone();

        let filter = MenuFilter::new(MenuCategory::Lunch);
        let _ = filter_items(&items, &filter, Locale::Es);
        assert_eq!(items, before);
    }
}
