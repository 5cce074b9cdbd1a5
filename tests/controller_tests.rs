mod common;

#[cfg(test)]
pub mod controller_tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::common::*;

    use maizul::client::{ApiClient, ClientError};
    use maizul::i18n::Locale;
    use maizul::menu::*;
    use maizul::models::*;

    fn lunch_menu() -> Vec<MenuItem> {
        vec![
            menu_item(MenuCategory::Lunch, 2, &[MenuTag::Popular]),
            menu_item(MenuCategory::Lunch, 1, &[]),
            menu_item(MenuCategory::Breakfast, 0, &[MenuTag::Popular]),
        ]
    }

    #[test]
    fn test_loading_until_fetch_completes() {
        let mut controller =
            MenuController::new(MenuFilter::new(MenuCategory::Lunch));
        assert_eq!(controller.view(Locale::Es), MenuView::Loading);

        let ticket = controller.begin_fetch();
        assert_eq!(controller.state(), &MenuState::Loading);

        assert!(controller.complete(ticket, Ok(lunch_menu())));
        match controller.view(Locale::Es) {
            MenuView::Ready(outcome) => assert_eq!(outcome.items().len(), 2),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller =
            MenuController::new(MenuFilter::new(MenuCategory::Lunch));

        let first = controller.begin_fetch();
        let second = controller.begin_fetch();

        assert!(controller.complete(second, Ok(lunch_menu())));
        assert!(!controller.complete(first, Ok(Vec::new())));

        match controller.state() {
            MenuState::Loaded(items) => assert_eq!(items.len(), 3),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_abandoned_fetch_cannot_update_state() {
        let mut controller =
            MenuController::new(MenuFilter::new(MenuCategory::Lunch));

        let ticket = controller.begin_fetch();
        controller.abandon();

        assert!(!controller.complete(ticket, Ok(lunch_menu())));
        assert_eq!(controller.state(), &MenuState::Idle);
    }

    #[test]
    fn test_failure_is_distinct_from_empty_result() {
        let mut controller =
            MenuController::new(MenuFilter::new(MenuCategory::Dinner));

        let ticket = controller.begin_fetch();
        controller.complete(
            ticket,
            Err(ClientError::Api {
                status: 502,
                detail: "Bad gateway".into(),
            }),
        );
        assert!(matches!(
            controller.view(Locale::En),
            MenuView::Failed { retryable: true, .. }
        ));

        let ticket = controller.begin_fetch();
        controller.complete(ticket, Ok(lunch_menu()));
        assert_eq!(
            controller.view(Locale::En),
            MenuView::Ready(FilterOutcome::NoMatches)
        );
    }

    #[test]
    fn test_filter_changes_apply_without_refetch() {
        let mut controller =
            MenuController::new(MenuFilter::new(MenuCategory::Lunch));
        let ticket = controller.begin_fetch();
        controller.complete(ticket, Ok(lunch_menu()));

        controller.set_tag(TagFilter::Only(MenuTag::Popular));
        match controller.view(Locale::Es) {
            MenuView::Ready(outcome) => {
                assert_eq!(outcome.items().len(), 1);
                assert_eq!(outcome.items()[0].sort_order, 2);
            }
            other => panic!("unexpected view {:?}", other),
        }

        controller.set_category(MenuCategory::Breakfast);
        controller.set_query("platillo 0");
        assert_eq!(controller.filter().category, MenuCategory::Breakfast);
        match controller.view(Locale::Es) {
            MenuView::Ready(outcome) => assert_eq!(outcome.items().len(), 1),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_refresh_fetches_available_items() {
        let server = MockServer::start().await;
        let items = lunch_menu();
        Mock::given(method("GET"))
            .and(path("/api/menu"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!(items)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();
        let mut controller =
            MenuController::new(MenuFilter::new(MenuCategory::Lunch));

        assert!(controller.refresh(&client).await);
        assert_eq!(controller.state(), &MenuState::Loaded(items));
    }
}
