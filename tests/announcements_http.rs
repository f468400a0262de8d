use axum::http::StatusCode;
use faculty_portal::application::queries::QuerySettings;
use faculty_portal::domain::content::{FilterPolicy, PageLimits};
use faculty_portal::domain::language::SupportedLanguages;
use std::sync::Arc;
use std::time::Duration;

mod support;
use support::*;

fn router_over(items: Vec<StoredAnnouncement>) -> (axum::Router, Arc<InMemoryAnnouncements>) {
    let repo = Arc::new(InMemoryAnnouncements::new(items));
    let app = make_router(repo.clone(), Arc::new(InMemoryFaculty::default()));
    (app, repo)
}

#[tokio::test]
async fn and_mode_requires_every_tag() {
    let (app, _) = router_over(tag_example());
    let body = get_json(&app, "/api/v1/announcements?languageId=0&tags=1&tags=2&mode=and").await;
    assert_eq!(titles(&body), vec!["A-0"]);
}

#[tokio::test]
async fn or_mode_requires_any_tag() {
    let (app, _) = router_over(tag_example());
    let body = get_json(&app, "/api/v1/announcements?languageId=0&tags=1,2&mode=or").await;
    assert_eq!(titles(&body), vec!["C-0", "B-0", "A-0"]);
}

#[tokio::test]
async fn empty_tag_list_is_unrestricted_in_both_modes() {
    let (app, _) = router_over(tag_example());
    for uri in [
        "/api/v1/announcements?languageId=0",
        "/api/v1/announcements?languageId=0&tags=&mode=or",
        "/api/v1/announcements?languageId=0&mode=and",
    ] {
        let body = get_json(&app, uri).await;
        assert_eq!(titles(&body), vec!["C-0", "B-0", "A-0"], "uri: {uri}");
    }
}

#[tokio::test]
async fn pages_split_latest_first_and_run_out() {
    let (app, _) = router_over(page_example());
    let page = |n: i64| format!("/api/v1/announcements?languageId=1&amount=2&page={n}");

    assert_eq!(titles(&get_json(&app, &page(1)).await), vec!["D-1", "C-1"]);
    assert_eq!(titles(&get_json(&app, &page(2)).await), vec!["B-1", "A-1"]);
    assert!(titles(&get_json(&app, &page(3)).await).is_empty());

    let count = get_json(&app, "/api/v1/announcements/pages?amount=2").await;
    assert_eq!(count, serde_json::json!({ "pageNumber": 2 }));
}

#[tokio::test]
async fn concatenated_pages_equal_the_unpaginated_listing() {
    // Two items share a publish hour so the id tiebreak matters.
    let items: Vec<_> = (1..=7)
        .map(|id| announcement(id, &format!("n{id}"), &[id % 2 + 1], id / 2))
        .collect();
    let (app, _) = router_over(items);

    for amount in 1..=4 {
        let uri = format!("/api/v1/announcements/pages?tags=1,2&amount={amount}");
        let count = get_json(&app, &uri).await;
        let pages = count["pageNumber"].as_u64().unwrap() as i64;
        assert_eq!(pages, (7 + amount - 1) / amount);

        let mut joined = Vec::new();
        for page in 1..=pages {
            let body = get_json(
                &app,
                &format!("/api/v1/announcements?languageId=0&tags=1,2&amount={amount}&page={page}"),
            )
            .await;
            joined.extend(titles(&body));
        }
        let all = get_json(&app, "/api/v1/announcements?languageId=0&tags=1,2&amount=100").await;
        assert_eq!(joined, titles(&all), "amount {amount}");
        assert_eq!(
            titles(&all),
            vec!["n7-0", "n6-0", "n5-0", "n4-0", "n3-0", "n2-0", "n1-0"]
        );

        let uri = format!(
            "/api/v1/announcements?languageId=0&tags=1,2&amount={amount}&page={}",
            pages + 1
        );
        let past_end = get_json(&app, &uri).await;
        assert!(titles(&past_end).is_empty());
    }
}

#[tokio::test]
async fn time_window_is_half_open() {
    let (app, _) = router_over(tag_example());
    let uri = format!(
        "/api/v1/announcements?languageId=0&from={}&to={}",
        millis(2),
        millis(3)
    );
    assert_eq!(titles(&get_json(&app, &uri).await), vec!["B-0"]);
}

#[tokio::test]
async fn pinned_listing_returns_only_pinned_matches() {
    let (app, _) = router_over(tag_example());
    let body = get_json(&app, "/api/v1/announcements/pinned?languageId=0&tags=1").await;
    assert_eq!(titles(&body), vec!["A-0"]);
    assert_eq!(body[0]["isPinned"], true);

    let none = get_json(&app, "/api/v1/announcements/pinned?languageId=0&tags=3").await;
    assert!(titles(&none).is_empty());
}

#[tokio::test]
async fn pinned_listing_can_rank_by_views() {
    let items = vec![
        viewed(pinned(announcement(1, "old-popular", &[1], 1)), 50),
        viewed(pinned(announcement(2, "new-quiet", &[1], 5)), 1),
        viewed(announcement(3, "unpinned", &[1], 3), 90),
    ];
    let (app, _) = router_over(items);

    let body = get_json(&app, "/api/v1/announcements/pinned?languageId=0&order=views").await;
    assert_eq!(titles(&body), vec!["old-popular-0", "new-quiet-0"]);

    let body = get_json(&app, "/api/v1/announcements/pinned?languageId=0").await;
    assert_eq!(titles(&body), vec!["new-quiet-0", "old-popular-0"]);
}

#[tokio::test]
async fn hot_listing_orders_by_views() {
    let items = vec![
        viewed(announcement(1, "old-popular", &[], 1), 50),
        viewed(announcement(2, "new-quiet", &[], 5), 1),
        viewed(announcement(3, "mid", &[], 3), 50),
    ];
    let (app, _) = router_over(items);
    let body = get_json(&app, "/api/v1/announcements/hot?languageId=0").await;
    assert_eq!(titles(&body), vec!["mid-0", "old-popular-0", "new-quiet-0"]);
}

#[tokio::test]
async fn tv_feed_takes_the_latest_matches() {
    let (app, _) = router_over(tag_example());
    let body = get_json(&app, "/api/v1/announcements/tv?languageId=1&tags=2&amount=1").await;
    assert_eq!(titles(&body), vec!["B-1"]);
}

#[tokio::test]
async fn announcement_json_shape() {
    let item = with_file(viewed(announcement(4, "E", &[3, 1], 0), 9), 11, &[0, 1]);
    let (app, _) = router_over(vec![item]);
    let body = get_json(&app, "/api/v1/announcements/4?languageId=0").await;
    assert_eq!(
        body,
        serde_json::json!({
            "announcementId": 4,
            "author": "registrar",
            "publishTime": millis(0),
            "updateTime": millis(0),
            "views": 9,
            "isPinned": false,
            "tags": [3, 1],
            "files": [{ "path": "/files/11-0.pdf", "name": "file 11" }],
            "title": "E-0",
            "content": "body of E"
        })
    );
}

#[tokio::test]
async fn attachments_without_the_language_are_dropped_and_flagged() {
    let item = with_file(with_file(announcement(4, "E", &[], 0), 11, &[1]), 12, &[0, 1]);
    let (app, _) = router_over(vec![item]);
    let body = get_json(&app, "/api/v1/announcements/4?languageId=0").await;
    assert_eq!(body["files"].as_array().unwrap().len(), 1);
    assert_eq!(body["files"][0]["name"], "file 12");
    assert_eq!(body["degraded"], true);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let (app, _) = router_over(tag_example());
    let resp = send(&app, "/api/v1/announcements/99?languageId=0").await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn missing_localization_is_not_found() {
    let (app, _) = router_over(vec![only_language(announcement(1, "A", &[], 0), 1)]);
    let resp = send(&app, "/api/v1/announcements/1?languageId=0").await;
    let body = assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert!(body["message"].as_str().unwrap().contains("missing localization"));

    let resp = send(&app, "/api/v1/announcements?languageId=0").await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn unsupported_language_fails_before_storage() {
    let (app, repo) = router_over(tag_example());
    for uri in [
        "/api/v1/announcements/1?languageId=7",
        "/api/v1/announcements/1",
        "/api/v1/announcements?languageId=-1",
        "/api/v1/announcements/pinned?languageId=en",
        "/api/v1/announcements/tv?languageId=2",
    ] {
        let resp = send(&app, uri).await;
        let body = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
        assert!(
            body["message"].as_str().unwrap().contains("invalid language"),
            "uri {uri}: {body}"
        );
    }
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn invalid_filters_are_bad_requests() {
    let (app, repo) = router_over(tag_example());
    for uri in [
        "/api/v1/announcements?languageId=0&amount=0",
        "/api/v1/announcements?languageId=0&amount=-3",
        "/api/v1/announcements?languageId=0&page=0",
        "/api/v1/announcements?languageId=0&tags=-1",
        "/api/v1/announcements?languageId=0&tags=x",
        "/api/v1/announcements?languageId=0&mode=xor",
        "/api/v1/announcements?languageId=0&from=10&to=5",
        "/api/v1/announcements?languageId=0&from=-1000000000000000",
        "/api/v1/announcements/pages?to=-1000000000000000",
        "/api/v1/announcements/pinned?languageId=0&order=random",
        "/api/v1/announcements/pages?amount=0",
        "/api/v1/announcements/abc?languageId=0",
        "/api/v1/announcements/0?languageId=0",
    ] {
        let resp = send(&app, uri).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri {uri}");
    }
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn oversized_amount_is_clamped() {
    let limits = PageLimits::new(2, 3).unwrap();
    let settings = QuerySettings::new(
        FilterPolicy::new(SupportedLanguages::default(), limits),
        Duration::from_secs(5),
    );
    let repo = Arc::new(InMemoryAnnouncements::new(page_example()));
    let app = make_router_with(repo, Arc::new(InMemoryFaculty::default()), settings);

    let body = get_json(&app, "/api/v1/announcements?languageId=0&amount=1000").await;
    assert_eq!(titles(&body), vec!["D-0", "C-0", "B-0"]);

    let body = get_json(&app, "/api/v1/announcements?languageId=0").await;
    assert_eq!(titles(&body), vec!["D-0", "C-0"]);
}

#[tokio::test]
async fn storage_failure_is_a_server_error() {
    let app = make_router(
        Arc::new(UnavailableAnnouncements),
        Arc::new(InMemoryFaculty::default()),
    );
    let resp = send(&app, "/api/v1/announcements?languageId=0").await;
    let body =
        assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            .await;
    assert_eq!(body["message"], "storage unavailable");
}

#[tokio::test]
async fn slow_storage_times_out() {
    let settings = QuerySettings::new(FilterPolicy::default(), Duration::from_millis(20));
    let app = make_router_with(
        Arc::new(StalledAnnouncements(Duration::from_secs(5))),
        Arc::new(InMemoryFaculty::default()),
        settings,
    );
    let resp = send(&app, "/api/v1/announcements/pages").await;
    assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
}
