// Unit tests for request body construction
// One section per operation: defaults omitted, overrides present, conditionals honored

use crate::operation::PreparedRequest;

use serde_json::{Map, Value, json};

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("test parameters must be an object, got {other}"),
    }
}

fn body_for(value: Value) -> Value {
    PreparedRequest::from_parameters(&params(value))
        .expect("request should build")
        .body
}

// ============================================
// YOUTUBE TRANSCRIPT
// ============================================

/// **VALUE**: The canonical YouTube scenario sends only the video URL.
///
/// **WHY THIS MATTERS**: Optional fields equal to their defaults are omitted. The
/// credential test request relies on exactly this body.
///
/// **BUG THIS CATCHES**: Would catch defaults leaking into the body.
#[test]
fn given_youtube_url_with_defaults_when_body_built_then_only_video_url_is_sent() {
    // GIVEN: Only the required field
    let body = body_for(json!({
        "resource": "dataApi",
        "operation": "getYouTubeTranscript",
        "videoUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    }));

    // THEN: Exactly one field
    assert_eq!(
        body,
        json!({ "videoUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" })
    );
}

#[test]
fn given_youtube_defaults_passed_explicitly_when_body_built_then_they_are_still_omitted() {
    let body = body_for(json!({
        "operation": "getYouTubeTranscript",
        "videoUrl": "https://youtu.be/abc",
        "includeTimestamps": true,
        "timestampsToCombine": 5,
        "preferredLanguage": "en"
    }));

    assert_eq!(body, json!({ "videoUrl": "https://youtu.be/abc" }));
}

#[test]
fn given_youtube_overrides_when_body_built_then_overrides_are_sent() {
    let body = body_for(json!({
        "operation": "getYouTubeTranscript",
        "videoUrl": "https://youtu.be/abc",
        "timestampsToCombine": 10,
        "preferredLanguage": "ja"
    }));

    assert_eq!(
        body,
        json!({
            "videoUrl": "https://youtu.be/abc",
            "timestampsToCombine": 10,
            "preferredLanguage": "ja"
        })
    );
}

/// **VALUE**: `timestampsToCombine` only applies while timestamps are included.
///
/// **BUG THIS CATCHES**: Would catch a stale combine count being sent with
/// `includeTimestamps: false`.
#[test]
fn given_timestamps_disabled_when_body_built_then_combine_count_is_dropped() {
    let body = body_for(json!({
        "operation": "getYouTubeTranscript",
        "videoUrl": "https://youtu.be/abc",
        "includeTimestamps": false,
        "timestampsToCombine": 10
    }));

    assert_eq!(
        body,
        json!({ "videoUrl": "https://youtu.be/abc", "includeTimestamps": false })
    );
}

// ============================================
// TIKTOK TRANSCRIPT
// ============================================

#[test]
fn given_tiktok_url_when_body_built_then_language_is_sent_only_when_overridden() {
    let default_body = body_for(json!({
        "operation": "getTikTokTranscript",
        "videoUrl": "https://www.tiktok.com/@user/video/1"
    }));
    let spanish_body = body_for(json!({
        "operation": "getTikTokTranscript",
        "videoUrl": "https://www.tiktok.com/@user/video/1",
        "preferredLanguage": "es"
    }));

    assert_eq!(
        default_body,
        json!({ "videoUrl": "https://www.tiktok.com/@user/video/1" })
    );
    assert_eq!(
        spanish_body,
        json!({ "videoUrl": "https://www.tiktok.com/@user/video/1", "preferredLanguage": "es" })
    );
}

// ============================================
// SEARCH
// ============================================

/// **VALUE**: Scraping options nest under `scrapeOptions` next to the search fields.
///
/// **WHY THIS MATTERS**: The API reads format and cleaning from the nested object; flat
/// `scrapeFormat`/`scrapeCleaned` members would be ignored.
///
/// **BUG THIS CATCHES**: Would catch nested members being flattened or omitted at default.
#[test]
fn given_search_with_scraping_when_body_built_then_scrape_options_are_nested() {
    let body = body_for(json!({
        "operation": "search",
        "query": "rust async runtimes",
        "country": "US",
        "scrapeResults": true,
        "numResultsToScrape": 5,
        "scrapeFormat": "html"
    }));

    assert_eq!(
        body,
        json!({
            "query": "rust async runtimes",
            "country": "US",
            "scrapeResults": true,
            "numResultsToScrape": 5,
            "scrapeOptions": { "format": "html", "cleaned": true }
        })
    );
}

#[test]
fn given_search_without_scraping_when_body_built_then_scrape_fields_are_ignored() {
    let body = body_for(json!({
        "operation": "search",
        "query": "weather",
        "numResultsToScrape": 7,
        "scrapeFormat": "html",
        "scrapeCleaned": false
    }));

    assert_eq!(body, json!({ "query": "weather" }));
}

#[test]
fn given_search_filters_when_body_built_then_non_default_filters_are_sent() {
    let body = body_for(json!({
        "operation": "search",
        "query": "weather",
        "location": "New York, NY",
        "language": "fr",
        "dateRange": "pastWeek",
        "page": 3
    }));

    assert_eq!(
        body,
        json!({
            "query": "weather",
            "location": "New York, NY",
            "language": "fr",
            "dateRange": "pastWeek",
            "page": 3
        })
    );
}

// ============================================
// NEWS / PLACES
// ============================================

#[test]
fn given_news_search_when_body_built_then_only_declared_fields_are_sent() {
    let body = body_for(json!({
        "operation": "searchNews",
        "query": "climate change",
        "dateRange": "pastDay",
        "scrapeResults": true
    }));

    assert_eq!(body, json!({ "query": "climate change", "dateRange": "pastDay" }));
}

#[test]
fn given_places_search_when_body_built_then_date_range_is_not_a_field() {
    let body = body_for(json!({
        "operation": "searchPlaces",
        "query": "pizza restaurants",
        "location": "Chicago, IL",
        "dateRange": "pastDay",
        "page": 2
    }));

    assert_eq!(
        body,
        json!({ "query": "pizza restaurants", "location": "Chicago, IL", "page": 2 })
    );
}

// ============================================
// GOOGLE REVIEWS
// ============================================

/// **VALUE**: Only the identifier chosen by `inputType` is sent; `inputType` is not.
///
/// **BUG THIS CATCHES**: Would catch `inputType` leaking into the body or several
/// identifiers being sent at once.
#[test]
fn given_reviews_by_place_id_when_body_built_then_only_place_id_is_sent() {
    let body = body_for(json!({
        "operation": "getGoogleReviews",
        "inputType": "placeId",
        "keyword": "London Wines",
        "placeId": "ChIJrTLr-GyuEmsRBfy61i59si0",
        "reviews": 50,
        "sortBy": "newest"
    }));

    assert_eq!(
        body,
        json!({
            "placeId": "ChIJrTLr-GyuEmsRBfy61i59si0",
            "reviews": 50,
            "sortBy": "newest"
        })
    );
}

#[test]
fn given_reviews_by_default_keyword_when_body_built_then_keyword_is_sent() {
    let body = body_for(json!({
        "operation": "getGoogleReviews",
        "keyword": "London Wines",
        "location": "London,England,United Kingdom"
    }));

    assert_eq!(
        body,
        json!({ "keyword": "London Wines", "location": "London,England,United Kingdom" })
    );
}

#[test]
fn given_numeric_cid_when_body_built_then_cid_is_sent_as_string() {
    let body = body_for(json!({
        "operation": "getGoogleReviews",
        "inputType": "cid",
        "cid": 1234567890u64
    }));

    assert_eq!(body, json!({ "cid": "1234567890" }));
}

// ============================================
// SCRAPE URL
// ============================================

#[test]
fn given_scrape_url_with_defaults_when_body_built_then_only_url_is_sent() {
    let body = body_for(json!({
        "resource": "webScraping",
        "url": "https://example.com"
    }));

    assert_eq!(body, json!({ "url": "https://example.com" }));
}

#[test]
fn given_scrape_url_overrides_when_body_built_then_all_overrides_are_sent() {
    let body = body_for(json!({
        "resource": "webScraping",
        "operation": "scrapeUrl",
        "url": "https://example.com",
        "format": "screenshot",
        "cleaned": false,
        "renderJs": true
    }));

    assert_eq!(
        body,
        json!({
            "url": "https://example.com",
            "format": "screenshot",
            "cleaned": false,
            "renderJs": true
        })
    );
}
