//! The operation table: every resource/operation pair the node supports,
//! with its API path and parameters.

pub mod body;
pub mod param;

use crate::error::{ItemError, ParameterError};

use param::{ParamDefault, ParamSpec};

use std::fmt;

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

pub const RESOURCE_PARAM: &str = "resource";
pub const OPERATION_PARAM: &str = "operation";

// ============================================
// SELECTORS
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    #[default]
    DataApi,
    WebScraping,
}

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::DataApi, Resource::WebScraping];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::DataApi => "dataApi",
            Resource::WebScraping => "webScraping",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Resource::DataApi => "Data API",
            Resource::WebScraping => "Web Scraping",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resource| resource.as_str() == value)
    }

    /// Operation selected when an item names a resource but no operation.
    pub fn default_operation(&self) -> Operation {
        match self {
            Resource::DataApi => Operation::GetYouTubeTranscript,
            Resource::WebScraping => Operation::ScrapeUrl,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    #[serde(rename = "getGoogleReviews")]
    GetGoogleReviews,
    #[serde(rename = "getTikTokTranscript")]
    GetTikTokTranscript,
    #[serde(rename = "getYouTubeTranscript")]
    GetYouTubeTranscript,
    #[serde(rename = "search")]
    Search,
    #[serde(rename = "searchNews")]
    SearchNews,
    #[serde(rename = "searchPlaces")]
    SearchPlaces,
    #[serde(rename = "scrapeUrl")]
    ScrapeUrl,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::GetGoogleReviews,
        Operation::GetTikTokTranscript,
        Operation::GetYouTubeTranscript,
        Operation::Search,
        Operation::SearchNews,
        Operation::SearchPlaces,
        Operation::ScrapeUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetGoogleReviews => "getGoogleReviews",
            Operation::GetTikTokTranscript => "getTikTokTranscript",
            Operation::GetYouTubeTranscript => "getYouTubeTranscript",
            Operation::Search => "search",
            Operation::SearchNews => "searchNews",
            Operation::SearchPlaces => "searchPlaces",
            Operation::ScrapeUrl => "scrapeUrl",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|operation| operation.as_str() == value)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================
// PARAMETER TABLES
// ============================================

const YOUTUBE_LANGUAGES: &[&str] = &[
    "zh-Hans", "zh-Hant", "en", "fr", "de", "it", "ja", "ko", "pt", "es",
];

const TIKTOK_LANGUAGES: &[&str] = &[
    "ar", "zh", "zh-TW", "nl", "en", "fr", "de", "hi", "it", "ja", "ko", "pt", "ru", "es", "tr",
];

const DATE_RANGES: &[&str] = &[
    "anyTime",
    "pastHour",
    "pastDay",
    "pastWeek",
    "pastMonth",
    "pastYear",
];

const SCRAPE_FORMATS: &[&str] = &["markdown", "html", "screenshot"];

const REVIEW_INPUT_TYPES: &[&str] = &["keyword", "cid", "placeId"];

const REVIEW_SORT_ORDERS: &[&str] = &["highest_rating", "lowest_rating", "newest", "relevant"];

const SCRAPE_OPTIONS: &str = "scrapeOptions";

const YOUTUBE_TRANSCRIPT_PARAMS: &[ParamSpec] = &[
    ParamSpec::string("videoUrl", "Video URL", "")
        .required()
        .describe("The URL of the YouTube video"),
    ParamSpec::boolean("includeTimestamps", "Include Timestamps", true)
        .describe("Whether to include timestamps in the transcript"),
    ParamSpec::number("timestampsToCombine", "Timestamps to Combine", 5, Some(1), None)
        .shown_when("includeTimestamps", ParamDefault::Flag(true))
        .describe("The number of timestamps to combine in the transcript"),
    ParamSpec::options("preferredLanguage", "Preferred Language", YOUTUBE_LANGUAGES, "en")
        .describe("Preferred language for the transcript"),
];

const TIKTOK_TRANSCRIPT_PARAMS: &[ParamSpec] = &[
    ParamSpec::string("videoUrl", "Video URL", "")
        .required()
        .describe("The full URL of the TikTok video"),
    ParamSpec::options("preferredLanguage", "Preferred Language", TIKTOK_LANGUAGES, "en")
        .describe("The 2-letter ISO 639-1 language code for the desired transcript language"),
];

const SEARCH_PARAMS: &[ParamSpec] = &[
    ParamSpec::string("query", "Query", "")
        .required()
        .describe("The search query to perform on Google"),
    ParamSpec::string("country", "Country", ""),
    ParamSpec::string("location", "Location", ""),
    ParamSpec::string("language", "Language", "en"),
    ParamSpec::options("dateRange", "Date Range", DATE_RANGES, "anyTime"),
    ParamSpec::number("page", "Page", 1, Some(1), None),
    ParamSpec::boolean("scrapeResults", "Scrape Results", false)
        .describe("Whether to scrape the content of top search results"),
    ParamSpec::number("numResultsToScrape", "Number of Results to Scrape", 3, Some(1), Some(10))
        .shown_when("scrapeResults", ParamDefault::Flag(true)),
    ParamSpec::options("scrapeFormat", "Scrape Format", SCRAPE_FORMATS, "markdown")
        .shown_when("scrapeResults", ParamDefault::Flag(true))
        .nested(SCRAPE_OPTIONS, "format"),
    ParamSpec::boolean("scrapeCleaned", "Clean Scraped Content", true)
        .shown_when("scrapeResults", ParamDefault::Flag(true))
        .nested(SCRAPE_OPTIONS, "cleaned"),
];

const SEARCH_NEWS_PARAMS: &[ParamSpec] = &[
    ParamSpec::string("query", "Query", "")
        .required()
        .describe("The search query for Google News"),
    ParamSpec::string("country", "Country", ""),
    ParamSpec::string("location", "Location", ""),
    ParamSpec::string("language", "Language", "en"),
    ParamSpec::options("dateRange", "Date Range", DATE_RANGES, "anyTime"),
    ParamSpec::number("page", "Page", 1, Some(1), None),
];

const SEARCH_PLACES_PARAMS: &[ParamSpec] = &[
    ParamSpec::string("query", "Query", "")
        .required()
        .describe("The search query for Google Places"),
    ParamSpec::string("country", "Country", ""),
    ParamSpec::string("location", "Location", ""),
    ParamSpec::string("language", "Language", "en"),
    ParamSpec::number("page", "Page", 1, Some(1), None),
];

const GOOGLE_REVIEWS_PARAMS: &[ParamSpec] = &[
    ParamSpec::options("inputType", "Input Type", REVIEW_INPUT_TYPES, "keyword")
        .selector()
        .describe("How to identify the business for reviews"),
    ParamSpec::string("keyword", "Keyword", "")
        .required()
        .shown_when("inputType", ParamDefault::Text("keyword")),
    ParamSpec::string("cid", "Google CID", "")
        .required()
        .shown_when("inputType", ParamDefault::Text("cid")),
    ParamSpec::string("placeId", "Place ID", "")
        .required()
        .shown_when("inputType", ParamDefault::Text("placeId")),
    ParamSpec::number("reviews", "Number of Reviews", 10, Some(1), Some(4490)),
    ParamSpec::options("sortBy", "Sort By", REVIEW_SORT_ORDERS, "relevant"),
    ParamSpec::string("language", "Language", "en"),
    ParamSpec::string("location", "Location", ""),
];

const SCRAPE_URL_PARAMS: &[ParamSpec] = &[
    ParamSpec::string("url", "URL", "")
        .required()
        .describe("The URL to scrape"),
    ParamSpec::options("format", "Output Format", &["html", "markdown", "screenshot"], "markdown"),
    ParamSpec::boolean("cleaned", "Clean Output", true)
        .describe("Whether the output should be cleaned (removes nav bar, footer, etc.)"),
    ParamSpec::boolean("renderJs", "Render JavaScript", false)
        .describe("Whether to render JavaScript before scraping"),
];

// ============================================
// DESCRIPTORS
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    pub resource: Resource,
    pub operation: Operation,
    pub path: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

pub static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        resource: Resource::DataApi,
        operation: Operation::GetGoogleReviews,
        path: "/get-google-reviews",
        display_name: "Get Google Reviews",
        description: "Get Google Reviews for a place or business",
        params: GOOGLE_REVIEWS_PARAMS,
    },
    OperationDescriptor {
        resource: Resource::DataApi,
        operation: Operation::GetTikTokTranscript,
        path: "/get-tiktok-transcript",
        display_name: "Get TikTok Transcript",
        description: "Retrieve the transcript from a TikTok video",
        params: TIKTOK_TRANSCRIPT_PARAMS,
    },
    OperationDescriptor {
        resource: Resource::DataApi,
        operation: Operation::GetYouTubeTranscript,
        path: "/get-youtube-transcript",
        display_name: "Get YouTube Transcript",
        description: "Extract the transcript from a specified YouTube video URL",
        params: YOUTUBE_TRANSCRIPT_PARAMS,
    },
    OperationDescriptor {
        resource: Resource::DataApi,
        operation: Operation::Search,
        path: "/search",
        display_name: "Search",
        description: "Perform a Google web search with optional content scraping",
        params: SEARCH_PARAMS,
    },
    OperationDescriptor {
        resource: Resource::DataApi,
        operation: Operation::SearchNews,
        path: "/search-news",
        display_name: "Search News",
        description: "Search Google News for articles",
        params: SEARCH_NEWS_PARAMS,
    },
    OperationDescriptor {
        resource: Resource::DataApi,
        operation: Operation::SearchPlaces,
        path: "/search-places",
        display_name: "Search Places",
        description: "Search Google Places for businesses and locations",
        params: SEARCH_PLACES_PARAMS,
    },
    OperationDescriptor {
        resource: Resource::WebScraping,
        operation: Operation::ScrapeUrl,
        path: "/scrape",
        display_name: "Scrape URL",
        description: "Scrape data from a specified URL with formatting options",
        params: SCRAPE_URL_PARAMS,
    },
];

impl OperationDescriptor {
    pub fn find(resource: Resource, operation: Operation) -> Option<&'static OperationDescriptor> {
        OPERATIONS
            .iter()
            .find(|descriptor| descriptor.resource == resource && descriptor.operation == operation)
    }

    pub fn build_body(&self, item: &Map<String, Value>) -> Result<Value, ParameterError> {
        body::build_body(self.params, item).map(Value::Object)
    }
}

/// A request ready to be sent: where to, and with which body.
#[derive(Debug)]
pub struct PreparedRequest {
    pub descriptor: &'static OperationDescriptor,
    pub body: Value,
}

impl PreparedRequest {
    /// Read the resource and operation selectors of an item, find the
    /// matching descriptor and build its body.
    pub fn from_parameters(parameters: &Map<String, Value>) -> Result<Self, ItemError> {
        let resource_name = selector(parameters, RESOURCE_PARAM)?
            .unwrap_or_else(|| Resource::default().as_str());
        let resource = Resource::parse(resource_name)
            .ok_or_else(|| ItemError::unsupported_resource(resource_name))?;

        let operation_name = selector(parameters, OPERATION_PARAM)?
            .unwrap_or_else(|| resource.default_operation().as_str());

        let descriptor = Operation::parse(operation_name)
            .and_then(|operation| OperationDescriptor::find(resource, operation))
            .ok_or_else(|| ItemError::unsupported_operation(resource_name, operation_name))?;

        let body = descriptor.build_body(parameters)?;
        debug!(
            "Prepared {}/{} request for {}",
            descriptor.resource, descriptor.operation, descriptor.path
        );

        Ok(Self { descriptor, body })
    }
}

fn selector<'a>(
    parameters: &'a Map<String, Value>,
    name: &'static str,
) -> Result<Option<&'a str>, ItemError> {
    match parameters.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(ParameterError::invalid_type(name, "string").into()),
    }
}
