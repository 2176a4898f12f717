use serde_json::json;

use tavily_search::data_models::{DEFAULT_MAX_RESULTS, ImageResult, SearchRequest, SearchResponse};

#[cfg(test)]
mod search_request_tests {
    use super::*;

    #[test]
    fn test_query_only_shape_fills_defaults() {
        let request = SearchRequest::new("rust async");
        let expected = SearchRequest {
            query: "rust async".to_string(),
            auto_parameters: true,
            include_answer: true,
            include_raw_content: true,
            include_images: true,
            include_image_descriptions: true,
            max_results: 20,
        };
        assert_eq!(request, expected);
        assert_eq!(DEFAULT_MAX_RESULTS, 20);
    }

    #[test]
    fn test_wire_field_names() {
        let request = SearchRequest::new("weather").max_results(5);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "query": "weather",
                "auto_parameters": true,
                "include_answer": true,
                "include_raw_content": true,
                "include_images": true,
                "include_image_descriptions": true,
                "max_results": 5,
            })
        );
    }

    #[test]
    fn test_round_trip_keeps_every_field() {
        let requests = [
            SearchRequest::new("a"),
            SearchRequest {
                query: "knoxville weather".to_string(),
                auto_parameters: false,
                include_answer: true,
                include_raw_content: false,
                include_images: true,
                include_image_descriptions: false,
                max_results: 3,
            },
            SearchRequest::new("zero results")
                .include_answer(false)
                .include_images(false)
                .max_results(0),
        ];

        for request in requests {
            let encoded = serde_json::to_string(&request).unwrap();
            let decoded: SearchRequest = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, request);
        }
    }

    #[test]
    fn test_empty_query_refuses_to_encode() {
        for query in ["", "   "] {
            let err = serde_json::to_vec(&SearchRequest::new(query)).unwrap_err();
            assert!(err.to_string().contains("query cannot be empty"));
        }
    }
}

#[cfg(test)]
mod search_response_tests {
    use super::*;

    #[test]
    fn test_decode_full_response() {
        let body = json!({
            "query": "rust",
            "answer": "Rust is a systems language.",
            "results": [
                {
                    "title": "Rust",
                    "url": "https://www.rust-lang.org",
                    "content": "A language empowering everyone",
                    "score": 0.98,
                    "raw_content": null
                }
            ],
            "images": ["https://example.com/a.png"],
            "follow_up_questions": null,
            "response_time": 1.25
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.query, "rust");
        assert_eq!(response.answer, "Rust is a systems language.");
        assert_eq!(response.results.len(), 1);

        let first = &response.results[0];
        assert_eq!(first.title, "Rust");
        assert_eq!(first.url, "https://www.rust-lang.org");
        assert_eq!(first.content(), Some("A language empowering everyone"));
        assert_eq!(first.score(), Some(0.98));
        assert_eq!(first.raw_content(), None);

        assert_eq!(
            response.images,
            vec![ImageResult::Url("https://example.com/a.png".to_string())]
        );
        assert_eq!(response.follow_up_questions, None);
        assert_eq!(response.response_time(), Some(1.25));
    }

    #[test]
    fn test_null_answer_and_missing_images_decode_empty() {
        let response: SearchResponse = serde_json::from_value(json!({
            "query": "q",
            "answer": null,
            "results": []
        }))
        .unwrap();
        assert_eq!(response.answer, "");
        assert!(response.images.is_empty());
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_described_images() {
        let response: SearchResponse = serde_json::from_value(json!({
            "query": "q",
            "results": [],
            "images": [
                {"url": "https://example.com/a.png", "description": "a cat"},
                {"url": "https://example.com/b.png"}
            ]
        }))
        .unwrap();

        assert_eq!(response.images[0].url(), "https://example.com/a.png");
        assert_eq!(response.images[0].description(), Some("a cat"));
        assert_eq!(response.images[1].url(), "https://example.com/b.png");
        assert_eq!(response.images[1].description(), None);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let body = json!({
            "query": "q",
            "answer": "",
            "results": [
                {"title": "t", "url": "https://example.com", "published_date": "2024-01-01"}
            ],
            "request_id": "abc-123"
        });

        let response: SearchResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(response.extra["request_id"], "abc-123");
        assert_eq!(response.results[0].extra["published_date"], "2024-01-01");

        let reencoded = serde_json::to_value(&response).unwrap();
        assert_eq!(reencoded["request_id"], "abc-123");
        assert_eq!(reencoded["results"][0]["published_date"], "2024-01-01");
    }

    #[test]
    fn test_string_response_time() {
        let response: SearchResponse =
            serde_json::from_value(json!({"query": "q", "response_time": "0.5"})).unwrap();
        assert_eq!(response.response_time(), Some(0.5));
    }

    #[test]
    fn test_schema_mismatch_is_an_error() {
        let result = serde_json::from_value::<SearchResponse>(json!({
            "query": "q",
            "results": "not a list"
        }));
        assert!(result.is_err());
    }
}
