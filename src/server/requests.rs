//! Typed request parameters and their validation.
//!
//! Each endpoint declares a struct of raw inputs and a `validate` method
//! that returns either the parsed request or the list of per-field problems.
//! Nothing here talks to a collaborator; a request that fails validation
//! never reaches one.

use crate::youtube::SearchQuery;
use serde::Deserialize;

/// Maximum search query length, in characters.
pub const MAX_QUERY_CHARS: usize = 100;

/// Bounds for the per-page result count.
pub const MIN_RESULTS: u32 = 1;
pub const MAX_RESULTS: u32 = 50;

/// Raw query parameters for `GET /api/youtube/search`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub q: Option<String>,
    pub max_results: Option<String>,
    pub page_token: Option<String>,
}

impl SearchParams {
    pub fn validate(self, default_max_results: u32) -> Result<SearchQuery, Vec<String>> {
        let mut problems = Vec::new();

        let query = self.q.unwrap_or_default();
        if query.is_empty() {
            problems.push("q is required".to_string());
        } else if query.chars().count() > MAX_QUERY_CHARS {
            problems.push(format!("q must be at most {} characters", MAX_QUERY_CHARS));
        }

        let max_results = match self.max_results.as_deref() {
            None | Some("") => default_max_results,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if (MIN_RESULTS..=MAX_RESULTS).contains(&n) => n,
                _ => {
                    problems.push(format!(
                        "maxResults must be a number between {} and {}",
                        MIN_RESULTS, MAX_RESULTS
                    ));
                    default_max_results
                }
            },
        };

        if !problems.is_empty() {
            return Err(problems);
        }

        Ok(SearchQuery {
            query,
            max_results,
            page_token: self.page_token.filter(|t| !t.is_empty()),
        })
    }
}

/// Raw query parameters for `GET /api/youtube/captions`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionsParams {
    pub video_id: Option<String>,
    pub lang: Option<String>,
}

/// A validated captions request.
#[derive(Debug, Clone)]
pub struct CaptionsRequest {
    pub video_id: String,
    pub lang: String,
}

impl CaptionsParams {
    pub fn validate(self, default_lang: &str) -> Result<CaptionsRequest, Vec<String>> {
        let mut problems = Vec::new();

        let video_id = self.video_id.unwrap_or_default();
        if video_id.is_empty() {
            problems.push("videoId is required".to_string());
        }

        let lang = match self.lang.filter(|l| !l.is_empty()) {
            None => default_lang.to_string(),
            Some(lang) => {
                if lang.chars().count() != 2 {
                    problems.push("lang must be a 2-character language code".to_string());
                }
                lang
            }
        };

        if !problems.is_empty() {
            return Err(problems);
        }

        Ok(CaptionsRequest { video_id, lang })
    }
}

/// Raw JSON body for `POST /api/ai/summarize`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeBody {
    pub captions: Option<String>,
    pub video_title: Option<String>,
}

/// A validated summarize request.
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    pub captions: String,
    pub video_title: String,
}

impl SummarizeBody {
    pub fn validate(self) -> Result<SummarizeRequest, Vec<String>> {
        let mut problems = Vec::new();

        let captions = self.captions.unwrap_or_default();
        if captions.is_empty() {
            problems.push("captions is required".to_string());
        }

        let video_title = self.video_title.unwrap_or_default();
        if video_title.is_empty() {
            problems.push("videoTitle is required".to_string());
        }

        if !problems.is_empty() {
            return Err(problems);
        }

        Ok(SummarizeRequest {
            captions,
            video_title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_empty_query_rejected() {
        let params = SearchParams::default();
        let problems = params.validate(10).unwrap_err();
        assert_eq!(problems, vec!["q is required"]);
    }

    #[test]
    fn test_search_overlong_query_rejected() {
        let params = SearchParams {
            q: Some("x".repeat(101)),
            ..Default::default()
        };
        let problems = params.validate(10).unwrap_err();
        assert!(problems[0].contains("100"));
    }

    #[test]
    fn test_search_query_length_counts_chars() {
        let params = SearchParams {
            q: Some("가".repeat(100)),
            ..Default::default()
        };
        assert!(params.validate(10).is_ok());
    }

    #[test]
    fn test_search_defaults_applied() {
        let params = SearchParams {
            q: Some("rust".to_string()),
            ..Default::default()
        };
        let query = params.validate(10).unwrap();
        assert_eq!(query.max_results, 10);
        assert!(query.page_token.is_none());
    }

    #[test]
    fn test_search_max_results_out_of_range() {
        for raw in ["0", "51", "abc", "-3"] {
            let params = SearchParams {
                q: Some("rust".to_string()),
                max_results: Some(raw.to_string()),
                ..Default::default()
            };
            assert!(params.validate(10).is_err(), "expected {} to fail", raw);
        }
    }

    #[test]
    fn test_search_max_results_in_range() {
        let params = SearchParams {
            q: Some("rust".to_string()),
            max_results: Some("50".to_string()),
            page_token: Some("CAoQAA".to_string()),
        };
        let query = params.validate(10).unwrap();
        assert_eq!(query.max_results, 50);
        assert_eq!(query.page_token.as_deref(), Some("CAoQAA"));
    }

    #[test]
    fn test_search_collects_all_problems() {
        let params = SearchParams {
            q: None,
            max_results: Some("999".to_string()),
            ..Default::default()
        };
        let problems = params.validate(10).unwrap_err();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_captions_video_id_required() {
        let params = CaptionsParams::default();
        let problems = params.validate("ko").unwrap_err();
        assert_eq!(problems, vec!["videoId is required"]);
    }

    #[test]
    fn test_captions_lang_defaults() {
        let params = CaptionsParams {
            video_id: Some("dQw4w9WgXcQ".to_string()),
            lang: None,
        };
        let request = params.validate("ko").unwrap();
        assert_eq!(request.lang, "ko");
    }

    #[test]
    fn test_captions_lang_must_be_two_chars() {
        let params = CaptionsParams {
            video_id: Some("dQw4w9WgXcQ".to_string()),
            lang: Some("eng".to_string()),
        };
        assert!(params.validate("ko").is_err());
    }

    #[test]
    fn test_summarize_requires_both_fields() {
        let problems = SummarizeBody::default().validate().unwrap_err();
        assert_eq!(
            problems,
            vec!["captions is required", "videoTitle is required"]
        );
    }

    #[test]
    fn test_summarize_valid_body() {
        let body = SummarizeBody {
            captions: Some("caption text".to_string()),
            video_title: Some("A title".to_string()),
        };
        let request = body.validate().unwrap();
        assert_eq!(request.video_title, "A title");
    }
}
