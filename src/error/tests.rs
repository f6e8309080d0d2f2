//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod espn_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let espn_error = EspnError::from(json_error);

        match espn_error {
            EspnError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("bad\nheader").unwrap_err();
        let espn_error = EspnError::from(header_error);

        match espn_error {
            EspnError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let espn_error = EspnError::from(parse_error);

        assert!(matches!(espn_error, EspnError::InvalidNumber(_)));
        assert!(espn_error.is_configuration());
    }

    #[test]
    fn test_upstream_error_includes_status_and_body() {
        let error = EspnError::Upstream {
            status: 401,
            body: "{\"messages\":[\"not authorized\"]}".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("HTTP 401"));
        assert!(error_string.contains("not authorized"));
        assert!(!error.is_configuration());
    }

    #[test]
    fn test_missing_credentials_lists_variables() {
        let error = EspnError::MissingCredentials {
            missing: vec!["ESPN_SWID".to_string(), "ESPN_S2".to_string()],
        };

        assert_eq!(
            error.to_string(),
            "Missing env vars ESPN_SWID and/or ESPN_S2 (private league)"
        );
        assert!(error.is_configuration());
    }

    #[test]
    fn test_missing_league_state() {
        let error = EspnError::MissingLeagueState {
            field: "scoringPeriodId",
        };

        assert!(error.to_string().contains("scoringPeriodId"));
        assert!(error.is_configuration());
    }

    #[test]
    fn test_error_source_chain() {
        let json_error = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let espn_error = EspnError::from(json_error);

        let error_trait: &dyn std::error::Error = &espn_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(EspnError::MissingLeagueState {
                field: "currentMatchupPeriod",
            })
        }

        match test_function().unwrap_err() {
            EspnError::MissingLeagueState { field } => assert_eq!(field, "currentMatchupPeriod"),
            _ => panic!("Expected MissingLeagueState error"),
        }
    }
}
