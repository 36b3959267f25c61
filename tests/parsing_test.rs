use pretty_assertions::assert_eq;
use serde_json::json;

use restcountries_client::api::types::{CountriesResponse, Country, CountryResponse};

#[test]
fn test_parse_single_country_envelope() {
    let body = json!({
        "RestResponse": {
            "messages": ["Country found matching code [IN]."],
            "result": {
                "name": "India",
                "alpha2_code": "IN",
                "alpha3_code": "IND"
            }
        }
    });

    let response: CountryResponse =
        serde_json::from_value(body).expect("Failed to parse single-country envelope");
    assert_eq!(
        response.rest_response.result,
        Country {
            name: "India".to_string(),
            alpha2_code: "IN".to_string(),
            alpha3_code: "IND".to_string(),
        }
    );
    assert_eq!(response.rest_response.messages.len(), 1);
}

#[test]
fn test_parse_country_list_envelope() {
    let body = json!({
        "RestResponse": {
            "messages": ["Total [2] records found."],
            "result": [
                {"name": "Austria", "alpha2_code": "AT", "alpha3_code": "AUT"},
                {"name": "Australia", "alpha2_code": "AU", "alpha3_code": "AUS"}
            ]
        }
    });

    let response: CountriesResponse =
        serde_json::from_value(body).expect("Failed to parse list envelope");
    let countries = &response.rest_response.result;
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].alpha2_code, "AT");
    assert_eq!(countries[1].alpha3_code, "AUS");
}

#[test]
fn test_parse_empty_list_is_not_a_failure() {
    let body = json!({
        "RestResponse": {
            "messages": ["Total [0] records found."],
            "result": []
        }
    });

    let response: CountriesResponse =
        serde_json::from_value(body).expect("Empty result array must still decode");
    assert!(response.rest_response.result.is_empty());
}

#[test]
fn test_parse_missing_messages_defaults_to_empty() {
    let body = json!({
        "RestResponse": {
            "result": {
                "name": "Norway",
                "alpha2_code": "NO",
                "alpha3_code": "NOR"
            }
        }
    });

    let response: CountryResponse =
        serde_json::from_value(body).expect("Missing messages array must still decode");
    assert!(response.rest_response.messages.is_empty());
}

#[test]
fn test_parse_shape_mismatch_fails() {
    // list envelope fed to the single-entity shape
    let body = json!({
        "RestResponse": {
            "messages": [],
            "result": [
                {"name": "Austria", "alpha2_code": "AT", "alpha3_code": "AUT"}
            ]
        }
    });

    assert!(serde_json::from_value::<CountryResponse>(body).is_err());
}

#[test]
fn test_parse_missing_envelope_key_fails() {
    let body = json!({"messages": [], "result": []});
    assert!(serde_json::from_value::<CountriesResponse>(body).is_err());
}
