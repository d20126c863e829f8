use tln_derive::api_model;

#[api_model]
#[derive(Clone, PartialEq)]
pub struct OpeningHours {
    pub open_time: String,
    pub close_time: String,
}

#[api_model]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Restated {
    pub provider_id: String,
}

fn main() {
    let hours: OpeningHours =
        serde_json::from_str(r#"{"openTime":"08:00","closeTime":"18:00"}"#).unwrap();
    assert_eq!(hours.open_time, "08:00");
    assert_eq!(
        serde_json::to_value(&hours).unwrap(),
        serde_json::json!({ "openTime": "08:00", "closeTime": "18:00" })
    );

    let unknown = r#"{"openTime":"08:00","closeTime":"18:00","id":"forced"}"#;
    assert!(serde_json::from_str::<OpeningHours>(unknown).is_err());

    let restated: Restated = serde_json::from_str(r#"{"providerId":"P1"}"#).unwrap();
    assert_eq!(format!("{restated:?}"), r#"Restated { provider_id: "P1" }"#);
    assert!(serde_json::from_str::<Restated>(r#"{"provider_id":"P1"}"#).is_err());

    let _ = <OpeningHours as utoipa::ToSchema>::name();
}
