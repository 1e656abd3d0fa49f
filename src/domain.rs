use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// The service wraps lookup responses in a `data` key.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn signup_request_serializes_with_camel_case_keys() {
        let request = SignupRequest {
            email: "jean".to_string(),
            first_name: "dadd".to_string(),
            last_name: "sadasdasda".to_string(),
            password: "yes".to_string(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "email": "jean",
                "firstName": "dadd",
                "lastName": "sadasdasda",
                "password": "yes",
            })
        );
    }

    #[test]
    fn login_request_serializes_with_exactly_two_keys() {
        let request = LoginRequest {
            email: "jean".to_string(),
            password: "yes".to_string(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"email": "jean", "password": "yes"}));
    }

    #[test]
    fn user_envelope_ignores_extra_server_fields() {
        let body = json!({
            "data": {
                "id": 1,
                "email": "jean",
                "firstName": "dadd",
                "lastName": "sadasdasda",
                "hashedPassword": "86ba",
                "createdAt": "2024-01-01T00:00:00.000Z",
            }
        });

        let envelope: DataEnvelope<User> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.data.id, 1);
        assert_eq!(envelope.data.first_name, "dadd");
    }
}
