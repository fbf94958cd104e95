//! Gateway authorizer wire format.
//!
//! An external API gateway calls the authorizer with the raw token and the
//! ARN of the method being invoked, and expects an IAM-style policy back.

use serde::{Deserialize, Serialize};

/// IAM policy language version understood by the gateway.
pub const POLICY_VERSION: &str = "2012-10-17";

/// Action granted by an authorizer statement.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Event sent by the gateway to the authorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerRequest {
    /// Event type, usually `TOKEN`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Raw `Authorization` header value.
    #[serde(default)]
    pub authorization_token: Option<String>,
    /// ARN of the invoked method. Without it no policy document is returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_arn: Option<String>,
}

/// Authorizer answer: principal plus an optional policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub principal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<PolicyDocument>,
}

impl AuthorizerResponse {
    /// Build a response. The policy document is only attached when both an
    /// effect and a resource are known.
    pub fn new(
        principal_id: impl Into<String>,
        effect: Option<&str>,
        resource: Option<&str>,
    ) -> Self {
        let policy_document = match (effect, resource) {
            (Some(effect), Some(resource)) => Some(PolicyDocument::single(effect, resource)),
            _ => None,
        };

        Self {
            principal_id: principal_id.into(),
            policy_document,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    /// A document with one invoke statement.
    pub fn single(effect: &str, resource: &str) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![Statement {
                action: INVOKE_ACTION.to_string(),
                effect: effect.to_string(),
                resource: resource.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub action: String,
    pub effect: String,
    pub resource: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_response_wire_shape() {
        let response = AuthorizerResponse::new("a@example.com", Some("Allow"), Some("arn:x"));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "principalId": "a@example.com",
                "policyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Action": "execute-api:Invoke",
                        "Effect": "Allow",
                        "Resource": "arn:x"
                    }]
                }
            })
        );
    }

    #[test]
    fn test_policy_document_omitted_without_resource() {
        let response = AuthorizerResponse::new("a@example.com", Some("Allow"), None);
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("policyDocument").is_none());
    }

    #[test]
    fn test_request_parses_gateway_event() {
        let request: AuthorizerRequest = serde_json::from_str(
            r#"{"type":"TOKEN","authorizationToken":"Bearer abc","methodArn":"arn:m"}"#,
        )
        .unwrap();

        assert_eq!(request.event_type.as_deref(), Some("TOKEN"));
        assert_eq!(request.authorization_token.as_deref(), Some("Bearer abc"));
        assert_eq!(request.method_arn.as_deref(), Some("arn:m"));
    }

    #[test]
    fn test_request_without_method_arn() {
        let request: AuthorizerRequest =
            serde_json::from_str(r#"{"authorizationToken":"Bearer abc"}"#).unwrap();

        assert_eq!(request.method_arn, None);
    }
}
