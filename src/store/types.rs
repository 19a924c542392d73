use serde_json::{json, Value};

/// The per-user document: the linked Codeforces handle and the favorite
/// (to-do) problem ids. The wire format is the store's typed field map, so
/// encoding and decoding are explicit here rather than serde-derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDocument {
    pub codeforces_handle: String,
    pub favorite_problems: Vec<String>,
}

impl UserDocument {
    /// Decode a document resource. Missing or mistyped fields fall back to
    /// defaults; an absent handle or favorites list is normal for a fresh
    /// account.
    pub fn from_document(doc: &Value) -> Self {
        let fields = &doc["fields"];
        let codeforces_handle = fields["codeforcesHandle"]["stringValue"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        let favorite_problems = fields["favoriteProblems"]["arrayValue"]["values"]
            .as_array()
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v["stringValue"].as_str())
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default();
        Self {
            codeforces_handle,
            favorite_problems,
        }
    }
}

/// Field map for a brand-new user document, written right after
/// registration.
pub fn new_user_fields(uid: &str, email: &str) -> Value {
    json!({
        "uid": { "stringValue": uid },
        "email": { "stringValue": email },
        "codeforcesHandle": { "stringValue": "" },
        "favoriteProblems": { "arrayValue": { "values": [] } },
    })
}

/// Field map for a handle update (used with an update mask).
pub fn handle_fields(handle: &str) -> Value {
    json!({
        "codeforcesHandle": { "stringValue": handle },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_roundtrip_shape() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/users/uid-1",
            "fields": {
                "codeforcesHandle": { "stringValue": "tourist" },
                "favoriteProblems": {
                    "arrayValue": { "values": [
                        { "stringValue": "1A" },
                        { "stringValue": "1842B" }
                    ] }
                }
            }
        });
        let user = UserDocument::from_document(&doc);
        assert_eq!(user.codeforces_handle, "tourist");
        assert_eq!(user.favorite_problems, vec!["1A", "1842B"]);
    }

    #[test]
    fn test_missing_fields_decode_to_defaults() {
        let doc = json!({ "fields": {} });
        let user = UserDocument::from_document(&doc);
        assert!(user.codeforces_handle.is_empty());
        assert!(user.favorite_problems.is_empty());
    }

    #[test]
    fn test_empty_favorites_array() {
        let doc = json!({
            "fields": {
                "codeforcesHandle": { "stringValue": "" },
                "favoriteProblems": { "arrayValue": {} }
            }
        });
        let user = UserDocument::from_document(&doc);
        assert!(user.favorite_problems.is_empty());
    }

    #[test]
    fn test_new_user_fields_shape() {
        let fields = new_user_fields("uid-1", "user@example.com");
        assert_eq!(fields["codeforcesHandle"]["stringValue"], "");
        assert_eq!(fields["email"]["stringValue"], "user@example.com");
        assert!(fields["favoriteProblems"]["arrayValue"]["values"]
            .as_array()
            .unwrap()
            .is_empty());
    }
}
