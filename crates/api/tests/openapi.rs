use keywords_api::ApiDoc;
use serde_json::Value;
use utoipa::OpenApi;

fn parameters(doc: &Value, path: &str, method: &str) -> Vec<(String, String)> {
    doc["paths"][path][method]["parameters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|parameter| {
            (
                parameter["name"].as_str().unwrap().to_string(),
                parameter["in"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[test]
fn list_and_delete_options_are_query_parameters() {
    let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

    let list = parameters(&doc, "/api/keywords", "get");
    for name in ["page", "limit", "username"] {
        assert!(list.contains(&(name.to_string(), "query".to_string())), "{name}");
    }

    let delete = parameters(&doc, "/api/keywords", "delete");
    assert_eq!(delete, vec![("id".to_string(), "query".to_string())]);
}

#[test]
fn keyword_id_is_a_path_parameter() {
    let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

    let fetch = parameters(&doc, "/api/keywords/{id}", "get");
    assert_eq!(fetch, vec![("id".to_string(), "path".to_string())]);
}
