//! Embedded annotation viewer links.

use url::Url;

use docdesk_core::config::viewer::ViewerConfig;
use docdesk_core::error::AppError;

/// Query parameter carrying the authentication ticket on content URLs.
const TICKET_PARAM: &str = "alf_ticket";

/// Build the viewer URL for a node content URL and the signed-in user.
///
/// `content_url` looks like
/// `https://host/alfresco/api/.../nodes/<id>/content?alf_ticket=<ticket>`.
/// The viewer lives on the same origin; it receives the node as a store
/// reference, the ticket (when present) and the user id.
pub fn build_viewer_url(
    content_url: &str,
    user_id: &str,
    config: &ViewerConfig,
) -> Result<Url, AppError> {
    if content_url.is_empty() {
        return Err(AppError::validation("Content URL is empty"));
    }
    if user_id.is_empty() {
        return Err(AppError::validation("No signed-in user"));
    }

    let source = Url::parse(content_url)
        .map_err(|e| AppError::validation(format!("Invalid content URL '{content_url}': {e}")))?;

    let origin = source.origin();
    if !origin.is_tuple() {
        return Err(AppError::validation(format!(
            "Content URL '{content_url}' has no origin"
        )));
    }

    let node_id = node_id_from_path(source.path()).ok_or_else(|| {
        AppError::validation(format!("Content URL '{content_url}' does not address node content"))
    })?;

    let ticket = source
        .query_pairs()
        .find(|(name, _)| name == TICKET_PARAM)
        .map(|(_, value)| value.into_owned());

    let viewer_location = format!("{}{}", origin.ascii_serialization(), config.viewer_path);
    let mut viewer = Url::parse(&viewer_location)
        .map_err(|e| AppError::configuration(format!("Invalid viewer path: {e}")))?;

    {
        let mut query = viewer.query_pairs_mut();
        query.append_pair("docId", &format!("{}{node_id}", config.store_prefix));
        if let Some(ticket) = ticket.as_deref() {
            query.append_pair("ticket", ticket);
        }
        query.append_pair("username", user_id);
    }

    Ok(viewer)
}

/// The text between the first `nodes/` and the last `/content` after it.
fn node_id_from_path(path: &str) -> Option<&str> {
    let start = path.find("nodes/")? + "nodes/".len();
    let rest = &path[start..];
    let id = &rest[..rest.rfind("/content")?];
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT_URL: &str = "http://ecm.local:8080/alfresco/api/-default-/public/alfresco/versions/1/nodes/0eb86736-3e91-49de-9354-2dbe2c45d462/content?attachment=false&alf_ticket=TICKET_abc";

    #[test]
    fn test_builds_viewer_url() {
        let url = build_viewer_url(CONTENT_URL, "jdoe", &ViewerConfig::default()).unwrap();

        assert_eq!(url.origin().ascii_serialization(), "http://ecm.local:8080");
        assert_eq!(url.path(), "/OpenAnnotate/viewer.htm");

        let params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            params,
            vec![
                (
                    "docId".to_string(),
                    "workspace://SpacesStore/0eb86736-3e91-49de-9354-2dbe2c45d462".to_string()
                ),
                ("ticket".to_string(), "TICKET_abc".to_string()),
                ("username".to_string(), "jdoe".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_ticket_is_omitted() {
        let url = build_viewer_url(
            "https://ecm.example.com/api/nodes/abc/content",
            "admin",
            &ViewerConfig::default(),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://ecm.example.com/OpenAnnotate/viewer.htm?docId=workspace%3A%2F%2FSpacesStore%2Fabc&username=admin"
        );
    }

    #[test]
    fn test_rejects_non_content_urls() {
        let config = ViewerConfig::default();
        assert!(build_viewer_url("https://ecm.example.com/api/nodes/abc", "admin", &config).is_err());
        assert!(build_viewer_url("https://ecm.example.com/nodes//content", "admin", &config).is_err());
        assert!(build_viewer_url("not a url", "admin", &config).is_err());
        assert!(build_viewer_url("", "admin", &config).is_err());
        assert!(build_viewer_url(CONTENT_URL, "", &config).is_err());
    }

    #[test]
    fn test_node_id_extraction() {
        assert_eq!(node_id_from_path("/x/nodes/abc/content"), Some("abc"));
        assert_eq!(
            node_id_from_path("/x/nodes/abc/versions/1.0/content"),
            Some("abc/versions/1.0")
        );
        assert_eq!(node_id_from_path("/x/nodes/abc/renditions"), None);
    }

    #[test]
    fn test_custom_viewer_config() {
        let config = ViewerConfig {
            viewer_path: "/viewer/index.html".to_string(),
            store_prefix: "archive://SpacesStore/".to_string(),
        };
        let url = build_viewer_url(CONTENT_URL, "jdoe", &config).unwrap();
        assert_eq!(url.path(), "/viewer/index.html");
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "docId" && v.starts_with("archive://SpacesStore/")));
    }
}
