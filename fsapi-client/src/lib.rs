//! Private HTTP client for the Frontier Silicon remote-control API (FSAPI)
//!
//! This crate provides a minimal blocking transport for the GET-style FSAPI
//! exposed by network audio receivers, plus typed extraction of the small
//! XML payloads the API returns (`<sessionId>`, `<value>`, `<u8>`, `<u32>`).

mod error;

pub use error::ClientError;

use std::time::Duration;
use xmltree::Element;

/// A minimal blocking client for FSAPI endpoints
#[derive(Debug, Clone)]
pub struct FsapiClient {
    agent: ureq::Agent,
}

impl FsapiClient {
    /// Create a new client with default timeout configuration
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
        }
    }

    /// Issue a GET request and return the parsed response document
    ///
    /// A non-200 status maps to `ClientError::Status` so callers can
    /// distinguish "device said no" (typically an expired session) from
    /// transport failures.
    pub fn get(&self, url: &str) -> Result<Element, ClientError> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(ClientError::Status(code)),
            Err(e) => return Err(ClientError::Network(e.to_string())),
        };

        let body = response
            .into_string()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Element::parse(body.as_bytes()).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

impl Default for FsapiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first element named `name` anywhere in the document
///
/// FSAPI nests its payloads (`<fsapiResponse><value><u8>…`), so extraction
/// walks the whole tree rather than assuming a fixed depth.
pub fn find_tag<'a>(root: &'a Element, name: &str) -> Result<&'a Element, ClientError> {
    fn walk<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
        if element.name == name {
            return Some(element);
        }
        element
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .find_map(|child| walk(child, name))
    }

    walk(root, name).ok_or_else(|| ClientError::Parse(format!("Missing <{}> element", name)))
}

/// Extract the text content of the first `name` element
pub fn read_text(root: &Element, name: &str) -> Result<String, ClientError> {
    let element = find_tag(root, name)?;
    element
        .get_text()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ClientError::Parse(format!("Empty <{}> element", name)))
}

/// Extract and parse a `<u8>` payload
pub fn read_u8(root: &Element) -> Result<u8, ClientError> {
    let text = read_text(root, "u8")?;
    text.parse()
        .map_err(|_| ClientError::Parse(format!("Invalid <u8> value '{}'", text)))
}

/// Extract and parse a `<u32>` payload
pub fn read_u32(root: &Element) -> Result<u32, ClientError> {
    let text = read_text(root, "u32")?;
    text.parse()
        .map_err(|_| ClientError::Parse(format!("Invalid <u32> value '{}'", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_find_tag_at_depth() {
        let xml = parse(
            r#"<fsapiResponse>
                <status>FS_OK</status>
                <value><u32>180</u32></value>
            </fsapiResponse>"#,
        );

        let result = find_tag(&xml, "u32").unwrap();
        assert_eq!(result.name, "u32");
    }

    #[test]
    fn test_find_tag_missing() {
        let xml = parse("<fsapiResponse><status>FS_OK</status></fsapiResponse>");

        let result = find_tag(&xml, "sessionId");
        assert!(result.is_err());
        match result.unwrap_err() {
            ClientError::Parse(msg) => assert!(msg.contains("Missing <sessionId> element")),
            _ => panic!("Expected ClientError::Parse"),
        }
    }

    #[test]
    fn test_read_text_session_id() {
        let xml = parse("<fsapiResponse><sessionId>1694035521</sessionId></fsapiResponse>");

        let sid = read_text(&xml, "sessionId").unwrap();
        assert_eq!(sid, "1694035521");
    }

    #[test]
    fn test_read_text_empty_element() {
        let xml = parse("<fsapiResponse><sessionId></sessionId></fsapiResponse>");

        let result = read_text(&xml, "sessionId");
        assert!(result.is_err());
        match result.unwrap_err() {
            ClientError::Parse(msg) => assert!(msg.contains("Empty <sessionId> element")),
            _ => panic!("Expected ClientError::Parse"),
        }
    }

    #[test]
    fn test_read_u8() {
        let xml = parse("<fsapiResponse><value><u8>2</u8></value></fsapiResponse>");
        assert_eq!(read_u8(&xml).unwrap(), 2);
    }

    #[test]
    fn test_read_u8_malformed_number() {
        let xml = parse("<fsapiResponse><value><u8>paused</u8></value></fsapiResponse>");

        let result = read_u8(&xml);
        assert!(result.is_err());
        match result.unwrap_err() {
            ClientError::Parse(msg) => assert!(msg.contains("Invalid <u8> value 'paused'")),
            _ => panic!("Expected ClientError::Parse"),
        }
    }

    #[test]
    fn test_read_u32() {
        let xml = parse("<fsapiResponse><value><u32>180</u32></value></fsapiResponse>");
        assert_eq!(read_u32(&xml).unwrap(), 180);
    }

    #[test]
    fn test_read_u32_out_of_range() {
        let xml = parse("<fsapiResponse><value><u32>-1</u32></value></fsapiResponse>");

        let result = read_u32(&xml);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClientError::Parse(_)));
    }

    #[test]
    fn test_get_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/fsapi/GET/netRemote.sys.mode")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<fsapiResponse><status>FS_OK</status><value><u32>1</u32></value></fsapiResponse>")
            .create();

        let client = FsapiClient::new();
        let url = format!("{}/fsapi/GET/netRemote.sys.mode?pin=1234", server.url());
        let xml = client.get(&url).unwrap();

        assert_eq!(read_u32(&xml).unwrap(), 1);
        mock.assert();
    }

    #[test]
    fn test_get_non_success_status() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/fsapi/GET/netRemote.sys.mode")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .create();

        let client = FsapiClient::new();
        let url = format!("{}/fsapi/GET/netRemote.sys.mode?pin=1234", server.url());

        match client.get(&url) {
            Err(ClientError::Status(code)) => assert_eq!(code, 403),
            other => panic!("Expected ClientError::Status, got {:?}", other),
        }
    }

    #[test]
    fn test_get_malformed_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/fsapi/CREATE_SESSION")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<fsapiResponse><sessionId>12345")
            .create();

        let client = FsapiClient::new();
        let url = format!("{}/fsapi/CREATE_SESSION?pin=1234", server.url());

        assert!(matches!(client.get(&url), Err(ClientError::Parse(_))));
    }
}
