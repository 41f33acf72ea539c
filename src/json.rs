//! JSON helpers for HTTP replies and files on disk.

use std::fs;
use std::path::Path;

use http::{HeaderValue, Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Build an HTTP response whose body is `value` encoded as JSON.
///
/// On success the status is `200 OK` with `Content-Type: application/json`.
/// If `value` cannot be serialized, the response is `500 Internal Server
/// Error` carrying the error text as plain text, and the failure is logged.
/// Bodies end with a newline.
pub fn reply_json<T: Serialize + ?Sized>(value: &T) -> Response<String> {
    match serde_json::to_string(value) {
        Ok(mut body) => {
            body.push('\n');
            response(StatusCode::OK, JSON_CONTENT_TYPE, body)
        }
        Err(e) => {
            tracing::error!(error = %e, "JSON encode error");
            response(
                StatusCode::INTERNAL_SERVER_ERROR,
                TEXT_CONTENT_TYPE,
                format!("{e}\n"),
            )
        }
    }
}

fn response(status: StatusCode, content_type: &'static str, body: String) -> Response<String> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

/// Read `path` and decode its contents as `T`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Json`] if
/// its contents are not valid JSON for `T`.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();

    let data =
        fs::read(path).map_err(|e| Error::io(format!("unable to read {}", path.display()), e))?;

    serde_json::from_slice(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `path` as a JSON document whose top level is an object.
///
/// # Errors
///
/// Same as [`read_json`], plus [`Error::NotAnObject`] when the document is
/// valid JSON but not an object (an array, a string, `null`, ...).
pub fn read_json_object(path: impl AsRef<Path>) -> Result<Map<String, Value>> {
    let path = path.as_ref();

    match read_json(path)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde::ser::{Error as _, Serializer};
    use tempfile::TempDir;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot encode this value"))
        }
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Status {
        name: String,
        healthy: bool,
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reply_json_ok() {
        let status = Status {
            name: "api".to_string(),
            healthy: true,
        };
        let response = reply_json(&status);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(response.body(), "{\"name\":\"api\",\"healthy\":true}\n");
    }

    #[test]
    fn test_reply_json_unsized_value() {
        let response = reply_json("plain");
        assert_eq!(response.body(), "\"plain\"\n");
    }

    #[test]
    fn test_reply_json_serialization_failure() {
        let response = reply_json(&Unserializable);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.body(), "cannot encode this value\n");
    }

    #[test]
    fn test_read_json_typed() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "status.json", r#"{"name": "db", "healthy": false}"#);

        let status: Status = read_json(&path).unwrap();
        assert_eq!(
            status,
            Status {
                name: "db".to_string(),
                healthy: false,
            }
        );
    }

    #[test]
    fn test_read_json_object() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "obj.json", r#"{"a": 1, "b": [true, null]}"#);

        let map = read_json_object(&path).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], Value::from(1));
    }

    #[test]
    fn test_read_json_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_json_object(tmp.path().join("missing.json")).unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().starts_with("unable to read"));
    }

    #[test]
    fn test_read_json_invalid_content() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "bad.json", "{ not json");

        assert!(matches!(
            read_json_object(&path),
            Err(Error::Json { .. })
        ));
    }

    #[test]
    fn test_read_json_object_rejects_arrays() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "list.json", "[1, 2, 3]");

        assert!(matches!(
            read_json_object(&path),
            Err(Error::NotAnObject { .. })
        ));
    }
}
