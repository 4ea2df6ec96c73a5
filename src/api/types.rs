//! Parameter types shared by the facades.
//!
//! Panel payloads stay opaque (`serde_json::Value`); only the request shapes
//! this crate assembles itself are typed here.

use serde::{Deserialize, Serialize};

use crate::error::{McsmError, Result};

/// One or more identifiers, always sent as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uuids(Vec<String>);

impl Uuids {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject an empty list or blank entries.
    pub(crate) fn validate(&self, what: &str) -> Result<()> {
        if self.0.is_empty() {
            return Err(McsmError::InvalidInput(format!("{} must not be empty", what)));
        }
        if self.0.iter().any(|id| id.trim().is_empty()) {
            return Err(McsmError::InvalidInput(format!(
                "{} must not contain blank identifiers",
                what
            )));
        }
        Ok(())
    }
}

impl From<&str> for Uuids {
    fn from(id: &str) -> Self {
        Self(vec![id.to_string()])
    }
}

impl From<String> for Uuids {
    fn from(id: String) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<String>> for Uuids {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl From<Vec<&str>> for Uuids {
    fn from(ids: Vec<&str>) -> Self {
        Self(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Uuids {
    fn from(ids: &[&str]) -> Self {
        Self(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Uuids {
    fn from(ids: [&str; N]) -> Self {
        Self(ids.iter().map(|id| id.to_string()).collect())
    }
}

/// Page cursor for search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

/// Registration payload for a remote node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRemote {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub ip: String,
    pub port: u16,
    pub remarks: String,
}

/// Partial update of a remote node. Unset fields are not transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUpdate {
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl RemoteUpdate {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Batch instance deletion under one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteInstances {
    pub uuids: Uuids,
    #[serde(rename = "deleteFile")]
    pub delete_file: bool,
}

impl DeleteInstances {
    pub fn new(uuids: impl Into<Uuids>, delete_file: bool) -> Self {
        Self {
            uuids: uuids.into(),
            delete_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_uuid_becomes_list() {
        let ids = Uuids::from("u1");
        assert_eq!(serde_json::to_value(&ids).unwrap(), json!(["u1"]));

        let ids = Uuids::from(["u1", "u2"]);
        assert_eq!(ids.len(), 2);
        assert_eq!(serde_json::to_value(&ids).unwrap(), json!(["u1", "u2"]));
    }

    #[test]
    fn test_uuids_validation() {
        assert!(Uuids::from(Vec::<String>::new()).validate("uuids").is_err());
        assert!(Uuids::from(["ok", ""]).validate("uuids").is_err());
        assert!(Uuids::from("ok").validate("uuids").is_ok());
    }

    #[test]
    fn test_pagination_defaults() {
        let page = Pagination::default();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
    }

    #[test]
    fn test_remote_update_omits_unset_fields() {
        let update = RemoteUpdate::default().with_remarks("backup node");
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"remarks": "backup node"})
        );
        assert!(RemoteUpdate::default().is_empty());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_new_remote_wire_names() {
        let remote = NewRemote {
            api_key: "daemon-key".into(),
            ip: "10.0.0.2".into(),
            port: 24444,
            remarks: "eu-1".into(),
        };
        assert_eq!(
            serde_json::to_value(&remote).unwrap(),
            json!({"apiKey": "daemon-key", "ip": "10.0.0.2", "port": 24444, "remarks": "eu-1"})
        );
    }

    #[test]
    fn test_delete_instances_wire_names() {
        let req = DeleteInstances::new("e11b018bc6514c7385bf923a3e048772", false);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"uuids": ["e11b018bc6514c7385bf923a3e048772"], "deleteFile": false})
        );
    }
}
