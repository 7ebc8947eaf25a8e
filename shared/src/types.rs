use indexmap::IndexMap;
use serde::{Deserializer, Serialize, Deserialize};
use serde_json::Value;

/// A memberlist export as written by the mesh daemon.
/// Map fields keep document order so records come out in the order they were exported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberList {
    /// Opaque update counter, passed through to the zone serial
    #[serde(rename = "lastUpdate", default)]
    pub last_update: Value,

    /// `null` counts as no members
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: IndexMap<String, Member>,

    /// Absent when the exporter knows of no services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<IndexMap<String, Service>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Mesh address of the node
    pub addr: String,

    /// Serf member status, e.g. "alive"
    #[serde(rename = "st", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Node names offering the service, in export order
    pub nodes: Vec<String>,

    /// Either a number or a string in the wild
    pub port: Value,
}

/// Flattened record model handed to the zonefile template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZoneData {
    pub serial: Value,
    pub a_records: Vec<ARecord>,
    pub cname_records: Vec<CnameRecord>,
    pub txt_records: Vec<TxtRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ARecord {
    pub name: String,
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CnameRecord {
    pub cname: String,
    pub names: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TxtRecord {
    pub name: String,
    pub text: String,
}
