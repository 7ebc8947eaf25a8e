use std::io::Read;
use std::path::Path;
use serde_json::Value;
use shared::protocol::{AGGREGATE_RECORD_NAME, TXT_PORT_PREFIX};
use shared::types::{ARecord, CnameRecord, MemberList, TxtRecord, ZoneData};
use crate::error::ZonefileError;
use crate::input;
use super::render::Renderer;

/// Parses a member list export and renders it through a zonefile template.
pub struct ZonefileBuilder<R> {
    renderer: R,
    aggregate_name: String,
}

impl<R: Renderer> ZonefileBuilder<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            aggregate_name: AGGREGATE_RECORD_NAME.to_string(),
        }
    }

    /// Rename the synthetic A record that lists every member address
    pub fn with_aggregate_name(mut self, name: impl Into<String>) -> Self {
        self.aggregate_name = name.into();
        self
    }

    /// Read the template at `template_path`, then drain `reader` and render it.
    /// An empty `reader` is `EmptyInput`.
    pub fn build(&self, template_path: &Path, reader: impl Read) -> Result<String, ZonefileError> {
        let template = input::read_template(template_path)?;
        let bytes = input::read_input(reader)?;
        self.render(&template, &bytes)
    }

    /// Render an already read member list. Empty input is a parse error here.
    pub fn render(&self, template: &str, input: &[u8]) -> Result<String, ZonefileError> {
        let list = parse_member_list(input)?;
        let data = zone_data(&list, &self.aggregate_name);
        Ok(self.renderer.render(template, &data)?)
    }
}

pub fn parse_member_list(input: &[u8]) -> Result<MemberList, ZonefileError> {
    Ok(serde_json::from_slice(input)?)
}

/// Flatten a member list into A, CNAME and TXT records.
///
/// Members and services are walked in document order. A non-empty member set
/// gets one extra A record named `aggregate_name` holding every address.
/// Joined fields start with a space: templates in the field depend on it.
pub fn zone_data(list: &MemberList, aggregate_name: &str) -> ZoneData {
    let mut data = ZoneData {
        serial: list.last_update.clone(),
        ..ZoneData::default()
    };

    let mut all_names = Vec::with_capacity(list.members.len());
    let mut all_ips = Vec::with_capacity(list.members.len());
    for (name, member) in &list.members {
        data.a_records.push(ARecord {
            name: name.clone(),
            ip: member.addr.clone(),
            status: member.status.clone(),
        });
        all_names.push(name.as_str());
        all_ips.push(member.addr.as_str());
    }

    if !all_ips.is_empty() {
        data.a_records.push(ARecord {
            name: aggregate_name.to_string(),
            ip: space_prefixed_join(&all_ips),
            status: None,
        });
    }
    tracing::debug!(members = ?all_names, a_records = data.a_records.len(), "Built A records");

    if let Some(services) = &list.services {
        for (name, service) in services {
            data.cname_records.push(CnameRecord {
                cname: name.clone(),
                names: space_prefixed_join(&service.nodes),
            });
            data.txt_records.push(TxtRecord {
                name: name.clone(),
                text: format!("{}{}", TXT_PORT_PREFIX, port_text(&service.port)),
            });
        }
        tracing::debug!(services = services.len(), "Built CNAME and TXT records");
    }

    data
}

/// `["a", "b"]` becomes `" a b"`, and nothing becomes `""`.
fn space_prefixed_join<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().fold(String::new(), |mut acc, item| {
        acc.push(' ');
        acc.push_str(item.as_ref());
        acc
    })
}

fn port_text(port: &Value) -> String {
    match port {
        Value::String(s) => s.clone(),
        // f64 Display drops the fraction of whole numbers: 80.0 prints as 80
        Value::Number(n) if n.is_f64() => n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string()),
        other => other.to_string(),
    }
}
