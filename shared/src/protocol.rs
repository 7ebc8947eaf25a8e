/// Name of the synthetic A record listing every member address
pub const AGGREGATE_RECORD_NAME: &str = "all";

/// Prefix of the TXT record text carrying a service port
pub const TXT_PORT_PREFIX: &str = "port=";
