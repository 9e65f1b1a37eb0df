//! Test fixtures - reusable content constants for tests.

/// Minimal TPC-H connector
pub const TPCH_PROPERTIES: &str = "connector.name=tpch\n";

/// JMX connector with a comment
pub const JMX_PROPERTIES: &str = "# JMX metrics\nconnector.name=jmx\n";

/// Hive connector with continuation lines
pub const HIVE_PROPERTIES: &str = "connector.name=hive-hadoop2\n\
hive.metastore.uri=thrift://metastore:9083\n\
hive.config.resources=/etc/hadoop/conf/core-site.xml,\\\n    /etc/hadoop/conf/hdfs-site.xml\n";

/// Properties file missing `connector.name`
pub const MISSING_CONNECTOR_NAME: &str = "foo=bar\n";

/// Cluster whose hosts refuse SSH immediately (nothing listens on port 1)
pub fn unreachable_cluster(connectors_dir: &str) -> String {
    format!(
        r#"[cluster]
user = "root"
port = 1
coordinator = "127.0.0.1"

[paths]
connectors_dir = "{}"

[ssh]
connect_timeout = 1
"#,
        connectors_dir
    )
}

/// Three-node cluster; only used for pre-flight checks that never connect
pub fn three_node_cluster(connectors_dir: &str) -> String {
    format!(
        r#"[cluster]
coordinator = "master"
workers = ["worker1", "worker2"]

[paths]
connectors_dir = "{}"
"#,
        connectors_dir
    )
}
