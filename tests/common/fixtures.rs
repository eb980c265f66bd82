//! Reusable plugin trees

/// Generic module plus one unrouted REST directory and one entity model
pub const SIMPLE_PROJECT: &[(&str, &str)] = &[
    ("plugins/moduleA.xqy", "xquery version \"1.0-ml\";\n()"),
    (
        "plugins/entities/Customer/REST/input/transform.xqy",
        "xquery version \"1.0-ml\";\n()",
    ),
    ("plugins/entities/Customer/model.json", "{\"info\":{\"title\":\"Customer\"}}"),
];

/// Input and harmonize flows with REST extensions, including a binary module
pub const FLOW_PROJECT: &[(&str, &str)] = &[
    ("plugins/ext/lib.sjs", "module.exports = {};"),
    ("plugins/entities/Order/Order.entity.json", "{\"info\":{\"title\":\"Order\"}}"),
    ("plugins/entities/Order/input/LoadOrders/main.sjs", "function main() {}"),
    (
        "plugins/entities/Order/input/LoadOrders/REST/transforms/ingest.sjs",
        "function transform() {}",
    ),
    (
        "plugins/entities/Order/harmonize/MergeOrders/REST/options/merge.xml",
        "<options/>",
    ),
    (
        "plugins/entities/Order/harmonize/MergeOrders/REST/lib/compiled.jar",
        "PK",
    ),
];
