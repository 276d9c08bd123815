use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;
use tuk_core::{text, xds, CoreConfig, Oid, TukContext, TukError};

fn write_codesystem(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("codesystem.json");
    fs::write(&path, contents).expect("write code system");
    path
}

#[test]
fn load_then_lookup() {
    let dir = TempDir::new().unwrap();
    let path = write_codesystem(&dir, r#"{"X":"Y","Z":"W"}"#);
    let ctx = TukContext::default();

    assert_eq!(ctx.load_code_system(&path).unwrap(), 2);
    assert_eq!(ctx.lookup("X"), "Y");
    assert_eq!(ctx.lookup("Z"), "W");
    assert_eq!(ctx.lookup("Q"), "Q");
}

#[test]
fn failed_reload_keeps_previous_table() {
    let dir = TempDir::new().unwrap();
    let path = write_codesystem(&dir, r#"{"A":"Alpha"}"#);
    let ctx = TukContext::default();
    ctx.load_code_system(&path).unwrap();

    let missing = ctx.load_code_system(&dir.path().join("missing.json"));
    assert!(matches!(missing, Err(TukError::FileRead { .. })));

    fs::write(&path, "not json").unwrap();
    let malformed = ctx.load_code_system(&path);
    assert!(matches!(malformed, Err(TukError::Deserialization { .. })));

    assert_eq!(ctx.lookup("A"), "Alpha");
}

#[test]
fn configured_context_issues_parseable_ids() {
    let dir = TempDir::new().unwrap();
    let path = write_codesystem(&dir, r#"{"PAT":"Patient"}"#);
    let config = CoreConfig::from_env_values(
        Some(path.display().to_string()),
        Some("1.2.826.0.1.3680043".into()),
    )
    .unwrap();
    let ctx = TukContext::from_config(&config).unwrap();

    let ids: Vec<String> = (0..100).map(|_| ctx.new_id()).collect();
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());

    for pair in ids.windows(2) {
        let a: Oid = pair[0].parse().unwrap();
        let b: Oid = pair[1].parse().unwrap();
        assert_eq!(a.root().as_str(), "1.2.826.0.1.3680043");
        assert_eq!(b.seed(), a.seed() + 1);
    }

    assert_eq!(ctx.call("mappedid", &["PAT"]).unwrap(), "Patient");
}

#[test]
fn workflow_document_helpers() {
    let message = "<soap><xdw:XDW.WorkflowDocument><xdw:TaskList/></xdw:XDW.WorkflowDocument></soap>";
    let document = text::xml_node_list(message, "xdw:XDW.WorkflowDocument").unwrap();
    assert!(document.ends_with("</xdw:XDW.WorkflowDocument>"));

    let key = xds::split_xdw_key("UCSP9999999468");
    assert_eq!(key.pathway, "UCSP");
    assert_eq!(key.nhs_id, "9999999468");

    assert_eq!(text::substr("ABCDEFGHIJ", 8, 5), "IJ");
}
