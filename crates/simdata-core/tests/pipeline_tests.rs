//! End-to-end pipeline tests against fake extraction tools.
//!
//! The real casc/dbc extractors need a CDN and game data; these tests stand
//! in small Python scripts with the same commandline surface and observe
//! the pipeline's filesystem contract. Tests that invoke the scripts skip
//! themselves when no Python 3 interpreter is installed.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use simdata_core::{
    BufferSink, Error, ITEM_KEYS, Locale, RefreshConfig, TRANSLATIONS_KEY, extract_tables,
    fetch_all, find_python, update_trinkets,
};

/// Lay out a fake simc checkout containing one tool script.
fn write_tool(simc: &Path, tool_dir: &str, script: &str, body: &str) {
    let dir = simc.join(tool_dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(script), body).unwrap();
}

fn python_available() -> bool {
    if find_python().is_ok() {
        true
    } else {
        eprintln!("skipping: no Python 3 interpreter on this system");
        false
    }
}

#[test]
fn test_fetch_continues_past_failing_locale() {
    if !python_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let simc = dir.path().join("simc");
    write_tool(
        &simc,
        "casc_extract",
        "casc_extract.py",
        r#"
import sys
args = sys.argv[1:]
locale = args[args.index("--locale") + 1]
print("fetching " + locale)
if locale == "ko_KR":
    sys.exit(1)
"#,
    );

    let config = RefreshConfig::new(dir.path().join("out")).with_simc(&simc);
    let mut sink = BufferSink::new();
    let report = fetch_all(&config, &mut sink).unwrap();

    // every locale attempted, only the failing one recorded
    assert_eq!(report.attempted, Locale::ALL.to_vec());
    assert_eq!(report.failed, vec![Locale::KoKr]);
    // stdout of each run was relayed line-by-line
    assert!(sink.lines.contains(&"fetching en_US".to_string()));
    assert!(sink.lines.contains(&"fetching pt_PT".to_string()));
    assert_eq!(sink.lines.len(), Locale::ALL.len());
}

#[test]
fn test_fetch_passes_branch_flag() {
    if !python_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let simc = dir.path().join("simc");
    write_tool(
        &simc,
        "casc_extract",
        "casc_extract.py",
        r#"
import sys
if "--ptr" not in sys.argv:
    sys.exit(1)
print("ok")
"#,
    );

    let mut config = RefreshConfig::new(dir.path().join("out")).with_simc(&simc);
    config.branch = simdata_core::Branch::Ptr;
    let mut sink = BufferSink::new();
    let report = fetch_all(&config, &mut sink).unwrap();
    assert!(report.all_succeeded());
}

#[test]
fn test_extract_writes_compiled_tables_and_skips_failures() {
    if !python_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let simc = dir.path().join("simc");
    write_tool(
        &simc,
        "dbc_extract3",
        "dbc_extract.py",
        r#"
import json
import sys
args = sys.argv[1:]
table = args[-1]
data_path = args[args.index("-p") + 1]
if "it_IT" in data_path:
    sys.stderr.write("no such build\n")
    sys.exit(1)
sys.stdout.write(json.dumps([{"id": 1, "name": "Foo", "table": table}]))
"#,
    );

    let config = RefreshConfig::new(dir.path().join("out")).with_simc(&simc);
    // fetched layout the version detection reads
    fs::create_dir_all(config.locale_dir(Locale::SEED).join("10.1.5.50232")).unwrap();

    let handles = extract_tables(&config, &["ItemSparse"]).unwrap();

    // it_IT failed, everything else produced a handle and a file
    assert_eq!(handles.len(), Locale::ALL.len() - 1);
    assert!(handles.iter().all(|h| h.locale != Locale::ItIt));
    for handle in &handles {
        let payload: Value = serde_json::from_slice(&fs::read(&handle.path).unwrap()).unwrap();
        assert_eq!(payload[0]["table"], json!("ItemSparse"));
    }
    assert!(!config.compiled_dir(Locale::ItIt).join("ItemSparse.json").exists());
}

/// One locale's full `ItemSparse` row for the fake compiled dumps.
fn item_row(name: &str) -> Value {
    json!({
        "id": 178708,
        "name": name,
        "inv_type": 12,
        "quality": 4,
        "ilevel": 200,
        "req_level": 1,
        "race_mask": -1i64,
        "class_mask": -1i64,
        "stat_alloc_1": 6666,
        "stat_type_1": 40,
    })
}

fn write_compiled(config: &RefreshConfig, locale: Locale, rows: &Value) {
    let dir = config.compiled_dir(locale);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("ItemSparse.json"), serde_json::to_vec(rows).unwrap()).unwrap();
}

#[test]
fn test_update_trinkets_from_compiled_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = RefreshConfig::new(dir.path().join("out"));
    config.skip_fetch = true;
    config.skip_extract = true;
    config.data_dir = dir.path().join("data_files");

    for locale in Locale::ALL {
        let mut rows = vec![item_row(&format!("Changeling {locale}"))];
        if locale == Locale::SEED {
            // below the item level floor and not allow-listed: dropped
            rows.push(json!({
                "id": 9999, "name": "Old Relic",
                "inv_type": 12, "quality": 4, "ilevel": 40
            }));
        }
        write_compiled(&config, locale, &Value::Array(rows));
    }

    let artifact = update_trinkets(&config).unwrap();
    assert_eq!(artifact, config.data_dir.join("trinkets.json"));

    let trinkets: Vec<serde_json::Map<String, Value>> =
        serde_json::from_slice(&fs::read(&artifact).unwrap()).unwrap();
    assert_eq!(trinkets.len(), 1);

    let trinket = &trinkets[0];
    let keys: Vec<&str> = trinket.keys().map(String::as_str).collect();
    assert_eq!(keys, ITEM_KEYS);
    assert_eq!(trinket["id"], json!(178708));

    let translations = trinket[TRANSLATIONS_KEY].as_object().unwrap();
    assert_eq!(translations.len(), Locale::ALL.len());
    assert_eq!(translations["en_US"], json!("Changeling en_US"));
    assert_eq!(translations["pt_PT"], json!("Changeling pt_PT"));
}

#[test]
fn test_update_trinkets_rerun_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = RefreshConfig::new(dir.path().join("out"));
    config.skip_fetch = true;
    config.skip_extract = true;
    config.data_dir = dir.path().join("data_files");

    for locale in Locale::ALL {
        write_compiled(
            &config,
            locale,
            &Value::Array(vec![item_row(&format!("Changeling {locale}"))]),
        );
    }

    let first = fs::read(update_trinkets(&config).unwrap()).unwrap();
    let second = fs::read(update_trinkets(&config).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_update_trinkets_fails_on_missing_compiled_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = RefreshConfig::new(dir.path().join("out"));
    config.skip_fetch = true;
    config.skip_extract = true;
    config.data_dir = dir.path().join("data_files");

    // every locale except ru_RU is present
    for locale in Locale::ALL {
        if locale != Locale::RuRu {
            write_compiled(&config, locale, &json!([item_row("Changeling")]));
        }
    }

    let err = update_trinkets(&config).unwrap_err();
    assert!(matches!(err, Error::CompiledTableMissing { .. }));
}
