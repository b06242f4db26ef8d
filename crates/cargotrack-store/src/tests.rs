//! Tests for the record store, lookups, dataset replacement, and feedback log.

use super::*;
use cargotrack_core::config::StoreConfig;
use tempfile::tempdir;

const HEADER: &str =
    "Shipment Tracking Code,Shipping Name,Package Number,Weight/KG,Quantity,Flight,Customer code";

fn store_in(dir: &std::path::Path) -> RecordStore {
    RecordStore::new(StoreConfig {
        data_dir: dir.to_string_lossy().into_owned(),
    })
}

fn sample_csv() -> String {
    format!(
        "{HEADER}\n\
         TRK001,Phone case,P-12,0.4,3,FL-201,CUST7\n\
         trk002,Headphones,P-13,0.8,1,FL-201,CUST7\n\
         TRK003,Blender,P-20,2.5,1,FL-305,CUST9\n"
    )
}

#[test]
fn test_load_with_no_files_is_empty() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    assert!(store.load().records.is_empty());
}

#[test]
fn test_tracking_lookup_is_case_and_whitespace_insensitive() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    std::fs::write(store.config().csv_path(), sample_csv()).unwrap();

    for query in ["TRK001", "trk001", "  TRK001  ", "Trk001"] {
        let hits = store.search_by_tracking_code(query);
        assert_eq!(hits.len(), 1, "query {query:?} should match");
        assert_eq!(hits[0].shipping_name, "Phone case");
        assert_eq!(hits[0].customer_code, "CUST7");
    }

    // Cell-side normalization too: the stored code is lowercase.
    let hits = store.search_by_tracking_code("TRK002");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].shipping_name, "Headphones");
}

#[test]
fn test_tracking_lookup_absent_code_is_empty() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    std::fs::write(store.config().csv_path(), sample_csv()).unwrap();
    assert!(store.search_by_tracking_code("TRK999").is_empty());
}

#[test]
fn test_customer_lookup_returns_all_rows_in_table_order() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    std::fs::write(store.config().csv_path(), sample_csv()).unwrap();

    let hits = store.search_by_customer_code(" cust7 ");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].tracking_code, "TRK001");
    assert_eq!(hits[1].tracking_code, "trk002");

    assert!(store.search_by_customer_code("nobody").is_empty());
}

#[test]
fn test_missing_expected_column_yields_empty_table() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    // "Customer code" column is missing entirely.
    std::fs::write(
        store.config().csv_path(),
        "Shipment Tracking Code,Shipping Name,Package Number,Weight/KG,Quantity,Flight\n\
         TRK001,Phone case,P-12,0.4,3,FL-201\n",
    )
    .unwrap();
    assert!(store.load().records.is_empty());
    assert!(store.search_by_tracking_code("TRK001").is_empty());
}

#[test]
fn test_malformed_row_voids_the_whole_load() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    std::fs::write(
        store.config().csv_path(),
        format!("{HEADER}\nTRK001,Phone case,P-12,0.4,3,FL-201,CUST7\nonly,two\n"),
    )
    .unwrap();
    assert!(store.load().records.is_empty());
}

#[test]
fn test_upload_format_classification() {
    assert_eq!(UploadFormat::from_filename("data.csv"), Some(UploadFormat::Csv));
    assert_eq!(UploadFormat::from_filename("DATA.CSV"), Some(UploadFormat::Csv));
    assert_eq!(UploadFormat::from_filename("products.xlsx"), Some(UploadFormat::Xlsx));
    assert_eq!(UploadFormat::from_filename("Products.XLSX"), Some(UploadFormat::Xlsx));
    assert_eq!(UploadFormat::from_filename("data.txt"), None);
    assert_eq!(UploadFormat::from_filename("data.xls"), None);
    assert_eq!(UploadFormat::from_filename("csv"), None);
}

#[test]
fn test_csv_upload_is_stored_byte_for_byte() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let upload = sample_csv();

    store
        .replace_dataset(UploadFormat::Csv, upload.as_bytes())
        .unwrap();

    let on_disk = std::fs::read(store.config().csv_path()).unwrap();
    assert_eq!(on_disk, upload.as_bytes());

    // Round-trip: immediately visible to lookups.
    let hits = store.search_by_tracking_code("TRK003");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].flight, "FL-305");
}

#[test]
fn test_csv_upload_overwrites_previous_dataset() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    std::fs::write(store.config().csv_path(), sample_csv()).unwrap();

    let replacement = format!("{HEADER}\nNEW01,Lamp,P-1,1.1,2,FL-9,CUSTX\n");
    store
        .replace_dataset(UploadFormat::Csv, replacement.as_bytes())
        .unwrap();

    assert!(store.search_by_tracking_code("TRK001").is_empty());
    let hits = store.search_by_tracking_code("new01");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].shipping_name, "Lamp");
}

/// Build a minimal single-sheet workbook in memory: inline strings for the
/// text cells, raw numbers for weight and quantity.
fn xlsx_fixture() -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let content_types = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
        r#"<Default Extension="xml" ContentType="application/xml"/>"#,
        r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
        r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
        r#"</Types>"#,
    );
    let root_rels = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
        r#"</Relationships>"#,
    );
    let workbook = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        r#"<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>"#,
        r#"</workbook>"#,
    );
    let workbook_rels = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
        r#"</Relationships>"#,
    );
    let sheet = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        r#"<sheetData>"#,
        r#"<row r="1">"#,
        r#"<c r="A1" t="inlineStr"><is><t>Shipment Tracking Code</t></is></c>"#,
        r#"<c r="B1" t="inlineStr"><is><t>Shipping Name</t></is></c>"#,
        r#"<c r="C1" t="inlineStr"><is><t>Package Number</t></is></c>"#,
        r#"<c r="D1" t="inlineStr"><is><t>Weight/KG</t></is></c>"#,
        r#"<c r="E1" t="inlineStr"><is><t>Quantity</t></is></c>"#,
        r#"<c r="F1" t="inlineStr"><is><t>Flight</t></is></c>"#,
        r#"<c r="G1" t="inlineStr"><is><t>Customer code</t></is></c>"#,
        r#"</row>"#,
        r#"<row r="2">"#,
        r#"<c r="A2" t="inlineStr"><is><t>TRK777</t></is></c>"#,
        r#"<c r="B2" t="inlineStr"><is><t>Lamp</t></is></c>"#,
        r#"<c r="C2" t="inlineStr"><is><t>P-9</t></is></c>"#,
        r#"<c r="D2"><v>2.5</v></c>"#,
        r#"<c r="E2"><v>3</v></c>"#,
        r#"<c r="F2" t="inlineStr"><is><t>FL-88</t></is></c>"#,
        r#"<c r="G2" t="inlineStr"><is><t>CUST9</t></is></c>"#,
        r#"</row>"#,
        r#"</sheetData></worksheet>"#,
    );

    let parts = [
        ("[Content_Types].xml", content_types),
        ("_rels/.rels", root_rels),
        ("xl/workbook.xml", workbook),
        ("xl/_rels/workbook.xml.rels", workbook_rels),
        ("xl/worksheets/sheet1.xml", sheet),
    ];

    let mut archive = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, body) in parts {
        archive.start_file(name, options).unwrap();
        archive.write_all(body.as_bytes()).unwrap();
    }
    archive.finish().unwrap().into_inner()
}

#[test]
fn test_xlsx_upload_round_trips_into_lookups() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    store
        .replace_dataset(UploadFormat::Xlsx, &xlsx_fixture())
        .unwrap();

    // Converted to the canonical cache and immediately visible.
    assert!(store.config().csv_path().exists());
    let hits = store.search_by_tracking_code("trk777");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].shipping_name, "Lamp");
    assert_eq!(hits[0].weight_kg, "2.5");
    // Whole numeric cells lose the trailing .0 in conversion.
    assert_eq!(hits[0].quantity, "3");
    assert_eq!(hits[0].customer_code, "CUST9");
}

#[test]
fn test_xlsx_source_is_converted_and_cached_on_first_load() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    std::fs::write(store.config().xlsx_path(), xlsx_fixture()).unwrap();

    let table = store.load();
    assert_eq!(table.records.len(), 1);
    assert_eq!(table.records[0].tracking_code, "TRK777");
    assert_eq!(table.records[0].flight, "FL-88");
    // The conversion persists the CSV cache alongside the source.
    assert!(store.config().csv_path().exists());
}

#[test]
fn test_invalid_xlsx_bytes_leave_dataset_untouched() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    std::fs::write(store.config().csv_path(), sample_csv()).unwrap();

    let err = store.replace_dataset(UploadFormat::Xlsx, b"not a zip archive");
    assert!(err.is_err());
    // Conversion failed before the swap, so the old data is still served.
    assert_eq!(store.search_by_tracking_code("TRK001").len(), 1);
}

#[test]
fn test_feedback_log_appends_one_line_per_entry() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("feedback.txt");
    let log = FeedbackLog::new(path.clone());

    log.append(42, "great bot").unwrap();
    log.append(99, "needs more stickers").unwrap();

    let contents = std::fs::read_to_string(path).unwrap();
    assert_eq!(contents, "42: great bot\n99: needs more stickers\n");
}
