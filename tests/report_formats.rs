use std::fs;
use std::io::Write;
use std::path::Path;

use katalog::report::make_report;
use katalog::ReportError;
use tempfile::tempdir;

fn write_zip_with(path: &Path, members: &[(&str, &[u8])]) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = zip::ZipWriter::new(fs::File::create(path)?);
    let options = zip::write::FileOptions::default();
    for (name, data) in members {
        writer.start_file(*name, options)?;
        writer.write_all(data)?;
    }
    writer.finish()?;
    Ok(())
}

#[test]
fn test_csv_rows_have_three_columns_and_sortable_timestamps(
) -> Result<(), Box<dyn std::error::Error>> {
    let source = tempdir()?;
    fs::write(source.path().join("empty.bin"), b"")?;
    fs::write(source.path().join("kilo.dat"), vec![0u8; 1024])?;
    let out = tempdir()?;
    let report = out.path().join("report.csv");

    make_report(source.path(), &report)?;

    let content = fs::read_to_string(&report)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Имя файла;Размер;Последнее изменение");

    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(';').collect();
        assert_eq!(fields.len(), 3, "row {line:?} must have three columns");
        // Timestamps come from the filesystem and use a fixed layout.
        let stamp = fields[2];
        assert_eq!(stamp.len(), 19, "unexpected timestamp {stamp:?}");
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }

    assert!(content.contains("empty.bin;0.00Б;"));
    assert!(content.contains("kilo.dat;1.00КБ;"));
    Ok(())
}

#[test]
fn test_json_report_preserves_cyrillic_member_names() -> Result<(), Box<dyn std::error::Error>> {
    let source = tempdir()?;
    write_zip_with(
        &source.path().join("арх.zip"),
        &[("папка/файл.txt", b"data")],
    )?;
    let out = tempdir()?;
    let report = out.path().join("report.json");

    make_report(source.path(), &report)?;

    let content = fs::read_to_string(&report)?;
    assert!(content.contains("папка/файл.txt"));
    assert!(!content.contains("\\u"));

    let rows: serde_json::Value = serde_json::from_str(&content)?;
    let names: Vec<&str> = rows
        .as_array()
        .expect("array report")
        .iter()
        .map(|row| row["name"].as_str().expect("name field"))
        .collect();
    assert_eq!(names.len(), 3);
    assert!(names[0].ends_with("арх.zip"));
    assert!(names[1].ends_with("арх.zip/папка"));
    assert!(names[2].ends_with("арх.zip/папка/файл.txt"));
    Ok(())
}

#[test]
fn test_pdf_report_of_empty_directory_is_valid() -> Result<(), Box<dyn std::error::Error>> {
    let source = tempdir()?;
    let out = tempdir()?;
    let report = out.path().join("report.pdf");

    make_report(source.path(), &report)?;

    let bytes = fs::read(&report)?;
    assert!(bytes.starts_with(b"%PDF"));
    Ok(())
}

#[test]
fn test_xlsx_and_docx_reports_write_packages() -> Result<(), Box<dyn std::error::Error>> {
    let source = tempdir()?;
    fs::write(source.path().join("a.txt"), b"abc")?;
    let out = tempdir()?;

    for name in ["report.xlsx", "report.docx"] {
        let report = out.path().join(name);
        make_report(source.path(), &report)?;
        let bytes = fs::read(&report)?;
        assert!(bytes.starts_with(b"PK"), "{name} is not an OOXML package");
    }
    Ok(())
}

#[test]
fn test_unknown_extension_fails_before_creating_anything() {
    let source = tempdir().expect("tempdir");
    let out = tempdir().expect("tempdir");
    let report = out.path().join("deep/report.foo");

    match make_report(source.path(), &report) {
        Err(ReportError::InvalidFormat(ext)) => assert_eq!(ext, "foo"),
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
    assert!(!report.exists());
    assert!(!out.path().join("deep").exists());
}

#[test]
fn test_missing_root_fails_before_creating_anything() {
    let out = tempdir().expect("tempdir");
    let report = out.path().join("report.csv");

    match make_report(Path::new("/no/such/directory"), &report) {
        Err(ReportError::NotFound(path)) => {
            assert_eq!(path, Path::new("/no/such/directory"))
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(!report.exists());
}
