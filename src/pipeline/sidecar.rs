//! Placeholder OCR artifacts.
//!
//! No OCR happens anywhere in this tool. When `--ocr` is set, each
//! converted PDF gains a duplicate copy with an `ocr` marker in its name
//! plus three sidecar files (HTML, Markdown, JSON) holding a fixed
//! placeholder message that names the original source. Downstream tooling
//! can then be wired against the final file layout before a real OCR
//! engine exists.

use crate::pipeline::copy::copy_file_times;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Content of the JSON sidecar: `{"source": ..., "status": "placeholder"}`.
#[derive(Debug, Serialize)]
struct SidecarStatus<'a> {
    source: &'a str,
    status: &'static str,
}

/// Path of the duplicate PDF: `<stem>.ocr.pdf` beside `output_pdf`.
pub fn ocr_pdf_path(output_pdf: &Path) -> PathBuf {
    let stem = output_pdf
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_pdf.with_file_name(format!("{stem}.ocr.pdf"))
}

/// Write the four placeholder artifacts for a converted PDF:
/// `<stem>.ocr.pdf` (byte-identical duplicate, replacing any prior file of
/// that name), and `<stem>.html` / `<stem>.md` / `<stem>.json` sidecars
/// referencing `source_pdf`. None of them derive from the PDF's content.
pub fn write_ocr_placeholders(output_pdf: &Path, source_pdf: &Path) -> io::Result<()> {
    let ocr_pdf = ocr_pdf_path(output_pdf);
    fs::copy(output_pdf, &ocr_pdf)?;
    copy_file_times(output_pdf, &ocr_pdf)?;
    debug!("Wrote OCR duplicate: {}", ocr_pdf.display());

    let source = source_pdf.display();

    let html_path = output_pdf.with_extension("html");
    fs::write(
        &html_path,
        format!("<html><body><h1>OCR placeholder</h1><p>Source: {source}</p></body></html>\n"),
    )?;
    debug!("Wrote sidecar: {}", html_path.display());

    let md_path = output_pdf.with_extension("md");
    fs::write(&md_path, format!("# OCR placeholder\n\nSource: {source}\n"))?;
    debug!("Wrote sidecar: {}", md_path.display());

    let json_path = output_pdf.with_extension("json");
    let source_str = source_pdf.to_string_lossy();
    let status = SidecarStatus {
        source: &source_str,
        status: "placeholder",
    };
    let mut body = serde_json::to_string_pretty(&status).map_err(io::Error::other)?;
    body.push('\n');
    fs::write(&json_path, body)?;
    debug!("Wrote sidecar: {}", json_path.display());

    Ok(())
}
