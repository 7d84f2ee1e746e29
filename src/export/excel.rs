//! Excel出力（rust_xlsxwriter）
//!
//! シート構成: Results / Unmatched / Assistant / Errors

use super::ExportPayload;
use crate::error::Result;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

fn write_header(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<()> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, format)?;
    }
    Ok(())
}

pub fn generate_excel(payload: &ExportPayload, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet().set_name("Results")?;
        write_header(sheet, &["CV Name", "Match Count", "Matched Keywords"], &bold)?;
        sheet.set_column_width(0, 32)?;
        sheet.set_column_width(2, 60)?;

        for (i, result) in payload.report.ranked.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, &result.document_name)?;
            sheet.write_number(row, 1, result.match_count as f64)?;
            sheet.write_string(row, 2, result.matched_joined())?;
        }
    }

    {
        let sheet = workbook.add_worksheet().set_name("Unmatched")?;
        write_header(sheet, &["CV Name"], &bold)?;
        sheet.set_column_width(0, 32)?;

        for (i, name) in payload.report.unmatched.iter().enumerate() {
            sheet.write_string(i as u32 + 1, 0, name)?;
        }
    }

    {
        let sheet = workbook.add_worksheet().set_name("Assistant")?;
        write_header(
            sheet,
            &["CV Name", "Question", "Matched", "Missing", "Suggested Roles", "Reasoning"],
            &bold,
        )?;
        sheet.set_column_width(0, 32)?;
        sheet.set_column_width(5, 80)?;

        for (i, record) in payload.history.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, &record.document_name)?;
            sheet.write_string(row, 1, &record.question)?;
            sheet.write_string(row, 2, record.matched_keywords.join(", "))?;
            sheet.write_string(row, 3, record.missing_keywords.join(", "))?;
            sheet.write_string(row, 4, record.suggested_roles.join(", "))?;
            sheet.write_string(row, 5, record.reasoning.join("\n"))?;
        }
    }

    {
        let sheet = workbook.add_worksheet().set_name("Errors")?;
        write_header(sheet, &["CV Name", "Reason"], &bold)?;
        sheet.set_column_width(0, 32)?;

        for (i, failure) in payload.report.failures.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, &failure.document_name)?;
            sheet.write_string(row, 1, &failure.reason)?;
        }
    }

    workbook.save(output_path)?;
    Ok(())
}
