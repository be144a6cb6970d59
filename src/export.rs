//! Table rendering and artifact IO.
//!
//! The pipeline's tables live as typed row structs; this module is the only
//! place they meet `polars`, the CSV reader and the spreadsheet writer. The
//! column sets of the order form and the picklist are compatibility
//! contracts with the receiving ordering system and dispenser; order and
//! spelling are not cosmetic.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::assemble::PrimerPlate;
use crate::construct::{Construct, ConstructTable};
use crate::error::{Error, Result};
use crate::picklist::Picklist;

/// Column contract for the primer order form.
pub const ORDER_FORM_COLUMNS: &[&str] = &[
    "Plate well",
    "Row",
    "Column",
    "Name",
    "5' Mod",
    "Sequence (5'-3')",
    "3' Mod",
];

/// Column contract for the transfer picklist.
pub const PICKLIST_COLUMNS: &[&str] = &[
    "Source Plate Barcode",
    "Source Plate Name",
    "Source Plate Type",
    "Source Well",
    "Destination Plate Barcode",
    "Destination Plate Name",
    "Destination Well",
    "Transfer Volume",
    "Sample Name",
];

/// Configure Polars console output to show tables in full.
pub fn configure_table_display() {
    std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
    std::env::set_var("POLARS_FMT_MAX_COLS", "100000");
    std::env::set_var("POLARS_FMT_MAX_ROWS", "1000000");
    std::env::set_var("POLARS_FMT_STR_LEN", "1000000");
    std::env::set_var("POLARS_TABLE_WIDTH", "65535");
}

/// The construct design table as a DataFrame.
pub fn construct_dataframe(table: &ConstructTable) -> Result<DataFrame> {
    let rows = &table.rows;
    let df = df!(
        "Construct"        => rows.iter().map(|r| r.construct.name.clone()).collect::<Vec<_>>(),
        "Start"            => rows.iter().map(|r| r.construct.start as u32).collect::<Vec<_>>(),
        "End"              => rows.iter().map(|r| r.construct.end as u32).collect::<Vec<_>>(),
        "Peptide"          => rows.iter().map(|r| r.peptide.clone()).collect::<Vec<_>>(),
        "Well"             => rows.iter().map(|r| r.well.to_string()).collect::<Vec<_>>(),
        "Forward name"     => rows.iter().map(|r| r.forward_name.clone()).collect::<Vec<_>>(),
        "Forward sequence" => rows.iter().map(|r| r.forward_sequence.clone()).collect::<Vec<_>>(),
        "Reverse name"     => rows.iter().map(|r| r.reverse_name.clone()).collect::<Vec<_>>(),
        "Reverse sequence" => rows.iter().map(|r| r.reverse_sequence.clone()).collect::<Vec<_>>(),
    )?;
    Ok(df)
}

/// The primer order form as a DataFrame, one row per plate well.
pub fn order_form_dataframe(plate: &PrimerPlate) -> Result<DataFrame> {
    let rows = &plate.rows;
    let df = df!(
        "Plate well"       => rows.iter().map(|r| r.well.to_string()).collect::<Vec<_>>(),
        "Row"              => rows.iter().map(|r| r.well.row.to_string()).collect::<Vec<_>>(),
        "Column"           => rows.iter().map(|r| format!("{:02}", r.well.column)).collect::<Vec<_>>(),
        "Name"             => rows.iter().map(|r| r.name.clone()).collect::<Vec<_>>(),
        "5' Mod"           => rows.iter().map(|r| r.five_prime_mod.clone()).collect::<Vec<_>>(),
        "Sequence (5'-3')" => rows.iter().map(|r| r.sequence.clone()).collect::<Vec<_>>(),
        "3' Mod"           => rows.iter().map(|r| r.three_prime_mod.clone()).collect::<Vec<_>>(),
    )?;
    Ok(df)
}

/// The transfer picklist as a DataFrame.
pub fn picklist_dataframe(picklist: &Picklist) -> Result<DataFrame> {
    let rows = &picklist.records;
    let df = df!(
        "Source Plate Barcode"      => rows.iter().map(|r| r.source_plate_barcode.clone()).collect::<Vec<_>>(),
        "Source Plate Name"         => rows.iter().map(|r| r.source_plate_name.clone()).collect::<Vec<_>>(),
        "Source Plate Type"         => rows.iter().map(|r| r.source_plate_type.clone()).collect::<Vec<_>>(),
        "Source Well"               => rows.iter().map(|r| r.source_well.to_string()).collect::<Vec<_>>(),
        "Destination Plate Barcode" => rows.iter().map(|r| r.destination_plate_barcode.clone()).collect::<Vec<_>>(),
        "Destination Plate Name"    => rows.iter().map(|r| r.destination_plate_name.clone()).collect::<Vec<_>>(),
        "Destination Well"          => rows.iter().map(|r| r.destination_well.to_string()).collect::<Vec<_>>(),
        "Transfer Volume"           => rows.iter().map(|r| r.transfer_volume_nl).collect::<Vec<_>>(),
        "Sample Name"               => rows.iter().map(|r| r.sample_name.clone()).collect::<Vec<_>>(),
    )?;
    Ok(df)
}

/// Write a DataFrame as CSV with a header row.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    CsvWriter::new(file).include_header(true).finish(df)?;
    Ok(())
}

/// Write the primer order form as a spreadsheet.
pub fn write_order_form_xlsx(plate: &PrimerPlate, path: &Path) -> Result<()> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in ORDER_FORM_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (i, row) in plate.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, row.well.to_string())?;
        sheet.write_string(r, 1, row.well.row.to_string())?;
        sheet.write_string(r, 2, format!("{:02}", row.well.column))?;
        sheet.write_string(r, 3, &row.name)?;
        sheet.write_string(r, 4, &row.five_prime_mod)?;
        sheet.write_string(r, 5, &row.sequence)?;
        sheet.write_string(r, 6, &row.three_prime_mod)?;
    }
    workbook.save(path)?;
    Ok(())
}

/// Load a constructs table from CSV (columns `name,start,end`).
///
/// Each required column is checked up front; ranges are validated against
/// the target length as they are read.
pub fn read_constructs_csv(path: &Path, target_len: usize) -> Result<Vec<Construct>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::Schema {
                column: name.to_string(),
            })
    };
    let name_idx = column("name")?;
    let start_idx = column("start")?;
    let end_idx = column("end")?;

    let parse = |field: &str, line: u64| -> Result<usize> {
        field.trim().parse::<usize>().map_err(|_| {
            Error::ConstructsInput(format!("line {line}: `{field}` is not a residue number"))
        })
    };

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let start = parse(&record[start_idx], line)?;
        let end = parse(&record[end_idx], line)?;
        out.push(Construct::new(record[name_idx].to_string(), start, end, target_len)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble;
    use crate::config::DesignConfig;
    use crate::construct::ConstructTable;
    use crate::fetch::TargetData;
    use crate::picklist;

    fn fixtures() -> (ConstructTable, PrimerPlate, Picklist) {
        let t = TargetData {
            identifier: "TEST1".to_string(),
            sequence: format!("{}{}{}", "L".repeat(14), "VASGDADMKGHFDPAKCRYALGMQD", "E"),
            structure_url: String::new(),
        };
        let cfg = DesignConfig::default();
        let cs = vec![
            Construct::new("a", 10, 40, 40).unwrap(),
            Construct::new("b", 10, 38, 40).unwrap(),
        ];
        let table = ConstructTable::build(&cs, &t, &cfg).unwrap();
        let plate = assemble::assemble(&table, &cfg).unwrap();
        let picklist = picklist::generate(&table, &plate, &cfg).unwrap();
        (table, plate, picklist)
    }

    #[test]
    fn order_form_columns_are_the_contract() {
        let (_, plate, _) = fixtures();
        let df = order_form_dataframe(&plate).unwrap();
        let names: Vec<&str> = df.get_column_names();
        assert_eq!(names, ORDER_FORM_COLUMNS);
        assert_eq!(df.height(), 384);
    }

    #[test]
    fn picklist_columns_are_the_contract() {
        let (_, _, picklist) = fixtures();
        let df = picklist_dataframe(&picklist).unwrap();
        let names: Vec<&str> = df.get_column_names();
        assert_eq!(names, PICKLIST_COLUMNS);
        assert_eq!(df.height(), 4);
    }

    #[test]
    fn construct_dataframe_has_one_row_per_construct() {
        let (table, _, _) = fixtures();
        let df = construct_dataframe(&table).unwrap();
        assert_eq!(df.height(), 2);
        assert!(df.get_column_names().contains(&"Forward sequence"));
    }

    #[test]
    fn constructs_csv_missing_column_is_a_schema_error() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("cutlet_constructs_{}.csv", std::process::id()));
        std::fs::write(&path, "name,begin,end\nc1,1,10\n").unwrap();
        let err = read_constructs_csv(&path, 40).unwrap_err();
        assert_eq!(err.to_string(), "`start` not found in input dataframe.");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn constructs_csv_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("cutlet_constructs_ok_{}.csv", std::process::id()));
        std::fs::write(&path, "name,start,end\nfrag_a,10,40\nfrag_b,1,38\n").unwrap();
        let cs = read_constructs_csv(&path, 40).unwrap();
        assert_eq!(cs.len(), 2);
        assert_eq!(cs[0].name, "frag_a");
        assert_eq!((cs[1].start, cs[1].end), (1, 38));
        std::fs::remove_file(&path).ok();
    }
}
