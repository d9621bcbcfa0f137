use crate::error::LoaderError;
use crate::normalize::Cell;
use calamine::{Data, Range, Reader, Sheets};
use configuration::InputSchema;
use std::io::{Read, Seek};
use tracing::debug;

/// Picks the configured sheet (or the first one) and returns its rows as
/// `Cell`s, indexed from the top of the sheet.
pub fn read_sheet<RS>(workbook: &mut Sheets<RS>, schema: &InputSchema) -> Result<Vec<Vec<Cell>>, LoaderError>
where
    RS: Read + Seek,
{
    let names = workbook.sheet_names();
    let name = match &schema.sheet {
        Some(wanted) => names
            .iter()
            .find(|name| *name == wanted)
            .cloned()
            .ok_or_else(|| LoaderError::MissingSheet(wanted.clone()))?,
        None => names
            .first()
            .cloned()
            .ok_or_else(|| LoaderError::MissingSheet("<first sheet>".to_string()))?,
    };

    debug!(sheet = %name, available = ?names, "Reading worksheet");
    let range = workbook.worksheet_range(&name)?;
    Ok(range_to_rows(&range))
}

/// calamine trims leading empty rows from a range; pad them back so row
/// indices line up with the sheet.
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<Cell>> {
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);

    std::iter::repeat_n(Vec::new(), first_row)
        .chain(range.rows().map(|row| row.iter().map(to_cell).collect()))
        .collect()
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::Number(dt.as_f64())),
        Data::Error(e) => Cell::Text(format!("#{e:?}")),
    }
}
