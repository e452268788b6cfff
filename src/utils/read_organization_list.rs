use crate::types::OrganizationList;
use crate::Error;
use csv::ReaderBuilder;
use std::io::Cursor;

const NAME_HEADER: &str = "Organization Name";
const ALTERNATE_NAMES_HEADER: &str = "Alternate Names";

pub fn read_organization_list_from_string(csv: &str) -> Result<OrganizationList, Error> {
    let mut organization_list = OrganizationList::new();

    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(csv));

    // Extract column headers
    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let name_position = headers
        .iter()
        .position(|h| h == NAME_HEADER)
        .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", NAME_HEADER)))?;
    let alternate_names_position = headers.iter().position(|h| h == ALTERNATE_NAMES_HEADER);

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let name = record
            .get(name_position)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' field", NAME_HEADER)))?;

        let alternate_names: Vec<String> = alternate_names_position
            .and_then(|position| record.get(position))
            .map(|names| {
                names
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        organization_list.push((name.to_string(), alternate_names));
    }

    Ok(organization_list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_names_and_alternates() {
        let csv = "Organization Name,Alternate Names\nAcme,\"Acme Co, ACME Corp\"\nGlobex,\n";
        let list = read_organization_list_from_string(csv).unwrap();

        assert_eq!(
            list,
            vec![
                (
                    "Acme".to_string(),
                    vec!["Acme Co".to_string(), "ACME Corp".to_string()]
                ),
                ("Globex".to_string(), vec![]),
            ]
        );
    }

    #[test]
    fn test_missing_name_column_is_an_error() {
        let csv = "Symbol,Alternate Names\nACME,\n";
        assert!(matches!(
            read_organization_list_from_string(csv),
            Err(Error::ParserError(_))
        ));
    }
}
