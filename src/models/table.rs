use csv::StringRecord;

/// Tokens the original tabular tooling reads as "no value".
const MISSING_VALUE_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true when a raw field counts as a missing value.
pub fn is_missing(field: &str) -> bool {
    MISSING_VALUE_TOKENS.contains(&field)
}

/// Traffic records loaded fully into memory, in file order.
#[derive(Debug, Clone)]
pub struct TrafficTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

/// A single column of a `TrafficTable`, addressed by header name.
#[derive(Clone, Copy)]
pub struct Column<'a> {
    table: &'a TrafficTable,
    index: usize,
}

impl TrafficTable {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        TrafficTable { headers, rows }
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a column by exact header name. The first match wins on duplicates.
    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|index| Column { table: self, index })
    }
}

impl<'a> Column<'a> {
    /// Present values with their 1-based line number in the source file.
    /// Short rows and missing-value tokens are skipped.
    pub fn values(self) -> impl Iterator<Item = (u64, &'a str)> + 'a {
        let Column { table, index } = self;
        table.rows.iter().enumerate().filter_map(move |(i, row)| {
            let line = row.position().map_or(i as u64 + 2, |p| p.line());
            row.get(index)
                .filter(|field| !is_missing(field))
                .map(|field| (line, field))
        })
    }
}
