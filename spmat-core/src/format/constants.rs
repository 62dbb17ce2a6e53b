//! Text format keys and markers

/// Header key declaring the number of rows
pub const ROWS_KEY: &str = "rows";

/// Header key declaring the number of columns
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Opening and closing delimiters of an entry line
pub const TRIPLE_OPEN: char = '(';
pub const TRIPLE_CLOSE: char = ')';

/// Separator between the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';

/// First line of a rendered result
pub const RESULT_BANNER: &str = "Sparse Matrix Result:";
