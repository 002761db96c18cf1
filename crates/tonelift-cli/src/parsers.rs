//! Parsers for command-line argument values.

/// Parse a tile grid given as "COLSxROWS", e.g. "8x8".
///
/// Both dimensions must be positive integers. Validation of the resulting
/// configuration happens later, so "0x8" parses here and is rejected there.
pub fn parse_tile_grid(value: &str) -> Result<(u32, u32), String> {
    let mut parts = value.splitn(2, ['x', 'X']);
    let cols = parts.next().unwrap_or("").trim();
    let rows = parts.next().unwrap_or("").trim();

    let cols: u32 = cols
        .parse()
        .map_err(|_| format!("Invalid tile grid '{}', expected COLSxROWS", value))?;
    let rows: u32 = rows
        .parse()
        .map_err(|_| format!("Invalid tile grid '{}', expected COLSxROWS", value))?;

    Ok((cols, rows))
}
