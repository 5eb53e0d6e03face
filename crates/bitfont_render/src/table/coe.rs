//! Serialization of the initialization vector as a Xilinx COE document.

use super::packer::GlyphTable;

/// Joins every digit of a padded bit row with commas, in memory
/// initialization syntax: `0, 1, 1, 0,`.
pub fn binary_array_row(bits: &str) -> String {
    let mut row = String::with_capacity(bits.len() * 3 + 1);
    for (index, bit) in bits.chars().enumerate() {
        if index > 0 {
            row.push_str(", ");
        }
        row.push(bit);
    }
    row.push(',');
    row
}

/// The full comma-separated payload, one line per packed row.
pub fn vector(table: &GlyphTable) -> String {
    let mut payload = String::new();
    for row in table.rows() {
        payload.push_str(&binary_array_row(row));
        payload.push('\n');
    }
    payload
}

/// The complete `.coe` document: radix preamble plus the vector payload.
pub fn document(table: &GlyphTable) -> String {
    format!(
        "\nmemory_initialization_radix = 2;\nmemory_initialization_vector =\n{}\n",
        vector(table)
    )
}

/// Output base name shared by both artifacts: `Font{name}{size}` with every
/// non-alphanumeric character removed.
pub fn file_stem(name: &str, size: u32) -> String {
    format!("Font{}{}", name, size).chars().filter(|c| c.is_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> GlyphTable {
        let mut table = GlyphTable::new(6, 2, 1);
        table.push_row("10100000".to_string());
        table.push_row("01010000".to_string());
        table
    }

    #[test]
    fn rows_join_digits_with_commas() {
        assert_eq!(binary_array_row("0110"), "0, 1, 1, 0,");
    }

    #[test]
    fn vector_emits_one_line_per_row() {
        let payload = vector(&sample_table());
        assert_eq!(
            payload,
            "1, 0, 1, 0, 0, 0, 0, 0,\n0, 1, 0, 1, 0, 0, 0, 0,\n"
        );
    }

    #[test]
    fn payload_comma_count_equals_bit_count() {
        // Every digit is followed by a comma, including the last per row.
        let table = sample_table();
        let payload = vector(&table);
        assert_eq!(payload.matches(',').count(), table.bit_count());
    }

    #[test]
    fn document_wraps_the_payload_in_the_fixed_envelope() {
        let doc = document(&sample_table());
        assert!(doc
            .starts_with("\nmemory_initialization_radix = 2;\nmemory_initialization_vector =\n"));
        assert!(doc.ends_with(",\n\n"));
    }

    #[test]
    fn file_stem_strips_non_alphanumerics() {
        assert_eq!(file_stem("Deja Vu Sans", 16), "FontDejaVuSans16");
        assert_eq!(file_stem("Noto-Sans_Mono!", 24), "FontNotoSansMono24");
        // Unicode letters count as alphanumeric, exactly like the digits.
        assert_eq!(file_stem("Шрифт", 8), "FontШрифт8");
    }
}
