//! Tests for the colour-code grid and colour tally

#[cfg(test)]
mod tests {
    use mosaic::io::configuration::default_colour_model;
    use mosaic::io::text::{colour_tally, format_pattern};
    use mosaic::pattern::{Tile, TileRow};

    fn row(key: usize, colours: &[&str]) -> TileRow {
        TileRow {
            key,
            tiles: colours
                .iter()
                .enumerate()
                .map(|(index, colour)| Tile {
                    key: index + 1,
                    row: key,
                    colour: (*colour).to_string(),
                })
                .collect(),
        }
    }

    // Tests one line per row with one code per tile
    // Verified by joining rows without newlines
    #[test]
    fn test_format_pattern_codes() {
        let rows = vec![
            row(2, &["Aqua", "Teal", "Navy"]),
            row(1, &["Sand", "Coral", "Arctic"]),
        ];

        let text = format_pattern(&rows, &default_colour_model());

        assert_eq!(text, "QTN\nSCA\n");
    }

    // Tests unknown colours print as a placeholder
    // Verified by skipping tiles with unknown colours
    #[test]
    fn test_format_pattern_unknown_colour() {
        let rows = vec![row(1, &["Aqua", "Mauve"])];

        assert_eq!(format_pattern(&rows, &default_colour_model()), "Q?\n");
    }

    // Tests an empty pattern renders as empty text
    // Verified by always emitting a trailing newline
    #[test]
    fn test_format_pattern_empty() {
        assert_eq!(format_pattern(&[], &default_colour_model()), "");
    }

    // Tests tally counts sort by count then name
    // Verified by sorting ascending by count
    #[test]
    fn test_colour_tally_order() {
        let rows = vec![
            row(2, &["Teal", "Aqua", "Teal"]),
            row(1, &["Navy", "Aqua", "Teal"]),
        ];

        let tally = colour_tally(&rows);

        assert_eq!(
            tally,
            vec![
                ("Teal".to_string(), 3),
                ("Aqua".to_string(), 2),
                ("Navy".to_string(), 1),
            ]
        );
    }
}
